//! Application configuration.
//!
//! Client credentials, the redirect URI, endpoint base URLs and the folder
//! allow-list. Defaults target the real Google endpoints; every value can be
//! overridden from the environment so tests and staging setups can point the
//! app elsewhere.

use crate::error::{AppError, AppResult};

/// OAuth scope granting access to files the app creates or opens.
pub const DRIVE_FILE_SCOPE: &str = "https://www.googleapis.com/auth/drive.file";

/// Default loopback redirect target.
pub const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:53682/callback";

/// Folder names shown to the user, in display order.
pub const DEFAULT_FOLDER_NAMES: [&str; 14] = [
    "INFANTIL 3",
    "INFANTIL 4",
    "INFANTIL 5",
    "1R PRI",
    "2N PRI",
    "3R PRI",
    "4T PRI",
    "5È PRI",
    "6È PRI",
    "1R ESO",
    "2N ESO",
    "3R ESO",
    "4T ESO",
    "FOTOS MESTRES",
];

/// Base URLs for every external endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Authorization server base (`/o/oauth2/v2/auth` is appended)
    pub auth_base: String,
    /// Full token endpoint URL
    pub token_url: String,
    /// API base for user info and file listing
    pub api_base: String,
    /// Upload API base (`/upload/drive/v3/files` is appended)
    pub upload_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            auth_base: "https://accounts.google.com".to_string(),
            token_url: "https://oauth2.googleapis.com/token".to_string(),
            api_base: "https://www.googleapis.com".to_string(),
            upload_base: "https://www.googleapis.com".to_string(),
        }
    }
}

impl Endpoints {
    /// Point every endpoint at one server, as done by the integration tests.
    pub fn all_at(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            auth_base: base.to_string(),
            token_url: format!("{}/token", base),
            api_base: base.to_string(),
            upload_base: base.to_string(),
        }
    }
}

/// Application configuration.
///
/// # Example
///
/// ```ignore
/// use app_fotos::config::AppConfig;
///
/// let config = AppConfig::default()
///     .with_client_id("my-client.apps.googleusercontent.com")
///     .with_client_secret("secret")
///     .with_open_browser(false);
/// ```
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// OAuth client id
    pub client_id: String,
    /// OAuth client secret
    pub client_secret: String,
    /// Where the identity provider sends the user back with `?code=`
    pub redirect_uri: String,
    /// Requested OAuth scope
    pub scope: String,
    pub endpoints: Endpoints,
    /// Allow-list of folder names to look up
    pub folder_names: Vec<String>,
    /// Open the authorization URL in the system browser
    pub open_browser: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            redirect_uri: DEFAULT_REDIRECT_URI.to_string(),
            scope: DRIVE_FILE_SCOPE.to_string(),
            endpoints: Endpoints::default(),
            folder_names: DEFAULT_FOLDER_NAMES.iter().map(|s| s.to_string()).collect(),
            open_browser: true,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    pub fn with_client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = client_secret.into();
        self
    }

    pub fn with_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = redirect_uri.into();
        self
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Replace the folder allow-list.
    pub fn with_folder_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.folder_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_open_browser(mut self, open: bool) -> Self {
        self.open_browser = open;
        self
    }

    /// Build config from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(v) = get("APP_FOTOS_CLIENT_ID") {
            config.client_id = v;
        }
        if let Some(v) = get("APP_FOTOS_CLIENT_SECRET") {
            config.client_secret = v;
        }
        if let Some(v) = get("APP_FOTOS_REDIRECT_URI") {
            config.redirect_uri = v;
        }
        if let Some(v) = get("APP_FOTOS_AUTH_URL") {
            config.endpoints.auth_base = v.trim_end_matches('/').to_string();
        }
        if let Some(v) = get("APP_FOTOS_TOKEN_URL") {
            config.endpoints.token_url = v;
        }
        if let Some(v) = get("APP_FOTOS_API_URL") {
            config.endpoints.api_base = v.trim_end_matches('/').to_string();
        }
        if let Some(v) = get("APP_FOTOS_UPLOAD_URL") {
            config.endpoints.upload_base = v.trim_end_matches('/').to_string();
        }
        if let Some(v) = get("APP_FOTOS_FOLDERS") {
            let names: Vec<String> = v
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if !names.is_empty() {
                config.folder_names = names;
            }
        }
        if get("APP_FOTOS_NO_BROWSER").is_some() {
            config.open_browser = false;
        }

        config
    }

    /// Check the values needed to start a login.
    pub fn validate(&self) -> AppResult<()> {
        if self.client_id.trim().is_empty() {
            return Err(AppError::Config(
                "APP_FOTOS_CLIENT_ID is not set".to_string(),
            ));
        }
        if self.folder_names.is_empty() {
            return Err(AppError::Config("folder allow-list is empty".to_string()));
        }
        Ok(())
    }
}
