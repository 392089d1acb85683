//! OAuth2 authorization-code client for the identity provider.
//!
//! Builds the consent URL, exchanges the one-time code for an access token
//! with a single form POST, and fetches the user's profile. No refresh, no
//! revocation: the token lives for the session only.

use std::sync::Arc;

use serde::Deserialize;

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::models::UserInfo;
use crate::traits::{bearer, Headers, HttpClient};

/// Body of the token endpoint response, success or error.
#[derive(Debug, Default, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
}

/// Client for the identity provider's OAuth2 endpoints.
#[derive(Clone)]
pub struct OAuthClient {
    http: Arc<dyn HttpClient>,
    config: Arc<AppConfig>,
}

impl OAuthClient {
    pub fn new(http: Arc<dyn HttpClient>, config: Arc<AppConfig>) -> Self {
        Self { http, config }
    }

    /// URL the user must visit to grant access.
    ///
    /// `{auth_base}/o/oauth2/v2/auth?client_id=..&redirect_uri=..&response_type=code&scope=..&access_type=offline`
    pub fn authorization_url(&self) -> String {
        format!(
            "{}/o/oauth2/v2/auth?client_id={}&redirect_uri={}&response_type=code&scope={}&access_type=offline",
            self.config.endpoints.auth_base,
            urlencoding::encode(&self.config.client_id),
            urlencoding::encode(&self.config.redirect_uri),
            urlencoding::encode(&self.config.scope),
        )
    }

    /// Exchange an authorization code for an access token.
    ///
    /// POST {token_url} (form-encoded)
    ///
    /// The body is inspected whatever the status: a token wins, an `error`
    /// field is reported, anything else is a missing token.
    pub async fn exchange_code(&self, code: &str) -> AppResult<String> {
        let fields = vec![
            ("client_id".to_string(), self.config.client_id.clone()),
            ("client_secret".to_string(), self.config.client_secret.clone()),
            ("code".to_string(), code.to_string()),
            ("grant_type".to_string(), "authorization_code".to_string()),
            ("redirect_uri".to_string(), self.config.redirect_uri.clone()),
        ];

        let response = self
            .http
            .post_form(&self.config.endpoints.token_url, &fields, &Headers::new())
            .await?;

        let token: TokenResponse = match response.json() {
            Ok(token) => token,
            Err(e) if response.is_success() => {
                return Err(AppError::InvalidResponse(format!(
                    "{}. Response: {}",
                    e,
                    response.body_preview()
                )));
            }
            Err(_) => {
                return Err(AppError::Status {
                    status: response.status,
                    message: response.body_preview(),
                });
            }
        };

        if let Some(access_token) = token.access_token.filter(|t| !t.is_empty()) {
            tracing::info!("Token exchange succeeded");
            return Ok(access_token);
        }

        if let Some(error) = token.error {
            tracing::warn!(status = response.status, error = %error, "Token exchange rejected");
            let message = token.error_description.unwrap_or_else(|| error.clone());
            return match error.as_str() {
                "access_denied" => Err(AppError::AuthorizationDenied(message)),
                _ => Err(AppError::Status {
                    status: response.status,
                    message,
                }),
            };
        }

        if !response.is_success() {
            return Err(AppError::Status {
                status: response.status,
                message: response.body_preview(),
            });
        }

        Err(AppError::MissingAccessToken)
    }

    /// Fetch the signed-in user's profile.
    ///
    /// GET {api_base}/oauth2/v2/userinfo
    pub async fn fetch_user_info(&self, access_token: &str) -> AppResult<UserInfo> {
        let url = format!("{}/oauth2/v2/userinfo", self.config.endpoints.api_base);
        let response = self.http.get(&url, &bearer(access_token)).await?;

        if !response.is_success() {
            return Err(AppError::Status {
                status: response.status,
                message: response.body_preview(),
            });
        }

        response
            .json::<UserInfo>()
            .map_err(|e| AppError::InvalidResponse(e.to_string()))
    }
}
