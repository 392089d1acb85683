//! Error handling for App Fotos.
//!
//! - **Error Categories**: classification used for display and logging
//! - **Unified Error Type**: [`AppError`] covers transport, API, auth,
//!   filesystem and configuration failures
//! - **Result Type Alias**: [`AppResult<T>`]
//!
//! Every failure is reduced to a single status line at the UI boundary via
//! [`AppError::user_message`]. Nothing here is fatal once the UI is running.

mod category;

pub use category::ErrorCategory;

use std::path::PathBuf;
use thiserror::Error;

use crate::traits::HttpError;

/// Result alias used across the crate.
pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Http(#[from] HttpError),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("No access token in token response")]
    MissingAccessToken,

    #[error("Authorization denied: {0}")]
    AuthorizationDenied(String),

    #[error("Not connected")]
    NotAuthenticated,

    #[error("Selecciona una carpeta primer!")]
    NoFolderSelected,

    #[error("No s'han trobat imatges a {}", .0.display())]
    NoImagesFound(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Callback listener error: {0}")]
    Callback(String),
}

impl AppError {
    /// Wrap an I/O error with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::Http(_) => ErrorCategory::Network,
            AppError::Status { .. } | AppError::InvalidResponse(_) => ErrorCategory::Server,
            AppError::MissingAccessToken
            | AppError::AuthorizationDenied(_)
            | AppError::NotAuthenticated => ErrorCategory::Auth,
            AppError::NoFolderSelected | AppError::NoImagesFound(_) => ErrorCategory::User,
            AppError::Config(_) => ErrorCategory::Configuration,
            AppError::Io { .. } | AppError::Callback(_) => ErrorCategory::System,
        }
    }

    /// Text for the status line.
    pub fn user_message(&self) -> String {
        if self.category().is_user_actionable() {
            self.to_string()
        } else {
            format!("Error: {}", self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_converts() {
        let err: AppError = HttpError::Timeout("30s".to_string()).into();
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.user_message(), "Error: Request timeout: 30s");
    }

    #[test]
    fn test_user_errors_are_not_prefixed() {
        assert_eq!(
            AppError::NoFolderSelected.user_message(),
            "Selecciona una carpeta primer!"
        );
    }

    #[test]
    fn test_status_error_message() {
        let err = AppError::Status {
            status: 403,
            message: "forbidden".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Server);
        assert_eq!(err.user_message(), "Error: HTTP 403: forbidden");
    }

    #[test]
    fn test_io_error_includes_path() {
        let err = AppError::io(
            "/tmp/missing.jpg",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(err.category(), ErrorCategory::System);
        assert!(err.to_string().contains("/tmp/missing.jpg"));
    }

    #[test]
    fn test_auth_errors() {
        assert_eq!(AppError::MissingAccessToken.category(), ErrorCategory::Auth);
        assert_eq!(
            AppError::AuthorizationDenied("access_denied".to_string()).user_message(),
            "Error: Authorization denied: access_denied"
        );
    }
}
