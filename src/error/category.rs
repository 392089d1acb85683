//! Error category classification.
//!
//! Categories decide how an error is shown to the user and are attached to
//! log records as a short label.

use std::fmt;

/// High-level categorization of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection, DNS, timeout.
    Network,

    /// The identity provider refused or returned no token.
    Auth,

    /// Non-2xx responses and malformed bodies from the remote APIs.
    Server,

    /// The user must act first (pick a folder, pick some images).
    User,

    /// Filesystem and socket errors.
    System,

    /// Missing or invalid settings.
    Configuration,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Server => "server",
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// User-category errors are shown verbatim; everything else gets an
    /// `Error: ` prefix in the status line.
    pub fn is_user_actionable(&self) -> bool {
        matches!(self, ErrorCategory::User)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
