//! Login state machine.
//!
//! ```text
//! Unauthenticated -> AwaitingCallback -> ExchangingCode -> Authenticated
//!        ^                  |                  |                |
//!        +------------------+------------------+----------------+
//!                      (failure / logout)
//! ```
//!
//! A code supplied on the command line skips `AwaitingCallback`.

use crate::models::Session;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    /// No token held.
    #[default]
    Unauthenticated,
    /// Consent URL opened; waiting for the redirect.
    AwaitingCallback { auth_url: String },
    /// Code received; token request in flight.
    ExchangingCode,
    Authenticated(Session),
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthState::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    /// Access token, present only once authenticated.
    pub fn access_token(&self) -> Option<&str> {
        self.session().map(|s| s.access_token.as_str())
    }

    /// Authorization URL while waiting for the redirect.
    pub fn auth_url(&self) -> Option<&str> {
        match self {
            AuthState::AwaitingCallback { auth_url } => Some(auth_url),
            _ => None,
        }
    }

    /// A login can start from scratch or restart while waiting for a
    /// redirect that never came.
    pub fn can_start_login(&self) -> bool {
        matches!(
            self,
            AuthState::Unauthenticated | AuthState::AwaitingCallback { .. }
        )
    }

    /// A code is only accepted when no token is held and no exchange runs.
    pub fn can_accept_code(&self) -> bool {
        self.can_start_login()
    }

    /// Text for the login button and spinner line.
    pub fn label(&self) -> &'static str {
        match self {
            AuthState::Unauthenticated => "Desconnectat",
            AuthState::AwaitingCallback { .. } => "Esperant l'autorització al navegador...",
            AuthState::ExchangingCode => "Connectant...",
            AuthState::Authenticated(_) => "Connectat",
        }
    }
}
