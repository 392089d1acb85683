//! Authentication for App Fotos.
//!
//! - OAuth2 authorization-code client for the identity provider
//! - Loopback listener that receives the redirect carrying the code
//! - The login state machine held by the app

pub mod callback;
pub mod flow;
pub mod oauth;

pub use callback::{CallbackOutcome, CallbackServer};
pub use flow::AuthState;
pub use oauth::OAuthClient;
