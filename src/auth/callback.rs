//! Loopback listener for the OAuth redirect.
//!
//! Binds the host, port and path of the configured redirect URI, answers the
//! browser with a short HTML page and forwards the first code (or provider
//! error) it sees through a oneshot channel.

use std::io::ErrorKind;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use serde::Deserialize;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::error::{AppError, AppResult};

/// What the identity provider sent back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// One-time authorization code
    Code(String),
    /// The user declined or the provider reported an error
    Denied(String),
}

const BIND_ATTEMPTS: u32 = 20;
const BIND_RETRY_DELAY: Duration = Duration::from_millis(50);

#[derive(Debug, Deserialize)]
struct CallbackParams {
    code: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

#[derive(Clone)]
struct CallbackState {
    tx: Arc<Mutex<Option<oneshot::Sender<CallbackOutcome>>>>,
}

/// A running callback listener. Shuts down when dropped.
pub struct CallbackServer {
    local_addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl CallbackServer {
    /// Start listening on the redirect URI's host, port and path.
    ///
    /// Port 0 picks a free port; read it back with [`CallbackServer::local_addr`].
    pub async fn start(
        redirect_uri: &str,
    ) -> AppResult<(Self, oneshot::Receiver<CallbackOutcome>)> {
        let url = reqwest::Url::parse(redirect_uri)
            .map_err(|e| AppError::Config(format!("invalid redirect URI {}: {}", redirect_uri, e)))?;
        let host = url
            .host_str()
            .ok_or_else(|| AppError::Config(format!("redirect URI has no host: {}", redirect_uri)))?
            .to_string();
        let port = url.port_or_known_default().unwrap_or(80);
        let path = url.path().to_string();

        let bind_addr = format!("{}:{}", host, port);
        let listener = bind_with_retry(&bind_addr).await?;
        let local_addr = listener
            .local_addr()
            .map_err(|e| AppError::Callback(e.to_string()))?;

        let (outcome_tx, outcome_rx) = oneshot::channel();
        let state = CallbackState {
            tx: Arc::new(Mutex::new(Some(outcome_tx))),
        };

        let app = Router::new()
            .route(&path, get(callback_handler))
            .with_state(state);

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tracing::info!("Callback listener on http://{}{}", local_addr, path);

        let handle = tokio::spawn(async move {
            let result = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
            if let Err(e) = result {
                tracing::error!("Callback listener error: {}", e);
            }
        });

        Ok((
            Self {
                local_addr,
                shutdown_tx: Some(shutdown_tx),
                handle: Some(handle),
            },
            outcome_rx,
        ))
    }

    /// Address actually bound.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop accepting connections and wait for in-flight responses.
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for CallbackServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Bind `addr`, waiting briefly while a listener from an abandoned login
/// finishes its graceful shutdown.
async fn bind_with_retry(addr: &str) -> AppResult<TcpListener> {
    let mut attempt = 0;
    loop {
        match TcpListener::bind(addr).await {
            Ok(listener) => return Ok(listener),
            Err(e) if e.kind() == ErrorKind::AddrInUse && attempt < BIND_ATTEMPTS => {
                attempt += 1;
                tracing::debug!("{} busy, retrying bind ({}/{})", addr, attempt, BIND_ATTEMPTS);
                tokio::time::sleep(BIND_RETRY_DELAY).await;
            }
            Err(e) => {
                return Err(AppError::Callback(format!("cannot listen on {}: {}", addr, e)));
            }
        }
    }
}

async fn callback_handler(
    State(state): State<CallbackState>,
    Query(params): Query<CallbackParams>,
) -> impl IntoResponse {
    let outcome = match (params.code, params.error) {
        (Some(code), _) if !code.is_empty() => CallbackOutcome::Code(code),
        (_, Some(error)) => CallbackOutcome::Denied(params.error_description.unwrap_or(error)),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                page("Falta el codi d'autorització", "Torna a l'aplicació i prova-ho de nou."),
            );
        }
    };

    let sender = state.tx.lock().ok().and_then(|mut guard| guard.take());
    match sender {
        Some(tx) => {
            let denied = matches!(outcome, CallbackOutcome::Denied(_));
            let _ = tx.send(outcome);
            if denied {
                (
                    StatusCode::OK,
                    page("Accés denegat", "Pots tancar aquesta pestanya i tornar a l'aplicació."),
                )
            } else {
                (
                    StatusCode::OK,
                    page("Connectat correctament!", "Pots tancar aquesta pestanya i tornar a l'aplicació."),
                )
            }
        }
        None => (
            StatusCode::CONFLICT,
            page("Ja s'ha rebut un codi", "Pots tancar aquesta pestanya."),
        ),
    }
}

fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!doctype html><html lang=\"ca\"><head><meta charset=\"utf-8\"><title>App Fotos IE Gornal</title></head>\
         <body style=\"font-family:sans-serif;text-align:center;margin-top:4em\">\
         <h1>{}</h1><p>{}</p></body></html>",
        title, body
    ))
}
