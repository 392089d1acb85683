//! Full login through the loopback redirect listener.

mod common;

use std::sync::Arc;

use app_fotos::adapters::ReqwestHttpClient;
use app_fotos::app::{App, Screen};
use app_fotos::auth::{AuthState, CallbackOutcome, CallbackServer};
use app_fotos::models::Severity;
use common::{pump_until, render_to_string, test_config};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_browser_redirect_completes_login() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access_token": "T" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/oauth2/v2/userinfo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "email": "m@ie-gornal.cat" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/drive/v3/files"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "files": [{ "id": "x", "name": "3R ESO" }]
        })))
        .mount(&server)
        .await;

    let mut app = App::new(test_config(&server.uri()), Arc::new(ReqwestHttpClient::new()));
    app.start_login();
    assert!(matches!(app.auth, AuthState::AwaitingCallback { .. }));

    let screen = render_to_string(&mut app, 120, 30);
    assert!(screen.contains("/o/oauth2/v2/auth"));

    pump_until(&mut app, |a| a.callback_addr.is_some()).await;
    let addr = app.callback_addr.unwrap();

    let page = reqwest::get(format!("http://{}/callback?code=abc&scope=x", addr))
        .await
        .unwrap();
    assert!(page.status().is_success());

    pump_until(&mut app, |a| a.auth.is_authenticated()).await;

    assert_eq!(app.screen(), Screen::Folders);
    assert_eq!(app.auth.access_token(), Some("T"));
    assert_eq!(app.folders.len(), 1);
    assert!(app.callback_addr.is_none());
}

#[tokio::test]
async fn test_denied_consent_returns_to_login() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut app = App::new(test_config(&server.uri()), Arc::new(ReqwestHttpClient::new()));
    app.start_login();
    pump_until(&mut app, |a| a.callback_addr.is_some()).await;
    let addr = app.callback_addr.unwrap();

    let _ = reqwest::get(format!("http://{}/callback?error=access_denied", addr))
        .await
        .unwrap();

    pump_until(&mut app, |a| a.auth == AuthState::Unauthenticated).await;

    let status = app.status.clone().unwrap();
    assert_eq!(status.severity, Severity::Error);
    assert!(status.text.contains("access_denied"), "got {}", status.text);
}

#[tokio::test]
async fn test_callback_server_rejects_request_without_code() {
    let (server, mut outcome_rx) = CallbackServer::start("http://127.0.0.1:0/callback")
        .await
        .unwrap();
    let base = format!("http://{}/callback", server.local_addr());

    let missing = reqwest::get(&base).await.unwrap();
    assert_eq!(missing.status().as_u16(), 400);
    assert!(outcome_rx.try_recv().is_err());

    let ok = reqwest::get(format!("{}?code=first", base)).await.unwrap();
    assert!(ok.status().is_success());

    let again = reqwest::get(format!("{}?code=second", base)).await.unwrap();
    assert_eq!(again.status().as_u16(), 409);

    assert_eq!(
        outcome_rx.await.unwrap(),
        CallbackOutcome::Code("first".to_string())
    );
    server.shutdown().await;
}

/// A redirect URI on a fixed port, as in production.
fn fixed_port_redirect() -> String {
    let probe = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = probe.local_addr().unwrap().port();
    drop(probe);
    format!("http://127.0.0.1:{}/callback", port)
}

#[tokio::test]
async fn test_restarting_login_keeps_fixed_port_listener() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access_token": "T" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/drive/v3/files"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "files": [] })))
        .mount(&server)
        .await;

    let config = test_config(&server.uri()).with_redirect_uri(fixed_port_redirect());
    let mut app = App::new(config, Arc::new(ReqwestHttpClient::new()));
    app.start_login();
    pump_until(&mut app, |a| a.callback_addr.is_some()).await;
    let addr = app.callback_addr.unwrap();

    app.start_login();
    app.drain_messages();

    assert!(matches!(app.auth, AuthState::AwaitingCallback { .. }));
    assert_eq!(app.callback_addr, Some(addr));
    assert_eq!(app.status.clone().unwrap().severity, Severity::Info);

    let page = reqwest::get(format!("http://{}/callback?code=abc", addr))
        .await
        .unwrap();
    assert!(page.status().is_success());

    pump_until(&mut app, |a| a.auth.is_authenticated()).await;
    assert_eq!(app.auth.access_token(), Some("T"));
}

#[tokio::test]
async fn test_login_after_logout_rebinds_fixed_port() {
    let server = MockServer::start().await;
    let config = test_config(&server.uri()).with_redirect_uri(fixed_port_redirect());
    let mut app = App::new(config, Arc::new(ReqwestHttpClient::new()));

    app.start_login();
    pump_until(&mut app, |a| a.callback_addr.is_some()).await;
    let first = app.callback_addr.unwrap();

    app.logout();
    app.start_login();
    pump_until(&mut app, |a| a.callback_addr.is_some()).await;

    assert!(matches!(app.auth, AuthState::AwaitingCallback { .. }));
    assert_eq!(app.callback_addr, Some(first));
    assert_eq!(app.status.clone().unwrap().severity, Severity::Info);
}
