//! Session lifecycle across login, upload and logout.

mod common;

use std::sync::Arc;
use std::time::Duration;

use app_fotos::adapters::ReqwestHttpClient;
use app_fotos::app::{App, Focus, Screen};
use app_fotos::auth::AuthState;
use common::{image_dir, pump_until, render_to_string, test_config};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

async fn mount_google(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access_token": "T" })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/oauth2/v2/userinfo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "email": "m@ie-gornal.cat" })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/drive/v3/files"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "files": [
                { "id": "p1", "name": "1R PRI" },
                { "id": "p2", "name": "2N PRI" }
            ]
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_login_select_upload_with_keyboard() {
    let server = MockServer::start().await;
    mount_google(&server).await;
    Mock::given(method("POST"))
        .and(path("/upload/drive/v3/files"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = App::new(test_config(&server.uri()), Arc::new(ReqwestHttpClient::new()));
    app.complete_login("abc".to_string());
    pump_until(&mut app, |a| a.auth.is_authenticated()).await;

    let screen = render_to_string(&mut app, 100, 30);
    assert!(screen.contains("m@ie-gornal.cat"));
    assert!(screen.contains("Connectat correctament!"));

    app.handle_key(key(KeyCode::Right));
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.selected_folder().unwrap().name, "2N PRI");
    assert!(app.status.is_none());

    let dir = image_dir(&["foto.jpg"]);
    app.handle_key(key(KeyCode::Char('u')));
    assert_eq!(app.focus, Focus::PathInput);
    app.handle_paste(&dir.path().join("foto.jpg").display().to_string());
    app.handle_key(key(KeyCode::Enter));
    assert!(app.uploading);

    pump_until(&mut app, |a| !a.uploading).await;
    assert!(app.status.clone().unwrap().text.contains("1 foto(s) pujada(s) a \"2N PRI\""));
}

#[tokio::test]
async fn test_logout_discards_in_flight_upload() {
    let server = MockServer::start().await;
    mount_google(&server).await;
    Mock::given(method("POST"))
        .and(path("/upload/drive/v3/files"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(200)))
        .mount(&server)
        .await;

    let mut app = App::new(test_config(&server.uri()), Arc::new(ReqwestHttpClient::new()));
    app.complete_login("abc".to_string());
    pump_until(&mut app, |a| a.auth.is_authenticated()).await;

    let dir = image_dir(&["a.jpg"]);
    app.select_folder(0);
    app.path_input = dir.path().display().to_string();
    app.submit_upload();
    assert!(app.uploading);

    app.handle_key(key(KeyCode::Esc));
    app.handle_key(key(KeyCode::Char('d')));
    assert_eq!(app.screen(), Screen::Login);
    assert!(!app.uploading);

    // The late UploadFinished belongs to the old session and is ignored.
    tokio::time::sleep(Duration::from_millis(400)).await;
    app.drain_messages();

    assert_eq!(app.auth, AuthState::Unauthenticated);
    assert!(app.status.is_none());
    assert!(app.last_report.is_none());
    assert!(app.folders.is_empty());
}

#[tokio::test]
async fn test_second_code_is_ignored_while_authenticated() {
    let server = MockServer::start().await;
    mount_google(&server).await;

    let mut app = App::new(test_config(&server.uri()), Arc::new(ReqwestHttpClient::new()));
    app.complete_login("abc".to_string());
    pump_until(&mut app, |a| a.auth.is_authenticated()).await;

    app.complete_login("again".to_string());
    assert!(app.auth.is_authenticated());

    let token_calls = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path() == "/token")
        .count();
    assert_eq!(token_calls, 1);
}

#[tokio::test]
async fn test_login_without_client_id_shows_config_error() {
    let mut app = App::new(
        test_config("http://127.0.0.1:9").with_client_id(""),
        Arc::new(ReqwestHttpClient::new()),
    );
    app.handle_key(key(KeyCode::Enter));

    assert_eq!(app.auth, AuthState::Unauthenticated);
    assert!(app.status.clone().unwrap().text.contains("APP_FOTOS_CLIENT_ID"));
}
