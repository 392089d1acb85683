//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::time::Duration;

use app_fotos::app::App;
use app_fotos::config::{AppConfig, Endpoints};
use ratatui::{backend::TestBackend, Terminal};
use tempfile::TempDir;

/// Config pointing every endpoint at `server_uri`, with an ephemeral
/// callback port and no browser.
pub fn test_config(server_uri: &str) -> AppConfig {
    AppConfig::default()
        .with_client_id("test-client")
        .with_client_secret("test-secret")
        .with_redirect_uri("http://127.0.0.1:0/callback")
        .with_endpoints(Endpoints::all_at(server_uri))
        .with_open_browser(false)
}

/// Create a temp dir holding small placeholder image files with the given
/// names. Contents stay ASCII so body matchers can read the multipart body.
pub fn image_dir(names: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in names {
        write_image(dir.path(), name);
    }
    dir
}

pub fn write_image(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, format!("image bytes of {}", name)).unwrap();
    path
}

/// Handle app messages until `done` holds. Panics after five seconds.
pub async fn pump_until<F>(app: &mut App, mut done: F)
where
    F: FnMut(&App) -> bool,
{
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    while !done(app) {
        let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
        match tokio::time::timeout(remaining, app.next_message()).await {
            Ok(Some(msg)) => app.handle_message(msg),
            Ok(None) => panic!("message channel closed"),
            Err(_) => panic!("timed out waiting for app state"),
        }
    }
}

/// Render the app into a test buffer and return its text, one line per row.
pub fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| app_fotos::ui::render(f, app))
        .unwrap();
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
