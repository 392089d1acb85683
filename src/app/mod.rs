//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Screen`] - Which screen is currently displayed
//! - [`Focus`] - Which component has focus on the folders screen
//! - [`AppMessage`] - Messages for async communication
//!
//! All state lives in one owned [`App`]. Network work runs in spawned tasks
//! that report back through the message channel.

mod actions;
mod handlers;
mod messages;
mod navigation;
mod state_methods;
mod types;

pub use messages::AppMessage;
pub use types::{Focus, Screen};

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::auth::{AuthState, OAuthClient};
use crate::config::AppConfig;
use crate::drive::DriveClient;
use crate::models::{Folder, StatusMessage, UploadReport};
use crate::traits::HttpClient;

/// Default grid width before the first render reports the real one.
const DEFAULT_GRID_COLUMNS: usize = 3;

/// Main application state
pub struct App {
    pub config: Arc<AppConfig>,
    oauth: OAuthClient,
    drive: DriveClient,
    /// Login state; holds the session once authenticated
    pub auth: AuthState,
    /// Allow-listed folders that exist, in response order
    pub folders: Vec<Folder>,
    /// Index into `folders`
    pub selected_folder: Option<usize>,
    /// Highlighted grid cell
    pub grid_cursor: usize,
    /// Columns in the last rendered grid
    pub grid_columns: usize,
    pub focus: Focus,
    /// Path typed into the upload panel
    pub path_input: String,
    pub uploading: bool,
    /// `(done, total)` while a batch runs
    pub upload_progress: Option<(usize, usize)>,
    /// Per-file results of the last finished batch
    pub last_report: Option<UploadReport>,
    /// Single status line; each operation overwrites it
    pub status: Option<StatusMessage>,
    /// Address of the running callback listener
    pub callback_addr: Option<SocketAddr>,
    pub should_quit: bool,
    /// Dirty flag: set when state changes, cleared after drawing
    pub needs_redraw: bool,
    /// Tick counter for the spinner
    pub tick_count: u64,
    /// Receiver for async messages (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Bumped on logout so late results from the old session are ignored
    generation: u64,
    /// Task waiting for the OAuth redirect
    login_task: Option<JoinHandle<()>>,
}

impl App {
    /// Create a new App instance.
    pub fn new(config: AppConfig, http: Arc<dyn HttpClient>) -> Self {
        let config = Arc::new(config);
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            oauth: OAuthClient::new(Arc::clone(&http), Arc::clone(&config)),
            drive: DriveClient::new(http, Arc::clone(&config)),
            config,
            auth: AuthState::default(),
            folders: Vec::new(),
            selected_folder: None,
            grid_cursor: 0,
            grid_columns: DEFAULT_GRID_COLUMNS,
            focus: Focus::default(),
            path_input: String::new(),
            uploading: false,
            upload_progress: None,
            last_report: None,
            status: None,
            callback_addr: None,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            message_rx: Some(message_rx),
            message_tx,
            generation: 0,
            login_task: None,
        }
    }

    /// Which screen to draw.
    pub fn screen(&self) -> Screen {
        if self.auth.is_authenticated() {
            Screen::Folders
        } else {
            Screen::Login
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Some(task) = self.login_task.take() {
            task.abort();
        }
    }
}
