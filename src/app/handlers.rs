//! Message handling for the App.

use crate::auth::AuthState;
use crate::models::StatusMessage;

use super::{App, AppMessage, Focus};

impl App {
    /// Handle an incoming async message.
    /// Messages from an earlier session generation are dropped.
    pub fn handle_message(&mut self, msg: AppMessage) {
        if msg.generation() != self.generation() {
            tracing::debug!("Dropping stale message from generation {}", msg.generation());
            return;
        }
        self.mark_dirty();

        match msg {
            AppMessage::CallbackListening { addr, .. } => {
                if matches!(self.auth, AuthState::AwaitingCallback { .. }) {
                    self.callback_addr = Some(addr);
                }
            }
            AppMessage::CallbackReceived { code, .. } => {
                self.callback_addr = None;
                self.complete_login(code);
            }
            AppMessage::CallbackFailed { error, .. } => {
                self.callback_addr = None;
                if matches!(self.auth, AuthState::AwaitingCallback { .. }) {
                    self.auth = AuthState::Unauthenticated;
                    self.set_status(StatusMessage::error(error));
                }
            }
            AppMessage::LoginSucceeded {
                session, folders, ..
            } => {
                if !matches!(self.auth, AuthState::ExchangingCode) {
                    return;
                }
                tracing::info!("Connected; {} folder(s) available", folders.len());
                self.auth = AuthState::Authenticated(session);
                self.set_folders(folders);
                self.set_status(StatusMessage::success("Connectat correctament!"));
            }
            AppMessage::LoginFailed { error, .. } => {
                if matches!(self.auth, AuthState::ExchangingCode) {
                    self.auth = AuthState::Unauthenticated;
                }
                self.set_status(StatusMessage::error(error));
            }
            AppMessage::FoldersLoaded { folders, .. } => {
                if self.auth.is_authenticated() {
                    self.set_folders(folders);
                }
            }
            AppMessage::UploadProgress { done, total, .. } => {
                if self.uploading {
                    self.upload_progress = Some((done, total));
                }
            }
            AppMessage::UploadFinished { result, .. } => {
                self.uploading = false;
                self.upload_progress = None;
                match result {
                    Ok(report) => {
                        self.set_status(StatusMessage::success(report.summary_message()));
                        self.last_report = Some(report);
                        self.path_input.clear();
                        self.focus = Focus::Grid;
                    }
                    Err(error) => self.set_status(StatusMessage::error(error)),
                }
            }
        }
    }

    /// Replace the folder list, keeping the selection if its id survives.
    fn set_folders(&mut self, folders: Vec<crate::models::Folder>) {
        let selected_id = self.selected_folder().map(|f| f.id.clone());
        self.folders = folders;
        self.selected_folder = selected_id
            .and_then(|id| self.folders.iter().position(|f| f.id == id));
        if self.grid_cursor >= self.folders.len() {
            self.grid_cursor = 0;
        }
    }
}
