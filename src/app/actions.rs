//! User-triggered operations: login, folder selection, upload, logout.

use crate::auth::{AuthState, CallbackOutcome, CallbackServer};
use crate::drive::{collect_images, resolve_input_path};
use crate::error::AppError;
use crate::models::{Session, StatusMessage};

use super::{App, AppMessage, Focus};

impl App {
    /// Begin the OAuth flow.
    ///
    /// Starts the loopback listener, opens the consent page in the browser
    /// and waits for the redirect in the background. The authorization URL
    /// stays on screen in case the browser cannot be opened.
    pub fn start_login(&mut self) {
        if !self.auth.can_start_login() {
            return;
        }
        if let Err(e) = self.config.validate() {
            tracing::warn!("Cannot start login: {}", e);
            self.set_error(&e);
            return;
        }

        // The listener from the earlier attempt still owns the redirect port.
        if let Some(auth_url) = self.auth.auth_url().map(str::to_string) {
            if self.login_task.as_ref().is_some_and(|t| !t.is_finished()) {
                tracing::info!("Login already waiting for the redirect; reopening browser");
                self.open_auth_url(&auth_url);
                self.set_status(StatusMessage::info(
                    "Autoritza l'accés al navegador per continuar.",
                ));
                return;
            }
        }

        self.abort_login_task();

        let auth_url = self.oauth.authorization_url();
        self.auth = AuthState::AwaitingCallback {
            auth_url: auth_url.clone(),
        };
        self.set_status(StatusMessage::info(
            "Autoritza l'accés al navegador per continuar.",
        ));

        let tx = self.message_tx.clone();
        let generation = self.generation();
        let redirect_uri = self.config.redirect_uri.clone();
        let open_browser = self.config.open_browser;

        self.login_task = Some(tokio::spawn(async move {
            let (server, outcome_rx) = match CallbackServer::start(&redirect_uri).await {
                Ok(started) => started,
                Err(e) => {
                    let _ = tx.send(AppMessage::CallbackFailed {
                        generation,
                        error: e.user_message(),
                    });
                    return;
                }
            };
            let _ = tx.send(AppMessage::CallbackListening {
                generation,
                addr: server.local_addr(),
            });

            if open_browser {
                open_in_browser(&auth_url);
            }

            let outcome = outcome_rx.await;
            server.shutdown().await;

            match outcome {
                Ok(CallbackOutcome::Code(code)) => {
                    let _ = tx.send(AppMessage::CallbackReceived { generation, code });
                }
                Ok(CallbackOutcome::Denied(reason)) => {
                    let _ = tx.send(AppMessage::CallbackFailed {
                        generation,
                        error: AppError::AuthorizationDenied(reason).user_message(),
                    });
                }
                Err(_) => {}
            }
        }));
    }

    /// Exchange `code` for a token, then fetch the profile and folders.
    ///
    /// Ignored while a token is held or an exchange is already running.
    pub fn complete_login(&mut self, code: String) {
        if !self.auth.can_accept_code() {
            tracing::debug!("Ignoring authorization code: {}", self.auth.label());
            return;
        }

        self.abort_login_task();
        self.auth = AuthState::ExchangingCode;
        self.set_status(StatusMessage::info("Connectant..."));

        let tx = self.message_tx.clone();
        let generation = self.generation();
        let oauth = self.oauth.clone();
        let drive = self.drive.clone();

        tokio::spawn(async move {
            let access_token = match oauth.exchange_code(&code).await {
                Ok(token) => token,
                Err(e) => {
                    tracing::warn!(category = %e.category(), "Token exchange failed: {}", e);
                    let _ = tx.send(AppMessage::LoginFailed {
                        generation,
                        error: e.user_message(),
                    });
                    return;
                }
            };

            let mut session = Session::new(access_token);
            match oauth.fetch_user_info(&session.access_token).await {
                Ok(info) => session.email = info.email,
                Err(e) => tracing::warn!("User info unavailable: {}", e),
            }

            let folders = match drive.list_folders(&session.access_token).await {
                Ok(folders) => folders,
                Err(e) => {
                    tracing::warn!("Folder listing failed: {}", e);
                    Vec::new()
                }
            };

            let _ = tx.send(AppMessage::LoginSucceeded {
                generation,
                session,
                folders,
            });
        });
    }

    /// Reload the folder list for the current session.
    pub fn load_folders(&mut self) {
        let Some(token) = self.auth.access_token().map(str::to_string) else {
            return;
        };

        let tx = self.message_tx.clone();
        let generation = self.generation();
        let drive = self.drive.clone();

        tokio::spawn(async move {
            let folders = match drive.list_folders(&token).await {
                Ok(folders) => folders,
                Err(e) => {
                    tracing::warn!("Folder listing failed: {}", e);
                    Vec::new()
                }
            };
            let _ = tx.send(AppMessage::FoldersLoaded {
                generation,
                folders,
            });
        });
    }

    /// Select the folder at `index` and clear the status line.
    pub fn select_folder(&mut self, index: usize) {
        if index >= self.folders.len() {
            return;
        }
        self.selected_folder = Some(index);
        self.grid_cursor = index;
        self.clear_status();
    }

    /// Upload the images named by the path input into the selected folder.
    pub fn submit_upload(&mut self) {
        if self.uploading {
            return;
        }
        let Some(token) = self.auth.access_token().map(str::to_string) else {
            self.set_error(&AppError::NotAuthenticated);
            return;
        };
        let Some(folder) = self.selected_folder().cloned() else {
            self.set_error(&AppError::NoFolderSelected);
            return;
        };
        if self.path_input.trim().is_empty() {
            return;
        }

        let files = match collect_images(&resolve_input_path(&self.path_input)) {
            Ok(files) => files,
            Err(e) => {
                self.set_error(&e);
                return;
            }
        };

        tracing::info!("Uploading {} file(s) to {}", files.len(), folder.name);
        self.uploading = true;
        self.upload_progress = Some((0, files.len()));
        self.set_status(StatusMessage::info("Pujant fotos..."));

        let tx = self.message_tx.clone();
        let generation = self.generation();
        let drive = self.drive.clone();

        tokio::spawn(async move {
            let progress_tx = tx.clone();
            let result = drive
                .upload_files(&token, Some(&folder), &files, move |done, total| {
                    let _ = progress_tx.send(AppMessage::UploadProgress {
                        generation,
                        done,
                        total,
                    });
                })
                .await
                .map_err(|e| e.user_message());
            let _ = tx.send(AppMessage::UploadFinished { generation, result });
        });
    }

    /// Drop the session and everything derived from it. No revocation call.
    pub fn logout(&mut self) {
        tracing::info!("Logging out");
        self.bump_generation();
        self.abort_login_task();
        self.auth = AuthState::Unauthenticated;
        self.folders.clear();
        self.selected_folder = None;
        self.grid_cursor = 0;
        self.focus = Focus::Grid;
        self.path_input.clear();
        self.uploading = false;
        self.upload_progress = None;
        self.last_report = None;
        self.callback_addr = None;
        self.status = None;
        self.mark_dirty();
    }

    fn open_auth_url(&self, auth_url: &str) {
        if self.config.open_browser {
            open_in_browser(auth_url);
        }
    }

    fn abort_login_task(&mut self) {
        if let Some(task) = self.login_task.take() {
            task.abort();
        }
        self.callback_addr = None;
    }
}

fn open_in_browser(url: &str) {
    if let Err(e) = open::that(url) {
        tracing::warn!("Could not open browser: {}", e);
    }
}
