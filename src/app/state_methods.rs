//! State accessor and utility methods for the App.

use super::{App, AppMessage};
use crate::error::AppError;
use crate::models::{Folder, StatusMessage};

impl App {
    /// Current session generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub(super) fn bump_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Increment the tick counter; redraws only while a spinner is visible.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.is_busy() && self.tick_count % 6 == 0 {
            self.mark_dirty();
        }
    }

    /// Something is in flight that shows a spinner.
    pub fn is_busy(&self) -> bool {
        use crate::auth::AuthState;
        self.uploading
            || matches!(
                self.auth,
                AuthState::ExchangingCode | AuthState::AwaitingCallback { .. }
            )
    }

    /// The selected folder, if any.
    pub fn selected_folder(&self) -> Option<&Folder> {
        self.selected_folder.and_then(|i| self.folders.get(i))
    }

    /// Email shown in the header.
    pub fn user_email(&self) -> Option<&str> {
        self.auth.session().and_then(|s| s.email.as_deref())
    }

    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
        self.mark_dirty();
    }

    pub fn set_error(&mut self, err: &AppError) {
        self.set_status(StatusMessage::from_error(err));
    }

    pub fn clear_status(&mut self) {
        self.status = None;
        self.mark_dirty();
    }

    /// Wait for the next async message, if the receiver has not been taken.
    pub async fn next_message(&mut self) -> Option<AppMessage> {
        match self.message_rx.as_mut() {
            Some(rx) => rx.recv().await,
            None => None,
        }
    }

    /// Handle every message already queued. Returns how many were handled.
    pub fn drain_messages(&mut self) -> usize {
        let mut pending = Vec::new();
        if let Some(rx) = self.message_rx.as_mut() {
            while let Ok(msg) = rx.try_recv() {
                pending.push(msg);
            }
        }
        let count = pending.len();
        for msg in pending {
            self.handle_message(msg);
        }
        count
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
