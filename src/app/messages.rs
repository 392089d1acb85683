//! AppMessage enum for async communication within the application.

use std::net::SocketAddr;

use crate::models::{Folder, Session, UploadReport};

/// Messages sent back to the UI loop by spawned tasks.
///
/// Every variant carries the session generation it was started under;
/// messages from before a logout are dropped.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// The callback listener is bound
    CallbackListening { generation: u64, addr: SocketAddr },
    /// The redirect delivered a code
    CallbackReceived { generation: u64, code: String },
    /// The listener failed or the provider reported an error
    CallbackFailed { generation: u64, error: String },
    /// Token exchange succeeded; user info and folders were fetched
    LoginSucceeded {
        generation: u64,
        session: Session,
        folders: Vec<Folder>,
    },
    /// Token exchange failed
    LoginFailed { generation: u64, error: String },
    /// Folder list reloaded
    FoldersLoaded { generation: u64, folders: Vec<Folder> },
    /// One more file of the batch was processed
    UploadProgress {
        generation: u64,
        done: usize,
        total: usize,
    },
    /// The upload batch ended
    UploadFinished {
        generation: u64,
        result: Result<UploadReport, String>,
    },
}

impl AppMessage {
    pub fn generation(&self) -> u64 {
        match self {
            AppMessage::CallbackListening { generation, .. }
            | AppMessage::CallbackReceived { generation, .. }
            | AppMessage::CallbackFailed { generation, .. }
            | AppMessage::LoginSucceeded { generation, .. }
            | AppMessage::LoginFailed { generation, .. }
            | AppMessage::FoldersLoaded { generation, .. }
            | AppMessage::UploadProgress { generation, .. }
            | AppMessage::UploadFinished { generation, .. } => *generation,
        }
    }
}
