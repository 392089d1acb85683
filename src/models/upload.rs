//! Results of an upload batch.

use super::Folder;

/// Outcome of uploading one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    /// File name as sent in the upload metadata
    pub name: String,
    pub succeeded: bool,
}

/// Per-file results of one batch, in upload order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReport {
    pub folder: Folder,
    pub results: Vec<FileOutcome>,
}

impl UploadReport {
    pub fn new(folder: Folder) -> Self {
        Self {
            folder,
            results: Vec::new(),
        }
    }

    /// Number of files the server accepted.
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.succeeded).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.succeeded()
    }

    /// Status text for a finished batch.
    pub fn summary_message(&self) -> String {
        format!(
            "✓ {} foto(s) pujada(s) a \"{}\" correctament!",
            self.succeeded(),
            self.folder.name
        )
    }
}
