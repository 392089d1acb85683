//! Multipart uploads into a Drive folder.

use std::path::Path;

use bytes::Bytes;
use serde_json::json;

use super::DriveClient;
use crate::error::{AppError, AppResult};
use crate::models::{FileOutcome, Folder, UploadReport};
use crate::traits::{bearer, MultipartPart};

/// Name advertised for a local file: its final path component.
fn upload_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

impl DriveClient {
    /// Upload one file into `folder`.
    ///
    /// POST {upload_base}/upload/drive/v3/files?uploadType=multipart
    ///
    /// The body has a `metadata` JSON part (`name`, `parents`) followed by a
    /// `file` part with the raw bytes.
    pub async fn upload_file(
        &self,
        access_token: &str,
        folder: &Folder,
        path: &Path,
    ) -> AppResult<()> {
        let name = upload_name(path);
        let data = tokio::fs::read(path)
            .await
            .map_err(|e| AppError::io(path, e))?;
        let mime = mime_guess::from_path(path).first_or_octet_stream();

        let parts = vec![
            MultipartPart::json("metadata", &json!({ "name": name, "parents": [folder.id] })),
            MultipartPart::file("file", &name, mime.essence_str(), Bytes::from(data)),
        ];

        let url = format!(
            "{}/upload/drive/v3/files?uploadType=multipart",
            self.config.endpoints.upload_base
        );
        let response = self
            .http
            .post_multipart(&url, parts, &bearer(access_token))
            .await?;

        if !response.is_success() {
            return Err(AppError::Status {
                status: response.status,
                message: response.body_preview(),
            });
        }
        Ok(())
    }

    /// Upload `files` one after another into `folder`.
    ///
    /// A failed file is recorded and the batch moves on. `on_progress` is
    /// called with `(done, total)` after each file. Without a folder nothing
    /// is sent and [`AppError::NoFolderSelected`] is returned; an empty file
    /// list yields an empty report without any request.
    pub async fn upload_files<P, F>(
        &self,
        access_token: &str,
        folder: Option<&Folder>,
        files: &[P],
        mut on_progress: F,
    ) -> AppResult<UploadReport>
    where
        P: AsRef<Path>,
        F: FnMut(usize, usize) + Send,
    {
        let folder = folder.ok_or(AppError::NoFolderSelected)?;
        let mut report = UploadReport::new(folder.clone());
        let total = files.len();

        for (index, path) in files.iter().enumerate() {
            let path = path.as_ref();
            let succeeded = match self.upload_file(access_token, folder, path).await {
                Ok(()) => {
                    tracing::debug!("Uploaded {} to {}", path.display(), folder.name);
                    true
                }
                Err(e) => {
                    tracing::warn!(
                        category = %e.category(),
                        "Upload of {} failed: {}",
                        path.display(),
                        e
                    );
                    false
                }
            };
            report.results.push(FileOutcome {
                name: upload_name(path),
                succeeded,
            });
            on_progress(index + 1, total);
        }

        tracing::info!(
            "Upload batch to {} finished: {}/{} succeeded",
            folder.name,
            report.succeeded(),
            total
        );
        Ok(report)
    }
}
