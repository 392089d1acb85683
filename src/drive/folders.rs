//! Folder lookup by allow-list.

use super::DriveClient;
use crate::error::{AppError, AppResult};
use crate::models::{Folder, FolderList};
use crate::traits::bearer;

/// Fields requested from `files.list`.
const FOLDER_FIELDS: &str = "files(id,name)";

/// Build the `q` expression matching any of `names` that is not trashed.
///
/// Names are double-quoted; embedded `\` and `"` are backslash-escaped.
pub fn build_folder_query<S: AsRef<str>>(names: &[S]) -> String {
    let quoted: Vec<String> = names
        .iter()
        .map(|name| {
            let escaped = name.as_ref().replace('\\', "\\\\").replace('"', "\\\"");
            format!("\"{}\"", escaped)
        })
        .collect();
    format!("name in ({}) and trashed=false", quoted.join(","))
}

impl DriveClient {
    /// List the allow-listed folders that exist, in response order.
    ///
    /// GET {api_base}/drive/v3/files?q=..&fields=files(id,name)
    ///
    /// One request, no pagination. Missing folders are simply absent.
    pub async fn list_folders(&self, access_token: &str) -> AppResult<Vec<Folder>> {
        let query = build_folder_query(&self.config.folder_names);
        let url = format!(
            "{}/drive/v3/files?q={}&fields={}",
            self.config.endpoints.api_base,
            urlencoding::encode(&query),
            urlencoding::encode(FOLDER_FIELDS),
        );

        let response = self.http.get(&url, &bearer(access_token)).await?;

        if !response.is_success() {
            return Err(AppError::Status {
                status: response.status,
                message: response.body_preview(),
            });
        }

        let list: FolderList = response
            .json()
            .map_err(|e| AppError::InvalidResponse(e.to_string()))?;

        tracing::info!("Loaded {} of {} folders", list.files.len(), self.config.folder_names.len());
        Ok(list.files)
    }
}
