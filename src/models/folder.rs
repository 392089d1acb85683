//! Drive folder model.

use serde::Deserialize;

/// A Drive folder the user can upload into.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Folder {
    /// Drive file id, used as the upload parent
    pub id: String,
    /// Display name
    pub name: String,
}

impl Folder {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Body of a `files.list` response restricted to `files(id,name)`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FolderList {
    #[serde(default)]
    pub files: Vec<Folder>,
}
