mod folder;
mod session;
mod status;
mod upload;

pub use folder::{Folder, FolderList};
pub use session::{Session, UserInfo};
pub use status::{Severity, StatusMessage};
pub use upload::{FileOutcome, UploadReport};
