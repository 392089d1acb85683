//! Google Drive access: folder lookup, image selection and uploads.

pub mod folders;
pub mod selection;
pub mod upload;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::traits::HttpClient;

pub use folders::build_folder_query;
pub use selection::{collect_images, is_image_path, resolve_input_path};

/// Client for the Drive endpoints the app uses.
#[derive(Clone)]
pub struct DriveClient {
    http: Arc<dyn HttpClient>,
    config: Arc<AppConfig>,
}

impl DriveClient {
    pub fn new(http: Arc<dyn HttpClient>, config: Arc<AppConfig>) -> Self {
        Self { http, config }
    }
}
