//! UI rendering for App Fotos
//!
//! Two screens:
//! - Login: connect action, authorization URL while waiting, status line
//! - Folders: header with logout, status line, responsive folder grid
//!   (1, 2 or 3 columns by width) and the upload panel for the selected folder

mod folders;
mod helpers;
mod login;
mod status;
mod theme;
mod upload;

pub use helpers::{breakpoints, grid_columns_for_width, spinner_frame, SPINNER_FRAMES};
pub use status::severity_color;
pub use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_INFO, COLOR_SUCCESS};

use ratatui::Frame;

use crate::app::{App, Screen};
use folders::render_folders_screen;
use login::render_login_screen;

/// Render the UI based on current screen
pub fn render(frame: &mut Frame, app: &mut App) {
    match app.screen() {
        Screen::Login => render_login_screen(frame, app),
        Screen::Folders => render_folders_screen(frame, app),
    }
}
