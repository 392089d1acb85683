//! Screen and focus types.

/// Which screen is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// No token held
    Login,
    /// Folder grid and upload panel
    Folders,
}

/// Which component receives key presses on the folders screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Grid,
    PathInput,
}
