//! Color theme constants for the App Fotos UI

use ratatui::style::Color;

// ============================================================================
// Base palette
// ============================================================================

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for the focused cell and input
pub const COLOR_ACCENT: Color = Color::LightBlue;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for hints and key legends
pub const COLOR_DIM: Color = Color::DarkGray;

/// Selected folder background
pub const COLOR_SELECTED_BG: Color = Color::Rgb(37, 99, 235);

/// Logout action
pub const COLOR_LOGOUT: Color = Color::Rgb(239, 68, 68);

// ============================================================================
// Status colors
// ============================================================================

pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117);

pub const COLOR_ERROR: Color = Color::Red;

pub const COLOR_INFO: Color = Color::Cyan;

/// "Carregant carpetes..." placeholder
pub const COLOR_WARNING: Color = Color::Yellow;
