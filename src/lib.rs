//! App Fotos IE Gornal - upload school photos to Google Drive from the terminal
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod auth;
pub mod cli;
pub mod config;
pub mod drive;
pub mod error;
pub mod logging;
pub mod models;
pub mod terminal;
pub mod traits;
pub mod ui;
