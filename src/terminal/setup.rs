//! Terminal setup and teardown functions.
//!
//! Low-level functions for entering and leaving TUI mode, used by
//! `TerminalManager` and by the panic hook.

use crossterm::{
    cursor::Show,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter TUI mode.
///
/// - Enters alternate screen (preserves original terminal content)
/// - Enables bracketed paste (dropped file paths arrive as one paste event)
///
/// # Errors
///
/// Returns an error if any terminal commands fail.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableBracketedPaste)
}

/// Leave TUI mode and restore terminal to normal state.
///
/// Safe to call multiple times; errors are ignored.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    // Disable raw mode first to allow normal terminal operation
    let _ = disable_raw_mode();

    let _ = execute!(writer, DisableBracketedPaste, LeaveAlternateScreen);
    let _ = writer.flush();

    let _ = execute!(writer, Show);
}

/// Restore the terminal after a panic, ignoring every error.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}
