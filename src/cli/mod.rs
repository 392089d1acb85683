//! CLI module for App Fotos.
//!
//! Flags are handled before the TUI starts:
//!
//! ```ignore
//! use app_fotos::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! let code = run_cli_command(command); // exits for --version / --help
//! ```

pub mod args;
pub mod version;

pub use args::{extract_code, parse_args, CliCommand};
pub use version::{handle_help_command, handle_version_command, usage, VERSION};

/// Run a CLI command if applicable.
///
/// `Version` and `Help` print and exit. `RunTui` returns the authorization
/// code given on the command line, if any.
pub fn run_cli_command(command: CliCommand) -> Option<String> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::RunTui { code } => code,
    }
}
