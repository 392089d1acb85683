//! Command-line argument parsing.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

use reqwest::Url;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default).
    ///
    /// `code` is an authorization code given on the command line, used when
    /// the browser cannot reach the loopback redirect.
    RunTui { code: Option<String> },
}

/// Parse command-line arguments and return the appropriate command.
///
/// `--code` accepts either the bare code or the full redirect URL copied
/// from the browser's address bar.
///
/// # Errors
///
/// Returns a message for unknown flags or a `--code` without a value.
///
/// # Examples
///
/// ```
/// use app_fotos::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["app-fotos".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, String>
where
    I: Iterator<Item = String>,
{
    let mut code = None;
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--code" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--code requires a value".to_string())?;
                code = Some(extract_code(&value)?);
            }
            other => {
                if let Some(value) = other.strip_prefix("--code=") {
                    code = Some(extract_code(value)?);
                } else {
                    return Err(format!("Unknown argument: {}", other));
                }
            }
        }
    }

    Ok(CliCommand::RunTui { code })
}

/// Pull the authorization code out of a redirect URL, or accept a bare code.
pub fn extract_code(value: &str) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("--code requires a value".to_string());
    }

    let Ok(url) = Url::parse(value) else {
        return Ok(value.to_string());
    };

    let mut code = None;
    let mut error = None;
    for (key, val) in url.query_pairs() {
        match key.as_ref() {
            "code" => code = Some(val.into_owned()),
            "error" => error = Some(val.into_owned()),
            _ => {}
        }
    }

    match (code, error) {
        (Some(code), _) if !code.is_empty() => Ok(code),
        (_, Some(error)) => Err(format!("Authorization denied: {}", error)),
        _ => Err("No authorization code found in URL".to_string()),
    }
}
