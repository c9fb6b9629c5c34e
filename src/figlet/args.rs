//! CLI argument parsing with clap.

use clap::Parser;

/// Render a line of text as ASCII art
#[derive(Parser, Debug, PartialEq)]
#[command(name = "figlet")]
#[command(about = "Render a line of text as ASCII art", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Font to render with (default: standard)
    #[arg(short = 'f', long = "font", value_name = "FONT")]
    pub font: Option<String>,
}

/// Why the arguments were not accepted.
#[derive(Debug, thiserror::Error)]
pub enum ArgsError {
    #[error("Invalid usage")]
    InvalidUsage,
}

/// Parse `argv` (program name first).
///
/// Only two shapes are accepted: no arguments, or a font flag followed by a
/// separate font name (`-f NAME` / `--font NAME`). `-h`/`--help` are not
/// flags here; like any single argument they are a usage error.
pub fn parse_args<S: AsRef<str>>(argv: &[S]) -> Result<Args, ArgsError> {
    let args = match Args::try_parse_from(argv.iter().map(|arg| arg.as_ref())) {
        Ok(args) => args,
        Err(e) => {
            log::debug!("Argument parsing failed: {}", e);
            return Err(ArgsError::InvalidUsage);
        }
    };

    match argv.len().saturating_sub(1) {
        0 | 2 => Ok(args),
        n => {
            log::debug!("Expected 0 or 2 arguments, got {}", n);
            Err(ArgsError::InvalidUsage)
        }
    }
}
