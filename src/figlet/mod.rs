//! Text-to-ASCII-art conversion for the `figlet` binary.
//!
//! # Structure
//!
//! - [`library`] - font enumeration and rendering
//! - [`args`] - command-line parsing
//! - [`usage`] - usage text and font listing
//! - [`app`] - the prompt/render flow

mod app;
mod args;
mod library;
mod usage;

pub use app::run;
pub use args::{parse_args, Args, ArgsError};
pub use library::{FigletFonts, FontLibrary, FONT_EXTENSION, STANDARD_FONT};
pub use usage::{write_usage, FONT_PREVIEW_LIMIT};

/// Errors from loading fonts or rendering text.
#[derive(Debug, thiserror::Error)]
pub enum FigletError {
    #[error("Font '{0}' not found")]
    FontNotFound(String),

    #[error("Failed to load font '{name}': {reason}")]
    InvalidFont { name: String, reason: String },
}
