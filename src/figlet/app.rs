//! Argument handling, font validation, prompt and render.

use std::io::{self, BufRead, Write};

use super::args::{parse_args, ArgsError};
use super::library::FontLibrary;
use super::usage::write_usage;
use crate::prompt;

/// Run the converter and return the process exit status.
///
/// `default_font` is used when no `--font` is given. Every message goes to
/// `output`; only a failure to write there is returned as an error.
pub fn run<S, L, R, W>(
    argv: &[S],
    default_font: Option<&str>,
    library: &L,
    input: &mut R,
    output: &mut W,
) -> io::Result<i32>
where
    S: AsRef<str>,
    L: FontLibrary,
    R: BufRead,
    W: Write,
{
    let args = match parse_args(argv) {
        Ok(args) => args,
        Err(e @ ArgsError::InvalidUsage) => {
            writeln!(output, "{}", e)?;
            write_usage(output, &library.available_fonts())?;
            return Ok(1);
        }
    };

    let font = args.font.as_deref().or(default_font);
    if let Some(name) = font {
        if !library.has_font(name) {
            log::info!("Font '{}' failed the probe render", name);
            writeln!(output, "Font '{}' not found", name)?;
            write_usage(output, &library.available_fonts())?;
            return Ok(1);
        }
    }

    let text = match prompt::read_line("Input: ", input, output) {
        Ok(text) => text,
        Err(e) => {
            writeln!(output, "Error: {}", e)?;
            return Ok(1);
        }
    };

    match library.render(&text, font) {
        Ok(art) => {
            writeln!(output, "Output:")?;
            writeln!(output, "{}", art)?;
            Ok(0)
        }
        Err(e) => {
            writeln!(output, "Error: {}", e)?;
            Ok(1)
        }
    }
}
