//! Interactive single-line prompt.

use std::io::{self, BufRead, Write};

/// Errors that can occur while prompting for input.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("no input (end of file)")]
    Eof,

    #[error("{0}")]
    Io(#[from] io::Error),
}

/// Write `prompt` to `output`, then read one line from `input`.
///
/// The trailing newline (`\n` or `\r\n`) is stripped; other whitespace is
/// left for the caller to handle.
pub fn read_line<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> Result<String, PromptError> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PromptError::Eof);
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Prompt on stdout and read a line from stdin.
pub fn ask(prompt: &str) -> Result<String, PromptError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    read_line(prompt, &mut input, &mut output)
}
