//! Usage text with a preview of the available fonts.

use std::io::{self, Write};

/// How many font names the usage text lists before summarising the rest.
pub const FONT_PREVIEW_LIMIT: usize = 10;

/// Write the usage lines followed by the first few available fonts.
pub fn write_usage<W: Write>(out: &mut W, fonts: &[String]) -> io::Result<()> {
    writeln!(out, "Usage:")?;
    writeln!(out, "  figlet                    # Use default font")?;
    writeln!(out, "  figlet -f <font>          # Use specified font")?;
    writeln!(out, "  figlet --font <font>      # Use specified font")?;
    writeln!(out)?;
    writeln!(out, "Available fonts:")?;
    for font in fonts.iter().take(FONT_PREVIEW_LIMIT) {
        writeln!(out, "  {}", font)?;
    }
    if fonts.len() > FONT_PREVIEW_LIMIT {
        writeln!(
            out,
            "  ... and {} more fonts",
            fonts.len() - FONT_PREVIEW_LIMIT
        )?;
    }
    Ok(())
}
