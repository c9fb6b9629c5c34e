//! figlet: renders a line of text as ASCII art.
//!
//! Usage: `figlet [-f|--font <name>]`

use std::io::{self, Write};

use pset_tools::config::Config;
use pset_tools::figlet::{self, FigletFonts};
use pset_tools::logging;

fn main() {
    logging::init();

    let config = match Config::load_from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let library = FigletFonts::with_default_dirs(config.fonts.expanded_dirs());

    let argv: Vec<String> = std::env::args().collect();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let code = match figlet::run(
        &argv,
        config.fonts.default.as_deref(),
        &library,
        &mut input,
        &mut output,
    ) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };
    let _ = output.flush();
    std::process::exit(code);
}
