//! bank: asks for a greeting and prints the tip it earns.

use pset_tools::greeting::TipTier;
use pset_tools::{logging, prompt};

/// Set up the Ctrl+C handler: say goodbye and exit cleanly.
fn setup_ctrlc_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || {
        println!("\nGoodbye!");
        std::process::exit(0);
    })
}

fn main() {
    logging::init();

    if let Err(e) = setup_ctrlc_handler() {
        log::warn!("Could not set up Ctrl+C handler: {}", e);
    }

    match prompt::ask("Greeting: ") {
        Ok(greeting) => {
            let tier = TipTier::from_greeting(greeting.trim());
            log::debug!("Greeting {:?} classified as {:?}", greeting, tier);
            println!("{}", tier);
        }
        Err(e) => println!("Error: {}", e),
    }
}
