//! bitcoin: prints the current USD value of a quantity of Bitcoin.
//!
//! Usage: `bitcoin <amount>`

use pset_tools::config::Config;
use pset_tools::logging;
use pset_tools::price::{parse_amount_args, PriceClient, ValueReport};

/// Load .env so `BITCOIN_PRICE_URL` and `RUST_LOG` can be set there.
/// Existing environment variables are not overridden.
fn load_env() {
    // dotenv::dotenv() returns Err if .env doesn't exist, which is fine
    let _ = dotenv::dotenv();
}

fn run(argv: &[String]) -> Result<ValueReport, Box<dyn std::error::Error>> {
    // Validate before touching the config or the network.
    let amount = parse_amount_args(argv)?;

    let config = Config::load_from_env()?;
    let client = PriceClient::from_config(&config.price)?;

    let rt = tokio::runtime::Runtime::new()?;
    let price = rt.block_on(client.fetch_price())?;

    Ok(ValueReport::new(amount, price))
}

fn main() {
    load_env();
    logging::init();

    let argv: Vec<String> = std::env::args().collect();
    match run(&argv) {
        Ok(report) => println!("{}", report),
        Err(e) => {
            println!("{}", e);
            std::process::exit(1);
        }
    }
}
