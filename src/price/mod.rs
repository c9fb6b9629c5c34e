//! Bitcoin value calculation for the `bitcoin` binary.
//!
//! Validates the quantity given on the command line, fetches the current USD
//! price from a JSON endpoint, and formats the resulting value.

mod args;
mod client;
mod value;

pub use args::{parse_amount_args, AmountArgs};
pub use client::{
    PriceClient, PriceError, DEFAULT_CONNECT_TIMEOUT, DEFAULT_PRICE_URL, DEFAULT_TIMEOUT,
    PRICE_URL_ENV,
};
pub use value::{
    calculate_value, format_amount, format_grouped, parse_amount, AmountError, ValueReport,
};
