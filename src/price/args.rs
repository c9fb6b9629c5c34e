//! CLI argument parsing with clap.

use clap::Parser;

use super::value::{parse_amount, AmountError};

/// Print the current USD value of a quantity of Bitcoin
#[derive(Parser, Debug, PartialEq)]
#[command(name = "bitcoin")]
#[command(about = "Print the current USD value of a quantity of Bitcoin", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct AmountArgs {
    /// Number of Bitcoins (negative values are rejected after parsing)
    #[arg(value_name = "AMOUNT", allow_hyphen_values = true)]
    pub amount: Option<String>,
}

/// Parse `argv` (program name first) into a validated quantity.
///
/// Anything other than exactly one argument is [`AmountError::Missing`].
pub fn parse_amount_args<S: AsRef<str>>(argv: &[S]) -> Result<f64, AmountError> {
    let args = AmountArgs::try_parse_from(argv.iter().map(|arg| arg.as_ref())).map_err(|e| {
        log::debug!("Argument parsing failed: {}", e);
        AmountError::Missing
    })?;
    let amount = args.amount.ok_or(AmountError::Missing)?;
    parse_amount(&[amount])
}
