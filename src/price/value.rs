//! Quantity validation, the value calculation and its formatting.

use std::fmt;

/// Errors for the quantity argument.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AmountError {
    #[error("Missing command-line argument")]
    Missing,

    #[error("Command-line argument is not a number")]
    NotANumber,

    #[error("Bitcoin amount cannot be negative")]
    Negative,
}

/// Parse the command-line arguments (program name excluded) into a quantity.
///
/// Exactly one argument is accepted. It must parse as a finite, non-negative
/// number; surrounding whitespace is ignored.
pub fn parse_amount<S: AsRef<str>>(args: &[S]) -> Result<f64, AmountError> {
    let [arg] = args else {
        return Err(AmountError::Missing);
    };

    let amount: f64 = arg
        .as_ref()
        .trim()
        .parse()
        .map_err(|_| AmountError::NotANumber)?;
    if !amount.is_finite() {
        return Err(AmountError::NotANumber);
    }
    if amount < 0.0 {
        return Err(AmountError::Negative);
    }
    Ok(amount)
}

/// Total value of `amount` units at `price` per unit.
pub fn calculate_value(amount: f64, price: f64) -> f64 {
    amount * price
}

/// Render a quantity the way it was understood: integral values keep one
/// decimal place (`2.0`), others print in shortest form (`1.5`). Non-zero
/// magnitudes below `1e-4` or from `1e16` up use exponent form (`1e-05`,
/// `1.5e+16`).
pub fn format_amount(amount: f64) -> String {
    let magnitude = amount.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return format_exponent(amount);
    }
    if amount.fract() == 0.0 {
        format!("{:.1}", amount)
    } else {
        format!("{}", amount)
    }
}

/// Shortest mantissa with a signed, at least two-digit exponent.
fn format_exponent(value: f64) -> String {
    let shortest = format!("{:e}", value);
    let Some((mantissa, exponent)) = shortest.split_once('e') else {
        return shortest;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{}e{}{:0>2}", mantissa, sign, digits)
}

/// Fixed-precision rendering with `,` thousands separators.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let digits = int_part.len();
    let mut grouped = String::with_capacity(fixed.len() + digits / 3 + 1);
    if value.is_sign_negative() && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        grouped.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}

/// The three printed lines: quantity, unit price, and total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueReport {
    pub amount: f64,
    pub price: f64,
    pub total: f64,
}

impl ValueReport {
    pub fn new(amount: f64, price: f64) -> Self {
        Self {
            amount,
            price,
            total: calculate_value(amount, price),
        }
    }
}

impl fmt::Display for ValueReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Amount: {} BTC", format_amount(self.amount))?;
        writeln!(f, "Current Price: ${}", format_grouped(self.price, 2))?;
        write!(f, "Total Value: ${}", format_grouped(self.total, 4))
    }
}
