//! pset-tools library crate.
//!
//! Holds the logic behind the `bank`, `bitcoin` and `figlet` binaries so it
//! can be exercised from unit and integration tests.

pub mod config;
pub mod figlet;
pub mod greeting;
pub mod logging;
pub mod price;
pub mod prompt;
