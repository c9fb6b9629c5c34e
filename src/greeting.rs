//! Greeting classification for the `bank` binary.
//!
//! A greeting earns a tip depending on how it opens:
//! - "hello" (any case, spaces ignored): $0
//! - any other "h" opening: $20
//! - anything else, including an empty greeting: $100

use std::fmt;

/// One of the three fixed tip amounts a greeting can earn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipTier {
    /// Greeting opens with "hello".
    Hello,
    /// Greeting opens with "h" but not "hello".
    H,
    /// Everything else.
    Other,
}

impl TipTier {
    /// Classify a raw greeting.
    pub fn from_greeting(greeting: &str) -> Self {
        let normalized = normalize(greeting);

        if normalized.starts_with("hello") {
            TipTier::Hello
        } else if normalized.starts_with('h') {
            TipTier::H
        } else {
            TipTier::Other
        }
    }

    /// Tip amount in dollars.
    pub fn amount(self) -> u32 {
        match self {
            TipTier::Hello => 0,
            TipTier::H => 20,
            TipTier::Other => 100,
        }
    }
}

impl fmt::Display for TipTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.amount())
    }
}

/// Lower-case the greeting and drop every whitespace character.
fn normalize(greeting: &str) -> String {
    greeting
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Tip amount for a greeting: 0, 20 or 100.
pub fn classify(greeting: &str) -> u32 {
    TipTier::from_greeting(greeting).amount()
}
