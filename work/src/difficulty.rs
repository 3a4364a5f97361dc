//! Fixed proof-of-work difficulty.
//!
//! Difficulty is the number of leading `'0'` hex digits a proof digest must
//! start with. It is set once per ledger and never adjusted.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::WorkError;

/// Leading zero hex digits required by default.
pub const DEFAULT_DIFFICULTY: Difficulty = Difficulty(4);

/// Hex digits in a SHA-256 digest.
const MAX_HEX_DIGITS: u8 = 64;

/// Required run of leading zero hex digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub fn new(leading_zeros: u8) -> Result<Self, WorkError> {
        if leading_zeros > MAX_HEX_DIGITS {
            return Err(WorkError::DifficultyOutOfRange {
                requested: leading_zeros,
                max: MAX_HEX_DIGITS,
            });
        }
        Ok(Self(leading_zeros))
    }

    pub fn leading_zeros(&self) -> u8 {
        self.0
    }

    /// Whether the hex rendering of `digest` starts with enough `'0'`s.
    ///
    /// Works nibble by nibble on the raw bytes; equivalent to
    /// `hex::encode(digest).starts_with(&"0".repeat(n))`.
    pub fn is_met_by(&self, digest: &[u8; 32]) -> bool {
        (0..self.0 as usize).all(|nibble| {
            let byte = digest[nibble / 2];
            let value = if nibble % 2 == 0 { byte >> 4 } else { byte & 0x0f };
            value == 0
        })
    }

    /// Mean number of candidates tried before a hit: `16^n`.
    pub fn expected_attempts(&self) -> f64 {
        16f64.powi(self.0 as i32)
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        DEFAULT_DIFFICULTY
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = WorkError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} leading zero hex digits", self.0)
    }
}
