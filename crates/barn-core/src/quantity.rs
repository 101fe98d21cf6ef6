//! # Quantities and Units
//!
//! `parse_amount()` is the only conversion from user-entered text to a
//! [`Quantity`]. The accepted domain is `finite ∧ > 0`; everything else is
//! rejected with a typed [`AmountError`] rather than coerced.
//!
//! Units are a tracker configuration parameter. Harvested mass and
//! cultivated area share one state-machine shape but are never mixed.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::error::BarnError;

// ─── Errors ──────────────────────────────────────────────────────────

/// Why a user-entered amount was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AmountError {
    /// Nothing was entered (or only whitespace).
    #[error("no amount entered")]
    Empty,

    /// The text is not a decimal number.
    #[error("{input:?} is not a number")]
    NotANumber {
        /// The rejected input, trimmed.
        input: String,
    },

    /// The number is NaN or infinite.
    #[error("amount must be finite")]
    NotFinite,

    /// The number is zero or negative.
    #[error("amount must be greater than zero, got {value}")]
    NotPositive {
        /// The parsed value.
        value: f64,
    },
}

// ─── Quantity ────────────────────────────────────────────────────────

/// A validated, strictly positive, finite amount.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Quantity(f64);

impl Quantity {
    /// Validate a raw value.
    pub fn new(value: f64) -> Result<Self, AmountError> {
        if !value.is_finite() {
            return Err(AmountError::NotFinite);
        }
        if value <= 0.0 {
            return Err(AmountError::NotPositive { value });
        }
        Ok(Self(value))
    }

    /// The inner value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Quantity {
    type Error = AmountError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for f64 {
    fn from(q: Quantity) -> Self {
        q.0
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_amount(self.0))
    }
}

/// Parse user-entered text into a [`Quantity`].
///
/// Surrounding whitespace is ignored. Trailing garbage ("12kg") is rejected
/// rather than truncated.
pub fn parse_amount(text: &str) -> Result<Quantity, AmountError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Empty);
    }
    let value: f64 = trimmed.parse().map_err(|_| AmountError::NotANumber {
        input: trimmed.to_string(),
    })?;
    Quantity::new(value)
}

/// Render an amount the way it is shown to users: shortest round-trip form,
/// no trailing `.0` on whole numbers.
pub fn format_amount(value: f64) -> String {
    format!("{value}")
}

// ─── Units ───────────────────────────────────────────────────────────

/// Unit a tracker accumulates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityUnit {
    /// Harvested mass in metric tons.
    #[default]
    Tons,
    /// Cultivated land area in acres.
    Acres,
}

impl QuantityUnit {
    /// All units.
    pub fn all() -> &'static [QuantityUnit] {
        &[Self::Tons, Self::Acres]
    }

    /// Stable lowercase identifier, also the English display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tons => "tons",
            Self::Acres => "acres",
        }
    }
}

impl std::fmt::Display for QuantityUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuantityUnit {
    type Err = BarnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tons" | "ton" | "t" => Ok(Self::Tons),
            "acres" | "acre" | "ac" => Ok(Self::Acres),
            _ => Err(BarnError::unknown("unit", s)),
        }
    }
}
