//! # Error Types
//!
//! Top-level error for Barn Buddy primitives. Concern-specific errors
//! (`AmountError`, tracker, locale and session errors) live next to the code
//! that raises them.

use thiserror::Error;

/// Top-level error type for Barn Buddy primitives.
#[derive(Error, Debug)]
pub enum BarnError {
    /// An identifier (category, unit, language, ...) was not recognised.
    #[error("unknown {kind}: {value:?}")]
    UnknownIdentifier {
        /// What was being parsed (e.g. "category").
        kind: &'static str,
        /// The rejected input.
        value: String,
    },
}

impl BarnError {
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        Self::UnknownIdentifier {
            kind,
            value: value.to_string(),
        }
    }
}
