//! # barn-core — Foundational Types for Barn Buddy
//!
//! The leaf crate of the workspace. Every other `barn-*` crate depends on it;
//! it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One `Category` enum.** Fruits and Vegetables are a closed tagged
//!    union; every `match` on it is exhaustive.
//!
//! 2. **Units are configuration.** `QuantityUnit` distinguishes harvested
//!    mass (tons) from cultivated land area (acres). A tracker holds exactly
//!    one unit; quantities never carry mixed units.
//!
//! 3. **Amounts are parsed, not coerced.** `parse_amount()` is the single
//!    path from user text to a `Quantity`. A `Quantity` is always finite and
//!    strictly positive.
//!
//! 4. **Newtype identifiers.** `UserId` and `SessionToken` are distinct
//!    types; the token redacts itself in `Debug` output.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `barn-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod category;
pub mod error;
pub mod identity;
pub mod quantity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use category::{Category, CATEGORY_COUNT};
pub use error::BarnError;
pub use identity::{SessionToken, UserId};
pub use quantity::{format_amount, parse_amount, AmountError, Quantity, QuantityUnit};
pub use temporal::Timestamp;
