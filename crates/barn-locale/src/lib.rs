//! # barn-locale — String Tables
//!
//! Pure lookup from `(language, dotted key)` to display text. Tables are
//! YAML documents embedded at compile time, one per [`Language`], and may be
//! overridden from a directory at runtime.
//!
//! ## Fallback
//!
//! English is the reference table. A key missing from the Sinhala or Tamil
//! table resolves to the English text; a key missing from English is a
//! [`LocaleError::MissingKey`].

pub mod error;
pub mod language;
pub mod table;

pub use error::LocaleError;
pub use language::Language;
pub use table::{StringTable, Translations};
