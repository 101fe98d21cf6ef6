//! Locale error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::language::Language;

/// Errors raised while loading or querying string tables.
#[derive(Debug, Error)]
pub enum LocaleError {
    /// A table is not valid YAML.
    #[error("failed to parse {language} table: {source}")]
    YamlParse {
        language: Language,
        source: serde_yaml::Error,
    },

    /// A table contains something other than nested string maps.
    #[error("invalid entry {key:?} in {language} table: {detail}")]
    InvalidEntry {
        language: Language,
        key: String,
        detail: String,
    },

    /// A table file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The key is not present in the English reference table.
    #[error("missing translation key {key:?}")]
    MissingKey { key: String },
}
