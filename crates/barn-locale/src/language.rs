//! Supported display languages.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use barn_core::BarnError;

/// A display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English. Reference table.
    #[default]
    En,
    /// Sinhala, the primary local language.
    Si,
    /// Tamil, the secondary local language.
    Ta,
}

impl Language {
    /// All languages, English first.
    pub fn all() -> &'static [Language] {
        &[Self::En, Self::Si, Self::Ta]
    }

    /// Language for an ISO 639-1 code, case-insensitively.
    pub fn from_code(code: &str) -> Option<Language> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "si" => Some(Self::Si),
            "ta" => Some(Self::Ta),
            _ => None,
        }
    }

    /// ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Si => "si",
            Self::Ta => "ta",
        }
    }

    /// The language's own name, for a language switcher.
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Si => "සිංහල",
            Self::Ta => "தமிழ்",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Self::En => 0,
            Self::Si => 1,
            Self::Ta => 2,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = BarnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| BarnError::UnknownIdentifier {
            kind: "language",
            value: s.to_string(),
        })
    }
}
