//! # Crop Category
//!
//! The top-level grouping the tracker pivots on. A closed enum: adding a
//! category forces every consumer to handle it at compile time.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::BarnError;

/// Top-level grouping of trackable crop kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Tree and vine fruits (mango, banana, ...).
    Fruits,
    /// Field and root vegetables (tomato, carrot, ...).
    Vegetables,
}

/// Number of categories.
pub const CATEGORY_COUNT: usize = 2;

impl Category {
    /// All categories in display order.
    pub fn all() -> &'static [Category] {
        &[Self::Fruits, Self::Vegetables]
    }

    /// Stable lowercase identifier, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fruits => "fruits",
            Self::Vegetables => "vegetables",
        }
    }

    /// Position of this category in [`Category::all()`].
    pub fn index(&self) -> usize {
        match self {
            Self::Fruits => 0,
            Self::Vegetables => 1,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = BarnError;

    /// Case-insensitive; accepts the singular form as well ("fruit").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fruits" | "fruit" => Ok(Self::Fruits),
            "vegetables" | "vegetable" => Ok(Self::Vegetables),
            _ => Err(BarnError::unknown("category", s)),
        }
    }
}
