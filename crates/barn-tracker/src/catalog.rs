//! # Catalog
//!
//! The fixed, ordered item lists a tracker is created with. Lists are
//! vectors in display order, one per [`Category`], never hash maps.
//!
//! ## Presets
//!
//! | Preset | Accumulation | Contents |
//! |--------|--------------|----------|
//! | `seasonal` | open-ended | 5 fruits, 5 vegetables, all at zero |
//! | `live_demo` | capacity | 5 vegetables seeded from the public demo |
//! | `farm_targets` | capacity | 5 vegetables seeded with farm targets |
//!
//! A category may be left empty; selecting it is rejected by the tracker.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use barn_core::{BarnError, Category, Quantity};

use crate::item::TrackedItem;

// ─── Errors ──────────────────────────────────────────────────────────

/// Errors raised while assembling a catalog.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Two items in one category share a name (case-insensitive).
    #[error("duplicate item {name:?} in {category}")]
    DuplicateItem {
        /// Category holding the duplicate.
        category: Category,
        /// The repeated name.
        name: String,
    },

    /// An item has an empty name.
    #[error("blank item name in {category}")]
    BlankName {
        /// Category holding the item.
        category: Category,
    },

    /// A seeded quantity is negative or not finite.
    #[error("item {name:?} has invalid starting quantity {value}")]
    InvalidQuantity {
        /// Item name.
        name: String,
        /// The rejected value.
        value: f64,
    },

    /// A capacity is not a positive finite number.
    #[error("item {name:?} has invalid capacity {value}")]
    InvalidCapacity {
        /// Item name.
        name: String,
        /// The rejected value.
        value: f64,
    },

    /// A seeded quantity exceeds the item's capacity.
    #[error("item {name:?} starts at {accumulated}, above its capacity {capacity}")]
    OverCapacity {
        /// Item name.
        name: String,
        /// Seeded quantity.
        accumulated: f64,
        /// Capacity.
        capacity: f64,
    },
}

// ─── Catalog ─────────────────────────────────────────────────────────

/// The ordered items of one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryItems {
    /// Which category these items belong to.
    pub category: Category,
    /// Items in display order.
    pub items: Vec<TrackedItem>,
}

/// Validated item lists for every category, in [`Category::all()`] order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    categories: Vec<CategoryItems>,
}

impl Catalog {
    /// Build a catalog, validating names, seeded quantities and capacities.
    pub fn new(
        fruits: Vec<TrackedItem>,
        vegetables: Vec<TrackedItem>,
    ) -> Result<Self, CatalogError> {
        let categories = vec![
            CategoryItems {
                category: Category::Fruits,
                items: fruits,
            },
            CategoryItems {
                category: Category::Vegetables,
                items: vegetables,
            },
        ];
        for group in &categories {
            validate_group(group)?;
        }
        Ok(Self { categories })
    }

    /// Items of `category` in display order.
    pub fn items(&self, category: Category) -> &[TrackedItem] {
        &self.categories[category.index()].items
    }

    pub(crate) fn items_mut(&mut self, category: Category) -> &mut [TrackedItem] {
        &mut self.categories[category.index()].items
    }

    /// All category groups in display order.
    pub fn groups(&self) -> &[CategoryItems] {
        &self.categories
    }

    /// Open-ended fruits and vegetables, all starting at zero.
    pub fn seasonal() -> Self {
        let fruits = vec![
            TrackedItem::new("Mango", "🥭"),
            TrackedItem::new("Banana", "🍌"),
            TrackedItem::new("Papaya", "🍈"),
            TrackedItem::new("Pineapple", "🍍"),
            TrackedItem::new("Watermelon", "🍉"),
        ];
        let vegetables = vec![
            TrackedItem::new("Tomato", "🍅"),
            TrackedItem::new("Carrot", "🥕"),
            TrackedItem::new("Potato", "🥔"),
            TrackedItem::new("Leek", "🧅"),
            TrackedItem::new("Cabbage", "🥬"),
        ];
        Self {
            categories: vec![
                CategoryItems {
                    category: Category::Fruits,
                    items: fruits,
                },
                CategoryItems {
                    category: Category::Vegetables,
                    items: vegetables,
                },
            ],
        }
    }

    /// Capacity-variant vegetables from the public landing-page demo.
    pub fn live_demo() -> Result<Self, CatalogError> {
        Self::new(
            Vec::new(),
            vec![
                capped("Carrot", "🥕", 90.0, 100.0)?,
                capped("Tomato", "🍅", 75.0, 80.0)?,
                capped("Potato", "🥔", 120.0, 150.0)?,
                capped("Leek", "🧅", 45.0, 60.0)?,
                capped("Cabbage", "🥬", 85.0, 100.0)?,
            ],
        )
    }

    /// Capacity-variant vegetables with per-farm harvest targets.
    pub fn farm_targets() -> Result<Self, CatalogError> {
        Self::new(
            Vec::new(),
            vec![
                capped("Potatoes", "🥔", 120.0, 150.0)?,
                capped("Tomatoes", "🍅", 80.0, 100.0)?,
                capped("Carrots", "🥕", 45.0, 80.0)?,
                capped("Cabbage", "🥬", 30.0, 60.0)?,
                capped("Onions", "🧅", 55.0, 70.0)?,
            ],
        )
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seasonal()
    }
}

fn capped(name: &str, icon: &str, harvested: f64, total: f64) -> Result<TrackedItem, CatalogError> {
    let capacity = Quantity::new(total).map_err(|_| CatalogError::InvalidCapacity {
        name: name.to_string(),
        value: total,
    })?;
    Ok(TrackedItem::new(name, icon)
        .with_capacity(capacity)
        .with_accumulated(harvested))
}

fn validate_group(group: &CategoryItems) -> Result<(), CatalogError> {
    for (i, item) in group.items.iter().enumerate() {
        if item.name.trim().is_empty() {
            return Err(CatalogError::BlankName {
                category: group.category,
            });
        }
        let duplicate = group.items[..i]
            .iter()
            .any(|other| other.name.eq_ignore_ascii_case(&item.name));
        if duplicate {
            return Err(CatalogError::DuplicateItem {
                category: group.category,
                name: item.name.clone(),
            });
        }
        let acc = item.accumulated();
        if !acc.is_finite() || acc < 0.0 {
            return Err(CatalogError::InvalidQuantity {
                name: item.name.clone(),
                value: acc,
            });
        }
        if let Some(cap) = item.capacity() {
            if acc > cap.value() {
                return Err(CatalogError::OverCapacity {
                    name: item.name.clone(),
                    accumulated: acc,
                    capacity: cap.value(),
                });
            }
        }
    }
    Ok(())
}

// ─── Presets ─────────────────────────────────────────────────────────

/// Named catalog selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogPreset {
    /// [`Catalog::seasonal`].
    #[default]
    Seasonal,
    /// [`Catalog::live_demo`].
    LiveDemo,
    /// [`Catalog::farm_targets`].
    FarmTargets,
}

impl CatalogPreset {
    /// Build the catalog this preset names.
    pub fn build(&self) -> Result<Catalog, CatalogError> {
        match self {
            Self::Seasonal => Ok(Catalog::seasonal()),
            Self::LiveDemo => Catalog::live_demo(),
            Self::FarmTargets => Catalog::farm_targets(),
        }
    }

    /// Stable identifier, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Seasonal => "seasonal",
            Self::LiveDemo => "live_demo",
            Self::FarmTargets => "farm_targets",
        }
    }
}

impl std::fmt::Display for CatalogPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatalogPreset {
    type Err = BarnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "seasonal" => Ok(Self::Seasonal),
            "live_demo" => Ok(Self::LiveDemo),
            "farm_targets" => Ok(Self::FarmTargets),
            _ => Err(BarnError::UnknownIdentifier {
                kind: "catalog preset",
                value: s.to_string(),
            }),
        }
    }
}
