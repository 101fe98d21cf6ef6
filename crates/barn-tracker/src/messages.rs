//! # Tracker Messages
//!
//! Notification texts the tracker emits. Templates use `{amount}`, `{unit}`
//! and `{item}` placeholders so a localization layer can supply translated
//! strings without the tracker knowing about languages.

use serde::{Deserialize, Serialize};

use barn_core::{Quantity, QuantityUnit};

use crate::notify::Notification;

/// Display labels for each unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitLabels {
    /// Label for [`QuantityUnit::Tons`].
    pub tons: String,
    /// Label for [`QuantityUnit::Acres`].
    pub acres: String,
}

impl UnitLabels {
    /// Label for `unit`.
    pub fn label(&self, unit: QuantityUnit) -> &str {
        match unit {
            QuantityUnit::Tons => &self.tons,
            QuantityUnit::Acres => &self.acres,
        }
    }
}

impl Default for UnitLabels {
    fn default() -> Self {
        Self {
            tons: QuantityUnit::Tons.as_str().to_string(),
            acres: QuantityUnit::Acres.as_str().to_string(),
        }
    }
}

/// Templates for the tracker's notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerMessages {
    /// Title of the success notification.
    pub updated_title: String,
    /// Body of the success notification.
    pub updated_description: String,
    /// Title of the rejected-amount notification.
    pub invalid_title: String,
    /// Body of the rejected-amount notification.
    pub invalid_description: String,
    /// Unit display labels.
    pub units: UnitLabels,
}

impl Default for TrackerMessages {
    fn default() -> Self {
        Self {
            updated_title: "Harvest Updated!".to_string(),
            updated_description: "Added {amount} {unit} to {item}".to_string(),
            invalid_title: "Invalid amount".to_string(),
            invalid_description: "Please enter a number greater than zero.".to_string(),
            units: UnitLabels::default(),
        }
    }
}

impl TrackerMessages {
    /// Success notification for a commit of `amount` to `item`.
    pub fn updated(&self, item: &str, amount: Quantity, unit: QuantityUnit) -> Notification {
        Notification::info(
            fill(&self.updated_title, item, amount, self.units.label(unit)),
            fill(&self.updated_description, item, amount, self.units.label(unit)),
        )
    }

    /// Error notification for a rejected amount.
    pub fn invalid(&self) -> Notification {
        Notification::error(self.invalid_title.clone(), self.invalid_description.clone())
    }
}

fn fill(template: &str, item: &str, amount: Quantity, unit: &str) -> String {
    template
        .replace("{amount}", &amount.to_string())
        .replace("{unit}", unit)
        .replace("{item}", item)
}
