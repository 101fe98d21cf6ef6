//! # Tracked Items
//!
//! A `TrackedItem` is one crop kind. Its `accumulated` quantity only ever
//! grows. Items with a `capacity` saturate at it; the excess of a commit
//! that would overshoot is discarded.

use serde::{Deserialize, Serialize};

use barn_core::Quantity;

/// One crop kind with a running accumulated quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedItem {
    /// Label, unique within its category.
    pub name: String,
    /// Display glyph. Not semantically load-bearing.
    pub icon: String,
    /// Running total in the tracker's unit. Always ≥ 0.
    accumulated: f64,
    /// Fixed target (capacity variant). `None` means open-ended.
    capacity: Option<Quantity>,
}

impl TrackedItem {
    /// An open-ended item starting at zero.
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            accumulated: 0.0,
            capacity: None,
        }
    }

    /// Set a fixed capacity.
    pub fn with_capacity(mut self, capacity: Quantity) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Seed a starting quantity. Validated when the item joins a catalog.
    pub fn with_accumulated(mut self, accumulated: f64) -> Self {
        self.accumulated = accumulated;
        self
    }

    /// Current accumulated quantity.
    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }

    /// Capacity, if this item has one.
    pub fn capacity(&self) -> Option<Quantity> {
        self.capacity
    }

    /// Rounded percentage of capacity reached; `None` for open-ended items.
    pub fn progress_percent(&self) -> Option<u32> {
        self.capacity
            .map(|cap| (self.accumulated / cap.value() * 100.0).round() as u32)
    }

    /// Quantity after adding `amount`, saturating at capacity. `None` when
    /// the result is not a finite number.
    pub(crate) fn accumulated_after(&self, amount: Quantity) -> Option<f64> {
        let raw = self.accumulated + amount.value();
        let next = match self.capacity {
            Some(cap) => raw.min(cap.value()),
            None => raw,
        };
        next.is_finite().then_some(next)
    }

    /// Add `amount`, saturating at capacity. Returns the amount actually
    /// applied, which is less than `amount` only when capacity clamped it.
    /// Returns `None` and leaves the item unchanged on overflow.
    pub(crate) fn add(&mut self, amount: Quantity) -> Option<f64> {
        let next = self.accumulated_after(amount)?;
        let applied = next - self.accumulated;
        self.accumulated = next;
        Some(applied)
    }
}
