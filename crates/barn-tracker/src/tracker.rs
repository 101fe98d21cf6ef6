//! # Cultivation Tracker
//!
//! Owns category selection, item selection, the pending input text and the
//! per-item accumulated quantities. All transitions are synchronous methods
//! on [`CultivationTracker`]; a rejected transition returns an error and
//! leaves the state exactly as it was.
//!
//! ## Commit rules
//!
//! 1. No item selected: no-op, [`CommitError::NoSelection`], no notification.
//! 2. Pending text fails [`parse_amount`]: state unchanged, one error
//!    notification, [`CommitError::InvalidAmount`].
//! 3. The sum would overflow the item or its category total: same as 2,
//!    but [`CommitError::Overflow`].
//! 4. Otherwise: the item's quantity grows by the amount (saturating at its
//!    capacity, if any), the pending text is cleared and one info
//!    notification names the item and the amount.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use barn_core::{parse_amount, AmountError, Category, Quantity, QuantityUnit, Timestamp};

use crate::catalog::Catalog;
use crate::item::TrackedItem;
use crate::messages::TrackerMessages;
use crate::notify::NotificationSink;

// ─── Phase ───────────────────────────────────────────────────────────

/// Where the tracker is in its selection flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum TrackerPhase {
    /// Category picker is shown. Initial state.
    NoCategory,
    /// A category is open and one of its items is selected.
    CategorySelected {
        /// The open category.
        category: Category,
        /// Index of the selected item within the category.
        item: usize,
    },
}

impl TrackerPhase {
    /// The open category, if any.
    pub fn category(&self) -> Option<Category> {
        match self {
            Self::NoCategory => None,
            Self::CategorySelected { category, .. } => Some(*category),
        }
    }
}

impl std::fmt::Display for TrackerPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoCategory => f.write_str("NO_CATEGORY"),
            Self::CategorySelected { category, item } => {
                write!(f, "CATEGORY_SELECTED({category}, #{item})")
            }
        }
    }
}

// ─── Errors ──────────────────────────────────────────────────────────

/// Rejected selection transitions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackerError {
    /// The category has no items to select.
    #[error("category {category} has no items")]
    EmptyCategory {
        /// The empty category.
        category: Category,
    },

    /// An item was selected before any category was opened.
    #[error("no category selected")]
    NoCategorySelected,

    /// The named item is not part of the open category.
    #[error("{name:?} is not an item of {category}")]
    UnknownItem {
        /// The open category.
        category: Category,
        /// The requested name.
        name: String,
    },

    /// The item position is past the end of the open category.
    #[error("item #{index} out of range for {category} ({len} items)")]
    ItemIndexOutOfRange {
        /// The open category.
        category: Category,
        /// Requested position.
        index: usize,
        /// Number of items in the category.
        len: usize,
    },
}

/// Why a commit did not change any quantity.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommitError {
    /// No item is selected. Not shown to the user.
    #[error("no item selected")]
    NoSelection,

    /// The pending text is not a valid amount.
    #[error(transparent)]
    InvalidAmount(#[from] AmountError),

    /// Adding the amount would push a total past the largest representable
    /// quantity. Nothing changed.
    #[error("amount would overflow the total of {item}")]
    Overflow {
        /// The selected item.
        item: String,
    },
}

// ─── Receipt ─────────────────────────────────────────────────────────

/// Result of a successful commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitReceipt {
    /// Category of the updated item.
    pub category: Category,
    /// Name of the updated item.
    pub item: String,
    /// Amount the user entered.
    pub amount: Quantity,
    /// Amount actually added (smaller than `amount` only when clamped).
    pub applied: f64,
    /// Item quantity after the commit.
    pub accumulated: f64,
    /// When the commit happened.
    pub committed_at: Timestamp,
}

impl CommitReceipt {
    /// Whether capacity discarded part of the amount.
    pub fn clamped(&self) -> bool {
        self.applied < self.amount.value()
    }
}

// ─── State ───────────────────────────────────────────────────────────

/// The tracker's aggregate root.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackerState {
    phase: TrackerPhase,
    catalog: Catalog,
    pending_input: String,
}

impl TrackerState {
    /// Fresh state over `catalog`: nothing selected, no pending input.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            phase: TrackerPhase::NoCategory,
            catalog,
            pending_input: String::new(),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> TrackerPhase {
        self.phase
    }

    /// Items of every category.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Raw pending input text.
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }
}

// ─── Tracker ─────────────────────────────────────────────────────────

/// The cultivation tracker.
///
/// Holds one [`TrackerState`], the unit quantities are counted in, and the
/// message templates used for notifications.
#[derive(Debug, Clone)]
pub struct CultivationTracker {
    state: TrackerState,
    unit: QuantityUnit,
    messages: TrackerMessages,
}

impl CultivationTracker {
    /// A fresh tracker over `catalog` counting in `unit`.
    pub fn new(catalog: Catalog, unit: QuantityUnit) -> Self {
        Self {
            state: TrackerState::new(catalog),
            unit,
            messages: TrackerMessages::default(),
        }
    }

    /// Replace the notification templates.
    pub fn with_messages(mut self, messages: TrackerMessages) -> Self {
        self.messages = messages;
        self
    }

    // ── Transitions ──────────────────────────────────────────────────

    /// Open `category` and select its first item.
    ///
    /// Reselecting the open category resets the selection to the first item.
    pub fn select_category(&mut self, category: Category) -> Result<(), TrackerError> {
        if self.state.catalog.items(category).is_empty() {
            return Err(TrackerError::EmptyCategory { category });
        }
        let from = self.state.phase;
        self.state.phase = TrackerPhase::CategorySelected { category, item: 0 };
        tracing::debug!(%from, to = %self.state.phase, "category selected");
        Ok(())
    }

    /// Select the item called `name` in the open category.
    ///
    /// Names match case-insensitively. Items outside the open category are
    /// rejected. The pending input is left untouched.
    pub fn select_item(&mut self, name: &str) -> Result<(), TrackerError> {
        let category = self
            .state
            .phase
            .category()
            .ok_or(TrackerError::NoCategorySelected)?;
        let index = self
            .state
            .catalog
            .items(category)
            .iter()
            .position(|i| i.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| TrackerError::UnknownItem {
                category,
                name: name.to_string(),
            })?;
        self.set_selected(category, index);
        Ok(())
    }

    /// Select the item at `index` (display order) in the open category.
    pub fn select_item_at(&mut self, index: usize) -> Result<(), TrackerError> {
        let category = self
            .state
            .phase
            .category()
            .ok_or(TrackerError::NoCategorySelected)?;
        let len = self.state.catalog.items(category).len();
        if index >= len {
            return Err(TrackerError::ItemIndexOutOfRange {
                category,
                index,
                len,
            });
        }
        self.set_selected(category, index);
        Ok(())
    }

    /// Store raw input text. Validation happens on commit.
    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.state.pending_input = text.into();
    }

    /// Validate the pending input and add it to the selected item.
    pub fn commit_amount(
        &mut self,
        sink: &dyn NotificationSink,
    ) -> Result<CommitReceipt, CommitError> {
        let TrackerPhase::CategorySelected { category, item } = self.state.phase else {
            tracing::debug!("commit ignored: no item selected");
            return Err(CommitError::NoSelection);
        };

        let amount = match parse_amount(&self.state.pending_input) {
            Ok(amount) => amount,
            Err(e) => {
                tracing::warn!(input = %self.state.pending_input, "amount rejected: {e}");
                sink.notify(self.messages.invalid());
                return Err(CommitError::InvalidAmount(e));
            }
        };

        let total = self.aggregate_total(category);
        let Some(target) = self.state.catalog.items_mut(category).get_mut(item) else {
            tracing::debug!(%category, item, "commit ignored: selection out of range");
            return Err(CommitError::NoSelection);
        };
        // The category total must stay finite too, not just the item.
        let others = total - target.accumulated();
        let applied = target
            .accumulated_after(amount)
            .filter(|next| (others + next).is_finite())
            .and_then(|_| target.add(amount));
        let Some(applied) = applied else {
            tracing::warn!(
                %category,
                item = %target.name,
                amount = amount.value(),
                "amount rejected: total out of range"
            );
            sink.notify(self.messages.invalid());
            return Err(CommitError::Overflow {
                item: target.name.clone(),
            });
        };
        let receipt = CommitReceipt {
            category,
            item: target.name.clone(),
            amount,
            applied,
            accumulated: target.accumulated(),
            committed_at: Timestamp::now(),
        };
        self.state.pending_input.clear();

        tracing::info!(
            %category,
            item = %receipt.item,
            amount = receipt.amount.value(),
            applied = receipt.applied,
            accumulated = receipt.accumulated,
            unit = %self.unit,
            "amount committed"
        );
        if receipt.clamped() {
            tracing::debug!(item = %receipt.item, "amount clamped at capacity");
        }
        sink.notify(self.messages.updated(&receipt.item, amount, self.unit));
        Ok(receipt)
    }

    /// Close the open category. Quantities are kept.
    pub fn return_to_category_selection(&mut self) {
        let from = self.state.phase;
        self.state.phase = TrackerPhase::NoCategory;
        tracing::debug!(%from, to = %self.state.phase, "returned to category selection");
    }

    // ── Read model ───────────────────────────────────────────────────

    /// Sum of accumulated quantities over `category`.
    pub fn aggregate_total(&self, category: Category) -> f64 {
        self.state
            .catalog
            .items(category)
            .iter()
            .map(TrackedItem::accumulated)
            .sum()
    }

    /// The open category, if any.
    pub fn selected_category(&self) -> Option<Category> {
        self.state.phase.category()
    }

    /// The selected item, if a category is open.
    pub fn selected_item(&self) -> Option<&TrackedItem> {
        match self.state.phase {
            TrackerPhase::NoCategory => None,
            TrackerPhase::CategorySelected { category, item } => {
                self.state.catalog.items(category).get(item)
            }
        }
    }

    /// Items of `category` in display order.
    pub fn items(&self, category: Category) -> &[TrackedItem] {
        self.state.catalog.items(category)
    }

    /// Look up an item by name within `category`.
    pub fn item(&self, category: Category, name: &str) -> Option<&TrackedItem> {
        self.items(category)
            .iter()
            .find(|i| i.name.eq_ignore_ascii_case(name))
    }

    /// Raw pending input text.
    pub fn pending_input(&self) -> &str {
        self.state.pending_input()
    }

    /// Unit quantities are counted in.
    pub fn unit(&self) -> QuantityUnit {
        self.unit
    }

    /// Current phase.
    pub fn phase(&self) -> TrackerPhase {
        self.state.phase()
    }

    /// The underlying state.
    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    /// Serializable snapshot for rendering.
    pub fn view(&self) -> TrackerView {
        let selected = match self.state.phase {
            TrackerPhase::NoCategory => None,
            TrackerPhase::CategorySelected { category, item } => Some((category, item)),
        };
        let categories = self
            .state
            .catalog
            .groups()
            .iter()
            .map(|group| CategoryView {
                category: group.category,
                total: self.aggregate_total(group.category),
                items: group
                    .items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| ItemView {
                        name: item.name.clone(),
                        icon: item.icon.clone(),
                        accumulated: item.accumulated(),
                        capacity: item.capacity().map(|c| c.value()),
                        progress_percent: item.progress_percent(),
                        selected: selected == Some((group.category, i)),
                    })
                    .collect(),
            })
            .collect();
        TrackerView {
            phase: self.state.phase,
            unit: self.unit,
            pending_input: self.state.pending_input.clone(),
            categories,
        }
    }

    fn set_selected(&mut self, category: Category, index: usize) {
        let from = self.state.phase;
        self.state.phase = TrackerPhase::CategorySelected {
            category,
            item: index,
        };
        tracing::debug!(%from, to = %self.state.phase, "item selected");
    }
}

// ─── View ────────────────────────────────────────────────────────────

/// Snapshot of the tracker for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackerView {
    /// Current phase.
    pub phase: TrackerPhase,
    /// Unit quantities are counted in.
    pub unit: QuantityUnit,
    /// Raw pending input.
    pub pending_input: String,
    /// Every category in display order.
    pub categories: Vec<CategoryView>,
}

/// One category in a [`TrackerView`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryView {
    /// Which category.
    pub category: Category,
    /// Aggregate total.
    pub total: f64,
    /// Items in display order.
    pub items: Vec<ItemView>,
}

/// One item in a [`CategoryView`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemView {
    /// Item name.
    pub name: String,
    /// Display glyph.
    pub icon: String,
    /// Accumulated quantity.
    pub accumulated: f64,
    /// Capacity, if any.
    pub capacity: Option<f64>,
    /// Rounded percentage of capacity, if any.
    pub progress_percent: Option<u32>,
    /// Whether this is the selected item.
    pub selected: bool,
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{MemorySink, Severity};
    use proptest::prelude::*;

    fn seasonal() -> CultivationTracker {
        CultivationTracker::new(Catalog::seasonal(), QuantityUnit::Tons)
    }

    fn commit(tracker: &mut CultivationTracker, sink: &MemorySink, text: &str) -> Result<CommitReceipt, CommitError> {
        tracker.set_pending_input(text);
        tracker.commit_amount(sink)
    }

    // ── Selection ────────────────────────────────────────────────────

    #[test]
    fn test_fresh_tracker_has_no_selection() {
        let tracker = seasonal();
        assert_eq!(tracker.phase(), TrackerPhase::NoCategory);
        assert!(tracker.selected_category().is_none());
        assert!(tracker.selected_item().is_none());
        assert_eq!(tracker.pending_input(), "");
    }

    #[test]
    fn test_select_category_defaults_to_first_item() {
        let mut tracker = seasonal();
        tracker.select_category(Category::Fruits).unwrap();
        let item = tracker.selected_item().unwrap();
        assert_eq!(item.name, "Mango");
        assert_eq!(item.accumulated(), 0.0);
        assert_eq!(tracker.selected_category(), Some(Category::Fruits));
    }

    #[test]
    fn test_reselecting_category_is_idempotent() {
        let mut tracker = seasonal();
        tracker.select_category(Category::Vegetables).unwrap();
        let first = tracker.phase();
        tracker.select_category(Category::Vegetables).unwrap();
        assert_eq!(tracker.phase(), first);
    }

    #[test]
    fn test_select_item_by_name() {
        let mut tracker = seasonal();
        tracker.select_category(Category::Vegetables).unwrap();
        tracker.select_item("carrot").unwrap();
        assert_eq!(tracker.selected_item().unwrap().name, "Carrot");
    }

    #[test]
    fn test_select_item_keeps_pending_input() {
        let mut tracker = seasonal();
        tracker.select_category(Category::Vegetables).unwrap();
        tracker.set_pending_input("7");
        tracker.select_item("Leek").unwrap();
        assert_eq!(tracker.pending_input(), "7");
    }

    #[test]
    fn test_select_item_outside_category_is_rejected() {
        let mut tracker = seasonal();
        tracker.select_category(Category::Vegetables).unwrap();
        tracker.select_item("Leek").unwrap();
        let before = tracker.phase();
        let err = tracker.select_item("Mango").unwrap_err();
        assert!(matches!(err, TrackerError::UnknownItem { .. }));
        assert_eq!(tracker.phase(), before);
    }

    #[test]
    fn test_select_item_without_category_is_rejected() {
        let mut tracker = seasonal();
        assert_eq!(
            tracker.select_item("Mango").unwrap_err(),
            TrackerError::NoCategorySelected
        );
    }

    #[test]
    fn test_select_item_at_bounds() {
        let mut tracker = seasonal();
        tracker.select_category(Category::Fruits).unwrap();
        tracker.select_item_at(4).unwrap();
        assert_eq!(tracker.selected_item().unwrap().name, "Watermelon");
        assert!(matches!(
            tracker.select_item_at(5),
            Err(TrackerError::ItemIndexOutOfRange { len: 5, .. })
        ));
    }

    #[test]
    fn test_empty_category_is_rejected() {
        let mut tracker = CultivationTracker::new(Catalog::live_demo().unwrap(), QuantityUnit::Tons);
        assert_eq!(
            tracker.select_category(Category::Fruits).unwrap_err(),
            TrackerError::EmptyCategory {
                category: Category::Fruits
            }
        );
        assert_eq!(tracker.phase(), TrackerPhase::NoCategory);
    }

    // ── Commit ───────────────────────────────────────────────────────

    #[test]
    fn test_tomato_scenario() {
        let sink = MemorySink::new();
        let mut tracker = seasonal();
        tracker.select_category(Category::Vegetables).unwrap();
        tracker.select_item("Tomato").unwrap();
        let receipt = commit(&mut tracker, &sink, "12.5").unwrap();

        assert_eq!(receipt.item, "Tomato");
        assert_eq!(tracker.item(Category::Vegetables, "Tomato").unwrap().accumulated(), 12.5);
        assert_eq!(tracker.aggregate_total(Category::Vegetables), 12.5);
        assert_eq!(tracker.pending_input(), "");

        let notes = sink.snapshot();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].severity, Severity::Info);
        assert!(notes[0].description.contains("Tomato"));
        assert!(notes[0].description.contains("12.5"));
    }

    #[test]
    fn test_invalid_inputs_change_nothing_and_notify_error() {
        for input in ["0", "-5", "", "abc"] {
            let sink = MemorySink::new();
            let mut tracker = seasonal();
            tracker.select_category(Category::Fruits).unwrap();
            commit(&mut tracker, &sink, "3").unwrap();
            sink.drain();
            let before = tracker.state().clone();

            tracker.set_pending_input(input);
            let err = tracker.commit_amount(&sink).unwrap_err();
            assert!(matches!(err, CommitError::InvalidAmount(_)), "input {input:?}");
            assert_eq!(tracker.items(Category::Fruits), before.catalog().items(Category::Fruits));
            assert_eq!(tracker.pending_input(), input);

            let notes = sink.snapshot();
            assert_eq!(notes.len(), 1, "input {input:?}");
            assert_eq!(notes[0].severity, Severity::Error);
        }
    }

    #[test]
    fn test_overflowing_commit_is_rejected() {
        let sink = MemorySink::new();
        let mut tracker = seasonal();
        tracker.select_category(Category::Fruits).unwrap();
        commit(&mut tracker, &sink, "1e308").unwrap();
        sink.drain();

        let err = commit(&mut tracker, &sink, "1e308").unwrap_err();
        assert_eq!(err, CommitError::Overflow { item: "Mango".into() });
        assert_eq!(tracker.selected_item().unwrap().accumulated(), 1e308);
        assert!(tracker.aggregate_total(Category::Fruits).is_finite());
        assert_eq!(tracker.pending_input(), "1e308");

        let notes = sink.snapshot();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].severity, Severity::Error);

        let json = serde_json::to_value(tracker.view()).unwrap();
        assert_eq!(json["categories"][0]["total"].as_f64(), Some(1e308));
    }

    #[test]
    fn test_category_total_cannot_overflow() {
        let sink = MemorySink::new();
        let mut tracker = seasonal();
        tracker.select_category(Category::Fruits).unwrap();
        commit(&mut tracker, &sink, "1e308").unwrap();
        tracker.select_item_at(1).unwrap();

        assert!(matches!(
            commit(&mut tracker, &sink, "1e308"),
            Err(CommitError::Overflow { .. })
        ));
        assert_eq!(tracker.selected_item().unwrap().accumulated(), 0.0);
        assert_eq!(tracker.aggregate_total(Category::Fruits), 1e308);
    }

    #[test]
    fn test_commit_without_selection_is_silent_noop() {
        let sink = MemorySink::new();
        let mut tracker = seasonal();
        tracker.set_pending_input("5");
        assert_eq!(tracker.commit_amount(&sink).unwrap_err(), CommitError::NoSelection);
        assert!(sink.is_empty());
        assert_eq!(tracker.pending_input(), "5");
        assert_eq!(tracker.aggregate_total(Category::Fruits), 0.0);
    }

    #[test]
    fn test_capacity_commit_clamps() {
        let sink = MemorySink::new();
        let catalog = Catalog::new(
            Vec::new(),
            vec![TrackedItem::new("Potato", "🥔")
                .with_capacity(Quantity::new(100.0).unwrap())
                .with_accumulated(90.0)],
        )
        .unwrap();
        let mut tracker = CultivationTracker::new(catalog, QuantityUnit::Tons);
        tracker.select_category(Category::Vegetables).unwrap();
        let receipt = commit(&mut tracker, &sink, "50").unwrap();

        assert_eq!(receipt.accumulated, 100.0);
        assert_eq!(receipt.applied, 10.0);
        assert!(receipt.clamped());
        assert_eq!(tracker.selected_item().unwrap().accumulated(), 100.0);
        assert_eq!(sink.snapshot()[0].severity, Severity::Info);
    }

    #[test]
    fn test_notification_uses_configured_unit() {
        let sink = MemorySink::new();
        let mut tracker = CultivationTracker::new(Catalog::seasonal(), QuantityUnit::Acres);
        tracker.select_category(Category::Fruits).unwrap();
        commit(&mut tracker, &sink, "2").unwrap();
        assert_eq!(sink.snapshot()[0].description, "Added 2 acres to Mango");
    }

    // ── Return ───────────────────────────────────────────────────────

    #[test]
    fn test_return_preserves_quantities() {
        let sink = MemorySink::new();
        let mut tracker = seasonal();
        tracker.select_category(Category::Vegetables).unwrap();
        commit(&mut tracker, &sink, "4").unwrap();
        tracker.select_category(Category::Fruits).unwrap();
        commit(&mut tracker, &sink, "1.5").unwrap();
        let before = tracker.state().catalog().clone();

        tracker.return_to_category_selection();

        assert_eq!(tracker.phase(), TrackerPhase::NoCategory);
        assert!(tracker.selected_item().is_none());
        assert_eq!(tracker.state().catalog(), &before);
    }

    // ── View ─────────────────────────────────────────────────────────

    #[test]
    fn test_view_marks_selection_and_totals() {
        let sink = MemorySink::new();
        let mut tracker = seasonal();
        tracker.select_category(Category::Vegetables).unwrap();
        tracker.select_item("Potato").unwrap();
        commit(&mut tracker, &sink, "8").unwrap();

        let view = tracker.view();
        let veg = &view.categories[Category::Vegetables.index()];
        assert_eq!(veg.total, 8.0);
        let selected: Vec<_> = veg.items.iter().filter(|i| i.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "Potato");
        assert!(view.categories[Category::Fruits.index()].items.iter().all(|i| !i.selected));
    }

    #[test]
    fn test_view_serializes_phase_tag() {
        let tracker = seasonal();
        let json = serde_json::to_value(tracker.view()).unwrap();
        assert_eq!(json["phase"]["phase"], "no_category");
        assert_eq!(json["unit"], "tons");
    }

    // ── Properties ───────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_accumulated_equals_sum_of_commits(amounts in prop::collection::vec(0.01f64..1000.0, 1..20)) {
            let sink = MemorySink::new();
            let mut tracker = seasonal();
            tracker.select_category(Category::Fruits).unwrap();
            let mut expected = 0.0;
            for a in &amounts {
                commit(&mut tracker, &sink, &a.to_string()).unwrap();
                expected += a;
            }
            prop_assert_eq!(tracker.selected_item().unwrap().accumulated(), expected);
        }

        #[test]
        fn prop_capacity_saturates(seed in 0.0f64..100.0, amounts in prop::collection::vec(0.01f64..80.0, 1..10)) {
            let sink = MemorySink::new();
            let catalog = Catalog::new(
                vec![TrackedItem::new("Mango", "🥭")
                    .with_capacity(Quantity::new(100.0).unwrap())
                    .with_accumulated(seed)],
                Vec::new(),
            ).unwrap();
            let mut tracker = CultivationTracker::new(catalog, QuantityUnit::Tons);
            tracker.select_category(Category::Fruits).unwrap();
            let mut expected = seed;
            for a in &amounts {
                commit(&mut tracker, &sink, &a.to_string()).unwrap();
                expected = (expected + a).min(100.0);
            }
            prop_assert_eq!(tracker.selected_item().unwrap().accumulated(), expected);
        }

        #[test]
        fn prop_aggregate_matches_item_sum(ops in prop::collection::vec((0usize..5, 0.01f64..50.0), 0..30)) {
            let sink = MemorySink::new();
            let mut tracker = seasonal();
            tracker.select_category(Category::Vegetables).unwrap();
            for (index, amount) in ops {
                tracker.select_item_at(index).unwrap();
                commit(&mut tracker, &sink, &amount.to_string()).unwrap();
                let sum: f64 = tracker.items(Category::Vegetables).iter().map(|i| i.accumulated()).sum();
                prop_assert_eq!(tracker.aggregate_total(Category::Vegetables), sum);
            }
            prop_assert_eq!(tracker.aggregate_total(Category::Fruits), 0.0);
        }
    }
}
