//! # barn-tracker — Cultivation Tracker State Machine
//!
//! The harvest/cultivation tracker behind the Barn Buddy dashboard. One
//! explicit state struct, mutated only through transition methods, driven
//! synchronously by UI events.
//!
//! ## States
//!
//! ```text
//!                select_category(c)              select_item(i')
//! NoCategory ─────────────────────▶ CategorySelected(c, i) ──────┐
//!     ▲                                   │   ▲                  │
//!     │    return_to_category_selection   │   └──────────────────┘
//!     └───────────────────────────────────┘
//! ```
//!
//! There is no failure state. Rejected operations leave the state untouched.
//!
//! ## Modules
//!
//! - **Item** (`item.rs`): a tracked crop kind with its running quantity and
//!   optional capacity.
//! - **Catalog** (`catalog.rs`): the fixed, ordered item lists per category
//!   and the built-in presets.
//! - **Notify** (`notify.rs`): notification values and the sink trait.
//! - **Messages** (`messages.rs`): templates for the tracker's notifications.
//! - **Tracker** (`tracker.rs`): the state machine itself.

pub mod catalog;
pub mod item;
pub mod messages;
pub mod notify;
pub mod tracker;

pub use catalog::{Catalog, CatalogError, CatalogPreset, CategoryItems};
pub use item::TrackedItem;
pub use messages::{TrackerMessages, UnitLabels};
pub use notify::{MemorySink, Notification, NotificationSink, Severity, TracingSink};
pub use tracker::{
    CategoryView, CommitError, CommitReceipt, CultivationTracker, ItemView, TrackerError,
    TrackerPhase, TrackerState, TrackerView,
};
