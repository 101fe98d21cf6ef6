//! # barn-dashboard — Dashboard Composition
//!
//! Wires the collaborators of the signed-in dashboard around one
//! [`CultivationTracker`](barn_tracker::CultivationTracker):
//!
//! - **Session** (`barn-session`): who is signed in and their profile.
//! - **Locale** (`barn-locale`): header texts and tracker notification
//!   templates in the configured language.
//! - **Notifications** (`barn-tracker::notify`): toasts for commits and
//!   backend failures.
//!
//! ## Modules
//!
//! - **Dashboard** (`dashboard.rs`): entry flow, event handlers, logout.
//! - **Ack** (`ack.rs`): the transient "updated" acknowledgment.
//! - **Messages** (`messages.rs`): localized tracker texts.
//! - **Config** (`config.rs`): YAML and environment settings.
//! - **Route** (`route.rs`): navigation targets.

pub mod ack;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod messages;
pub mod route;

pub use ack::AckIndicator;
pub use config::{DashboardConfig, DEFAULT_ACK_DELAY_MS};
pub use dashboard::{enter_dashboard, Collaborators, Dashboard, EntryOutcome};
pub use error::DashboardError;
pub use messages::{category_label, tracker_messages, unit_label};
pub use route::Route;
