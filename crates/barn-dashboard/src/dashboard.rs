//! Dashboard entry flow and event handlers.
//!
//! ## Entry
//!
//! 1. No token, or the auth service does not recognise it: redirect to
//!    [`Route::Auth`].
//! 2. Session found: fetch the profile.
//! 3. The session lookup fails, the profile fetch fails, or there is no
//!    profile row: one "Failed to load profile data" notification and the
//!    dashboard opens with a blank profile. The tracker is usable either way.
//!
//! ## Exit
//!
//! [`Dashboard::logout`] signs out and always lands on [`Route::Home`].

use std::sync::Arc;

use barn_core::{Category, SessionToken};
use barn_locale::{Language, Translations};
use barn_session::{Profile, ProfileService, Session};
use barn_tracker::{
    CommitError, CommitReceipt, CultivationTracker, NotificationSink, TrackerError, TrackerView,
};

use crate::ack::AckIndicator;
use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::messages::{self, error_notification};
use crate::route::Route;

/// What the dashboard talks to.
#[derive(Clone)]
pub struct Collaborators {
    pub service: Arc<dyn ProfileService>,
    pub sink: Arc<dyn NotificationSink>,
    pub translations: Arc<Translations>,
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}

/// Result of entering the dashboard.
#[derive(Debug)]
pub enum EntryOutcome {
    /// Not signed in; navigate elsewhere.
    Redirect(Route),
    /// The dashboard is ready.
    Ready(Box<Dashboard>),
}

/// Run the entry flow for `token`.
///
/// Backend failures never make this fail; only a bad catalog preset does.
pub async fn enter_dashboard(
    collaborators: Collaborators,
    config: &DashboardConfig,
    token: Option<SessionToken>,
) -> Result<EntryOutcome, DashboardError> {
    let language = config.language;

    let Some(token) = token else {
        tracing::debug!("no session token; redirecting");
        return Ok(EntryOutcome::Redirect(Route::Auth));
    };

    let session = match collaborators.service.current_session(&token).await {
        Ok(Some(session)) => Some(session),
        Ok(None) => {
            tracing::debug!("session not recognised; redirecting");
            return Ok(EntryOutcome::Redirect(Route::Auth));
        }
        Err(e) => {
            tracing::warn!("session lookup failed: {e}");
            None
        }
    };

    let profile = match &session {
        Some(session) => match collaborators.service.fetch_profile(session).await {
            Ok(Some(profile)) => Some(profile),
            Ok(None) => {
                tracing::warn!(user = %session.user_id(), "no profile row");
                None
            }
            Err(e) => {
                tracing::warn!(user = %session.user_id(), "profile fetch failed: {e}");
                None
            }
        },
        None => None,
    };
    let profile = profile.unwrap_or_else(|| {
        collaborators.sink.notify(error_notification(
            &collaborators.translations,
            language,
            "errors.profileLoad",
        ));
        Profile::default()
    });

    let tracker = CultivationTracker::new(config.catalog.build()?, config.unit).with_messages(
        messages::tracker_messages(&collaborators.translations, language),
    );

    tracing::info!(
        user = ?session.as_ref().map(Session::user_id),
        %language,
        catalog = %config.catalog,
        unit = %config.unit,
        "dashboard ready"
    );

    Ok(EntryOutcome::Ready(Box::new(Dashboard {
        token,
        session,
        profile,
        tracker,
        ack: AckIndicator::new(config.ack_delay()),
        language,
        collaborators,
    })))
}

/// The signed-in dashboard: profile header plus the tracker.
#[derive(Debug)]
pub struct Dashboard {
    token: SessionToken,
    /// `None` when the session lookup failed but the token was kept.
    session: Option<Session>,
    profile: Profile,
    tracker: CultivationTracker,
    ack: AckIndicator,
    language: Language,
    collaborators: Collaborators,
}

impl Dashboard {
    // ── Header ───────────────────────────────────────────────────────

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// `"Welcome back, {name}!"` in the dashboard's language.
    pub fn greeting(&self) -> String {
        self.format("dashboard.welcomeBack", &[("name", self.profile.name.as_str())])
    }

    /// `"{farm} • {location}"`, the farm name alone when the location is
    /// unknown, or `None` without a farm name.
    pub fn farm_line(&self) -> Option<String> {
        let farm = self.profile.farm_name.as_deref().filter(|s| !s.is_empty())?;
        match self.profile.farm_location.as_deref().filter(|s| !s.is_empty()) {
            Some(location) => Some(self.format(
                "dashboard.farmLine",
                &[("farm", farm), ("location", location)],
            )),
            None => Some(farm.to_string()),
        }
    }

    /// Text for `key` in the dashboard's language.
    pub fn text(&self, key: &str) -> String {
        self.collaborators.translations.text(self.language, key)
    }

    /// Display name of `category` in the dashboard's language.
    pub fn category_label(&self, category: Category) -> String {
        messages::category_label(&self.collaborators.translations, self.language, category)
    }

    /// Display name of the tracker's unit.
    pub fn unit_label(&self) -> String {
        messages::unit_label(
            &self.collaborators.translations,
            self.language,
            self.tracker.unit(),
        )
    }

    fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        self.collaborators
            .translations
            .format(self.language, key, args)
            .unwrap_or_else(|e| {
                tracing::warn!("{e}");
                key.to_string()
            })
    }

    // ── Tracker ──────────────────────────────────────────────────────

    pub fn tracker(&self) -> &CultivationTracker {
        &self.tracker
    }

    pub fn view(&self) -> TrackerView {
        self.tracker.view()
    }

    /// Whether the "updated" acknowledgment is showing.
    pub fn ack_visible(&self) -> bool {
        self.ack.is_visible()
    }

    pub fn on_select_category(&mut self, category: Category) -> Result<(), TrackerError> {
        self.tracker.select_category(category)
    }

    pub fn on_select_item(&mut self, name: &str) -> Result<(), TrackerError> {
        self.tracker.select_item(name)
    }

    pub fn on_select_item_at(&mut self, index: usize) -> Result<(), TrackerError> {
        self.tracker.select_item_at(index)
    }

    pub fn on_input(&mut self, text: impl Into<String>) {
        self.tracker.set_pending_input(text);
    }

    /// Commit the pending input. A success shows the acknowledgment.
    pub fn on_commit(&mut self) -> Result<CommitReceipt, CommitError> {
        let receipt = self.tracker.commit_amount(self.collaborators.sink.as_ref())?;
        self.ack.trigger();
        Ok(receipt)
    }

    pub fn on_back(&mut self) {
        self.tracker.return_to_category_selection();
    }

    // ── Exit ─────────────────────────────────────────────────────────

    /// Sign out and leave the dashboard.
    ///
    /// A failed sign-out is reported as a notification; navigation to
    /// [`Route::Home`] happens regardless.
    pub async fn logout(self) -> Route {
        self.ack.dismiss();
        let user = self.session.as_ref().map(Session::user_id);
        match self.collaborators.service.sign_out(&self.token).await {
            Ok(()) => tracing::info!(?user, "signed out"),
            Err(e) => {
                tracing::warn!(?user, "sign-out failed: {e}");
                self.collaborators.sink.notify(error_notification(
                    &self.collaborators.translations,
                    self.language,
                    "errors.logout",
                ));
            }
        }
        Route::Home
    }
}
