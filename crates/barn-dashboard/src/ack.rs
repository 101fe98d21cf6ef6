//! The transient "updated" acknowledgment shown after a commit.
//!
//! Each trigger makes the acknowledgment visible and schedules it to clear
//! after a fixed delay. A newer trigger cancels the pending clear, so an
//! older timer never hides a newer acknowledgment early.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

#[derive(Debug, Default)]
struct AckState {
    visible: bool,
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

/// Visibility flag with a cancellable clear timer.
#[derive(Debug, Clone)]
pub struct AckIndicator {
    delay: Duration,
    state: Arc<Mutex<AckState>>,
}

impl AckIndicator {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: Arc::new(Mutex::new(AckState::default())),
        }
    }

    /// Show the acknowledgment and (re)start the clear timer.
    ///
    /// Outside a tokio runtime the acknowledgment is shown but never cleared
    /// automatically; [`dismiss`](Self::dismiss) still works.
    pub fn trigger(&self) {
        let mut state = self.state.lock();
        state.generation += 1;
        state.visible = true;
        if let Some(previous) = state.pending.take() {
            previous.abort();
        }

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!("no tokio runtime; acknowledgment will not clear by itself");
            return;
        };
        let generation = state.generation;
        let shared = Arc::clone(&self.state);
        let delay = self.delay;
        state.pending = Some(runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let mut state = shared.lock();
            // An aborted task can still get here if it woke before the abort.
            if state.generation == generation {
                state.visible = false;
                state.pending = None;
            }
        }));
    }

    /// Hide the acknowledgment now and cancel any pending clear.
    pub fn dismiss(&self) {
        let mut state = self.state.lock();
        state.generation += 1;
        state.visible = false;
        if let Some(pending) = state.pending.take() {
            pending.abort();
        }
    }

    /// Whether the acknowledgment is showing.
    pub fn is_visible(&self) -> bool {
        self.state.lock().visible
    }
}
