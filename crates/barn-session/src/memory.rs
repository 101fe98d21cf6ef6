//! In-memory [`ProfileService`] for offline runs and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use barn_core::{SessionToken, UserId};

use crate::error::SessionError;
use crate::types::{Profile, Session, SessionUser};
use crate::ProfileService;

#[derive(Debug, Default)]
struct Inner {
    sessions: HashMap<String, SessionUser>,
    profiles: HashMap<UserId, Profile>,
    fail_profiles: bool,
    sign_outs: usize,
}

/// Sessions and profiles held in process memory.
#[derive(Debug, Default)]
pub struct MemoryProfileService {
    inner: Mutex<Inner>,
}

impl MemoryProfileService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a session for `token` belonging to a new user with `profile`.
    /// Returns the user id.
    pub fn with_user(self, token: &SessionToken, profile: Profile) -> (Self, UserId) {
        let id = profile.id.unwrap_or_default();
        {
            let mut inner = self.inner.lock();
            inner.sessions.insert(
                token.expose().to_string(),
                SessionUser { id, email: None },
            );
            inner.profiles.insert(id, Profile { id: Some(id), ..profile });
        }
        (self, id)
    }

    /// Register a session whose user has no profile row.
    pub fn with_session_only(self, token: &SessionToken) -> Self {
        self.inner.lock().sessions.insert(
            token.expose().to_string(),
            SessionUser {
                id: UserId::new(),
                email: None,
            },
        );
        self
    }

    /// Make every profile fetch fail with a 500.
    pub fn failing_profiles(self) -> Self {
        self.inner.lock().fail_profiles = true;
        self
    }

    /// Number of successful sign-outs.
    pub fn sign_outs(&self) -> usize {
        self.inner.lock().sign_outs
    }
}

#[async_trait]
impl ProfileService for MemoryProfileService {
    async fn current_session(&self, token: &SessionToken) -> Result<Option<Session>, SessionError> {
        Ok(self
            .inner
            .lock()
            .sessions
            .get(token.expose())
            .map(|user| Session {
                token: token.clone(),
                user: user.clone(),
            }))
    }

    async fn fetch_profile(&self, session: &Session) -> Result<Option<Profile>, SessionError> {
        let inner = self.inner.lock();
        if inner.fail_profiles {
            return Err(SessionError::ApiError {
                endpoint: "memory profiles".into(),
                status: 500,
                body: "profile store unavailable".into(),
            });
        }
        Ok(inner.profiles.get(&session.user_id()).cloned())
    }

    async fn sign_out(&self, token: &SessionToken) -> Result<(), SessionError> {
        let mut inner = self.inner.lock();
        inner.sessions.remove(token.expose());
        inner.sign_outs += 1;
        Ok(())
    }
}
