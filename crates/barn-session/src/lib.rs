//! # barn-session — Auth and Profile Client
//!
//! Typed access to the hosted backend the dashboard signs in against:
//! - **Auth** (`/auth/v1`): resolve a bearer token to its user, sign out.
//! - **Profiles** (`/rest/v1/profiles`): the signed-in user's profile row.
//!
//! The dashboard talks to the backend only through [`ProfileService`], so it
//! can be driven by [`memory::MemoryProfileService`] offline and in tests.
//!
//! ## Headers
//!
//! Every request carries the project key as `apikey`. Requests made on
//! behalf of a user also carry `Authorization: Bearer {session token}`.

pub mod auth;
pub mod config;
pub mod error;
pub mod memory;
pub mod profiles;
pub mod retry;
pub mod types;

pub use config::SessionConfig;
pub use error::SessionError;
pub use memory::MemoryProfileService;
pub use retry::RetryPolicy;
pub use types::{Profile, Session, SessionUser};

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};

use barn_core::SessionToken;

/// Session lookup, profile fetch and sign-out, as the dashboard needs them.
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// The session for `token`, or `None` if there is none.
    async fn current_session(&self, token: &SessionToken) -> Result<Option<Session>, SessionError>;

    /// The profile of the session's user, or `None` if no row exists.
    async fn fetch_profile(&self, session: &Session) -> Result<Option<Profile>, SessionError>;

    /// Invalidate the session behind `token`.
    async fn sign_out(&self, token: &SessionToken) -> Result<(), SessionError>;
}

/// HTTP implementation of [`ProfileService`]. Holds one sub-client per
/// service.
#[derive(Debug, Clone)]
pub struct SessionClient {
    auth: auth::AuthClient,
    profiles: profiles::ProfileClient,
}

impl SessionClient {
    /// Create a client from configuration.
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers({
                let mut headers = HeaderMap::new();
                let mut key = HeaderValue::from_str(config.api_key.as_str())
                    .map_err(|_| SessionError::Config(config::ConfigError::InvalidApiKey))?;
                key.set_sensitive(true);
                headers.insert("apikey", key);
                headers
            })
            .build()
            .map_err(|e| SessionError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self {
            auth: auth::AuthClient::new(http.clone(), config.auth_url, config.retry),
            profiles: profiles::ProfileClient::new(http, config.rest_url, config.retry),
        })
    }
}

#[async_trait]
impl ProfileService for SessionClient {
    async fn current_session(&self, token: &SessionToken) -> Result<Option<Session>, SessionError> {
        self.auth.get_user(token).await
    }

    async fn fetch_profile(&self, session: &Session) -> Result<Option<Profile>, SessionError> {
        self.profiles.get(&session.token, session.user_id()).await
    }

    async fn sign_out(&self, token: &SessionToken) -> Result<(), SessionError> {
        self.auth.sign_out(token).await
    }
}
