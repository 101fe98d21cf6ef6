//! Typed client for the auth service.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/auth/v1/user` | Resolve a bearer token to its user |
//! | POST   | `/auth/v1/logout` | Invalidate the session |

use reqwest::StatusCode;

use barn_core::SessionToken;

use crate::error::SessionError;
use crate::retry::RetryPolicy;
use crate::types::{Session, SessionUser};

const API_PREFIX: &str = "auth/v1";

/// Client for the auth service.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: url::Url,
    retry: RetryPolicy,
}

impl AuthClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url, retry: RetryPolicy) -> Self {
        Self {
            http,
            base_url,
            retry,
        }
    }

    /// Resolve `token` to a session.
    ///
    /// Calls `GET {base_url}/auth/v1/user`. A `401` or `403` means the token
    /// is not (or no longer) a session and yields `Ok(None)`.
    pub async fn get_user(&self, token: &SessionToken) -> Result<Option<Session>, SessionError> {
        let endpoint = "GET /auth/v1/user";
        let url = format!("{}{}/user", self.base_url, API_PREFIX);

        let resp = self.retry.send(endpoint, || {
            self.http.get(&url).bearer_auth(token.expose()).send()
        })
        .await
        .map_err(|e| SessionError::Http {
            endpoint: endpoint.into(),
            source: e,
        })?;

        if matches!(resp.status(), StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            tracing::debug!(status = resp.status().as_u16(), "no session for token");
            return Ok(None);
        }

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(SessionError::ApiError {
                endpoint: endpoint.into(),
                status,
                body,
            });
        }

        let user: SessionUser = resp.json().await.map_err(|e| SessionError::Deserialization {
            endpoint: endpoint.into(),
            source: e,
        })?;

        Ok(Some(Session {
            token: token.clone(),
            user,
        }))
    }

    /// Invalidate the session.
    ///
    /// Calls `POST {base_url}/auth/v1/logout`. A `401` means the session was
    /// already gone and counts as success.
    pub async fn sign_out(&self, token: &SessionToken) -> Result<(), SessionError> {
        let endpoint = "POST /auth/v1/logout";
        let url = format!("{}{}/logout", self.base_url, API_PREFIX);

        let resp = self.retry.send(endpoint, || {
            self.http.post(&url).bearer_auth(token.expose()).send()
        })
        .await
        .map_err(|e| SessionError::Http {
            endpoint: endpoint.into(),
            source: e,
        })?;

        if resp.status().is_success() || resp.status() == StatusCode::UNAUTHORIZED {
            return Ok(());
        }

        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        Err(SessionError::ApiError {
            endpoint: endpoint.into(),
            status,
            body,
        })
    }
}
