//! Typed client for the `profiles` table on the REST service.
//!
//! Single-row reads use the `application/vnd.pgrst.object+json` media type,
//! which makes the service answer `406` instead of an empty array when no
//! row matches.

use reqwest::header::ACCEPT;
use reqwest::StatusCode;

use barn_core::{SessionToken, UserId};

use crate::error::SessionError;
use crate::retry::RetryPolicy;
use crate::types::Profile;

const API_PREFIX: &str = "rest/v1";

const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Client for the profiles table.
#[derive(Debug, Clone)]
pub struct ProfileClient {
    http: reqwest::Client,
    base_url: url::Url,
    retry: RetryPolicy,
}

impl ProfileClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url, retry: RetryPolicy) -> Self {
        Self {
            http,
            base_url,
            retry,
        }
    }

    /// Fetch the profile row for `user_id`, as that user.
    ///
    /// Calls `GET {base_url}/rest/v1/profiles?id=eq.{user_id}&select=*`.
    /// `404` and `406` mean no such row and yield `Ok(None)`.
    pub async fn get(
        &self,
        token: &SessionToken,
        user_id: UserId,
    ) -> Result<Option<Profile>, SessionError> {
        let endpoint = "GET /rest/v1/profiles";
        let url = format!("{}{}/profiles", self.base_url, API_PREFIX);
        let id_filter = format!("eq.{user_id}");

        let resp = self.retry.send(endpoint, || {
            self.http
                .get(&url)
                .query(&[("id", id_filter.as_str()), ("select", "*")])
                .header(ACCEPT, SINGLE_OBJECT)
                .bearer_auth(token.expose())
                .send()
        })
        .await
        .map_err(|e| SessionError::Http {
            endpoint: endpoint.into(),
            source: e,
        })?;

        if matches!(resp.status(), StatusCode::NOT_FOUND | StatusCode::NOT_ACCEPTABLE) {
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

        resp.json().await.map(Some).map_err(|e| SessionError::Deserialization {
            endpoint: endpoint.into(),
            source: e,
        })
    }
}
