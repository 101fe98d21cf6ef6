//! Contract tests for `SessionClient` against a mocked auth/REST backend.
//!
//! | Method | Path | Test |
//! |--------|------|------|
//! | GET    | `/auth/v1/user` | `current_session_*` |
//! | GET    | `/rest/v1/profiles` | `fetch_profile_*` |
//! | POST   | `/auth/v1/logout` | `sign_out_*` |
//!
//! `local_mock` retries twice with a few milliseconds of backoff, so a
//! gateway status is seen up to three times per call.

use barn_core::SessionToken;
use barn_session::{ProfileService, RetryPolicy, SessionClient, SessionConfig, SessionError};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const USER_ID: &str = "550e8400-e29b-41d4-a716-446655440000";

fn test_client(mock_server: &MockServer) -> SessionClient {
    let config = SessionConfig::local_mock(&mock_server.uri(), "anon-key").unwrap();
    SessionClient::new(config).unwrap()
}

fn token() -> SessionToken {
    SessionToken::new("user-jwt").unwrap()
}

async fn mount_user(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": USER_ID,
            "email": "nimal@example.com",
            "aud": "authenticated",
            "role": "authenticated"
        })))
        .mount(mock_server)
        .await;
}

// ── GET /auth/v1/user ────────────────────────────────────────────────

#[tokio::test]
async fn current_session_sends_both_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .and(header("apikey", "anon-key"))
        .and(header("authorization", "Bearer user-jwt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": USER_ID,
            "email": "nimal@example.com"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let session = client.current_session(&token()).await.unwrap().unwrap();
    assert_eq!(session.user_id().to_string(), USER_ID);
    assert_eq!(session.user.email.as_deref(), Some("nimal@example.com"));
    assert_eq!(session.token.expose(), "user-jwt");
}

#[tokio::test]
async fn current_session_401_means_no_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"msg":"invalid JWT"}"#))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert!(client.current_session(&token()).await.unwrap().is_none());
}

#[tokio::test]
async fn current_session_403_means_no_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert!(client.current_session(&token()).await.unwrap().is_none());
}

#[tokio::test]
async fn current_session_500_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    match client.current_session(&token()).await.unwrap_err() {
        SessionError::ApiError { status, body, .. } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected ApiError, got: {other:?}"),
    }
}

#[tokio::test]
async fn current_session_retries_gateway_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_user(&mock_server).await;

    let client = test_client(&mock_server);
    let session = client.current_session(&token()).await.unwrap().unwrap();
    assert_eq!(session.user_id().to_string(), USER_ID);
}

#[tokio::test]
async fn current_session_gives_up_after_retries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(429))
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.current_session(&token()).await.unwrap_err();
    assert_eq!(err.status(), Some(429));
}

#[tokio::test]
async fn retries_can_be_disabled() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut config = SessionConfig::local_mock(&mock_server.uri(), "anon-key").unwrap();
    config.retry = RetryPolicy::none();
    let client = SessionClient::new(config).unwrap();
    assert_eq!(
        client.current_session(&token()).await.unwrap_err().status(),
        Some(502)
    );
}

#[tokio::test]
async fn current_session_rejects_malformed_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "not-a-uuid"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert!(matches!(
        client.current_session(&token()).await,
        Err(SessionError::Deserialization { .. })
    ));
}

// ── GET /rest/v1/profiles ────────────────────────────────────────────

#[tokio::test]
async fn fetch_profile_filters_by_user_and_asks_for_one_object() {
    let mock_server = MockServer::start().await;
    mount_user(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .and(query_param("id", format!("eq.{USER_ID}")))
        .and(query_param("select", "*"))
        .and(header("accept", "application/vnd.pgrst.object+json"))
        .and(header("authorization", "Bearer user-jwt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": USER_ID,
            "name": "Nimal Perera",
            "farm_name": "Green Acres",
            "farm_location": "Matale",
            "updated_at": "2025-06-01T08:00:00Z"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let session = client.current_session(&token()).await.unwrap().unwrap();
    let profile = client.fetch_profile(&session).await.unwrap().unwrap();
    assert_eq!(profile.name, "Nimal Perera");
    assert_eq!(profile.farm_name.as_deref(), Some("Green Acres"));
    assert_eq!(profile.farm_location.as_deref(), Some("Matale"));
}

#[tokio::test]
async fn fetch_profile_406_means_no_row() {
    let mock_server = MockServer::start().await;
    mount_user(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(406).set_body_json(serde_json::json!({
            "code": "PGRST116",
            "message": "JSON object requested, multiple (or no) rows returned"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let session = client.current_session(&token()).await.unwrap().unwrap();
    assert!(client.fetch_profile(&session).await.unwrap().is_none());
}

#[tokio::test]
async fn fetch_profile_server_error_is_surfaced() {
    let mock_server = MockServer::start().await;
    mount_user(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let session = client.current_session(&token()).await.unwrap().unwrap();
    let err = client.fetch_profile(&session).await.unwrap_err();
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn fetch_profile_tolerates_missing_optional_columns() {
    let mock_server = MockServer::start().await;
    mount_user(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": USER_ID,
            "name": "Kamala"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let session = client.current_session(&token()).await.unwrap().unwrap();
    let profile = client.fetch_profile(&session).await.unwrap().unwrap();
    assert_eq!(profile.name, "Kamala");
    assert_eq!(profile.farm_name, None);
    assert_eq!(profile.farm_location, None);
}

// ── POST /auth/v1/logout ─────────────────────────────────────────────

#[tokio::test]
async fn sign_out_posts_logout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/logout"))
        .and(header("authorization", "Bearer user-jwt"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client.sign_out(&token()).await.unwrap();
}

#[tokio::test]
async fn sign_out_of_expired_session_succeeds() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/logout"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert!(client.sign_out(&token()).await.is_ok());
}

#[tokio::test]
async fn sign_out_server_error_is_surfaced() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/logout"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert!(matches!(
        client.sign_out(&token()).await,
        Err(SessionError::ApiError { status: 500, .. })
    ));
}
