//! Session lifecycle integration tests — issuance, validation, revocation,
//! and the collapsed-rejection contract.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{TEST_SECRET, spawn_app};
use formwork_core::auth::jwt::{SESSION_TOKEN_EXPIRY_DAYS, mint_session_token_at};
use formwork_core::auth::sessions::{
    create_session, find_live_session, hash_session_token, purge_expired_sessions,
};

#[tokio::test]
async fn logout_revokes_token_before_natural_expiry() {
    let app = spawn_app().await;
    let (token, user_id) = app.register("ada@example.com", "long-enough-pw").await;

    // Live before logout.
    let (status, body) = app.request("GET", "/auth/session", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], user_id.as_str());
    assert_eq!(body["email"], "ada@example.com");

    // Revoke.
    let (status, body) = app
        .request("POST", "/auth/logout", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    // Dead immediately after, despite being days from its natural expiry.
    let (status, _) = app.request("GET", "/auth/session", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    app.teardown().await;
}

#[tokio::test]
async fn second_logout_is_rejected() {
    let app = spawn_app().await;
    let (token, _) = app.register("bob@example.com", "long-enough-pw").await;

    let (status, _) = app
        .request("POST", "/auth/logout", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    // The session is gone; a repeat logout fails validation up front.
    let (status, _) = app
        .request("POST", "/auth/logout", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    app.teardown().await;
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let app = spawn_app().await;
    app.register("real@example.com", "correct-password").await;

    let (wrong_pw_status, wrong_pw_body) = app
        .request_raw(
            "POST",
            "/auth/login",
            None,
            Some(serde_json::json!({"email": "real@example.com", "password": "wrong-password"})),
        )
        .await;
    let (no_user_status, no_user_body) = app
        .request_raw(
            "POST",
            "/auth/login",
            None,
            Some(serde_json::json!({"email": "nobody@example.com", "password": "anything"})),
        )
        .await;

    assert_eq!(wrong_pw_status, StatusCode::UNAUTHORIZED);
    assert_eq!(no_user_status, StatusCode::UNAUTHORIZED);
    // Byte-identical bodies: no oracle for which input was wrong.
    assert_eq!(wrong_pw_body, no_user_body);

    app.teardown().await;
}

#[tokio::test]
async fn expired_token_fails_despite_live_session_row() {
    let app = spawn_app().await;
    let (_, user_id) = app.register("carol@example.com", "long-enough-pw").await;

    // Fabricate a token minted 8 days ago — past the 7 day horizon — and
    // persist its session row as login would have at issue time.
    let issued = Utc::now() - Duration::days(SESSION_TOKEN_EXPIRY_DAYS + 1);
    let stale_token =
        mint_session_token_at(&user_id, TEST_SECRET.as_bytes(), issued).expect("mint");
    let token_hash = hash_session_token(&stale_token);
    let expires_at = issued + Duration::days(SESSION_TOKEN_EXPIRY_DAYS);
    create_session(&app.pool, &token_hash, &user_id, expires_at)
        .await
        .expect("create session");

    // The store still holds the row...
    assert!(
        find_live_session(&app.pool, &token_hash)
            .await
            .expect("find session")
            .is_some()
    );

    // ...but the codec's expiry check fails first.
    let (status, _) = app
        .request("GET", "/auth/session", Some(&stale_token), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Cleanup reclaims the dead row.
    let purged = purge_expired_sessions(&app.pool).await.expect("purge");
    assert_eq!(purged, 1);
    assert!(
        find_live_session(&app.pool, &token_hash)
            .await
            .expect("find session")
            .is_none()
    );

    app.teardown().await;
}

#[tokio::test]
async fn concurrent_sessions_are_independent() {
    let app = spawn_app().await;
    let (first_token, _) = app.register("dora@example.com", "long-enough-pw").await;
    let (second_token, _) = app.login("dora@example.com", "long-enough-pw").await;

    assert_ne!(first_token, second_token);

    let (status, _) = app
        .request("GET", "/auth/session", Some(&first_token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app
        .request("GET", "/auth/session", Some(&second_token), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    // Revoking the first leaves the second untouched.
    let (status, _) = app
        .request("POST", "/auth/logout", Some(&first_token), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .request("GET", "/auth/session", Some(&first_token), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = app
        .request("GET", "/auth/session", Some(&second_token), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    app.teardown().await;
}

#[tokio::test]
async fn all_invalid_tokens_are_rejected_identically() {
    let app = spawn_app().await;
    let (token, _) = app.register("eve@example.com", "long-enough-pw").await;
    app.request("POST", "/auth/logout", Some(&token), None).await;

    // Missing, malformed, and revoked credentials: one collapsed rejection.
    let (missing_status, missing_body) =
        app.request_raw("GET", "/auth/session", None, None).await;
    let (garbage_status, garbage_body) = app
        .request_raw("GET", "/auth/session", Some("not-a-jwt"), None)
        .await;
    let (revoked_status, revoked_body) = app
        .request_raw("GET", "/auth/session", Some(&token), None)
        .await;

    assert_eq!(missing_status, StatusCode::UNAUTHORIZED);
    assert_eq!(garbage_status, StatusCode::UNAUTHORIZED);
    assert_eq!(revoked_status, StatusCode::UNAUTHORIZED);
    assert_eq!(missing_body, garbage_body);
    assert_eq!(garbage_body, revoked_body);

    app.teardown().await;
}

#[tokio::test]
async fn registration_validation() {
    let app = spawn_app().await;
    app.register("frank@example.com", "long-enough-pw").await;

    // Duplicate email.
    let (status, _) = app
        .request(
            "POST",
            "/auth/register",
            None,
            Some(serde_json::json!({"email": "frank@example.com", "password": "long-enough-pw"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Short password.
    let (status, _) = app
        .request(
            "POST",
            "/auth/register",
            None,
            Some(serde_json::json!({"email": "short@example.com", "password": "short"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Empty email.
    let (status, _) = app
        .request(
            "POST",
            "/auth/register",
            None,
            Some(serde_json::json!({"email": "", "password": "long-enough-pw"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    app.teardown().await;
}

#[tokio::test]
async fn deleting_a_user_kills_their_sessions() {
    let app = spawn_app().await;
    let (token, user_id) = app.register("gone@example.com", "long-enough-pw").await;

    let (status, _) = app
        .request("DELETE", &format!("/users/{user_id}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // The cascade removed the session row; the token fails closed.
    let (status, _) = app.request("GET", "/auth/session", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    app.teardown().await;
}
