use chrono::Utc;

use focusmix::session::{InMemorySessionStore, SessionStore};
use focusmix::types::{Credential, TokenResponse};

// Helper function to create a credential with a chosen lifetime
fn credential_with(access_token: &str, expires_in: u64, obtained_at: u64) -> Credential {
    Credential {
        access_token: access_token.to_string(),
        refresh_token: "refresh-token".to_string(),
        scope: "playlist-read-private".to_string(),
        expires_in,
        obtained_at,
    }
}

fn now() -> u64 {
    Utc::now().timestamp() as u64
}

#[tokio::test]
async fn test_store_returns_what_was_put() {
    let store = InMemorySessionStore::new();

    store
        .put("user-1", credential_with("token-1", 3600, now()))
        .await;

    let stored = store.get("user-1").await.expect("credential was stored");
    assert_eq!(stored.access_token, "token-1");
    assert_eq!(stored.refresh_token, "refresh-token");
}

#[tokio::test]
async fn test_unknown_user_has_no_session() {
    let store = InMemorySessionStore::new();

    assert!(store.get("nobody").await.is_none());
}

#[tokio::test]
async fn test_relogin_overwrites_the_stored_credential() {
    let store = InMemorySessionStore::new();

    store
        .put("user-1", credential_with("first", 3600, now()))
        .await;
    store
        .put("user-1", credential_with("second", 3600, now()))
        .await;

    let stored = store.get("user-1").await.expect("credential was stored");
    assert_eq!(stored.access_token, "second");
}

#[tokio::test]
async fn test_sessions_are_independent_per_user() {
    let store = InMemorySessionStore::new();

    store
        .put("user-1", credential_with("token-1", 3600, now()))
        .await;
    store
        .put("user-2", credential_with("token-2", 3600, now()))
        .await;

    assert_eq!(store.get("user-1").await.unwrap().access_token, "token-1");
    assert_eq!(store.get("user-2").await.unwrap().access_token, "token-2");
}

#[test]
fn test_fresh_credential_is_not_expired() {
    // A full hour of lifetime is well outside the refresh margin
    let credential = credential_with("token", 3600, now());
    assert!(!credential.is_expired());
}

#[test]
fn test_credential_expires_within_the_refresh_margin() {
    // 200 seconds of nominal lifetime left is already inside the 240-second
    // margin, so the credential counts as expired
    let credential = credential_with("token", 3600, now() - 3400);
    assert!(credential.is_expired());
}

#[test]
fn test_credential_past_nominal_expiry_is_expired() {
    let credential = credential_with("token", 3600, now() - 7200);
    assert!(credential.is_expired());
}

#[test]
fn test_refresh_response_defaults_keep_nothing() {
    // A token response without refresh_token/scope yields empty fields; the
    // auth layer carries the stale values over in that case
    let credential = Credential::from_token_response(TokenResponse {
        access_token: "token".to_string(),
        refresh_token: None,
        scope: None,
        expires_in: 3600,
    });

    assert_eq!(credential.refresh_token, "");
    assert_eq!(credential.scope, "");
    assert!(!credential.is_expired());
}
