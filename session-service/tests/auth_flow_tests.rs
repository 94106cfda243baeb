mod common;

use auth::JwtError;
use chrono::Duration;
use common::TestHarness;
use session_service::domain::session::errors::AuthError;
use session_service::domain::session::models::Credentials;
use session_service::domain::session::models::UserId;
use session_service::domain::session::models::Username;
use session_service::domain::session::ports::AuthServicePort;
use session_service::domain::token::errors::TokenError;

fn credentials(username: &str, password: &str) -> Credentials {
    Credentials::new(
        Username::new(username.to_string()).unwrap(),
        password.to_string(),
    )
}

#[tokio::test]
async fn test_login_then_validate_round_trip() {
    let harness = TestHarness::new();

    let (user, pair) = harness
        .service
        .login(credentials("alice", "s3cret!"))
        .await
        .expect("login failed");

    assert_eq!(user.username.as_str(), "alice");
    assert!(!pair.access_token.is_empty());

    let claims = harness
        .service
        .validate(&pair.access_token)
        .await
        .expect("validate failed");
    assert_eq!(claims.sub, user.id.0);
}

#[tokio::test]
async fn test_second_login_supersedes_first_session() {
    let harness = TestHarness::new();

    let (_, first) = harness
        .service
        .login(credentials("alice", "s3cret!"))
        .await
        .unwrap();
    let (_, second) = harness
        .service
        .login(credentials("alice", "s3cret!"))
        .await
        .unwrap();

    assert_ne!(first.access_token, second.access_token);

    // The superseded token still verifies cryptographically but the store
    // no longer backs it
    let result = harness.service.validate(&first.access_token).await;
    assert!(matches!(
        result,
        Err(AuthError::Token(TokenError::Mismatch))
    ));

    assert!(harness.service.validate(&second.access_token).await.is_ok());
    assert_eq!(harness.access_store.active_count(), 1);
}

#[tokio::test]
async fn test_logout_revokes_session() {
    let harness = TestHarness::new();

    let (user, pair) = harness
        .service
        .login(credentials("alice", "s3cret!"))
        .await
        .unwrap();

    harness.service.logout(user.id).await.expect("logout failed");

    let result = harness.service.validate(&pair.access_token).await;
    assert!(matches!(
        result,
        Err(AuthError::Token(TokenError::NotActive(_)))
    ));
    assert_eq!(harness.access_store.active_count(), 0);
    assert_eq!(harness.refresh_store.active_count(), 0);
}

#[tokio::test]
async fn test_logout_without_active_session_is_ok() {
    let harness = TestHarness::new();

    assert!(harness.service.logout(UserId(99)).await.is_ok());
}

#[tokio::test]
async fn test_tampered_token_fails_regardless_of_store() {
    let harness = TestHarness::new();

    let (_, pair) = harness
        .service
        .login(credentials("alice", "s3cret!"))
        .await
        .unwrap();

    let mut tampered = pair.access_token.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    let result = harness.service.validate(&tampered).await;
    assert!(matches!(result, Err(AuthError::Token(TokenError::Invalid(_)))));
}

#[tokio::test]
async fn test_expired_token_fails_even_while_stored() {
    let harness = TestHarness::with_access_ttl(Duration::minutes(-5));

    let (_, pair) = harness
        .service
        .login(credentials("alice", "s3cret!"))
        .await
        .unwrap();

    // The store still holds the exact value
    assert_eq!(harness.access_store.active_count(), 1);

    let result = harness.service.validate(&pair.access_token).await;
    assert!(matches!(
        result,
        Err(AuthError::Token(TokenError::Invalid(JwtError::Expired)))
    ));
}

#[tokio::test]
async fn test_login_wrong_password_leaves_no_session() {
    let harness = TestHarness::new();

    let result = harness.service.login(credentials("alice", "wrong")).await;
    assert!(matches!(result, Err(AuthError::InvalidCredentials)));

    assert_eq!(harness.access_store.active_count(), 0);
    assert_eq!(harness.refresh_store.active_count(), 0);
}

#[tokio::test]
async fn test_unknown_username_matches_wrong_password_error() {
    let harness = TestHarness::new();

    let unknown = harness
        .service
        .login(credentials("mallory", "s3cret!"))
        .await
        .unwrap_err();
    let wrong = harness
        .service
        .login(credentials("alice", "wrong"))
        .await
        .unwrap_err();

    // Same user-visible error either way: no username enumeration
    assert_eq!(unknown.to_string(), wrong.to_string());
}

#[tokio::test]
async fn test_refresh_renews_and_supersedes() {
    let harness = TestHarness::new();

    let (_, pair) = harness
        .service
        .login(credentials("alice", "s3cret!"))
        .await
        .unwrap();

    let renewed = harness
        .service
        .refresh(&pair.refresh_token)
        .await
        .expect("refresh failed");

    assert_ne!(renewed.refresh_token, pair.refresh_token);
    assert!(harness.service.validate(&renewed.access_token).await.is_ok());

    // The old pair is fully superseded
    let old_access = harness.service.validate(&pair.access_token).await;
    assert!(matches!(
        old_access,
        Err(AuthError::Token(TokenError::Mismatch))
    ));
    let old_refresh = harness.service.refresh(&pair.refresh_token).await;
    assert!(matches!(
        old_refresh,
        Err(AuthError::Token(TokenError::Mismatch))
    ));
}
