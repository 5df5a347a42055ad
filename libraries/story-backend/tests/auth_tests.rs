//! Authentication behavior of the mock server


use story_backend::{SEED_USER_EMAIL, SEED_USER_PASSWORD};
use story_core::{Backend, StoryError};
use test_helpers::server;

#[tokio::test]
async fn seeded_user_can_login() {
    let server = server();

    let session = server
        .login(SEED_USER_EMAIL, SEED_USER_PASSWORD)
        .await
        .expect("seeded credentials should authenticate");

    assert_eq!(session.user.email, SEED_USER_EMAIL);
    assert_eq!(session.user.username, "testuser");
    assert!(!session.token.is_empty());
}

#[tokio::test]
async fn wrong_password_is_invalid_credentials() {
    let server = server();

    let err = server.login(SEED_USER_EMAIL, "wrong").await.unwrap_err();
    assert!(matches!(err, StoryError::InvalidCredentials));
    assert_eq!(err.to_string(), "Invalid email or password");
}

#[tokio::test]
async fn unknown_email_is_invalid_credentials() {
    let server = server();

    let err = server
        .login("nobody@example.com", SEED_USER_PASSWORD)
        .await
        .unwrap_err();
    assert!(matches!(err, StoryError::InvalidCredentials));
}

#[tokio::test]
async fn register_rejects_taken_email() {
    let server = server();

    let err = server
        .register("brandnew", SEED_USER_EMAIL, "pw")
        .await
        .unwrap_err();
    assert!(matches!(err, StoryError::EmailTaken));
}

#[tokio::test]
async fn register_rejects_taken_username() {
    let server = server();

    let err = server
        .register("testuser", "fresh@example.com", "pw")
        .await
        .unwrap_err();
    assert!(matches!(err, StoryError::UsernameTaken));
}

#[tokio::test]
async fn email_check_takes_precedence_over_username() {
    let server = server();

    // Both are taken; the email error wins
    let err = server
        .register("testuser", SEED_USER_EMAIL, "pw")
        .await
        .unwrap_err();
    assert!(matches!(err, StoryError::EmailTaken));
}

#[tokio::test]
async fn registered_user_can_login_afterwards() {
    let server = server();
    assert_eq!(server.user_count().await, 1);

    let session = server
        .register("alice", "alice@example.com", "secret")
        .await
        .expect("fresh registration should succeed");
    assert_eq!(session.user.username, "alice");
    assert_eq!(server.user_count().await, 2);

    let login = server
        .login("alice@example.com", "secret")
        .await
        .expect("registered user should be able to login");
    assert_eq!(login.user.id, session.user.id);
}

#[tokio::test]
async fn verification_code_roundtrip_is_single_use() {
    let server = server();

    server
        .send_verification_code(SEED_USER_EMAIL)
        .await
        .expect("seeded email should receive a code");

    let code = server
        .peek_verification_code(SEED_USER_EMAIL)
        .await
        .expect("a code should be pending");

    // First verification succeeds and consumes the code
    server
        .verify_code(SEED_USER_EMAIL, &code)
        .await
        .expect("correct code should verify");

    // Second attempt with the same code fails
    let err = server.verify_code(SEED_USER_EMAIL, &code).await.unwrap_err();
    assert!(matches!(err, StoryError::InvalidCode));
}

#[tokio::test]
async fn resend_overwrites_pending_code() {
    let server = server();

    server.send_verification_code(SEED_USER_EMAIL).await.unwrap();
    let first = server.peek_verification_code(SEED_USER_EMAIL).await.unwrap();

    // Keep resending until the code changes; a stale first code must fail
    let second = loop {
        server.send_verification_code(SEED_USER_EMAIL).await.unwrap();
        let code = server.peek_verification_code(SEED_USER_EMAIL).await.unwrap();
        if code != first {
            break code;
        }
    };

    let err = server.verify_code(SEED_USER_EMAIL, &first).await.unwrap_err();
    assert!(matches!(err, StoryError::InvalidCode));

    server
        .verify_code(SEED_USER_EMAIL, &second)
        .await
        .expect("latest code should verify");
}

#[tokio::test]
async fn send_code_to_unknown_email_fails() {
    let server = server();

    let err = server
        .send_verification_code("ghost@example.com")
        .await
        .unwrap_err();
    assert!(matches!(err, StoryError::EmailNotFound));
}

#[tokio::test]
async fn verify_without_pending_code_fails() {
    let server = server();

    let err = server.verify_code(SEED_USER_EMAIL, "123456").await.unwrap_err();
    assert!(matches!(err, StoryError::InvalidCode));
}

#[tokio::test]
async fn reset_password_changes_login_credential() {
    let server = server();

    server
        .reset_password(SEED_USER_EMAIL, "newpass456")
        .await
        .expect("reset for a known email should succeed");

    // Old password no longer works
    let err = server
        .login(SEED_USER_EMAIL, SEED_USER_PASSWORD)
        .await
        .unwrap_err();
    assert!(matches!(err, StoryError::InvalidCredentials));

    // New one does
    server
        .login(SEED_USER_EMAIL, "newpass456")
        .await
        .expect("new password should authenticate");
}

#[tokio::test]
async fn reset_password_for_unknown_email_fails() {
    let server = server();

    let err = server
        .reset_password("ghost@example.com", "pw")
        .await
        .unwrap_err();
    assert!(matches!(err, StoryError::UserNotFound));
}

#[tokio::test]
async fn current_user_resolves_issued_token() {
    let server = server();

    let session = server.login(SEED_USER_EMAIL, SEED_USER_PASSWORD).await.unwrap();
    let user = server
        .current_user(&session.token)
        .await
        .expect("issued token should resolve");

    assert_eq!(user, session.user);
}

#[tokio::test]
async fn current_user_rejects_unknown_token() {
    let server = server();

    let err = server.current_user("tok-bogus").await.unwrap_err();
    assert!(matches!(err, StoryError::InvalidToken));
}
