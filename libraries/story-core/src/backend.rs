//! Backend trait for the StoryWhisper service seam
//!
//! The state store talks to the service exclusively through this trait, so
//! the in-memory stub can be swapped for a real server without touching any
//! slice logic.

use crate::error::Result;
use crate::types::{AuthSession, Story, StoryDraft, User};
use async_trait::async_trait;

/// Backend service contract
///
/// Every operation resolves to `Ok` or a recoverable [`crate::StoryError`];
/// implementations must not panic on bad input.
#[async_trait]
pub trait Backend: Send + Sync {
    // ========================================================================
    // Authentication
    // ========================================================================

    /// Authenticate with email and password
    ///
    /// Fails with `InvalidCredentials` when no account matches both fields
    /// exactly.
    async fn login(&self, email: &str, password: &str) -> Result<AuthSession>;

    /// Create a new account
    ///
    /// Fails with `EmailTaken` when the email is already registered, else
    /// `UsernameTaken` when the username is in use (the email check takes
    /// precedence when both apply).
    async fn register(&self, username: &str, email: &str, password: &str) -> Result<AuthSession>;

    /// Send a password-reset verification code to an email
    ///
    /// Fails with `EmailNotFound` when no account has the email. On success
    /// a single-use numeric code is stored for the email, replacing any
    /// prior pending code.
    async fn send_verification_code(&self, email: &str) -> Result<()>;

    /// Check a verification code
    ///
    /// Fails with `InvalidCode` when no code is pending for the email or
    /// the value mismatches. Success consumes the code: a second attempt
    /// with the same code fails.
    async fn verify_code(&self, email: &str, code: &str) -> Result<()>;

    /// Overwrite an account's password
    ///
    /// Fails with `UserNotFound` when the email is unknown.
    async fn reset_password(&self, email: &str, new_password: &str) -> Result<()>;

    /// Resolve a session token to its user
    ///
    /// Fails with `InvalidToken` when the token does not resolve to a known
    /// user.
    async fn current_user(&self, token: &str) -> Result<User>;

    // ========================================================================
    // Story catalog
    // ========================================================================

    /// Fetch the full story collection
    async fn fetch_stories(&self) -> Result<Vec<Story>>;

    /// Create a story
    ///
    /// The backend assigns a fresh unique id and the current timestamp,
    /// appends the story to its collection, and returns the stored record.
    async fn create_story(&self, draft: StoryDraft) -> Result<Story>;
}
