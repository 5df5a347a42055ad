//! StoryWhisper Mock Backend
//!
//! An in-process stand-in for the StoryWhisper service. It owns the `User`
//! and `Story` collections, resolves every call after a fixed simulated
//! latency, and returns the same success/error shapes a real server would,
//! so the state store cannot tell the difference.
//!
//! There is no persistence and no eviction: the dataset is small and
//! illustrative, and the process is the database.
//!
//! # Example
//!
//! ```rust
//! use story_backend::MockServer;
//! use story_core::Backend;
//! use std::time::Duration;
//!
//! # async fn demo() -> story_core::Result<()> {
//! let server = MockServer::with_latency(Duration::ZERO);
//!
//! // The seeded demo account can log in right away
//! let session = server.login("test@example.com", "password123").await?;
//! assert_eq!(session.user.username, "testuser");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod auth;
mod catalog;
mod seed;

pub use seed::{SEED_USER_EMAIL, SEED_USER_PASSWORD, SEED_USER_USERNAME};

use std::collections::HashMap;
use std::time::Duration;

use story_core::error::Result;
use story_core::types::{AuthSession, Story, StoryDraft, User, UserId};
use story_core::Backend;
use tokio::sync::RwLock;

/// Default simulated network latency per operation
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

/// A stored account: public user shape plus the password
///
/// The password never leaves this struct; auth responses copy out only the
/// [`User`] part.
#[derive(Debug, Clone)]
pub(crate) struct UserRecord {
    pub(crate) user: User,
    pub(crate) password: String,
}

/// Mutable server-side collections
#[derive(Debug, Default)]
pub(crate) struct ServerState {
    /// Registered accounts
    pub(crate) users: Vec<UserRecord>,

    /// Issued session tokens, token -> user id
    pub(crate) sessions: HashMap<String, UserId>,

    /// Pending verification codes, email -> code (single-use)
    pub(crate) codes: HashMap<String, String>,

    /// Story catalog
    pub(crate) stories: Vec<Story>,
}

/// In-memory mock of the StoryWhisper service
///
/// All operations go through one `RwLock`, matching the single-logical-writer
/// model: each call reads or mutates the collections atomically after its
/// simulated latency elapses.
pub struct MockServer {
    state: RwLock<ServerState>,
    latency: Duration,
}

impl MockServer {
    /// Create a seeded server with the default latency
    pub fn new() -> Self {
        Self::with_latency(DEFAULT_LATENCY)
    }

    /// Create a seeded server with a custom latency
    ///
    /// Tests pass `Duration::ZERO` to make operations resolve immediately.
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            state: RwLock::new(ServerState {
                users: seed::users(),
                sessions: HashMap::new(),
                codes: HashMap::new(),
                stories: seed::stories(),
            }),
            latency,
        }
    }

    /// Pause for the configured latency before resolving
    pub(crate) async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    /// Read the pending verification code for an email
    ///
    /// The real service would deliver the code out of band; the stub exposes
    /// it here so demos and tests can complete the reset flow.
    pub async fn peek_verification_code(&self, email: &str) -> Option<String> {
        self.state.read().await.codes.get(email).cloned()
    }

    /// Number of registered accounts (test support)
    pub async fn user_count(&self) -> usize {
        self.state.read().await.users.len()
    }
}

impl Default for MockServer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Backend for MockServer {
    async fn login(&self, email: &str, password: &str) -> Result<AuthSession> {
        self.handle_login(email, password).await
    }

    async fn register(&self, username: &str, email: &str, password: &str) -> Result<AuthSession> {
        self.handle_register(username, email, password).await
    }

    async fn send_verification_code(&self, email: &str) -> Result<()> {
        self.handle_send_verification_code(email).await
    }

    async fn verify_code(&self, email: &str, code: &str) -> Result<()> {
        self.handle_verify_code(email, code).await
    }

    async fn reset_password(&self, email: &str, new_password: &str) -> Result<()> {
        self.handle_reset_password(email, new_password).await
    }

    async fn current_user(&self, token: &str) -> Result<User> {
        self.handle_current_user(token).await
    }

    async fn fetch_stories(&self) -> Result<Vec<Story>> {
        self.handle_fetch_stories().await
    }

    async fn create_story(&self, draft: StoryDraft) -> Result<Story> {
        self.handle_create_story(draft).await
    }
}
