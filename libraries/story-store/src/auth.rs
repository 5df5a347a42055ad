//! Auth slice
//!
//! Owns the session: who is signed in and with which token. All auth
//! operations share one `loading`/`error` pair; `user` and `token` are set
//! together on success and cleared together on logout.

use crate::events::{EventSink, StoreEvent};
use crate::lifecycle::{surface, Generation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use story_core::types::User;
use story_core::Backend;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Auth slice state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    /// Signed-in user, if any
    pub user: Option<User>,

    /// Session token; `Some` exactly when `user` is `Some`
    pub token: Option<String>,

    /// Whether an auth operation is in flight
    pub loading: bool,

    /// Last surfaced error, if any
    pub error: Option<String>,
}

impl AuthState {
    /// Whether a user/token pair is present
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }
}

/// Auth slice: session state plus the auth operations that drive it
pub struct AuthSlice {
    backend: Arc<dyn Backend>,
    state: RwLock<AuthState>,
    generation: Generation,
    events: EventSink,
}

impl AuthSlice {
    pub(crate) fn new(backend: Arc<dyn Backend>, events: EventSink) -> Self {
        Self {
            backend,
            state: RwLock::new(AuthState::default()),
            generation: Generation::default(),
            events,
        }
    }

    /// Snapshot of the current state
    pub async fn state(&self) -> AuthState {
        self.state.read().await.clone()
    }

    // ===== Async operations =====

    /// Authenticate with email and password
    pub async fn login(&self, email: &str, password: &str) {
        let generation = self.dispatch().await;
        let result = self.backend.login(email, password).await;
        self.commit(generation, |state| match result {
            Ok(session) => {
                info!(username = %session.user.username, "Signed in");
                state.user = Some(session.user);
                state.token = Some(session.token);
            }
            Err(err) => {
                warn!(error = %err, "Login rejected");
                state.error = Some(surface(&err, "Login failed"));
            }
        })
        .await;
    }

    /// Create an account and sign in as it
    pub async fn register(&self, username: &str, email: &str, password: &str) {
        let generation = self.dispatch().await;
        let result = self.backend.register(username, email, password).await;
        self.commit(generation, |state| match result {
            Ok(session) => {
                info!(username = %session.user.username, "Registered and signed in");
                state.user = Some(session.user);
                state.token = Some(session.token);
            }
            Err(err) => {
                warn!(error = %err, "Registration rejected");
                state.error = Some(surface(&err, "Registration failed"));
            }
        })
        .await;
    }

    /// Request a password-reset verification code
    pub async fn send_verification_code(&self, email: &str) {
        let generation = self.dispatch().await;
        let result = self.backend.send_verification_code(email).await;
        self.commit(generation, |state| {
            if let Err(err) = result {
                state.error = Some(surface(&err, "Failed to send verification code"));
            }
        })
        .await;
    }

    /// Check a verification code
    pub async fn verify_code(&self, email: &str, code: &str) {
        let generation = self.dispatch().await;
        let result = self.backend.verify_code(email, code).await;
        self.commit(generation, |state| {
            if let Err(err) = result {
                state.error = Some(surface(&err, "Failed to verify code"));
            }
        })
        .await;
    }

    /// Overwrite the account password
    pub async fn reset_password(&self, email: &str, new_password: &str) {
        let generation = self.dispatch().await;
        let result = self.backend.reset_password(email, new_password).await;
        self.commit(generation, |state| {
            if let Err(err) = result {
                state.error = Some(surface(&err, "Failed to reset password"));
            }
        })
        .await;
    }

    /// Resolve a stored token back into a session (e.g. on app start)
    pub async fn fetch_current_user(&self, token: &str) {
        let generation = self.dispatch().await;
        let result = self.backend.current_user(token).await;
        let token = token.to_string();
        self.commit(generation, |state| match result {
            Ok(user) => {
                state.user = Some(user);
                state.token = Some(token);
            }
            Err(err) => {
                state.error = Some(surface(&err, "Failed to get current user"));
            }
        })
        .await;
    }

    // ===== Synchronous operations =====

    /// Clear the session
    ///
    /// Invalidates any in-flight auth dispatch, so a completion arriving
    /// after logout can neither restore the session nor leave a dangling
    /// loading flag.
    pub async fn logout(&self) {
        self.generation.supersede();
        let mut state = self.state.write().await;
        state.user = None;
        state.token = None;
        state.error = None;
        state.loading = false;
        drop(state);
        info!("Signed out");
        self.events.emit(StoreEvent::AuthChanged {
            authenticated: false,
        });
    }

    /// Clear only the surfaced error
    pub async fn clear_error(&self) {
        let mut state = self.state.write().await;
        state.error = None;
        let authenticated = state.is_authenticated();
        drop(state);
        self.events.emit(StoreEvent::AuthChanged { authenticated });
    }

    // ===== Lifecycle plumbing =====

    /// Dispatch-start: bump the generation, flip to loading
    async fn dispatch(&self) -> u64 {
        let generation = self.generation.begin();
        let mut state = self.state.write().await;
        state.loading = true;
        state.error = None;
        let authenticated = state.is_authenticated();
        drop(state);
        self.events.emit(StoreEvent::AuthChanged { authenticated });
        generation
    }

    /// Commit a completion unless a newer dispatch superseded it
    async fn commit(&self, generation: u64, apply: impl FnOnce(&mut AuthState)) {
        let mut state = self.state.write().await;
        if !self.generation.is_current(generation) {
            debug!("Dropping stale auth response");
            return;
        }
        state.loading = false;
        apply(&mut state);
        let authenticated = state.is_authenticated();
        drop(state);
        self.events.emit(StoreEvent::AuthChanged { authenticated });
    }
}
