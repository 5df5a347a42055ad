//! Authentication operations for the mock server
//!
//! Behavior contract per operation:
//! - login: exact email+password match or `InvalidCredentials`
//! - register: email uniqueness checked before username uniqueness
//! - verification codes: single-use, resend overwrites the pending code
//! - reset: overwrites the stored password for any known email
//! - current_user: token must resolve through the sessions map

use crate::{MockServer, UserRecord};
use rand::Rng;
use story_core::error::Result;
use story_core::types::{AuthSession, User};
use story_core::StoryError;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Issue a fresh opaque session token
fn generate_token() -> String {
    format!("tok-{}", Uuid::new_v4())
}

/// Generate a 6-digit numeric verification code (leading zeros allowed)
fn generate_code() -> String {
    let n: u32 = rand::thread_rng().gen_range(0..1_000_000);
    format!("{n:06}")
}

impl MockServer {
    pub(crate) async fn handle_login(&self, email: &str, password: &str) -> Result<AuthSession> {
        self.simulate_latency().await;
        debug!(email = %email, "Attempting login");

        let mut state = self.state.write().await;
        let record = state
            .users
            .iter()
            .find(|r| r.user.email == email && r.password == password)
            .cloned();

        let Some(record) = record else {
            warn!(email = %email, "Login failed: invalid credentials");
            return Err(StoryError::InvalidCredentials);
        };

        let token = generate_token();
        state.sessions.insert(token.clone(), record.user.id.clone());

        info!(user_id = %record.user.id, username = %record.user.username, "Login successful");
        Ok(AuthSession {
            user: record.user,
            token,
        })
    }

    pub(crate) async fn handle_register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthSession> {
        self.simulate_latency().await;
        debug!(username = %username, email = %email, "Attempting registration");

        let mut state = self.state.write().await;

        // Email uniqueness takes precedence over username uniqueness
        if state.users.iter().any(|r| r.user.email == email) {
            warn!(email = %email, "Registration failed: email taken");
            return Err(StoryError::EmailTaken);
        }
        if state.users.iter().any(|r| r.user.username == username) {
            warn!(username = %username, "Registration failed: username taken");
            return Err(StoryError::UsernameTaken);
        }

        let user = User::new(username, email);
        state.users.push(UserRecord {
            user: user.clone(),
            password: password.to_string(),
        });

        let token = generate_token();
        state.sessions.insert(token.clone(), user.id.clone());

        info!(user_id = %user.id, username = %user.username, "Registration successful");
        Ok(AuthSession { user, token })
    }

    pub(crate) async fn handle_send_verification_code(&self, email: &str) -> Result<()> {
        self.simulate_latency().await;

        let mut state = self.state.write().await;
        if !state.users.iter().any(|r| r.user.email == email) {
            warn!(email = %email, "Cannot send code: email not found");
            return Err(StoryError::EmailNotFound);
        }

        // A resend replaces any prior pending code for the email
        let code = generate_code();
        debug!(email = %email, code = %code, "Verification code issued");
        state.codes.insert(email.to_string(), code);

        Ok(())
    }

    pub(crate) async fn handle_verify_code(&self, email: &str, code: &str) -> Result<()> {
        self.simulate_latency().await;

        let mut state = self.state.write().await;
        match state.codes.get(email) {
            Some(pending) if pending == code => {
                // Single-use: consume on success
                state.codes.remove(email);
                info!(email = %email, "Verification code accepted");
                Ok(())
            }
            _ => {
                warn!(email = %email, "Verification code rejected");
                Err(StoryError::InvalidCode)
            }
        }
    }

    pub(crate) async fn handle_reset_password(&self, email: &str, new_password: &str) -> Result<()> {
        self.simulate_latency().await;

        let mut state = self.state.write().await;
        let Some(record) = state.users.iter_mut().find(|r| r.user.email == email) else {
            warn!(email = %email, "Password reset failed: user not found");
            return Err(StoryError::UserNotFound);
        };

        record.password = new_password.to_string();
        info!(email = %email, "Password reset");
        Ok(())
    }

    pub(crate) async fn handle_current_user(&self, token: &str) -> Result<User> {
        self.simulate_latency().await;

        let state = self.state.read().await;
        let user = state
            .sessions
            .get(token)
            .and_then(|id| state.users.iter().find(|r| &r.user.id == id))
            .map(|r| r.user.clone());

        user.ok_or_else(|| {
            warn!("Token did not resolve to a known user");
            StoryError::InvalidToken
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_codes_are_six_digits() {
        for _ in 0..100 {
            let code = generate_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn tokens_are_unique() {
        assert_ne!(generate_token(), generate_token());
    }
}
