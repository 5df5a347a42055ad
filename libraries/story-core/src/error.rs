/// Core error types for StoryWhisper
use thiserror::Error;

/// Result type alias using `StoryError`
pub type Result<T> = std::result::Result<T, StoryError>;

/// Core error type for StoryWhisper
///
/// Every backend failure is a variant here rather than a panic or an opaque
/// string, so callers can discriminate while the `Display` text stays
/// suitable for showing to the user verbatim.
#[derive(Error, Debug)]
pub enum StoryError {
    /// Login credentials did not match any account
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Registration email is already in use
    #[error("Email already registered")]
    EmailTaken,

    /// Registration username is already in use
    #[error("Username already taken")]
    UsernameTaken,

    /// No account with the given email
    #[error("Email not found")]
    EmailNotFound,

    /// Verification code missing or mismatched
    #[error("Invalid verification code")]
    InvalidCode,

    /// No account for a password reset
    #[error("User not found")]
    UserNotFound,

    /// Session token did not resolve to a known user
    #[error("Invalid token")]
    InvalidToken,

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl StoryError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
