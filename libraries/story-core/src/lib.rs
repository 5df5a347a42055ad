//! StoryWhisper Core
//!
//! Platform-agnostic core types, traits, and error handling for StoryWhisper.
//!
//! This crate provides the foundational building blocks shared by the mock
//! backend and the state store.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `Story`, `Notification`, and their drafts
//! - **Core Traits**: `Backend` (the service seam)
//! - **Error Handling**: Unified `StoryError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use story_core::types::{StoryDraft, User};
//!
//! // Create a user
//! let user = User::new("alice", "alice@example.com");
//!
//! // Draft a story for that user
//! let draft = StoryDraft::new("The Magic Forest", "Once upon a time...", user.id.clone());
//! assert!(!draft.is_public);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod backend;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use backend::Backend;
pub use error::{Result, StoryError};

// Export all types
pub use types::{
    AuthSession, Notification, NotificationData, NotificationDraft, NotificationId,
    NotificationKind, Story, StoryDraft, StoryId, User, UserId,
};
