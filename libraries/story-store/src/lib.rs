//! StoryWhisper State Store
//!
//! The centralized client-side state container: authentication, the story
//! catalog, and notifications, each an isolated slice composed behind one
//! [`Store`] handle.
//!
//! Async operations follow the pending/fulfilled/rejected lifecycle: state
//! flips to loading at dispatch, and exactly one completion is committed
//! when the backend resolves. Overlapping dispatches are ordered by a
//! per-slice generation counter, so a stale response never overwrites a
//! newer one. Synchronous operations (logout, notification bookkeeping)
//! commit immediately.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use story_backend::MockServer;
//! use story_store::{Store, StoreEvent};
//!
//! # async fn demo() {
//! let store = Store::new(Arc::new(MockServer::new()));
//!
//! store.auth().login("test@example.com", "password123").await;
//! let auth = store.auth().state().await;
//! assert!(auth.is_authenticated());
//!
//! store.catalog().fetch_stories().await;
//! let featured = store.catalog().featured().await;
//!
//! for event in store.drain_events() {
//!     if let StoreEvent::AuthChanged { authenticated } = event {
//!         // navigation reacts to sign-in/sign-out transitions
//!         let _ = authenticated;
//!     }
//! }
//! # let _ = featured;
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod auth;
mod catalog;
mod events;
mod lifecycle;
mod notifications;
mod store;

// Public exports
pub use auth::{AuthSlice, AuthState};
pub use catalog::{CatalogSlice, CatalogState};
pub use events::StoreEvent;
pub use notifications::{NotificationSlice, NotificationState};
pub use store::Store;
