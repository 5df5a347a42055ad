//! Store events
//!
//! Event-based communication for UI synchronization. Every committed state
//! change pushes one event; the view layer drains them after its dispatch
//! calls resolve (or periodically) and re-reads the slice state it cares
//! about. The navigation layer watches `AuthChanged` to redirect on
//! sign-in/sign-out transitions.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, PoisonError};

/// Events emitted by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreEvent {
    /// Auth state changed (loading flip, login/logout, error)
    AuthChanged {
        /// Whether a user/token pair is present after the change
        authenticated: bool,
    },

    /// Story catalog state changed
    CatalogChanged,

    /// Notification state changed
    NotificationsChanged {
        /// Unread count after the change
        unread_count: usize,
    },
}

/// Shared queue the slices push events into
///
/// Cloned into every slice; the store drains it. A plain mutex is enough:
/// pushes and drains are short and never held across an await.
#[derive(Clone, Default)]
pub(crate) struct EventSink {
    queue: Arc<Mutex<Vec<StoreEvent>>>,
}

impl EventSink {
    pub(crate) fn emit(&self, event: StoreEvent) {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }

    pub(crate) fn drain(&self) -> Vec<StoreEvent> {
        std::mem::take(&mut *self.queue.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}
