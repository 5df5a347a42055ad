//! Store coordinator
//!
//! Composes the three slices into the one state container the view tree
//! reads from. Constructed once at application start from whatever
//! [`Backend`] the platform provides; there is no global instance.

use crate::auth::AuthSlice;
use crate::catalog::CatalogSlice;
use crate::events::{EventSink, StoreEvent};
use crate::notifications::NotificationSlice;
use std::sync::Arc;
use story_core::Backend;

/// Process-wide state container
///
/// Slices share one event queue; [`Store::drain_events`] hands accumulated
/// change events to the view layer, which then re-reads the slice state it
/// cares about.
pub struct Store {
    auth: AuthSlice,
    catalog: CatalogSlice,
    notifications: NotificationSlice,
    events: EventSink,
}

impl Store {
    /// Create a store backed by the given service
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        let events = EventSink::default();
        Self {
            auth: AuthSlice::new(Arc::clone(&backend), events.clone()),
            catalog: CatalogSlice::new(backend, events.clone()),
            notifications: NotificationSlice::new(events.clone()),
            events,
        }
    }

    /// Auth slice
    pub fn auth(&self) -> &AuthSlice {
        &self.auth
    }

    /// Story catalog slice
    pub fn catalog(&self) -> &CatalogSlice {
        &self.catalog
    }

    /// Notification slice
    pub fn notifications(&self) -> &NotificationSlice {
        &self.notifications
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns every event emitted since the last drain, oldest first.
    pub fn drain_events(&self) -> Vec<StoreEvent> {
        self.events.drain()
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }
}
