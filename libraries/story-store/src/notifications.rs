//! Notification slice
//!
//! Fully synchronous: no backend involvement. The state keeps one invariant
//! at all times: `unread_count` equals the number of notifications with
//! `read == false`, and never goes negative.

use crate::events::{EventSink, StoreEvent};
use serde::{Deserialize, Serialize};
use story_core::types::{
    Notification, NotificationData, NotificationDraft, NotificationId, NotificationKind, StoryId,
};
use tokio::sync::RwLock;
use tracing::debug;

/// Notification slice state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationState {
    /// Notifications, newest first
    pub notifications: Vec<Notification>,

    /// Number of notifications with `read == false`
    pub unread_count: usize,

    /// Async-operation flag; notifications have no async operations today
    pub loading: bool,

    /// Last surfaced error, if any
    pub error: Option<String>,
}

impl Default for NotificationState {
    fn default() -> Self {
        Self {
            notifications: Vec::new(),
            unread_count: 0,
            loading: false,
            error: None,
        }
    }
}

impl NotificationState {
    /// The sample set the app starts with: five notifications, one unread
    pub fn seeded() -> Self {
        let notifications = seed_notifications();
        let unread_count = notifications.iter().filter(|n| !n.read).count();
        Self {
            notifications,
            unread_count,
            loading: false,
            error: None,
        }
    }

    /// Mark one notification read; returns whether anything changed
    pub fn mark_as_read(&mut self, id: &NotificationId) -> bool {
        let Some(notification) = self.notifications.iter_mut().find(|n| &n.id == id) else {
            return false;
        };
        if notification.read {
            return false;
        }
        notification.read = true;
        self.unread_count = self.unread_count.saturating_sub(1);
        true
    }

    /// Mark every notification read
    pub fn mark_all_as_read(&mut self) {
        for notification in &mut self.notifications {
            notification.read = true;
        }
        self.unread_count = 0;
    }

    /// Remove one notification; returns whether anything changed
    pub fn delete(&mut self, id: &NotificationId) -> bool {
        let Some(index) = self.notifications.iter().position(|n| &n.id == id) else {
            return false;
        };
        let removed = self.notifications.remove(index);
        if !removed.read {
            self.unread_count = self.unread_count.saturating_sub(1);
        }
        true
    }

    /// Remove every notification
    pub fn clear_all(&mut self) {
        self.notifications.clear();
        self.unread_count = 0;
    }

    /// Add a notification: fresh id, `time = "Just now"`, unread, prepended
    pub fn add(&mut self, draft: NotificationDraft) -> NotificationId {
        let id = NotificationId::generate();
        self.notifications.insert(
            0,
            Notification {
                id: id.clone(),
                kind: draft.kind,
                title: draft.title,
                message: draft.message,
                time: "Just now".to_string(),
                read: false,
                data: draft.data,
            },
        );
        self.unread_count += 1;
        id
    }
}

/// Notification slice: seeded state behind a lock, plus change events
pub struct NotificationSlice {
    state: RwLock<NotificationState>,
    events: EventSink,
}

impl NotificationSlice {
    pub(crate) fn new(events: EventSink) -> Self {
        Self {
            state: RwLock::new(NotificationState::seeded()),
            events,
        }
    }

    /// Snapshot of the current state
    pub async fn state(&self) -> NotificationState {
        self.state.read().await.clone()
    }

    /// Mark one notification read
    pub async fn mark_as_read(&self, id: &NotificationId) {
        let mut state = self.state.write().await;
        if state.mark_as_read(id) {
            let unread_count = state.unread_count;
            drop(state);
            self.changed(unread_count);
        }
    }

    /// Mark every notification read
    pub async fn mark_all_as_read(&self) {
        let mut state = self.state.write().await;
        state.mark_all_as_read();
        drop(state);
        self.changed(0);
    }

    /// Remove one notification
    pub async fn delete_notification(&self, id: &NotificationId) {
        let mut state = self.state.write().await;
        if state.delete(id) {
            let unread_count = state.unread_count;
            drop(state);
            self.changed(unread_count);
        }
    }

    /// Remove every notification
    pub async fn clear_all_notifications(&self) {
        let mut state = self.state.write().await;
        state.clear_all();
        drop(state);
        self.changed(0);
    }

    /// Add a notification and return its assigned id
    pub async fn add_notification(&self, draft: NotificationDraft) -> NotificationId {
        let mut state = self.state.write().await;
        let id = state.add(draft);
        let unread_count = state.unread_count;
        drop(state);
        debug!(id = %id, "Notification added");
        self.changed(unread_count);
        id
    }

    fn changed(&self, unread_count: usize) {
        self.events
            .emit(StoreEvent::NotificationsChanged { unread_count });
    }
}

/// The fixed sample set shown on first launch
fn seed_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: NotificationId::new("1"),
            kind: NotificationKind::Story,
            title: "New Story Available".to_string(),
            message: "Check out the latest story in the Adventure category!".to_string(),
            time: "2 hours ago".to_string(),
            read: false,
            data: Some(NotificationData {
                story_id: Some(StoryId::new("story-123")),
                category: Some("adventure".to_string()),
                action: None,
            }),
        },
        Notification {
            id: NotificationId::new("2"),
            kind: NotificationKind::Update,
            title: "Story Update".to_string(),
            message: "Your favorite story has been updated with new content.".to_string(),
            time: "1 day ago".to_string(),
            read: true,
            data: Some(NotificationData {
                story_id: Some(StoryId::new("story-456")),
                category: None,
                action: Some("update".to_string()),
            }),
        },
        Notification {
            id: NotificationId::new("3"),
            kind: NotificationKind::Welcome,
            title: "Welcome!".to_string(),
            message: "Welcome to StoryWhisper! Start exploring our collection of stories."
                .to_string(),
            time: "3 days ago".to_string(),
            read: true,
            data: None,
        },
        Notification {
            id: NotificationId::new("4"),
            kind: NotificationKind::System,
            title: "System Maintenance".to_string(),
            message: "We will be performing maintenance on our servers tomorrow at 2 AM."
                .to_string(),
            time: "5 days ago".to_string(),
            read: true,
            data: None,
        },
        Notification {
            id: NotificationId::new("5"),
            kind: NotificationKind::Story,
            title: "New Category Added".to_string(),
            message: "We have added a new category: Science Fiction!".to_string(),
            time: "1 week ago".to_string(),
            read: true,
            data: Some(NotificationData {
                story_id: None,
                category: Some("science-fiction".to_string()),
                action: None,
            }),
        },
    ]
}
