/// Notification domain types
use crate::types::{NotificationId, StoryId};
use serde::{Deserialize, Serialize};

/// Notification category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// New or updated story content
    Story,

    /// System announcements (maintenance, outages)
    System,

    /// Updates to content the user follows
    Update,

    /// Onboarding messages
    Welcome,
}

/// Optional payload attached to a notification
///
/// Lets the view layer deep-link into the story or category the
/// notification refers to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationData {
    /// Story the notification refers to
    pub story_id: Option<StoryId>,

    /// Category the notification refers to
    pub category: Option<String>,

    /// Action hint for the view layer (e.g. "update")
    pub action: Option<String>,
}

/// An in-app notification
///
/// Notifications live entirely client-side: they are seeded at startup or
/// added synchronously, and mutated in place by the mark-read operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique notification identifier
    pub id: NotificationId,

    /// Notification category
    pub kind: NotificationKind,

    /// Short headline
    pub title: String,

    /// Body text
    pub message: String,

    /// Human-readable relative time (e.g. "2 hours ago", "Just now")
    pub time: String,

    /// Whether the user has seen this notification
    pub read: bool,

    /// Optional deep-link payload
    pub data: Option<NotificationData>,
}

/// Fields the caller supplies when adding a notification
///
/// The slice assigns `id`, `time`, and forces `read = false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationDraft {
    /// Notification category
    pub kind: NotificationKind,

    /// Short headline
    pub title: String,

    /// Body text
    pub message: String,

    /// Optional deep-link payload
    pub data: Option<NotificationData>,
}

impl NotificationDraft {
    /// Create a draft without a deep-link payload
    pub fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            data: None,
        }
    }
}
