mod ids;
mod notification;
mod story;
mod user;

pub use ids::{NotificationId, StoryId, UserId};
pub use notification::{Notification, NotificationData, NotificationDraft, NotificationKind};
pub use story::{Story, StoryDraft};
pub use user::{AuthSession, User};
