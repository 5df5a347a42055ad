/// Story domain types
use crate::types::{StoryId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A narrated story in the catalog
///
/// Stories are created through the backend, which assigns `id` and
/// `created_at`; from the client's perspective the record is immutable
/// afterwards. Tags are order-preserving and never contain duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    /// Unique story identifier
    pub id: StoryId,

    /// Story title
    pub title: String,

    /// Full story text
    pub content: String,

    /// URL of the narration audio, if recorded
    pub audio_url: Option<String>,

    /// When the story was created (server-assigned)
    pub created_at: DateTime<Utc>,

    /// Author account
    pub user_id: UserId,

    /// Whether the story is visible to everyone
    pub is_public: bool,

    /// Free-form tags, order-preserving, no duplicates
    pub tags: Vec<String>,

    /// Flagged for promotional placement, independent of category
    #[serde(default)]
    pub featured: bool,

    /// Browse category (e.g. "fantasy", "sci-fi")
    pub category: Option<String>,

    /// Cover image URL
    pub cover_image: Option<String>,

    /// Narration length in minutes
    pub duration_minutes: Option<u32>,

    /// Average listener rating
    pub rating: Option<f32>,

    /// Display name of the narrator/author
    pub author: Option<String>,
}

/// Fields the client supplies when creating a story
///
/// Everything in [`Story`] except the server-assigned `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryDraft {
    /// Story title
    pub title: String,

    /// Full story text
    pub content: String,

    /// URL of the narration audio, if recorded
    pub audio_url: Option<String>,

    /// Author account
    pub user_id: UserId,

    /// Whether the story is visible to everyone
    pub is_public: bool,

    /// Free-form tags; duplicates are dropped on creation
    pub tags: Vec<String>,

    /// Flagged for promotional placement
    #[serde(default)]
    pub featured: bool,

    /// Browse category
    pub category: Option<String>,

    /// Cover image URL
    pub cover_image: Option<String>,

    /// Narration length in minutes
    pub duration_minutes: Option<u32>,

    /// Average listener rating
    pub rating: Option<f32>,

    /// Display name of the narrator/author
    pub author: Option<String>,
}

impl StoryDraft {
    /// Create a minimal draft with just the required fields
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        user_id: UserId,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            audio_url: None,
            user_id,
            is_public: false,
            tags: Vec::new(),
            featured: false,
            category: None,
            cover_image: None,
            duration_minutes: None,
            rating: None,
            author: None,
        }
    }

    /// Materialize the draft into a stored [`Story`]
    ///
    /// Assigns the given id and timestamp and drops duplicate tags while
    /// keeping first-occurrence order.
    pub fn into_story(self, id: StoryId, created_at: DateTime<Utc>) -> Story {
        Story {
            id,
            title: self.title,
            content: self.content,
            audio_url: self.audio_url,
            created_at,
            user_id: self.user_id,
            is_public: self.is_public,
            tags: dedup_tags(self.tags),
            featured: self.featured,
            category: self.category,
            cover_image: self.cover_image,
            duration_minutes: self.duration_minutes,
            rating: self.rating,
            author: self.author,
        }
    }
}

/// Remove duplicate tags, keeping first-occurrence order
fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    tags.into_iter().filter(|t| seen.insert(t.clone())).collect()
}
