//! Story catalog slice
//!
//! Caches the full story collection fetched wholesale from the backend.
//! A failed refetch keeps the previous list visible (stale-but-available);
//! a created story is appended without a refetch. The derived views are
//! computed on demand and never stored.

use crate::events::{EventSink, StoreEvent};
use crate::lifecycle::{surface, Generation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use story_core::types::{Story, StoryDraft, UserId};
use story_core::Backend;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Catalog slice state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogState {
    /// Cached story collection, mirroring the backend after each fetch
    pub stories: Vec<Story>,

    /// Story the user is currently viewing/listening to
    pub current_story: Option<Story>,

    /// Whether a catalog operation is in flight
    pub loading: bool,

    /// Last surfaced error, if any
    pub error: Option<String>,
}

/// Catalog slice: cached stories plus the operations that drive them
pub struct CatalogSlice {
    backend: Arc<dyn Backend>,
    state: RwLock<CatalogState>,
    generation: Generation,
    events: EventSink,
}

impl CatalogSlice {
    pub(crate) fn new(backend: Arc<dyn Backend>, events: EventSink) -> Self {
        Self {
            backend,
            state: RwLock::new(CatalogState::default()),
            generation: Generation::default(),
            events,
        }
    }

    /// Snapshot of the current state
    pub async fn state(&self) -> CatalogState {
        self.state.read().await.clone()
    }

    // ===== Async operations =====

    /// Fetch the full collection, replacing the cached list on success
    pub async fn fetch_stories(&self) {
        let generation = self.dispatch().await;
        let result = self.backend.fetch_stories().await;
        self.commit(generation, |state| match result {
            Ok(stories) => {
                debug!(count = stories.len(), "Catalog refreshed");
                state.stories = stories;
            }
            Err(err) => {
                // Previous stories stay visible
                warn!(error = %err, "Catalog fetch failed");
                state.error = Some(surface(&err, "Failed to fetch stories"));
            }
        })
        .await;
    }

    /// Create a story and append the stored record to the cached list
    pub async fn create_story(&self, draft: StoryDraft) {
        let generation = self.dispatch().await;
        let result = self.backend.create_story(draft).await;
        self.commit(generation, |state| match result {
            Ok(story) => {
                debug!(story_id = %story.id, "Story created");
                state.stories.push(story);
            }
            Err(err) => {
                warn!(error = %err, "Story creation failed");
                state.error = Some(surface(&err, "Failed to create story"));
            }
        })
        .await;
    }

    // ===== Synchronous operations =====

    /// Replace the current story unconditionally
    pub async fn set_current_story(&self, story: Option<Story>) {
        let mut state = self.state.write().await;
        state.current_story = story;
        drop(state);
        self.events.emit(StoreEvent::CatalogChanged);
    }

    /// Clear only the surfaced error
    pub async fn clear_error(&self) {
        let mut state = self.state.write().await;
        state.error = None;
        drop(state);
        self.events.emit(StoreEvent::CatalogChanged);
    }

    // ===== Derived views =====

    /// Stories in one category
    pub async fn by_category(&self, category: &str) -> Vec<Story> {
        filter_by_category(&self.state.read().await.stories, category)
    }

    /// Case-insensitive substring search over title and content
    pub async fn search(&self, query: &str) -> Vec<Story> {
        search_stories(&self.state.read().await.stories, query)
    }

    /// Stories flagged for promotional placement
    pub async fn featured(&self) -> Vec<Story> {
        featured_stories(&self.state.read().await.stories)
    }

    /// Stories in the same category as `story`, excluding it, capped
    pub async fn related(&self, story: &Story, cap: usize) -> Vec<Story> {
        related_stories(&self.state.read().await.stories, story, cap)
    }

    /// Stories authored by one user
    pub async fn by_user(&self, user_id: &UserId) -> Vec<Story> {
        stories_by_user(&self.state.read().await.stories, user_id)
    }

    // ===== Lifecycle plumbing =====

    async fn dispatch(&self) -> u64 {
        let generation = self.generation.begin();
        let mut state = self.state.write().await;
        state.loading = true;
        state.error = None;
        drop(state);
        self.events.emit(StoreEvent::CatalogChanged);
        generation
    }

    async fn commit(&self, generation: u64, apply: impl FnOnce(&mut CatalogState)) {
        let mut state = self.state.write().await;
        if !self.generation.is_current(generation) {
            debug!("Dropping stale catalog response");
            return;
        }
        state.loading = false;
        apply(&mut state);
        drop(state);
        self.events.emit(StoreEvent::CatalogChanged);
    }
}

fn filter_by_category(stories: &[Story], category: &str) -> Vec<Story> {
    stories
        .iter()
        .filter(|s| s.category.as_deref() == Some(category))
        .cloned()
        .collect()
}

fn search_stories(stories: &[Story], query: &str) -> Vec<Story> {
    let query = query.to_lowercase();
    stories
        .iter()
        .filter(|s| {
            s.title.to_lowercase().contains(&query) || s.content.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

fn featured_stories(stories: &[Story]) -> Vec<Story> {
    stories.iter().filter(|s| s.featured).cloned().collect()
}

fn related_stories(stories: &[Story], story: &Story, cap: usize) -> Vec<Story> {
    let Some(category) = story.category.as_deref() else {
        return Vec::new();
    };
    stories
        .iter()
        .filter(|s| s.id != story.id && s.category.as_deref() == Some(category))
        .take(cap)
        .cloned()
        .collect()
}

fn stories_by_user(stories: &[Story], user_id: &UserId) -> Vec<Story> {
    stories
        .iter()
        .filter(|s| &s.user_id == user_id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use story_core::types::StoryId;

    fn story(id: &str, title: &str, content: &str, category: Option<&str>, featured: bool) -> Story {
        Story {
            id: StoryId::new(id),
            title: title.to_string(),
            content: content.to_string(),
            audio_url: None,
            created_at: Utc::now(),
            user_id: UserId::new("1"),
            is_public: true,
            tags: Vec::new(),
            featured,
            category: category.map(str::to_string),
            cover_image: None,
            duration_minutes: None,
            rating: None,
            author: None,
        }
    }

    fn catalog() -> Vec<Story> {
        vec![
            story("1", "The Magic Forest", "Once upon a time...", Some("fantasy"), true),
            story("2", "Space Adventure", "In the vast darkness...", Some("sci-fi"), false),
            story("3", "The Last Spell", "Magic was dying...", Some("fantasy"), false),
            story("4", "Uncategorized", "No category here", None, true),
        ]
    }

    #[test]
    fn category_filter_is_exact() {
        let stories = catalog();
        let fantasy = filter_by_category(&stories, "fantasy");
        assert_eq!(fantasy.len(), 2);
        assert!(fantasy.iter().all(|s| s.category.as_deref() == Some("fantasy")));

        assert!(filter_by_category(&stories, "mystery").is_empty());
    }

    #[test]
    fn search_matches_title_and_content_case_insensitively() {
        let stories = catalog();

        let by_title = search_stories(&stories, "MAGIC FOREST");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id.as_str(), "1");

        // "magic" appears in story 1's title and story 3's content
        let by_both = search_stories(&stories, "magic");
        assert_eq!(by_both.len(), 2);

        assert!(search_stories(&stories, "dragon").is_empty());
    }

    #[test]
    fn featured_subset_ignores_category() {
        let stories = catalog();
        let featured = featured_stories(&stories);
        assert_eq!(featured.len(), 2);
        assert!(featured.iter().all(|s| s.featured));
    }

    #[test]
    fn related_excludes_self_and_respects_cap() {
        let stories = catalog();
        let base = &stories[0];

        let related = related_stories(&stories, base, 5);
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].id.as_str(), "3");

        let capped = related_stories(&stories, base, 0);
        assert!(capped.is_empty());
    }

    #[test]
    fn related_without_category_is_empty() {
        let stories = catalog();
        assert!(related_stories(&stories, &stories[3], 5).is_empty());
    }

    #[test]
    fn by_user_filters_on_author_account() {
        let mut stories = catalog();
        stories[1].user_id = UserId::new("2");

        let mine = stories_by_user(&stories, &UserId::new("1"));
        assert_eq!(mine.len(), 3);
        assert!(mine.iter().all(|s| s.user_id == UserId::new("1")));
    }
}
