//! Story catalog operations for the mock server

use crate::MockServer;
use chrono::Utc;
use story_core::error::Result;
use story_core::types::{Story, StoryDraft, StoryId};
use tracing::{debug, info};

impl MockServer {
    pub(crate) async fn handle_fetch_stories(&self) -> Result<Vec<Story>> {
        self.simulate_latency().await;

        let state = self.state.read().await;
        debug!(count = state.stories.len(), "Fetching story catalog");
        Ok(state.stories.clone())
    }

    pub(crate) async fn handle_create_story(&self, draft: StoryDraft) -> Result<Story> {
        self.simulate_latency().await;

        let story = draft.into_story(StoryId::generate(), Utc::now());

        let mut state = self.state.write().await;
        state.stories.push(story.clone());

        info!(story_id = %story.id, title = %story.title, "Story created");
        Ok(story)
    }
}
