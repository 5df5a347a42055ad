//! Overlapping-dispatch ordering
//!
//! Two operations in flight at once used to be a race with no defined
//! winner. The store orders them with a per-slice generation counter:
//! the newest dispatch wins, and responses for superseded dispatches are
//! dropped. These tests script backend latencies so the first dispatch
//! settles last, then assert it did not overwrite the newer result.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use story_core::error::Result;
use story_core::types::{AuthSession, Story, StoryDraft, StoryId, User, UserId};
use story_core::{Backend, StoryError};
use story_store::Store;

fn session(email: &str) -> AuthSession {
    AuthSession {
        user: User::new("user", email),
        token: format!("tok-{email}"),
    }
}

fn sample_stories(count: usize) -> Vec<Story> {
    (0..count)
        .map(|i| {
            StoryDraft::new(format!("Story {i}"), "Content", UserId::new("1"))
                .into_story(StoryId::new(i.to_string()), chrono::Utc::now())
        })
        .collect()
}

/// Backend whose per-call latency and payload are scripted up front
#[derive(Default)]
struct ScriptedBackend {
    logins: Mutex<VecDeque<(Duration, AuthSession)>>,
    fetches: Mutex<VecDeque<(Duration, Vec<Story>)>>,
}

impl ScriptedBackend {
    fn push_login(&self, delay: Duration, session: AuthSession) {
        self.logins.lock().unwrap().push_back((delay, session));
    }

    fn push_fetch(&self, delay: Duration, stories: Vec<Story>) {
        self.fetches.lock().unwrap().push_back((delay, stories));
    }
}

#[async_trait::async_trait]
impl Backend for ScriptedBackend {
    async fn login(&self, _email: &str, _password: &str) -> Result<AuthSession> {
        let (delay, session) = self
            .logins
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted login call");
        tokio::time::sleep(delay).await;
        Ok(session)
    }

    async fn register(&self, _: &str, _: &str, _: &str) -> Result<AuthSession> {
        unimplemented!("not scripted")
    }

    async fn send_verification_code(&self, _: &str) -> Result<()> {
        unimplemented!("not scripted")
    }

    async fn verify_code(&self, _: &str, _: &str) -> Result<()> {
        unimplemented!("not scripted")
    }

    async fn reset_password(&self, _: &str, _: &str) -> Result<()> {
        unimplemented!("not scripted")
    }

    async fn current_user(&self, _: &str) -> Result<User> {
        Err(StoryError::InvalidToken)
    }

    async fn fetch_stories(&self) -> Result<Vec<Story>> {
        let (delay, stories) = self
            .fetches
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted fetch call");
        tokio::time::sleep(delay).await;
        Ok(stories)
    }

    async fn create_story(&self, _: StoryDraft) -> Result<Story> {
        unimplemented!("not scripted")
    }
}

#[tokio::test(start_paused = true)]
async fn slow_login_response_cannot_overwrite_newer_one() {
    let backend = Arc::new(ScriptedBackend::default());
    backend.push_login(Duration::from_millis(500), session("slow@example.com"));
    backend.push_login(Duration::from_millis(50), session("fast@example.com"));

    let store = Arc::new(Store::new(backend));

    let slow = {
        let store = Arc::clone(&store);
        tokio::spawn(async move {
            store.auth().login("slow@example.com", "pw").await;
        })
    };
    // Let the slow dispatch reach its backend call before starting the next
    tokio::task::yield_now().await;

    store.auth().login("fast@example.com", "pw").await;
    slow.await.unwrap();

    let auth = store.auth().state().await;
    assert_eq!(
        auth.user.as_ref().map(|u| u.email.as_str()),
        Some("fast@example.com")
    );
    assert!(!auth.loading);
}

#[tokio::test(start_paused = true)]
async fn slow_fetch_cannot_overwrite_newer_catalog() {
    let backend = Arc::new(ScriptedBackend::default());
    backend.push_fetch(Duration::from_millis(500), sample_stories(1));
    backend.push_fetch(Duration::from_millis(50), sample_stories(3));

    let store = Arc::new(Store::new(backend));

    let slow = {
        let store = Arc::clone(&store);
        tokio::spawn(async move {
            store.catalog().fetch_stories().await;
        })
    };
    tokio::task::yield_now().await;

    store.catalog().fetch_stories().await;
    slow.await.unwrap();

    let catalog = store.catalog().state().await;
    assert_eq!(catalog.stories.len(), 3);
    assert!(!catalog.loading);
}

#[tokio::test(start_paused = true)]
async fn logout_invalidates_an_in_flight_login() {
    let backend = Arc::new(ScriptedBackend::default());
    backend.push_login(Duration::from_millis(500), session("slow@example.com"));

    let store = Arc::new(Store::new(backend));

    let slow = {
        let store = Arc::clone(&store);
        tokio::spawn(async move {
            store.auth().login("slow@example.com", "pw").await;
        })
    };
    tokio::task::yield_now().await;

    store.auth().logout().await;
    slow.await.unwrap();

    let auth = store.auth().state().await;
    assert!(auth.user.is_none());
    assert!(auth.token.is_none());
    assert!(!auth.loading);
}
