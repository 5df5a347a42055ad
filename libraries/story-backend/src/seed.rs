//! Seed data for the mock server
//!
//! One demo account plus the demonstration story catalog the app ships
//! with. Story authors other than the demo user are display-only; only the
//! demo account can actually log in.

use crate::UserRecord;
use chrono::Utc;
use story_core::types::{Story, StoryId, User, UserId};

/// Email of the seeded demo account
pub const SEED_USER_EMAIL: &str = "test@example.com";

/// Password of the seeded demo account
pub const SEED_USER_PASSWORD: &str = "password123";

/// Username of the seeded demo account
pub const SEED_USER_USERNAME: &str = "testuser";

const NARRATOR: &str = "StoryWhisper AI";

const COVER_FOREST: &str =
    "https://images.unsplash.com/photo-1511497584788-876760111969?w=800&auto=format&fit=crop";
const COVER_SPACE: &str =
    "https://images.unsplash.com/photo-1451187580459-43490279c0fa?w=800&auto=format&fit=crop";
const COVER_OCEAN: &str =
    "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?w=800&auto=format&fit=crop";
const COVER_BOOKS: &str =
    "https://images.unsplash.com/photo-1512820790803-83ca734da794?w=800&auto=format&fit=crop";
const COVER_DRAGON: &str =
    "https://images.unsplash.com/photo-1518709268805-4e9042af9f23?w=800&auto=format&fit=crop";
const COVER_NOIR: &str =
    "https://images.unsplash.com/photo-1512070679279-8988d32161be?w=800&auto=format&fit=crop";
const COVER_ROBOT: &str =
    "https://images.unsplash.com/photo-1485827404703-89b55fcc595e?w=800&auto=format&fit=crop";
const COVER_NEON: &str =
    "https://images.unsplash.com/photo-1518709766631-a6a7f45921c3?w=800&auto=format&fit=crop";
const COVER_LAB: &str =
    "https://images.unsplash.com/photo-1635070041078-e363dbe005cb?w=800&auto=format&fit=crop";

/// The seeded account list
pub(crate) fn users() -> Vec<UserRecord> {
    vec![UserRecord {
        user: User {
            id: UserId::new("1"),
            username: SEED_USER_USERNAME.to_string(),
            email: SEED_USER_EMAIL.to_string(),
        },
        password: SEED_USER_PASSWORD.to_string(),
    }]
}

#[allow(clippy::too_many_arguments)]
fn story(
    id: u32,
    title: &str,
    content: &str,
    user_id: u32,
    tags: [&str; 2],
    featured: bool,
    category: &str,
    cover_image: &str,
    duration_minutes: u32,
    rating: f32,
) -> Story {
    Story {
        id: StoryId::new(id.to_string()),
        title: title.to_string(),
        content: content.to_string(),
        audio_url: Some(format!("https://example.com/audio{id}.mp3")),
        created_at: Utc::now(),
        user_id: UserId::new(user_id.to_string()),
        is_public: true,
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
        featured,
        category: Some(category.to_string()),
        cover_image: Some(cover_image.to_string()),
        duration_minutes: Some(duration_minutes),
        rating: Some(rating),
        author: Some(NARRATOR.to_string()),
    }
}

/// The seeded story catalog
pub(crate) fn stories() -> Vec<Story> {
    vec![
        story(
            1,
            "The Magic Forest",
            "Once upon a time, in a magical forest...",
            1,
            ["fantasy", "adventure"],
            true,
            "fantasy",
            COVER_FOREST,
            5,
            4.5,
        ),
        story(
            2,
            "Space Adventure",
            "In the vast darkness of space...",
            1,
            ["sci-fi", "space"],
            false,
            "adventure",
            COVER_SPACE,
            7,
            4.2,
        ),
        story(
            3,
            "The Lost City of Atlantis",
            "Deep beneath the ocean waves...",
            2,
            ["mystery", "underwater"],
            true,
            "mystery",
            COVER_OCEAN,
            8,
            4.8,
        ),
        story(
            4,
            "The Time Traveler's Diary",
            "The old leather-bound diary contained entries from the future...",
            3,
            ["sci-fi", "time-travel"],
            false,
            "sci-fi",
            COVER_BOOKS,
            6,
            4.3,
        ),
        story(
            5,
            "The Dragon's Treasure",
            "The ancient dragon had been guarding its hoard for centuries...",
            4,
            ["fantasy", "dragons"],
            true,
            "fantasy",
            COVER_DRAGON,
            9,
            4.7,
        ),
        story(
            6,
            "The Detective's Last Case",
            "It was supposed to be a routine investigation...",
            5,
            ["mystery", "crime"],
            false,
            "mystery",
            COVER_NOIR,
            7,
            4.4,
        ),
        story(
            7,
            "The Robot's Dream",
            "In a world where robots had achieved consciousness...",
            6,
            ["sci-fi", "philosophy"],
            true,
            "sci-fi",
            COVER_ROBOT,
            8,
            4.6,
        ),
        story(
            8,
            "The Last Unicorn",
            "In a world where magic was fading...",
            7,
            ["fantasy", "magic"],
            false,
            "fantasy",
            COVER_NEON,
            6,
            4.1,
        ),
        story(
            9,
            "The Quantum Paradox",
            "The experiment was supposed to be simple...",
            8,
            ["sci-fi", "quantum"],
            true,
            "sci-fi",
            COVER_LAB,
            7,
            4.9,
        ),
        story(
            10,
            "The Ancient Scroll",
            "The scroll had been hidden for millennia...",
            9,
            ["mystery", "ancient"],
            false,
            "mystery",
            COVER_BOOKS,
            5,
            4.2,
        ),
        story(
            11,
            "The Cyberpunk Revolution",
            "In the neon-lit streets of Neo-Tokyo...",
            10,
            ["sci-fi", "cyberpunk"],
            true,
            "sci-fi",
            COVER_NEON,
            8,
            4.7,
        ),
        story(
            12,
            "The Enchanted Garden",
            "The garden had been forgotten for centuries...",
            11,
            ["fantasy", "magic"],
            false,
            "fantasy",
            COVER_FOREST,
            6,
            4.3,
        ),
        story(
            13,
            "The Time Capsule",
            "The capsule was buried in 1950...",
            12,
            ["mystery", "historical"],
            true,
            "mystery",
            COVER_NOIR,
            7,
            4.5,
        ),
        story(
            14,
            "The AI's Dilemma",
            "The artificial intelligence had to make a choice...",
            13,
            ["sci-fi", "philosophy"],
            false,
            "sci-fi",
            COVER_ROBOT,
            9,
            4.8,
        ),
        story(
            15,
            "The Dragon's Apprentice",
            "The young wizard had been chosen...",
            14,
            ["fantasy", "magic"],
            true,
            "fantasy",
            COVER_DRAGON,
            8,
            4.6,
        ),
        story(
            16,
            "The Quantum Detective",
            "The case involved multiple timelines...",
            15,
            ["sci-fi", "mystery"],
            false,
            "sci-fi",
            COVER_LAB,
            7,
            4.4,
        ),
        story(
            17,
            "The Last Spell",
            "Magic was dying in the world...",
            16,
            ["fantasy", "magic"],
            true,
            "fantasy",
            COVER_FOREST,
            6,
            4.7,
        ),
        story(
            18,
            "The Virtual Reality Mystery",
            "The line between reality and virtual reality blurred...",
            17,
            ["sci-fi", "virtual-reality"],
            false,
            "sci-fi",
            COVER_ROBOT,
            8,
            4.5,
        ),
        story(
            19,
            "The Ancient Prophecy",
            "The prophecy had been foretold for generations...",
            18,
            ["fantasy", "prophecy"],
            true,
            "fantasy",
            COVER_DRAGON,
            9,
            4.8,
        ),
        story(
            20,
            "The Time Loop",
            "Every day was exactly the same...",
            19,
            ["sci-fi", "time-travel"],
            false,
            "sci-fi",
            COVER_LAB,
            7,
            4.6,
        ),
        story(
            21,
            "The Hidden Kingdom",
            "Behind the waterfall lay a secret...",
            20,
            ["fantasy", "adventure"],
            true,
            "fantasy",
            COVER_OCEAN,
            8,
            4.7,
        ),
        story(
            22,
            "The Digital Conspiracy",
            "The code contained a hidden message...",
            21,
            ["sci-fi", "mystery"],
            false,
            "sci-fi",
            COVER_SPACE,
            6,
            4.3,
        ),
    ]
}
