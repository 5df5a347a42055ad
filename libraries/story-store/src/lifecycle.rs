//! Async lifecycle support
//!
//! Every backend-touching operation follows the same three-phase contract:
//! dispatch-start (`loading = true`, `error = None`), then exactly one of
//! fulfilled or rejected committed into state when the backend resolves.
//!
//! Overlapping dispatches are ordered by a generation counter: each start
//! bumps the slice generation, and a completion whose captured generation
//! is no longer current commits nothing. The newest dispatch always wins,
//! instead of "whichever settles last".

use std::sync::atomic::{AtomicU64, Ordering};
use story_core::StoryError;

/// Monotonic dispatch counter for one slice
#[derive(Debug, Default)]
pub(crate) struct Generation(AtomicU64);

impl Generation {
    /// Record a new dispatch and return its generation
    pub(crate) fn begin(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether the given dispatch is still the newest one
    pub(crate) fn is_current(&self, generation: u64) -> bool {
        self.0.load(Ordering::SeqCst) == generation
    }

    /// Invalidate all in-flight dispatches without starting a new one
    pub(crate) fn supersede(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Error text for the slice `error` field
///
/// The backend message is surfaced verbatim; the per-operation fallback
/// covers the degenerate case of an empty message.
pub(crate) fn surface(err: &StoryError, fallback: &str) -> String {
    let message = err.to_string();
    if message.is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
