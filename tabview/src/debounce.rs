//! Debounced search input.
//!
//! Time is passed in by the caller so the debounce is deterministic under
//! test and works with whatever clock drives the UI loop.

use std::time::{Duration, Instant};

/// Default delay between the last keystroke and applying the search text.
pub const SEARCH_DEBOUNCE_MS: u64 = 200;

/// Search text typed but not yet applied.
#[derive(Debug, Clone)]
pub struct SearchDraft {
    text: String,
    last_changed: Option<Instant>,
    delay: Duration,
}

impl Default for SearchDraft {
    fn default() -> Self {
        Self::new(Duration::from_millis(SEARCH_DEBOUNCE_MS))
    }
}

impl SearchDraft {
    /// Create an empty draft with the given delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            text: String::new(),
            last_changed: None,
            delay,
        }
    }

    /// The text currently in the search box.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Record a keystroke. Supersedes any pending text and restarts the
    /// timer.
    pub fn input(&mut self, text: impl Into<String>, now: Instant) {
        self.text = text.into();
        self.last_changed = Some(now);
    }

    /// Check if text is waiting to be applied.
    pub fn is_pending(&self) -> bool {
        self.last_changed.is_some()
    }

    /// Returns true if the debounce period has elapsed since the last
    /// keystroke.
    pub fn debounce_elapsed(&self, now: Instant) -> bool {
        self.last_changed
            .is_some_and(|t| now.saturating_duration_since(t) >= self.delay)
    }

    /// Take the pending text once the delay has elapsed.
    pub fn take_if_elapsed(&mut self, now: Instant) -> Option<String> {
        if self.debounce_elapsed(now) {
            self.last_changed = None;
            Some(self.text.clone())
        } else {
            None
        }
    }

    /// Take the pending text immediately, regardless of the timer.
    pub fn flush(&mut self) -> Option<String> {
        self.last_changed.take().map(|_| self.text.clone())
    }

    /// Drop any pending text and empty the box.
    pub fn cancel(&mut self) {
        self.text.clear();
        self.last_changed = None;
    }
}
