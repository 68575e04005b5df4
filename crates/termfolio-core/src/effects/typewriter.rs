//! Typewriter animation cycling through hero phrases.

use crate::config::typewriter::{DELETE_MS, HOLD_MS, NEXT_MS, PHRASES, TYPE_MS};

/// Frame produced by one typewriter tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeFrame {
    /// Text to display
    pub text: String,
    /// Delay before the next tick
    pub next_ms: u32,
}

/// Types a phrase one character at a time, holds, deletes it, then moves on
/// to the next phrase, forever.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase: usize,
    /// Characters currently shown
    shown: usize,
    deleting: bool,
}

impl Typewriter {
    /// # Panics
    ///
    /// Panics if `phrases` is empty.
    pub fn new(phrases: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        assert!(!phrases.is_empty(), "Typewriter needs at least one phrase");
        Self {
            phrases,
            phrase: 0,
            shown: 0,
            deleting: false,
        }
    }

    /// Advance one step.
    pub fn tick(&mut self) -> TypeFrame {
        let len = self.phrases[self.phrase].chars().count();

        let mut next_ms = if self.deleting {
            self.shown = self.shown.saturating_sub(1);
            DELETE_MS
        } else {
            self.shown = (self.shown + 1).min(len);
            TYPE_MS
        };

        let text = self.phrases[self.phrase].chars().take(self.shown).collect();

        if !self.deleting && self.shown == len {
            self.deleting = true;
            next_ms = HOLD_MS;
        } else if self.deleting && self.shown == 0 {
            self.deleting = false;
            self.phrase = (self.phrase + 1) % self.phrases.len();
            next_ms = NEXT_MS;
        }

        TypeFrame { text, next_ms }
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(PHRASES.iter().copied())
    }
}
