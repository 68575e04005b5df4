//! Konami code detector.

use crate::config::konami::{ALERT, SEQUENCE};
use crate::models::OutputLine;

/// Terminal line announcing root mode.
pub fn unlock_notice() -> OutputLine {
    OutputLine::success(ALERT)
}

/// Tracks progress through the key sequence.
///
/// A key that doesn't continue the sequence resets progress to zero; it is
/// not re-tested as a possible first key.
#[derive(Debug, Clone, Default)]
pub struct KonamiDetector {
    progress: usize,
}

impl KonamiDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a `KeyboardEvent.key` value. Returns `true` when the sequence
    /// completes, after which detection starts over.
    pub fn feed(&mut self, key: &str) -> bool {
        if SEQUENCE[self.progress] != key {
            self.progress = 0;
            return false;
        }

        self.progress += 1;
        if self.progress == SEQUENCE.len() {
            self.progress = 0;
            return true;
        }
        false
    }

    pub fn progress(&self) -> usize {
        self.progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OutputLineData;

    fn feed_all(detector: &mut KonamiDetector, keys: &[&str]) -> Vec<bool> {
        keys.iter().map(|k| detector.feed(k)).collect()
    }

    #[test]
    fn test_full_sequence_triggers_once() {
        let mut detector = KonamiDetector::new();
        let hits = feed_all(&mut detector, SEQUENCE);
        assert_eq!(hits.iter().filter(|&&h| h).count(), 1);
        assert_eq!(hits.last(), Some(&true));
        assert_eq!(detector.progress(), 0);
    }

    #[test]
    fn test_wrong_key_resets() {
        let mut detector = KonamiDetector::new();
        feed_all(&mut detector, &["ArrowUp", "ArrowUp", "ArrowDown"]);
        assert_eq!(detector.progress(), 3);
        assert!(!detector.feed("x"));
        assert_eq!(detector.progress(), 0);
    }

    #[test]
    fn test_mismatch_is_not_retested() {
        let mut detector = KonamiDetector::new();
        detector.feed("ArrowUp");
        detector.feed("ArrowUp");
        // a third ArrowUp mismatches ArrowDown and does not count as a restart
        detector.feed("ArrowUp");
        assert_eq!(detector.progress(), 0);
    }

    #[test]
    fn test_case_sensitive_letters() {
        let mut detector = KonamiDetector::new();
        let mut keys = SEQUENCE.to_vec();
        keys[8] = "B";
        assert!(!feed_all(&mut detector, &keys).contains(&true));
    }

    #[test]
    fn test_repeatable() {
        let mut detector = KonamiDetector::new();
        assert!(*feed_all(&mut detector, SEQUENCE).last().unwrap());
        assert!(*feed_all(&mut detector, SEQUENCE).last().unwrap());
    }

    #[test]
    fn test_unlock_notice_is_success() {
        assert_eq!(
            unlock_notice().data,
            OutputLineData::Success {
                text: "SYSTEM OVERRIDE: ROOT ACCESS GRANTED".into()
            }
        );
    }
}
