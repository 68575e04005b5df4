//! Decrypt-scramble text reveal.

use rand::Rng;

use crate::config::decrypt::{FRAMES_PER_CHAR, GLYPHS};

/// Reveals text left to right while the unrevealed tail shows random glyphs.
///
/// One character is revealed every [`FRAMES_PER_CHAR`] frames. The final
/// frame is always the original text.
#[derive(Debug, Clone)]
pub struct Decrypt {
    original: Vec<char>,
    frame: usize,
    done: bool,
}

impl Decrypt {
    pub fn new(text: &str) -> Self {
        Self {
            original: text.chars().collect(),
            frame: 0,
            done: false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Render the next frame, or `None` once the text is fully revealed.
    pub fn next_frame<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<String> {
        if self.done {
            return None;
        }

        let text = self
            .original
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if i * FRAMES_PER_CHAR < self.frame {
                    c
                } else {
                    GLYPHS[rng.gen_range(0..GLYPHS.len())] as char
                }
            })
            .collect();

        if self.frame >= self.original.len() * FRAMES_PER_CHAR {
            self.done = true;
        }
        self.frame += 1;

        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn run_to_end(text: &str) -> Vec<String> {
        let mut rng = StdRng::seed_from_u64(42);
        let mut decrypt = Decrypt::new(text);
        std::iter::from_fn(|| decrypt.next_frame(&mut rng)).collect()
    }

    #[test]
    fn test_final_frame_is_original() {
        let frames = run_to_end("ABOUT ME");
        assert_eq!(frames.last().map(String::as_str), Some("ABOUT ME"));
    }

    #[test]
    fn test_frame_count() {
        // frames 0..=3*len
        assert_eq!(run_to_end("abcd").len(), 13);
        assert_eq!(run_to_end("").len(), 1);
    }

    #[test]
    fn test_prefix_revealed_progressively() {
        let frames = run_to_end("hello");
        assert_eq!(frames[0].chars().count(), 5);
        assert!(frames[1].starts_with('h'));
        assert!(frames[4].starts_with("he"));
        assert!(frames[7].starts_with("hel"));
    }

    #[test]
    fn test_scrambled_chars_from_glyphs() {
        let frames = run_to_end("zzzz");
        assert!(frames[0].bytes().all(|b| GLYPHS.contains(&b)));
    }

    #[test]
    fn test_done_after_last_frame() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut decrypt = Decrypt::new("x");
        assert!(!decrypt.is_done());
        while decrypt.next_frame(&mut rng).is_some() {}
        assert!(decrypt.is_done());
        assert_eq!(decrypt.next_frame(&mut rng), None);
    }
}
