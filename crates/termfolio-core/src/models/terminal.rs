//! Terminal output line types.

use std::sync::atomic::{AtomicUsize, Ordering};

use serde::Serialize;

use crate::markup;

/// A single line of terminal output with a unique ID.
#[derive(Clone, Debug, Serialize)]
pub struct OutputLine {
    /// Unique ID for keyed rendering
    pub id: usize,
    pub data: OutputLineData,
}

/// The content of an output line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutputLineData {
    /// Echo of a submitted command: prompt and user input
    Command { prompt: String, input: String },
    /// Plain text
    Text { text: String },
    /// Text with whitelisted inline markup (`<br>`, `<span class>`)
    Markup { html: String },
    /// Error message (red)
    Error { text: String },
    /// Success message (green)
    Success { text: String },
    /// Info message (yellow)
    Info { text: String },
}

static OUTPUT_LINE_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl OutputLine {
    fn new(data: OutputLineData) -> Self {
        Self {
            id: OUTPUT_LINE_COUNTER.fetch_add(1, Ordering::Relaxed),
            data,
        }
    }

    pub fn command(prompt: impl Into<String>, input: impl Into<String>) -> Self {
        Self::new(OutputLineData::Command {
            prompt: prompt.into(),
            input: input.into(),
        })
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Text { text: s.into() })
    }

    pub fn markup(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Markup { html: s.into() })
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Error { text: s.into() })
    }

    pub fn success(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Success { text: s.into() })
    }

    pub fn info(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Info { text: s.into() })
    }

    /// The line as it would read on a plain-text terminal.
    ///
    /// Markup is flattened; an echo line renders as `<prompt> <input>`.
    pub fn plain_text(&self) -> String {
        match &self.data {
            OutputLineData::Command { prompt, input } => {
                if input.is_empty() {
                    prompt.clone()
                } else {
                    format!("{} {}", prompt, input)
                }
            }
            OutputLineData::Markup { html } => markup::to_plain(html),
            OutputLineData::Text { text }
            | OutputLineData::Error { text }
            | OutputLineData::Success { text }
            | OutputLineData::Info { text } => text.clone(),
        }
    }
}

impl PartialEq for OutputLine {
    fn eq(&self, other: &Self) -> bool {
        // IDs are unique per line; compare content only
        self.data == other.data
    }
}
