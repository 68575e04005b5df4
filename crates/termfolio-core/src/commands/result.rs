//! Command execution result type.

use serde::Serialize;

use crate::models::OutputLine;

/// Out-of-band instruction for the front end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Directive {
    #[default]
    None,
    /// Wipe all previously displayed output, not only this command's
    ClearOutput,
    /// Tear down and restart the whole session
    Reload,
}

/// Result of executing a command.
///
/// Commands produce output and optionally a directive for the caller.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CommandResult {
    /// Output lines to display
    pub output: Vec<OutputLine>,
    pub directive: Directive,
}

impl CommandResult {
    /// Create a result with just output.
    pub fn output(lines: Vec<OutputLine>) -> Self {
        Self {
            output: lines,
            directive: Directive::None,
        }
    }

    /// Create a result with a directive and no output.
    pub fn directive(directive: Directive) -> Self {
        Self {
            output: vec![],
            directive,
        }
    }

    /// Put `line` in front of the existing output.
    pub fn prepend(mut self, line: OutputLine) -> Self {
        self.output.insert(0, line);
        self
    }
}
