//! Line interpreter for the fake terminal.

use crate::commands::{Command, CommandResult, execute_command};
use crate::config::{PROMPT_DIR, PROMPT_HOST, PROMPT_USER};
use crate::filesystem::VirtualFs;
use crate::models::OutputLine;
use crate::parser::parse_input;

/// Turns raw input lines into [`CommandResult`]s.
///
/// Holds only the filesystem and the prompt host, so dispatch is a pure
/// function of the input line and may be called any number of times.
#[derive(Clone, Debug)]
pub struct Interpreter {
    fs: VirtualFs,
    host: String,
}

impl Interpreter {
    pub fn new(fs: VirtualFs) -> Self {
        Self {
            fs,
            host: PROMPT_HOST.to_string(),
        }
    }

    /// Override the host shown in the prompt.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    /// Prompt string, e.g. `root@tezzzt:~$`.
    pub fn prompt(&self) -> String {
        format!("{}@{}:{}$", PROMPT_USER, self.host, PROMPT_DIR)
    }

    /// Interpret one input line.
    ///
    /// The first output line always echoes the prompt and the trimmed input.
    /// Empty input produces the echo only.
    pub fn dispatch(&self, input: &str) -> CommandResult {
        let input = input.trim();
        let echo = OutputLine::command(self.prompt(), input);

        let Some(parsed) = parse_input(input) else {
            return CommandResult::output(vec![echo]);
        };

        let cmd = Command::from(&parsed);
        tracing::debug!(command = ?cmd, "dispatch");
        execute_command(cmd, &self.fs).prepend(echo)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(VirtualFs::from_catalog())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Directive;
    use crate::models::OutputLineData;

    fn lines(result: &CommandResult) -> Vec<String> {
        result.output.iter().map(OutputLine::plain_text).collect()
    }

    #[test]
    fn test_prompt() {
        assert_eq!(Interpreter::default().prompt(), "root@tezzzt:~$");
        assert_eq!(
            Interpreter::default().with_host("box").prompt(),
            "root@box:~$"
        );
    }

    #[test]
    fn test_echo_first() {
        let result = Interpreter::default().dispatch("whoami");
        assert_eq!(
            result.output[0].data,
            OutputLineData::Command {
                prompt: "root@tezzzt:~$".into(),
                input: "whoami".into()
            }
        );
        assert_eq!(lines(&result), vec!["root@tezzzt:~$ whoami", "root"]);
    }

    #[test]
    fn test_echo_is_trimmed_input() {
        let result = Interpreter::default().dispatch("   LS   ");
        assert_eq!(result.output[0].plain_text(), "root@tezzzt:~$ LS");
        assert_eq!(result.output.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        let shell = Interpreter::default();
        for input in ["", "   ", "\t"] {
            let result = shell.dispatch(input);
            assert_eq!(result.output.len(), 1);
            assert!(matches!(
                result.output[0].data,
                OutputLineData::Command { ref input, .. } if input.is_empty()
            ));
            assert_eq!(result.directive, Directive::None);
        }
    }

    #[test]
    fn test_clear_keeps_only_echo() {
        let result = Interpreter::default().dispatch("clear");
        assert_eq!(result.output.len(), 1);
        assert_eq!(result.directive, Directive::ClearOutput);
    }

    #[test]
    fn test_reboot() {
        let result = Interpreter::default().dispatch("REBOOT");
        assert_eq!(result.output.len(), 1);
        assert_eq!(result.directive, Directive::Reload);
    }

    #[test]
    fn test_unknown_keeps_lowercased_name() {
        let result = Interpreter::default().dispatch("FooBar baz");
        assert_eq!(
            lines(&result),
            vec!["root@tezzzt:~$ FooBar baz", "Command not found: foobar"]
        );
    }

    #[test]
    fn test_custom_fs() {
        let fs = VirtualFs::from_files([crate::filesystem::VirtualFile::new("x", "y")]);
        let shell = Interpreter::new(fs);
        assert_eq!(lines(&shell.dispatch("ls"))[1], "x");
        assert_eq!(shell.fs().len(), 1);
    }
}
