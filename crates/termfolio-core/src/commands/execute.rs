//! Command execution logic.
//!
//! Contains the `execute_command` function that runs parsed commands
//! against the virtual filesystem and returns results.

use crate::config::{CAT_USAGE, HELP_PREFIX, PROMPT_USER};
use crate::filesystem::VirtualFs;
use crate::models::OutputLine;

use super::{Command, CommandResult, Directive};

/// Execute a parsed command and return its output.
///
/// Has no side effects: clearing and reloading are requested through the
/// returned [`Directive`].
pub fn execute_command(cmd: Command, fs: &VirtualFs) -> CommandResult {
    match cmd {
        Command::Help => CommandResult::output(vec![OutputLine::markup(help_line())]),
        Command::Ls => CommandResult::output(vec![OutputLine::text(fs.listing())]),
        Command::Cat(file) => execute_cat(file, fs),
        Command::Clear => CommandResult::directive(Directive::ClearOutput),
        Command::Whoami => CommandResult::output(vec![OutputLine::text(PROMPT_USER)]),
        Command::Reboot => CommandResult::directive(Directive::Reload),
        Command::Unknown(name) => CommandResult::output(vec![OutputLine::error(format!(
            "Command not found: {}",
            name
        ))]),
    }
}

/// `help` output: the command list in an accent span.
fn help_line() -> String {
    format!(
        "{HELP_PREFIX}<span class='text-accent'>{}</span>",
        Command::names().join(", ")
    )
}

/// Execute `cat` command.
fn execute_cat(file: Option<String>, fs: &VirtualFs) -> CommandResult {
    let Some(file) = file else {
        return CommandResult::output(vec![OutputLine::error(CAT_USAGE)]);
    };

    match fs.read(&file) {
        Ok(content) => CommandResult::output(vec![OutputLine::markup(content)]),
        Err(e) => CommandResult::output(vec![OutputLine::error(format!("cat: {}", e))]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OutputLineData;

    fn run(cmd: Command) -> CommandResult {
        execute_command(cmd, &VirtualFs::from_catalog())
    }

    fn single_line(result: &CommandResult) -> &OutputLineData {
        assert_eq!(result.output.len(), 1);
        &result.output[0].data
    }

    #[test]
    fn test_help() {
        let result = run(Command::Help);
        assert_eq!(
            single_line(&result),
            &OutputLineData::Markup {
                html: "Available commands: <span class='text-accent'>ls, cat, clear, whoami, reboot</span>"
                    .into()
            }
        );
        assert_eq!(result.directive, Directive::None);
    }

    #[test]
    fn test_ls() {
        let result = run(Command::Ls);
        assert_eq!(
            single_line(&result),
            &OutputLineData::Text {
                text: "about.txt  skills.md  projects.json  contact.info  secret.bin".into()
            }
        );
    }

    #[test]
    fn test_ls_empty_fs() {
        let result = execute_command(Command::Ls, &VirtualFs::empty());
        assert_eq!(
            single_line(&result),
            &OutputLineData::Text {
                text: String::new()
            }
        );
    }

    #[test]
    fn test_cat_file() {
        let result = run(Command::Cat(Some("skills.md".into())));
        assert_eq!(
            single_line(&result),
            &OutputLineData::Markup {
                html: "Key Skills:<br>- C/C++<br>- Assembly<br>- Python<br>- Reverse Engineering (IDA/Ghidra)<br>- Malware Analysis".into()
            }
        );
    }

    #[test]
    fn test_cat_missing_file() {
        let result = run(Command::Cat(Some("nofile.xyz".into())));
        assert_eq!(
            single_line(&result),
            &OutputLineData::Error {
                text: "cat: nofile.xyz: No such file or directory".into()
            }
        );
    }

    #[test]
    fn test_cat_without_operand() {
        let result = run(Command::Cat(None));
        assert_eq!(
            single_line(&result),
            &OutputLineData::Error {
                text: "Usage: cat [filename]".into()
            }
        );
    }

    #[test]
    fn test_whoami() {
        let result = run(Command::Whoami);
        assert_eq!(
            single_line(&result),
            &OutputLineData::Text {
                text: "root".into()
            }
        );
    }

    #[test]
    fn test_clear_directive() {
        let result = run(Command::Clear);
        assert!(result.output.is_empty());
        assert_eq!(result.directive, Directive::ClearOutput);
    }

    #[test]
    fn test_reboot_directive() {
        let result = run(Command::Reboot);
        assert!(result.output.is_empty());
        assert_eq!(result.directive, Directive::Reload);
    }

    #[test]
    fn test_unknown() {
        let result = run(Command::Unknown("frobnicate".into()));
        assert_eq!(
            single_line(&result),
            &OutputLineData::Error {
                text: "Command not found: frobnicate".into()
            }
        );
    }
}
