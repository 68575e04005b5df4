//! Command parsing and execution.
//!
//! This module provides:
//! - `Command` enum for parsed terminal commands
//! - `CommandResult` and `Directive` for execution results
//! - `execute_command` for running a command against the filesystem
//!
//! # Architecture
//!
//! A [`ParsedCommand`] is mapped onto the `Command` enum by exact match on
//! its lower-cased name, with `Unknown` as the default arm. Execution never
//! fails: bad operands and unknown names become error lines.

mod execute;
mod result;

pub use execute::execute_command;
pub use result::{CommandResult, Directive};

use crate::parser::ParsedCommand;

/// Parsed terminal command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Ls,
    /// `None` when no operand was given
    Cat(Option<String>),
    Clear,
    Whoami,
    Reboot,
    Unknown(String),
}

impl Command {
    /// Commands listed by `help`, in order. `help` itself is not listed.
    pub fn names() -> &'static [&'static str] {
        &["ls", "cat", "clear", "whoami", "reboot"]
    }

    /// Parse command from a lower-cased name (as produced by
    /// [`parse_input`](crate::parser::parse_input)) and arguments.
    pub fn parse(name: &str, args: &[String]) -> Self {
        match name {
            "help" => Self::Help,
            "ls" => Self::Ls,
            "cat" => Self::Cat(args.first().cloned()),
            "clear" => Self::Clear,
            "whoami" => Self::Whoami,
            "reboot" => Self::Reboot,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl From<&ParsedCommand> for Command {
    fn from(parsed: &ParsedCommand) -> Self {
        Self::parse(&parsed.name, &parsed.args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_input;

    fn args(strs: &[&str]) -> Vec<String> {
        strs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_simple() {
        assert_eq!(Command::parse("help", &[]), Command::Help);
        assert_eq!(Command::parse("ls", &[]), Command::Ls);
        assert_eq!(Command::parse("clear", &[]), Command::Clear);
        assert_eq!(Command::parse("whoami", &[]), Command::Whoami);
        assert_eq!(Command::parse("reboot", &[]), Command::Reboot);
    }

    #[test]
    fn test_parse_cat() {
        assert!(matches!(
            Command::parse("cat", &args(&["about.txt"])),
            Command::Cat(Some(ref f)) if f == "about.txt"
        ));
        assert_eq!(Command::parse("cat", &[]), Command::Cat(None));
    }

    #[test]
    fn test_parse_cat_ignores_extra_operands() {
        assert!(matches!(
            Command::parse("cat", &args(&["a", "b"])),
            Command::Cat(Some(ref f)) if f == "a"
        ));
    }

    #[test]
    fn test_parse_ignores_args_for_simple_commands() {
        assert_eq!(Command::parse("ls", &args(&["-la"])), Command::Ls);
        assert_eq!(Command::parse("whoami", &args(&["x"])), Command::Whoami);
    }

    #[test]
    fn test_case_folding_happens_in_parser() {
        let from_input = |line: &str| Command::from(&parse_input(line).unwrap());
        assert_eq!(from_input("LS"), Command::Ls);
        assert_eq!(from_input("CleAr"), Command::Clear);
        assert_eq!(from_input("HELP"), Command::Help);
        assert!(matches!(from_input("Pwd"), Command::Unknown(ref c) if c == "pwd"));
        // `parse` itself matches exactly
        assert!(matches!(Command::parse("LS", &[]), Command::Unknown(_)));
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(
            Command::parse("frobnicate", &[]),
            Command::Unknown(ref c) if c == "frobnicate"
        ));
    }

    #[test]
    fn test_no_aliases() {
        assert!(matches!(Command::parse("cls", &[]), Command::Unknown(_)));
        assert!(matches!(Command::parse("?", &[]), Command::Unknown(_)));
    }

    #[test]
    fn test_from_parsed() {
        let parsed = ParsedCommand {
            name: "cat".into(),
            args: args(&["skills.md"]),
        };
        assert_eq!(
            Command::from(&parsed),
            Command::Cat(Some("skills.md".into()))
        );
    }

    #[test]
    fn test_command_names() {
        let names = Command::names();
        assert_eq!(names, ["ls", "cat", "clear", "whoami", "reboot"]);
        for name in names {
            assert!(!matches!(Command::parse(name, &[]), Command::Unknown(_)));
        }
    }
}
