//! Input line parsing.
//!
//! The terminal has no quoting, variables or pipes: a line is trimmed and
//! split on whitespace. The first word names the command and is matched
//! case-insensitively; the remaining words are kept verbatim.

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Lower-cased command name
    pub name: String,
    pub args: Vec<String>,
}

/// Parse one input line. Returns `None` for empty or whitespace-only input.
pub fn parse_input(input: &str) -> Option<ParsedCommand> {
    let mut words = input.split_whitespace();
    let name = words.next()?.to_lowercase();
    let args = words.map(str::to_string).collect();
    Some(ParsedCommand { name, args })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_input(""), None);
        assert_eq!(parse_input("   \t  "), None);
    }

    #[test]
    fn test_name_only() {
        let cmd = parse_input("ls").unwrap();
        assert_eq!(cmd.name, "ls");
        assert!(cmd.args.is_empty());
    }

    #[test]
    fn test_name_is_lowercased() {
        assert_eq!(parse_input("WhoAmI").unwrap().name, "whoami");
    }

    #[test]
    fn test_args_keep_case() {
        let cmd = parse_input("CAT About.TXT").unwrap();
        assert_eq!(cmd.name, "cat");
        assert_eq!(cmd.args, vec!["About.TXT"]);
    }

    #[test]
    fn test_collapses_whitespace() {
        let cmd = parse_input("  cat \t about.txt   extra ").unwrap();
        assert_eq!(cmd.name, "cat");
        assert_eq!(cmd.args, vec!["about.txt", "extra"]);
    }
}
