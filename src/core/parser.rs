//! Command-line tokenizer.
//!
//! Input is split on runs of whitespace. There is no quoting, escaping or
//! expansion: every token, separators and special characters included, is
//! passed through verbatim.

/// A command name and its positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
}

/// Tokenize one input line.
///
/// Returns `None` when the line holds nothing but whitespace.
pub fn parse_line(input: &str) -> Option<ParsedCommand> {
    let mut tokens = input.split_whitespace().map(str::to_string);
    let name = tokens.next()?;
    Some(ParsedCommand {
        name,
        args: tokens.collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   \t "), None);
    }

    #[test]
    fn test_name_only() {
        let cmd = parse_line("pwd").unwrap();
        assert_eq!(cmd.name, "pwd");
        assert!(cmd.args.is_empty());
    }

    #[test]
    fn test_whitespace_runs() {
        let cmd = parse_line("  ls \t  /home//user   extra ").unwrap();
        assert_eq!(cmd.name, "ls");
        assert_eq!(cmd.args, ["/home//user", "extra"]);
    }

    #[test]
    fn test_no_quoting() {
        let cmd = parse_line("mkdir \"my dir\"").unwrap();
        assert_eq!(cmd.args, ["\"my", "dir\""]);
    }
}
