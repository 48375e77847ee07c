use thiserror::Error;

pub const HELP: &str = "\
Commands:
  search [text]   search titles and ingredients, no text lists everything
  refresh         repeat the last search
  open <id>       show a recipe
  close           back to the list
  help            show this text
  quit            exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Refresh,
    Open(u32),
    Close,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command `{0}`, try `help`")]
    Unknown(String),

    #[error("`open` needs a recipe id")]
    MissingId,

    #[error("Invalid recipe id `{0}`")]
    InvalidId(String),
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim_start();
        let (word, rest) = line.split_once(' ').unwrap_or((line, ""));

        match word.trim_end() {
            "search" | "s" => Ok(Command::Search(rest.to_string())),
            "refresh" | "r" => Ok(Command::Refresh),
            "open" | "o" => match rest.trim() {
                "" => Err(CommandError::MissingId),
                id => id
                    .parse()
                    .map(Command::Open)
                    .map_err(|_| CommandError::InvalidId(id.to_string())),
            },
            "close" | "c" => Ok(Command::Close),
            "help" | "h" | "" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_keeps_text() {
        assert_eq!(
            Command::parse("search chicken parm"),
            Ok(Command::Search("chicken parm".to_string()))
        );
        assert_eq!(Command::parse("search"), Ok(Command::Search(String::new())));
        assert_eq!(Command::parse("s  soy "), Ok(Command::Search(" soy ".to_string())));
    }

    #[test]
    fn test_open() {
        assert_eq!(Command::parse("open 3"), Ok(Command::Open(3)));
        assert_eq!(Command::parse("open"), Err(CommandError::MissingId));
        assert_eq!(
            Command::parse("open three"),
            Err(CommandError::InvalidId("three".to_string()))
        );
    }

    #[test]
    fn test_other_commands() {
        assert_eq!(Command::parse("close"), Ok(Command::Close));
        assert_eq!(Command::parse("  refresh"), Ok(Command::Refresh));
        assert_eq!(Command::parse(""), Ok(Command::Help));
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
        assert_eq!(
            Command::parse("delete 1"),
            Err(CommandError::Unknown("delete".to_string()))
        );
    }
}
