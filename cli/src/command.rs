//! Line commands understood by the terminal session.

use food_core::Field;
use thiserror::Error;

pub const HELP: &str = "\
commands:
  list | refresh             reload the list from the store
  show                       print the list and the form
  set <field> <text>         fill a form field (name, description, image)
  submit                     add or update, depending on the form mode
  edit <n>                   load item n into the form
  delete <n>                 delete item n after confirmation
  cancel                     leave edit mode and clear the form
  help                       this text
  quit                       exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Refresh,
    Show,
    Set(Field, String),
    Submit,
    Edit(usize),
    Delete(usize),
    Cancel,
    Help,
    Quit,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command `{0}`")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Command::Empty);
        }
        let (word, rest) = split_word(line);

        match word.to_ascii_lowercase().as_str() {
            "list" | "refresh" | "l" => Ok(Command::Refresh),
            "show" => Ok(Command::Show),
            "set" => {
                let (field, value) = split_word(rest);
                let field = parse_field(field).ok_or(ParseError::Usage("set <name|description|image> <text>"))?;
                Ok(Command::Set(field, value.to_string()))
            }
            "submit" | "save" => Ok(Command::Submit),
            "edit" | "e" => parse_position(rest, "edit <n>").map(Command::Edit),
            "delete" | "d" => parse_position(rest, "delete <n>").map(Command::Delete),
            "cancel" => Ok(Command::Cancel),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Err(ParseError::Unknown(word.to_string())),
        }
    }
}

/// First whitespace-delimited word and the remainder with leading blanks
/// removed.
fn split_word(text: &str) -> (&str, &str) {
    text.split_once(char::is_whitespace)
        .map_or((text, ""), |(word, rest)| (word, rest.trim_start()))
}

fn parse_field(word: &str) -> Option<Field> {
    match word.to_ascii_lowercase().as_str() {
        "name" => Some(Field::Name),
        "description" | "desc" => Some(Field::Description),
        "image" | "imageurl" | "url" => Some(Field::ImageUrl),
        _ => None,
    }
}

fn parse_position(rest: &str, usage: &'static str) -> Result<usize, ParseError> {
    rest.trim()
        .parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or(ParseError::Usage(usage))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_is_empty() {
        assert_eq!(Command::parse("   "), Ok(Command::Empty));
    }

    #[test]
    fn set_keeps_rest_of_line_as_value() {
        assert_eq!(
            Command::parse("set name  Pizza margherita"),
            Ok(Command::Set(Field::Name, "Pizza margherita".to_string()))
        );
        assert_eq!(
            Command::parse("SET image http://img/p.png"),
            Ok(Command::Set(Field::ImageUrl, "http://img/p.png".to_string()))
        );
    }

    #[test]
    fn set_without_value_clears_field() {
        assert_eq!(
            Command::parse("set desc"),
            Ok(Command::Set(Field::Description, String::new()))
        );
    }

    #[test]
    fn set_unknown_field_is_usage_error() {
        assert!(matches!(Command::parse("set price 3"), Err(ParseError::Usage(_))));
    }

    #[test]
    fn positions_are_one_based() {
        assert_eq!(Command::parse("edit 2"), Ok(Command::Edit(2)));
        assert_eq!(Command::parse("d 1"), Ok(Command::Delete(1)));
        assert!(matches!(Command::parse("edit 0"), Err(ParseError::Usage(_))));
        assert!(matches!(Command::parse("delete x"), Err(ParseError::Usage(_))));
        assert!(matches!(Command::parse("delete"), Err(ParseError::Usage(_))));
    }

    #[test]
    fn unknown_word_is_reported() {
        assert_eq!(
            Command::parse("frobnicate now"),
            Err(ParseError::Unknown("frobnicate".to_string()))
        );
    }

    #[test]
    fn aliases() {
        assert_eq!(Command::parse("refresh"), Ok(Command::Refresh));
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
        assert_eq!(Command::parse("save"), Ok(Command::Submit));
    }
}
