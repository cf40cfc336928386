use passgen::{CharacterClass, ClassSet};
use thiserror::Error;

use super::CliFlags;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Invalid character types: {0} (use letters from 'ulds')")]
    InvalidClasses(String),

    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "--no-upper" => flags.excluded.insert(CharacterClass::Uppercase),
            "--no-lower" => flags.excluded.insert(CharacterClass::Lowercase),
            "--no-digits" => flags.excluded.insert(CharacterClass::Digit),
            "--no-symbols" => flags.excluded.insert(CharacterClass::Symbol),
            "-l" | "--length" => {
                let value = value_of(args, &mut i)?;
                flags.length = Some(number(value)?);
            }
            "-n" | "--number" => {
                let value = value_of(args, &mut i)?;
                flags.number = Some(number(value)?);
            }
            "--only" => {
                let value = value_of(args, &mut i)?;
                flags.only = Some(classes(value)?);
            }
            _ => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn value_of<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}

fn number(value: &str) -> Result<usize, ParseError> {
    value
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidNumber(value.to_string()))
}

/// `"uld"` style class letters. An empty string selects nothing.
fn classes(value: &str) -> Result<ClassSet, ParseError> {
    value
        .chars()
        .map(|c| CharacterClass::from_code(c.to_ascii_lowercase()))
        .collect::<Option<ClassSet>>()
        .ok_or_else(|| ParseError::InvalidClasses(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use CharacterClass::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("passgen")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_length_and_number() {
        let flags = parse(&args(&["-l", "20", "--number", "3"])).unwrap();
        assert_eq!(flags.length, Some(20));
        assert_eq!(flags.number, Some(3));
        assert!(!flags.clipboard);
    }

    #[test]
    fn exclusions_remove_classes() {
        let flags = parse(&args(&["--no-symbols", "--no-digits"])).unwrap();
        let classes = flags.classes(ClassSet::all());
        assert_eq!(classes.iter().collect::<Vec<_>>(), vec![Uppercase, Lowercase]);
    }

    #[test]
    fn only_replaces_base_selection() {
        let flags = parse(&args(&["--only", "dS"])).unwrap();
        let classes = flags.classes(ClassSet::all());
        assert_eq!(classes.iter().collect::<Vec<_>>(), vec![Digit, Symbol]);
    }

    #[test]
    fn only_empty_selects_nothing() {
        let flags = parse(&args(&["--only", ""])).unwrap();
        assert!(flags.classes(ClassSet::all()).is_empty());
    }

    #[test]
    fn excluding_everything_selects_nothing() {
        let flags = parse(&args(&[
            "--no-upper",
            "--no-lower",
            "--no-digits",
            "--no-symbols",
        ]))
        .unwrap();
        assert!(flags.classes(ClassSet::all()).is_empty());
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            parse(&args(&["-l", "abc"])).unwrap_err(),
            ParseError::InvalidNumber("abc".into())
        );
        assert_eq!(
            parse(&args(&["-l", "-1"])).unwrap_err(),
            ParseError::InvalidNumber("-1".into())
        );
        assert_eq!(
            parse(&args(&["--length"])).unwrap_err(),
            ParseError::MissingValue("--length".into())
        );
        assert_eq!(
            parse(&args(&["--only", "ux"])).unwrap_err(),
            ParseError::InvalidClasses("ux".into())
        );
        assert_eq!(
            parse(&args(&["--hex"])).unwrap_err(),
            ParseError::UnknownArg("--hex".into())
        );
    }

    #[test]
    fn flags_toggle() {
        let flags = parse(&args(&["-b", "-q", "-h", "-v"])).unwrap();
        assert!(flags.clipboard && flags.quiet && flags.help && flags.version);
    }
}
