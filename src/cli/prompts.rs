//! User-facing messages for CLI output.
//!
//! Passwords go to stdout; everything here goes to stderr so piping the
//! output captures only the secrets.

use std::io::Write;

use passgen::{InvalidConfig, MAX_LENGTH, MIN_LENGTH};

use super::quiet;

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Message shown for a rejected configuration.
pub fn config_message(err: &InvalidConfig) -> String {
    match err {
        InvalidConfig::NoCharacterClassSelected => {
            "Select at least one character type.".to_string()
        }
        InvalidConfig::LengthOutOfRange { .. } => {
            format!("Password length must be between {MIN_LENGTH} and {MAX_LENGTH} characters.")
        }
    }
}

/// Yellow warning on stderr, suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red error on stderr, always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn config_error(err: &InvalidConfig) {
    error(&config_message(err));
}

pub fn usage_hint() {
    eprintln!("Run with --help for usage.");
}

pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        if count == 1 {
            eprintln!("*** -COPIED TO CLIPBOARD- ***");
        } else {
            eprintln!("*** -{count} PASSWORDS COPIED TO CLIPBOARD- ***");
        }
    }
}

pub fn clipboard_error(err: &str) {
    error(&format!("Clipboard copy failed: {err}"));
}

/// Ask whether to print to the terminal when the clipboard cannot be
/// opened. Quiet or non-interactive runs fall back without asking.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        warn("Clipboard unavailable, printing to terminal.");
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    if accepts(&input) {
        eprintln!();
        return true;
    }

    eprintln!("\nAborted.");
    false
}

/// Default-yes answer check.
fn accepts(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "" | "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_messages() {
        assert_eq!(
            config_message(&InvalidConfig::NoCharacterClassSelected),
            "Select at least one character type."
        );
        assert_eq!(
            config_message(&InvalidConfig::LengthOutOfRange { length: 3 }),
            "Password length must be between 8 and 64 characters."
        );
    }

    #[test]
    fn fallback_answers() {
        assert!(accepts("\n"));
        assert!(accepts("Y\n"));
        assert!(accepts(" yes "));
        assert!(!accepts("n\n"));
        assert!(!accepts("nope"));
    }
}
