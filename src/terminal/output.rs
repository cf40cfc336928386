//! Terminal output utilities.
//!
//! Box drawing and ANSI helpers. Line builders return strings so layout can
//! be checked without a terminal; the `box_*` printers wrap them.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and reset colours.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

pub fn print_success(msg: &str) {
    println!("{GREEN}{msg}{RESET}");
}

// ============================================================================
// Box Drawing
// ============================================================================

/// Wide enough for the longest password plus its two-space indent.
pub const BOX_WIDTH: usize = passgen::MAX_LENGTH + 6;
const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// ┌─ Title ──────────┐
pub fn top_line(title: &str) -> String {
    if title.is_empty() {
        return format!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    }
    let title_part = format!("─ {title} ");
    let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
    format!("┌{title_part}{}┐", "─".repeat(remaining))
}

/// │ content          │
pub fn content_line(content: &str) -> String {
    let padding = INNER_WIDTH.saturating_sub(display_width(content));
    format!("│ {content}{} │", " ".repeat(padding))
}

/// │     content      │
pub fn centered_line(content: &str) -> String {
    let total = INNER_WIDTH.saturating_sub(display_width(content));
    let left = total / 2;
    format!(
        "│ {}{content}{} │",
        " ".repeat(left),
        " ".repeat(total - left)
    )
}

pub fn box_top(title: &str) {
    println!("{}", top_line(title));
}

pub fn box_line(content: &str) {
    println!("{}", content_line(content));
}

pub fn box_line_center(content: &str) {
    println!("{}", centered_line(content));
}

pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

pub fn print_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

/// Help option row: flag column then a description wrapped to fit.
pub fn box_opt(flag: &str, desc: &str) {
    for line in option_lines(flag, desc) {
        println!("{line}");
    }
}

const FLAG_COL: usize = 24;

fn option_lines(flag: &str, desc: &str) -> Vec<String> {
    let desc_col = INNER_WIDTH - FLAG_COL;
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in desc.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= desc_col {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let lead = if i == 0 { flag } else { "" };
            content_line(&format!("{lead:<width$}{text}", width = FLAG_COL))
        })
        .collect()
}

/// Visible width, skipping ANSI escape sequences.
pub fn display_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

/// `[x]` or `[ ]`.
pub fn checkbox(on: bool) -> &'static str {
    if on { "[x]" } else { "[ ]" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_password_keeps_border() {
        let shown = format!("  {}", "#".repeat(passgen::MAX_LENGTH));
        let line = content_line(&shown);
        assert_eq!(line.chars().count(), BOX_WIDTH);
        assert!(line.ends_with(" │"));
    }

    #[test]
    fn lines_fill_box_width() {
        assert_eq!(top_line("").chars().count(), BOX_WIDTH);
        assert_eq!(top_line("Password Generator").chars().count(), BOX_WIDTH);
        assert_eq!(content_line("hello").chars().count(), BOX_WIDTH);
        assert_eq!(centered_line("hi").chars().count(), BOX_WIDTH);
    }

    #[test]
    fn width_ignores_escapes() {
        assert_eq!(display_width("plain"), 5);
        assert_eq!(display_width(&format!("{RED}err{RESET}")), 3);
        let styled = content_line(&format!("{UNDERLINE}Length{RESET}:"));
        assert_eq!(display_width(&styled), BOX_WIDTH);
    }

    #[test]
    fn overlong_content_is_not_truncated() {
        let long = "x".repeat(BOX_WIDTH * 2);
        assert!(content_line(&long).contains(&long));
    }

    #[test]
    fn options_wrap_under_description_column() {
        let lines = option_lines(
            "  -l, --length <N>",
            "Characters per password, between 8 and 64. Defaults to 8 when the flag is not given.",
        );
        assert!(lines.len() > 1);
        assert!(lines[0].contains("-l, --length"));
        for line in &lines {
            assert_eq!(line.chars().count(), BOX_WIDTH);
        }
    }

    #[test]
    fn checkbox_marks() {
        assert_eq!(checkbox(true), "[x]");
        assert_eq!(checkbox(false), "[ ]");
    }
}
