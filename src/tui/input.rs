//! Single-line input in raw mode.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// What a key did to the line being edited.
#[derive(Debug, PartialEq, Eq)]
pub enum Edit {
    Continue,
    Submit,
    Cancel,
    Interrupt,
}

/// Line buffer with a cursor. Keys: Esc/Ctrl+Q cancel, Ctrl+U clear,
/// Ctrl+C interrupt, arrows/Home/End move, Backspace/Delete erase.
pub struct LineEditor {
    chars: Vec<char>,
    cursor: usize,
    digits_only: bool,
}

impl LineEditor {
    pub fn new(initial: &str, digits_only: bool) -> Self {
        let chars: Vec<char> = initial.chars().collect();
        Self {
            cursor: chars.len(),
            chars,
            digits_only,
        }
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Cursor position in characters from the start of the line.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn handle(&mut self, key: KeyEvent) -> Edit {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => return Edit::Interrupt,
            KeyCode::Char('q') if ctrl => return Edit::Cancel,
            KeyCode::Char('u') if ctrl => {
                self.chars.clear();
                self.cursor = 0;
            }
            KeyCode::Esc => return Edit::Cancel,
            KeyCode::Enter => return Edit::Submit,
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                self.chars.remove(self.cursor);
            }
            KeyCode::Delete if self.cursor < self.chars.len() => {
                self.chars.remove(self.cursor);
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.chars.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.chars.len(),
            KeyCode::Char(c) if !ctrl && (!self.digits_only || c.is_ascii_digit()) => {
                self.chars.insert(self.cursor, c);
                self.cursor += 1;
            }
            _ => {}
        }
        Edit::Continue
    }
}

fn redraw(prompt: &str, editor: &LineEditor) {
    print!("\r{prompt}: {}\x1b[K", editor.text());
    print!("\x1b[{}G", prompt.chars().count() + 3 + editor.cursor());
    flush();
}

/// Result of one prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum Input<T> {
    Value(T),
    /// Esc or Ctrl+Q. Back to the menu.
    Cancelled,
    /// Ctrl+C, or no terminal to read from. The menu should end.
    Closed,
}

fn read_line(prompt: &str, initial: &str, digits_only: bool) -> Input<String> {
    let mut editor = LineEditor::new(initial, digits_only);

    let mut guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(e) => {
            log::warn!("raw mode unavailable: {e}");
            return Input::Closed;
        }
    };

    redraw(prompt, &editor);

    let outcome = loop {
        match read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => match editor.handle(key) {
                Edit::Continue => redraw(prompt, &editor),
                other => break other,
            },
            Ok(_) => {}
            Err(e) => {
                log::warn!("terminal read failed: {e}");
                break Edit::Interrupt;
            }
        }
    };

    guard.release();
    println!();

    match outcome {
        Edit::Submit => Input::Value(editor.text()),
        Edit::Interrupt => {
            reset_terminal();
            Input::Closed
        }
        _ => Input::Cancelled,
    }
}

pub fn get_editable_input(prompt: &str, initial: &str) -> Input<String> {
    read_line(prompt, initial, false)
}

/// Digits only. An empty line counts as cancelled.
pub fn get_numeric_input(prompt: &str, initial: usize) -> Input<usize> {
    parse_number(read_line(prompt, &initial.to_string(), true))
}

fn parse_number(input: Input<String>) -> Input<usize> {
    match input {
        Input::Value(text) => text.parse().map_or(Input::Cancelled, Input::Value),
        Input::Cancelled => Input::Cancelled,
        Input::Closed => Input::Closed,
    }
}
