//! Per-run generation settings.
//!
//! Collected from flags or the interactive menu and never written to disk.

use std::fmt;

use passgen::{CharacterClass, ClassSet, GenerationRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub classes: ClassSet,
    pub pass_length: usize,
    pub number_of_passwords: usize,
    pub to_clipboard: bool,
}

impl Settings {
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.classes, self.pass_length)
    }

    pub fn use_class(&self, class: CharacterClass) -> bool {
        self.classes.contains(class)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            classes: ClassSet::all(),
            pass_length: 8,
            number_of_passwords: 1,
            to_clipboard: false,
        }
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "classes={} length={} count={} clipboard={}",
            self.classes, self.pass_length, self.number_of_passwords, self.to_clipboard
        )
    }
}
