//! Interactive menu state and command handling.

use passgen::{CharacterClass, GeneratedPassword};

use super::{
    Input, enter_prompt, get_editable_input, get_numeric_input, print_help, print_menu,
};
use crate::cli::prompts::config_message;
use crate::clipboard::{self, ClipboardError};
use crate::settings::Settings;
use crate::terminal::{clear, reset_terminal};

/// Status line under the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Ready,
    Generated(usize),
    Copied,
    Error(String),
}

/// One line of menu input, decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Generate,
    Toggle(CharacterClass),
    EditLength,
    ToggleVisibility,
    Copy,
    Reset,
    Help,
    Quit,
    Invalid,
}

impl Command {
    pub fn parse(input: &str) -> Command {
        match input.trim().to_lowercase().as_str() {
            "" | "g" => Command::Generate,
            "1" => Command::Toggle(CharacterClass::Uppercase),
            "2" => Command::Toggle(CharacterClass::Lowercase),
            "3" => Command::Toggle(CharacterClass::Digit),
            "4" => Command::Toggle(CharacterClass::Symbol),
            "5" => Command::EditLength,
            "v" => Command::ToggleVisibility,
            "c" => Command::Copy,
            "r" => Command::Reset,
            "h" | "help" => Command::Help,
            "q" | "quit" => Command::Quit,
            _ => Command::Invalid,
        }
    }
}

use LoopAction::*;
#[derive(Debug, PartialEq, Eq)]
pub enum LoopAction {
    Break,
    Continue,
}

/// Everything the menu shows between key presses.
pub struct App {
    pub settings: Settings,
    password: Option<GeneratedPassword>,
    visible: bool,
    pub status: Status,
}

impl App {
    pub fn new() -> Self {
        Self {
            settings: Settings::default(),
            password: None,
            visible: false,
            status: Status::Ready,
        }
    }

    /// Generate from the current settings. A rejected configuration leaves
    /// the previous password in place and reports why.
    pub fn generate(&mut self) {
        match passgen::generate(self.settings.classes, self.settings.pass_length) {
            Ok(password) => {
                log::debug!("generated password of length {}", password.len());
                self.status = Status::Generated(password.len());
                self.password = Some(password);
            }
            Err(e) => {
                log::debug!("rejected configuration: {e}");
                self.status = Status::Error(config_message(&e));
            }
        }
    }

    pub fn toggle_class(&mut self, class: CharacterClass) {
        self.settings.classes.toggle(class);
    }

    /// Stored as entered; range problems surface on the next generate.
    pub fn set_length(&mut self, length: usize) {
        self.settings.pass_length = length;
    }

    /// Show or hide the current password. No-op before the first one.
    pub fn toggle_visibility(&mut self) {
        if self.password.is_some() {
            self.visible = !self.visible;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn copy_with<F>(&mut self, copy: F)
    where
        F: FnOnce(&str) -> Result<(), ClipboardError>,
    {
        let Some(password) = &self.password else {
            self.status = Status::Error("No password to copy.".to_string());
            return;
        };
        self.status = match copy(password.as_str()) {
            Ok(()) => Status::Copied,
            Err(e) => {
                log::warn!("{e}");
                Status::Error(format!("Failed to copy to clipboard: {e}"))
            }
        };
    }

    pub fn reset(&mut self) {
        self.settings = Settings::default();
        self.status = Status::Ready;
    }

    /// Password as it should appear on screen, masked unless revealed.
    pub fn displayed_password(&self) -> Option<String> {
        self.password.as_ref().map(|p| {
            if self.visible {
                p.as_str().to_string()
            } else {
                p.masked()
            }
        })
    }

    /// Handle one line from the main prompt. A closed input ends the menu so
    /// the caller can drop the app, and the password with it.
    pub fn step(&mut self, input: Input<String>) -> LoopAction {
        match input {
            Input::Value(line) => self.apply(Command::parse(&line)),
            Input::Cancelled => Continue,
            Input::Closed => Break,
        }
    }

    fn apply(&mut self, command: Command) -> LoopAction {
        match command {
            Command::Generate => self.generate(),
            Command::Toggle(class) => self.toggle_class(class),
            Command::EditLength => {
                match get_numeric_input("Enter new password length", self.settings.pass_length) {
                    Input::Value(len) => self.set_length(len),
                    Input::Cancelled => {}
                    Input::Closed => return Break,
                }
            }
            Command::ToggleVisibility => self.toggle_visibility(),
            Command::Copy => self.copy_with(clipboard::copy),
            Command::Reset => self.reset(),
            Command::Help => {
                clear();
                print_help();
                if get_editable_input("Press Enter to return", "") == Input::Closed {
                    return Break;
                }
            }
            Command::Quit => return Break,
            Command::Invalid => {
                self.status = Status::Error("Invalid option.".to_string());
            }
        }
        Continue
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

pub fn gen_main_menu() {
    reset_terminal();
    let mut app = App::new();
    log::info!("interactive mode, settings: {}", app.settings);

    loop {
        clear();
        print_menu(&app);

        if let Break = app.step(get_editable_input(enter_prompt(), "")) {
            clear();
            break;
        }
    }
}
