//! CLI context - bundles settings, flags, and clipboard state.

use std::io::Write;

use passgen::{GeneratedPassword, Generator, InvalidConfig};
use thiserror::Error;
use zeroize::Zeroize;

use super::{CliFlags, ParseError, prompts, quiet};
use crate::clipboard::{Clipboard, ClipboardError};
use crate::settings::Settings;
use crate::tui::print_help;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Config(#[from] InvalidConfig),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<Clipboard>,
    pub flags: CliFlags,
}

impl Context {
    pub fn new(args: &[String]) -> Result<Self, CliError> {
        let flags = super::parse(args)?;
        let settings = settings_from(&flags);
        Ok(Self {
            settings,
            clipboard: None,
            flags,
        })
    }

    pub fn run(&mut self) -> Result<(), CliError> {
        if self.handle_info_flags() {
            return Ok(());
        }
        quiet::set(self.flags.quiet);
        log::debug!("cli settings: {}", self.settings);

        if self.settings.to_clipboard && !self.open_clipboard() {
            return Ok(());
        }
        self.generate_output()
    }

    fn handle_info_flags(&self) -> bool {
        if self.flags.help {
            print_help();
            return true;
        }
        if self.flags.version {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            return true;
        }
        false
    }

    /// Returns false when the user declines the terminal fallback.
    fn open_clipboard(&mut self) -> bool {
        match Clipboard::open() {
            Ok(c) => {
                self.clipboard = Some(c);
                true
            }
            Err(e) => {
                log::warn!("{e}");
                if prompts::clipboard_fallback_prompt() {
                    self.settings.to_clipboard = false;
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Generate passwords and hand them to the clipboard or stdout.
    pub fn generate_output(&mut self) -> Result<(), CliError> {
        let request = self.settings.request();
        let count = self.settings.number_of_passwords;

        let mut generator = Generator::new();
        let passwords = generator.generate_batch(&request, count)?;
        log::info!(
            "generated {count} password(s) of length {}",
            request.length()
        );

        let copy = match self.clipboard.as_mut() {
            Some(clipboard) if self.settings.to_clipboard => {
                Some(move |text: &str| clipboard.copy(text))
            }
            _ => None,
        };
        deliver(&passwords, copy, std::io::stdout().lock())?;
        Ok(())
    }
}

/// Hand passwords to `copy` when given, otherwise write them to `out`.
/// A failed copy is reported and nothing is written.
fn deliver<F, W>(
    passwords: &[GeneratedPassword],
    copy: Option<F>,
    out: W,
) -> Result<(), ClipboardError>
where
    F: FnOnce(&str) -> Result<(), ClipboardError>,
    W: Write,
{
    let Some(copy) = copy else {
        write_passwords(passwords, out);
        return Ok(());
    };

    let mut joined = join_lines(passwords);
    let copied = copy(&joined);
    joined.zeroize();
    match copied {
        Ok(()) => {
            prompts::clipboard_copied(passwords.len());
            Ok(())
        }
        Err(e) => {
            prompts::clipboard_error(&e.to_string());
            Err(e)
        }
    }
}

fn settings_from(flags: &CliFlags) -> Settings {
    let defaults = Settings::default();
    Settings {
        classes: flags.classes(defaults.classes),
        pass_length: flags.length.unwrap_or(defaults.pass_length),
        number_of_passwords: flags.number.unwrap_or(defaults.number_of_passwords).max(1),
        to_clipboard: flags.clipboard,
    }
}

fn join_lines(passwords: &[GeneratedPassword]) -> String {
    passwords
        .iter()
        .map(GeneratedPassword::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}

fn write_passwords<W: Write>(passwords: &[GeneratedPassword], mut out: W) {
    for pass in passwords {
        // A closed pipe just ends output early.
        if out.write_all(pass.as_str().as_bytes()).is_err() || out.write_all(b"\n").is_err() {
            break;
        }
    }
    let _ = out.flush();
}
