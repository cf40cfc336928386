//! Command-line mode.

mod context;
mod flags;
mod parse;
pub mod prompts;
mod quiet;

use std::process::ExitCode;

pub use context::{CliError, Context};
pub use flags::CliFlags;
pub use parse::{ParseError, parse};
pub use quiet::is_terminal_session;

/// How a run should proceed.
#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    Menu,
    Client,
    /// No arguments, but no terminal for the menu either.
    NoTerminal,
}

/// The menu needs a terminal on stdin and stdout; flags never do.
pub fn mode(args: &[String], terminal: bool) -> Mode {
    match args.len() {
        0 | 1 if terminal => Mode::Menu,
        0 | 1 => Mode::NoTerminal,
        _ => Mode::Client,
    }
}

/// Run with the given arguments and map failures to exit codes:
/// 1 invalid configuration, 2 bad arguments, 3 clipboard failure.
pub fn run(args: Vec<String>) -> ExitCode {
    ExitCode::from(status(&args))
}

/// Refuse the menu without a terminal. Exits like a bad argument.
pub fn no_terminal() -> ExitCode {
    prompts::error("Interactive mode needs a terminal. Pass flags to generate without it.");
    prompts::usage_hint();
    ExitCode::from(2)
}

fn status(args: &[String]) -> u8 {
    let result = Context::new(args).and_then(|mut ctx| ctx.run());

    match result {
        Ok(()) => 0,
        Err(CliError::Config(e)) => {
            log::debug!("rejected configuration: {e}");
            prompts::config_error(&e);
            1
        }
        Err(CliError::Parse(e)) => {
            prompts::error(&e.to_string());
            prompts::usage_hint();
            2
        }
        // Already reported where the copy failed.
        Err(CliError::Clipboard(_)) => 3,
    }
}
