//! Quiet mode and terminal detection for CLI prompts.

use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Whether stdin is a terminal someone can answer prompts on.
pub fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

/// Prompts are skipped in quiet mode and when nobody is at a terminal.
pub fn skip_prompt() -> bool {
    enabled() || !is_interactive()
}

/// Stdin and stdout both on a terminal, as the interactive menu needs.
pub fn is_terminal_session() -> bool {
    unsafe { libc::isatty(0) == 1 && libc::isatty(1) == 1 }
}
