//! Raw mode RAII guard.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io;

/// Holds the terminal in raw mode until dropped or released.
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { active: true })
    }

    /// Return to cooked mode early, e.g. before printing a trailing newline.
    pub fn release(&mut self) {
        if std::mem::take(&mut self.active) {
            let _ = disable_raw_mode();
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.release();
    }
}
