//! Clipboard copy.
//!
//! Independent of generation: a failed copy never turns into a generation
//! error, and a generated password is still valid when the copy fails.

use copypasta::{ClipboardContext, ClipboardProvider};
use thiserror::Error;
use zeroize::Zeroize;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("failed to write clipboard: {0}")]
    Write(String),

    #[error("clipboard copy not confirmed: {0}")]
    Verify(String),
}

pub struct Clipboard {
    ctx: ClipboardContext,
}

impl Clipboard {
    pub fn open() -> Result<Self, ClipboardError> {
        ClipboardContext::new()
            .map(|ctx| Self { ctx })
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }

    /// Put `text` on the clipboard and read it back to confirm it landed.
    /// The read-back copy is wiped. The provider takes ownership of the
    /// string it is handed, so that one is out of our reach.
    pub fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.ctx
            .set_contents(text.to_owned())
            .map_err(|e| ClipboardError::Write(e.to_string()))?;
        confirm(text, self.ctx.get_contents().map_err(|e| e.to_string()))?;
        log::debug!("copied {} bytes to clipboard", text.len());
        Ok(())
    }
}

fn confirm(expected: &str, read_back: Result<String, String>) -> Result<(), ClipboardError> {
    let mut contents = read_back.map_err(ClipboardError::Verify)?;
    let matches = contents == expected;
    contents.zeroize();
    if matches {
        Ok(())
    } else {
        Err(ClipboardError::Verify(
            "contents differ from what was copied".to_string(),
        ))
    }
}

/// Open the clipboard and copy in one go.
pub fn copy(text: &str) -> Result<(), ClipboardError> {
    Clipboard::open()?.copy(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_say_which_step_failed() {
        let e = ClipboardError::Unavailable("no display".into());
        assert_eq!(e.to_string(), "clipboard unavailable: no display");
        let e = ClipboardError::Write("denied".into());
        assert_eq!(e.to_string(), "failed to write clipboard: denied");
    }

    #[test]
    fn read_back_must_match() {
        assert!(confirm("aB3$xyz9", Ok("aB3$xyz9".to_string())).is_ok());
        assert!(matches!(
            confirm("aB3$xyz9", Ok("something else".to_string())),
            Err(ClipboardError::Verify(_))
        ));
        assert!(matches!(
            confirm("aB3$xyz9", Err("no owner".to_string())),
            Err(ClipboardError::Verify(msg)) if msg == "no owner"
        ));
    }
}
