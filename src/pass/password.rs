//! Generated password value.

use std::fmt;

use zeroize::Zeroize;

/// A finished password. The buffer is wiped when the value is dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratedPassword(String);

impl GeneratedPassword {
    pub(crate) fn from_ascii(bytes: &[u8]) -> Self {
        GeneratedPassword(bytes.iter().map(|&b| b as char).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// One `*` per character, for displays that hide the secret.
    pub fn masked(&self) -> String {
        "*".repeat(self.0.len())
    }
}

impl AsRef<str> for GeneratedPassword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeneratedPassword(<{} chars>)", self.0.len())
    }
}

impl Drop for GeneratedPassword {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}
