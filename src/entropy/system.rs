//! Operating-system entropy.

use rand::rand_core::UnwrapErr;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore, TryRngCore};

/// Handle on the operating system CSPRNG (`getrandom` on Linux).
///
/// Each value is independent; a generator owns one and threads it through
/// every stage of a generation call.
pub struct SystemEntropy(UnwrapErr<OsRng>);

impl SystemEntropy {
    pub fn new() -> Self {
        SystemEntropy(OsRng.unwrap_err())
    }

    /// Short description for status displays.
    pub fn source_name() -> &'static str {
        "OS CSPRNG"
    }
}

impl Default for SystemEntropy {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for SystemEntropy {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.0.fill_bytes(dst)
    }
}

impl CryptoRng for SystemEntropy {}
