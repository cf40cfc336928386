//! Secure entropy source and the unbiased draws built on it.
//!
//! Every random decision in password generation goes through this module:
//! picking a character from a set, and permuting the finished sequence.
//! Callers pass the source in explicitly; nothing here holds global state.

mod system;

use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};

pub use system::SystemEntropy;

// =============================================================================
// Draws
// =============================================================================

/// Draw an index in `0..len`, uniformly.
///
/// Built with rand's `unbiased` feature, so range sampling rejects the
/// partial zone instead of accepting a small bias.
///
/// # Panics
///
/// Panics if `len` is zero.
#[inline]
pub fn uniform_index<R: CryptoRng + ?Sized>(rng: &mut R, len: usize) -> usize {
    rng.random_range(..len)
}

/// Pick one byte from `chars`, uniformly.
#[inline]
pub fn pick<R: CryptoRng + ?Sized>(rng: &mut R, chars: &[u8]) -> u8 {
    chars[uniform_index(rng, chars.len())]
}

/// Fisher-Yates shuffle with every swap index drawn from `rng`.
pub fn shuffle<R: CryptoRng + ?Sized, T>(rng: &mut R, items: &mut [T]) {
    items.shuffle(rng);
}
