//! Password generation.
//!
//! Guaranteed characters first (one per selected class), then uniform fill
//! from the whole pool, then a full shuffle so positions reveal nothing about
//! which characters were guaranteed.

use rand::CryptoRng;
use zeroize::Zeroize;

use super::charset::CharacterPool;
use super::class::ClassSet;
use super::password::GeneratedPassword;
use super::request::GenerationRequest;
use super::validate::InvalidConfig;
use crate::entropy::{self, SystemEntropy};

/// Runs the generation pipeline against one entropy source.
pub struct Generator<R = SystemEntropy> {
    rng: R,
}

impl Generator<SystemEntropy> {
    /// Generator backed by the operating system CSPRNG.
    pub fn new() -> Self {
        Self {
            rng: SystemEntropy::new(),
        }
    }
}

impl Default for Generator<SystemEntropy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CryptoRng> Generator<R> {
    /// Generator over a caller-supplied source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate one password. Fails only if the request is invalid, in which
    /// case no entropy is drawn.
    pub fn generate(
        &mut self,
        request: &GenerationRequest,
    ) -> Result<GeneratedPassword, InvalidConfig> {
        request.validate()?;

        let pool = CharacterPool::build(request.classes());
        let guaranteed = select_guaranteed(request.classes(), &mut self.rng);
        Ok(complete(guaranteed, &pool, request.length(), &mut self.rng))
    }

    /// Generate `count` independent passwords for the same request.
    pub fn generate_batch(
        &mut self,
        request: &GenerationRequest,
        count: usize,
    ) -> Result<Vec<GeneratedPassword>, InvalidConfig> {
        request.validate()?;
        (0..count).map(|_| self.generate(request)).collect()
    }
}

/// One character from each selected class, in canonical class order.
pub fn select_guaranteed<R: CryptoRng + ?Sized>(classes: ClassSet, rng: &mut R) -> Vec<u8> {
    classes
        .iter()
        .map(|class| entropy::pick(&mut *rng, class.chars()))
        .collect()
}

/// Fill up to `target_length` from the pool, then shuffle everything.
pub fn complete<R: CryptoRng + ?Sized>(
    mut guaranteed: Vec<u8>,
    pool: &CharacterPool,
    target_length: usize,
    rng: &mut R,
) -> GeneratedPassword {
    debug_assert!(guaranteed.len() <= target_length);
    let remaining = target_length.saturating_sub(guaranteed.len());

    let mut chars = Vec::with_capacity(guaranteed.len() + remaining);
    chars.extend_from_slice(&guaranteed);
    guaranteed.zeroize();

    for _ in 0..remaining {
        chars.push(entropy::pick(rng, pool.as_bytes()));
    }

    entropy::shuffle(rng, &mut chars);

    let password = GeneratedPassword::from_ascii(&chars);
    chars.zeroize();
    password
}
