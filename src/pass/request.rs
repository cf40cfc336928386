//! Generation requests.

use super::class::ClassSet;

/// Shortest password the generator will produce.
pub const MIN_LENGTH: usize = 8;
/// Longest password the generator will produce.
pub const MAX_LENGTH: usize = 64;

/// What to generate: the classes that must appear and the exact length.
///
/// Building a request never checks or adjusts anything; out-of-range values
/// are reported by [`validate`](super::validate::validate) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    classes: ClassSet,
    length: usize,
}

impl GenerationRequest {
    pub const fn new(classes: ClassSet, length: usize) -> Self {
        Self { classes, length }
    }

    pub const fn classes(&self) -> ClassSet {
        self.classes
    }

    pub const fn length(&self) -> usize {
        self.length
    }
}
