//! Request validation.
//!
//! Runs before any entropy is drawn. A request that fails here produces no
//! password and costs no randomness.

use thiserror::Error;

use super::class::ClassSet;
use super::request::{GenerationRequest, MAX_LENGTH, MIN_LENGTH};

/// Why a request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidConfig {
    #[error("at least one character type must be selected")]
    NoCharacterClassSelected,

    #[error(
        "password length must be between {min} and {max} characters (got {length})",
        min = MIN_LENGTH,
        max = MAX_LENGTH
    )]
    LengthOutOfRange { length: usize },
}

impl GenerationRequest {
    /// Check this request before anything is drawn.
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        validate(self.classes(), self.length())
    }
}

/// Check raw settings. Class selection is checked first, so an empty
/// selection is reported as such whatever the length.
pub fn validate(classes: ClassSet, length: usize) -> Result<(), InvalidConfig> {
    if classes.is_empty() {
        return Err(InvalidConfig::NoCharacterClassSelected);
    }
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Err(InvalidConfig::LengthOutOfRange { length });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::class::CharacterClass::*;

    #[test]
    fn accepts_bounds() {
        let classes: ClassSet = [Digit].into();
        assert_eq!(validate(classes, 8), Ok(()));
        assert_eq!(validate(classes, 64), Ok(()));
        assert_eq!(validate(classes, 20), Ok(()));
    }

    #[test]
    fn rejects_lengths_outside_bounds() {
        let classes = ClassSet::all();
        for length in [0, 1, 7, 65, 100, 1000, usize::MAX] {
            assert_eq!(
                validate(classes, length),
                Err(InvalidConfig::LengthOutOfRange { length })
            );
        }
    }

    #[test]
    fn empty_selection_wins_over_length() {
        for length in [0, 7, 10, 64, 65] {
            assert_eq!(
                validate(ClassSet::empty(), length),
                Err(InvalidConfig::NoCharacterClassSelected)
            );
        }
    }

    #[test]
    fn request_validates_its_own_settings() {
        let request = GenerationRequest::new([Uppercase, Lowercase].into(), 7);
        assert_eq!(
            request.validate(),
            Err(InvalidConfig::LengthOutOfRange { length: 7 })
        );
    }

    #[test]
    fn messages_name_the_bounds() {
        let msg = InvalidConfig::LengthOutOfRange { length: 65 }.to_string();
        assert!(msg.contains("between 8 and 64"));
        let msg = InvalidConfig::NoCharacterClassSelected.to_string();
        assert!(msg.contains("at least one character type"));
    }
}
