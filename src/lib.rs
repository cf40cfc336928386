//! Password generation with guaranteed character-class coverage.
//!
//! ```
//! use passgen::{CharacterClass, ClassSet};
//!
//! let classes: ClassSet = [CharacterClass::Uppercase, CharacterClass::Digit].into();
//! let password = passgen::generate(classes, 12).unwrap();
//! assert_eq!(password.len(), 12);
//! ```

pub mod entropy;
pub mod pass;

pub use pass::{
    CharacterClass, CharacterPool, ClassSet, GeneratedPassword, GenerationRequest, Generator,
    InvalidConfig, MAX_LENGTH, MIN_LENGTH, generate, validate,
};
