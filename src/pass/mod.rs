//! Password generation core.

pub mod charset;
pub mod class;
mod generate;
mod password;
mod request;
mod validate;

pub use charset::CharacterPool;
pub use class::{CharacterClass, ClassSet};
pub use generate::{Generator, complete, select_guaranteed};
pub use password::GeneratedPassword;
pub use request::{GenerationRequest, MAX_LENGTH, MIN_LENGTH};
pub use validate::{InvalidConfig, validate};

/// Generate one password from the operating system CSPRNG.
pub fn generate(classes: ClassSet, length: usize) -> Result<GeneratedPassword, InvalidConfig> {
    Generator::new().generate(&GenerationRequest::new(classes, length))
}
