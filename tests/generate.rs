use std::collections::HashSet;

use passgen::{
    CharacterClass, ClassSet, GenerationRequest, InvalidConfig, MAX_LENGTH, MIN_LENGTH,
};
use proptest::prelude::*;

use CharacterClass::*;

fn classes_from_bits(bits: u8) -> ClassSet {
    CharacterClass::ALL
        .into_iter()
        .enumerate()
        .filter(|(i, _)| bits & (1 << i) != 0)
        .map(|(_, class)| class)
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn valid_requests_honour_length_and_classes(
        bits in 1u8..16,
        length in MIN_LENGTH..=MAX_LENGTH,
    ) {
        let classes = classes_from_bits(bits);
        let password = passgen::generate(classes, length).unwrap();

        prop_assert_eq!(password.len(), length);
        for class in classes.iter() {
            prop_assert!(password.as_str().chars().any(|c| class.contains(c)));
        }
        for c in password.as_str().chars() {
            let class = CharacterClass::of(c);
            prop_assert!(class.is_some_and(|class| classes.contains(class)));
        }
    }

    #[test]
    fn out_of_range_lengths_fail(
        bits in 1u8..16,
        length in prop_oneof![0usize..MIN_LENGTH, (MAX_LENGTH + 1)..10_000],
    ) {
        let classes = classes_from_bits(bits);
        prop_assert_eq!(
            passgen::generate(classes, length).unwrap_err(),
            InvalidConfig::LengthOutOfRange { length }
        );
        prop_assert!(passgen::validate(classes, length).is_err());
    }

    #[test]
    fn empty_selection_fails_for_any_length(length in 0usize..200) {
        prop_assert_eq!(
            passgen::generate(ClassSet::empty(), length).unwrap_err(),
            InvalidConfig::NoCharacterClassSelected
        );
    }
}

#[test]
fn boundaries() {
    let digits: ClassSet = [Digit].into();
    assert_eq!(passgen::generate(digits, 8).unwrap().len(), 8);
    assert_eq!(passgen::generate(digits, 64).unwrap().len(), 64);
    assert_eq!(
        passgen::generate(digits, 7).unwrap_err(),
        InvalidConfig::LengthOutOfRange { length: 7 }
    );
    assert_eq!(
        passgen::generate(digits, 65).unwrap_err(),
        InvalidConfig::LengthOutOfRange { length: 65 }
    );
}

#[test]
fn every_class_length_eight() {
    let password = passgen::generate(ClassSet::all(), 8).unwrap();
    let s = password.as_str();
    assert_eq!(s.len(), 8);
    assert!(s.chars().any(|c| c.is_ascii_uppercase()));
    assert!(s.chars().any(|c| c.is_ascii_lowercase()));
    assert!(s.chars().any(|c| c.is_ascii_digit()));
    assert!(s.chars().any(|c| Symbol.contains(c)));
}

#[test]
fn letters_only() {
    let password = passgen::generate([Uppercase, Lowercase].into(), 12).unwrap();
    let s = password.as_str();
    assert_eq!(s.len(), 12);
    assert!(s.chars().all(|c| c.is_ascii_alphabetic()));
    assert!(s.chars().any(|c| c.is_ascii_uppercase()));
    assert!(s.chars().any(|c| c.is_ascii_lowercase()));
}

#[test]
fn pin_like() {
    let password = passgen::generate([Digit].into(), 8).unwrap();
    assert!(password.as_str().chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn no_classes() {
    assert_eq!(
        passgen::generate(ClassSet::empty(), 10).unwrap_err(),
        InvalidConfig::NoCharacterClassSelected
    );
}

#[test]
fn digit_too_short() {
    assert_eq!(
        passgen::generate([Digit].into(), 7).unwrap_err(),
        InvalidConfig::LengthOutOfRange { length: 7 }
    );
}

#[test]
fn symbols_at_max_length() {
    let password = passgen::generate([Symbol].into(), 64).unwrap();
    assert_eq!(password.len(), 64);
    assert!(password.as_str().chars().all(|c| Symbol.contains(c)));
}

#[test]
fn repeated_generation_is_distinct() {
    let runs = 50;
    let passwords: HashSet<String> = (0..runs)
        .map(|_| passgen::generate(ClassSet::all(), 16).unwrap().as_str().to_owned())
        .collect();
    assert_eq!(passwords.len(), runs);
}

#[test]
fn validate_matches_generate() {
    assert_eq!(passgen::validate(ClassSet::all(), 8), Ok(()));
    assert_eq!(
        passgen::validate(ClassSet::empty(), 8),
        Err(InvalidConfig::NoCharacterClassSelected)
    );
}

#[test]
fn request_and_raw_settings_validate_alike() {
    for classes in [ClassSet::all(), ClassSet::empty(), ClassSet::from([Symbol])] {
        for length in [0, 7, 8, 64, 65] {
            assert_eq!(
                GenerationRequest::new(classes, length).validate(),
                passgen::validate(classes, length)
            );
        }
    }
}
