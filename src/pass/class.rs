//! Character classes and sets of selected classes.

use std::fmt;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

/// A named category of characters that can be enabled independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// All classes in canonical order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    /// The fixed character set of this class. Sets never overlap.
    pub const fn chars(self) -> &'static [u8] {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.chars().contains(&(c as u8))
    }

    /// The class a character belongs to, if any.
    pub fn of(c: char) -> Option<CharacterClass> {
        Self::ALL.into_iter().find(|class| class.contains(c))
    }

    /// Short label used in menus and help text.
    pub const fn label(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "Uppercase (A-Z)",
            CharacterClass::Lowercase => "Lowercase (a-z)",
            CharacterClass::Digit => "Digits (0-9)",
            CharacterClass::Symbol => "Symbols (!@#$...)",
        }
    }

    /// Single-letter code used by `--only`.
    pub const fn code(self) -> char {
        match self {
            CharacterClass::Uppercase => 'u',
            CharacterClass::Lowercase => 'l',
            CharacterClass::Digit => 'd',
            CharacterClass::Symbol => 's',
        }
    }

    pub fn from_code(code: char) -> Option<CharacterClass> {
        Self::ALL.into_iter().find(|class| class.code() == code)
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A set of selected classes. Iteration is always in canonical order,
/// whatever order the classes were added in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ClassSet(u8);

impl ClassSet {
    pub const fn empty() -> Self {
        ClassSet(0)
    }

    pub const fn all() -> Self {
        ClassSet(0b1111)
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.0 |= class.bit();
    }

    pub fn remove(&mut self, class: CharacterClass) {
        self.0 &= !class.bit();
    }

    /// Flip a class on or off. Returns whether it is now selected.
    pub fn toggle(&mut self, class: CharacterClass) -> bool {
        self.0 ^= class.bit();
        self.contains(class)
    }

    /// Select or deselect a class.
    pub fn set(&mut self, class: CharacterClass, selected: bool) {
        if selected {
            self.insert(class);
        } else {
            self.remove(class);
        }
    }

    pub const fn contains(&self, class: CharacterClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.contains(*class))
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut set = ClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

impl<const N: usize> From<[CharacterClass; N]> for ClassSet {
    fn from(classes: [CharacterClass; N]) -> Self {
        classes.into_iter().collect()
    }
}

impl fmt::Display for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let codes: String = self.iter().map(CharacterClass::code).collect();
        f.write_str(&codes)
    }
}
