//! Character pool building.

use super::class::{CharacterClass, ClassSet};

/// Every character a password may contain, given the selected classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    chars: Vec<u8>,
}

impl CharacterPool {
    /// Concatenate the sets of the selected classes in canonical order.
    ///
    /// Class sets are disjoint, so the pool holds no duplicates and its size
    /// is the sum of the selected class sizes. An empty selection yields an
    /// empty pool; validation keeps that from reaching the generator.
    pub fn build(classes: ClassSet) -> Self {
        let mut chars = Vec::with_capacity(size(classes));
        for class in classes.iter() {
            chars.extend_from_slice(class.chars());
        }
        Self { chars }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.chars.contains(&(c as u8))
    }
}

/// Pool size for a selection, without building it.
pub fn size(classes: ClassSet) -> usize {
    classes.iter().map(|class: CharacterClass| class.chars().len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::class::CharacterClass::*;

    #[test]
    fn full_pool_is_canonical() {
        let pool = CharacterPool::build(ClassSet::all());
        let expected = [
            Uppercase.chars(),
            Lowercase.chars(),
            Digit.chars(),
            Symbol.chars(),
        ]
        .concat();
        assert_eq!(pool.as_bytes(), expected.as_slice());
        assert_eq!(pool.len(), 26 + 26 + 10 + Symbol.chars().len());
    }

    #[test]
    fn selection_order_does_not_matter() {
        let a = CharacterPool::build([Symbol, Digit].into());
        let b = CharacterPool::build([Digit, Symbol].into());
        assert_eq!(a, b);
        assert!(a.as_bytes().starts_with(b"0123456789"));
    }

    #[test]
    fn pool_has_no_duplicates() {
        let pool = CharacterPool::build(ClassSet::all());
        let mut sorted = pool.as_bytes().to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), pool.len());
    }

    #[test]
    fn size_matches_build() {
        for bits in 0u8..16 {
            let classes: ClassSet = CharacterClass::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| bits & (1 << i) != 0)
                .map(|(_, c)| c)
                .collect();
            assert_eq!(size(classes), CharacterPool::build(classes).len());
        }
    }

    #[test]
    fn contains_checks_membership() {
        let pool = CharacterPool::build([Uppercase, Lowercase].into());
        assert!(pool.contains('A'));
        assert!(pool.contains('z'));
        assert!(!pool.contains('5'));
        assert!(!pool.contains('!'));
        assert!(CharacterPool::build(ClassSet::empty()).is_empty());
    }
}
