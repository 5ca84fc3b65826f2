use ibig::UBig;
use ibig::ops::DivRem;
use num_traits::{Zero, One};

use crate::types::*;

///Trait for objects that can be anahashed (string-like)
pub trait Anahashable {
    fn anahash(&self) -> AnaValue;
    fn canonical_key(&self) -> CanonicalKey;
}

///Position of a character in the alphabet, case-insensitive. None for anything outside A-Z.
pub fn alphabet_index(c: char) -> Option<CharIndexType> {
    let c = c.to_ascii_uppercase();
    if c.is_ascii_uppercase() {
        Some(c as CharIndexType - b'A')
    } else {
        None
    }
}

impl Anahashable for str {
    ///Compute the anahash for a given string
    fn anahash(&self) -> AnaValue {
        let mut hash: AnaValue = AnaValue::empty();
        for c in self.chars() {
            //Highest one is reserved for UNK
            let seqnr = alphabet_index(c).unwrap_or(ALPHABET_SIZE);
            hash = hash.insert(&AnaValue::character(seqnr));
        }
        hash
    }

    ///The letters upper-cased and sorted
    fn canonical_key(&self) -> CanonicalKey {
        let mut chars: Vec<char> = self.chars().flat_map(char::to_uppercase).collect();
        chars.sort_unstable();
        chars.into_iter().collect()
    }
}


/// This trait can be applied to types
/// that can function as anahashes.
pub trait Anahash: One + Zero {
    fn character(seqnr: CharIndexType) -> AnaValue;
    fn empty() -> AnaValue;
    fn insert(&self, value: &AnaValue) -> AnaValue;
    fn delete(&self, value: &AnaValue) -> Option<AnaValue>;
}

impl Anahash for AnaValue {
    /// Computes the Anagram value for the n'th entry in the alphabet
    fn character(seqnr: CharIndexType) -> AnaValue {
        UBig::from(PRIMES[seqnr as usize])
    }

    /// Insert the characters represented by the anagram value, returning the result
    fn insert(&self, value: &AnaValue) -> AnaValue {
        if self == &AnaValue::zero() {
            value.clone()
        } else {
            self * value
        }
    }

    /// Delete the characters represented by the anagram value, returning the result
    /// Returns None if the anagram was not found
    ///
    /// # Examples
    ///
    /// ```
    /// # use anagen::*;
    /// let tea: AnaValue = "tea".anahash();
    /// let t: AnaValue = "t".anahash();
    /// assert_eq!(tea.delete(&t), Some("ea".anahash()));
    /// assert_eq!(tea.delete(&"x".anahash()), None);
    /// ```
    fn delete(&self, value: &AnaValue) -> Option<AnaValue> {
        let (result, remainder) = self.div_rem(value);
        if remainder == AnaValue::zero() {
            Some(result)
        } else {
            None
        }
    }

    /// The value of an empty anahash
    fn empty() -> AnaValue {
        AnaValue::one()
    }
}
