use ibig::UBig;
use std::collections::{BTreeMap,BTreeSet};

///Each word gets assigned an ID integer, carries no further meaning
pub type VocabId = u32;

pub type CharIndexType = u8;

pub type CharType = u32;

///The letters of a word, upper-cased and sorted. Shared by all anagrams of each other.
pub type CanonicalKey = String;

///Number of letters in the alphabet, the next index is reserved for anything outside of it
pub const ALPHABET_SIZE: CharIndexType = 26;

///One prime per letter (A=2 ... Z=101), the last one is reserved for UNK
pub const PRIMES: &[CharType] = &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97, 101, 103];

///The anagram hash: the product of the primes of all the letters, so it
///identifies a bag of characters regardless of their order
pub type AnaValue = UBig;

///Maps word length to the anagram values of that length that have at least one word
pub type LengthIndex = BTreeMap<u16,BTreeSet<AnaValue>>;

pub const VOWELS: &[char] = &['A', 'E', 'I', 'O', 'U'];

///Substitutes for vowels when faking a puzzle. U is left out, it makes fakes stand out.
pub const COMMON_VOWELS: &[char] = &['A', 'E', 'I', 'O'];

///Substitutes for consonants when faking a puzzle: only relatively common letters so fakes look believable
pub const COMMON_CONSONANTS: &[char] = &['B', 'C', 'D', 'F', 'G', 'H', 'K', 'L', 'M', 'N', 'P', 'R', 'S', 'T'];

///Minimum length of a word in the dictionary
pub const MIN_WORD_LENGTH: usize = 2;


#[derive(Clone,Debug,PartialEq)]
pub struct GeneratorParams {
    /// Maximum number of shuffles tried to find a scramble that isn't itself a solution
    pub max_shuffle_attempts: usize,

    /// Maximum number of single letter substitutions when fakifying a puzzle
    pub max_mutations: usize,

    /// Maximum number of times fakification restarts from the real puzzle when the fake
    /// collides with a puzzle already in the batch
    pub max_fake_attempts: usize,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            max_shuffle_attempts: 1000,
            max_mutations: 10_000,
            max_fake_attempts: 100,
        }
    }
}

impl GeneratorParams {
    pub fn with_max_shuffle_attempts(mut self, attempts: usize) -> Self {
        self.max_shuffle_attempts = attempts;
        self
    }
    pub fn with_max_mutations(mut self, mutations: usize) -> Self {
        self.max_mutations = mutations;
        self
    }
    pub fn with_max_fake_attempts(mut self, attempts: usize) -> Self {
        self.max_fake_attempts = attempts;
        self
    }
}
