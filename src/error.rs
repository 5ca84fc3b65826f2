use std::error::Error;
use std::fmt;

use crate::types::*;

/// Errors raised while generating puzzles or querying the length index.
#[derive(Debug,Clone,PartialEq,Eq)]
pub enum AnagramError {
    /// More fakes were requested than puzzles in total.
    TooManyFakes { count: usize, count_fake: usize },
    /// The length index was queried for words shorter than the minimum word length.
    WordTooShort(usize),
    /// Fewer usable anagrams of the requested length exist than were requested.
    NotEnoughWords { word_size: usize, requested: usize, available: usize },
    /// No scramble outside of the solution set was found for this key.
    Unrenderable(CanonicalKey),
    /// No unique unsolvable variant could be derived from this puzzle.
    FakesExhausted(String),
}

impl AnagramError {
    /// Errors caused by the arguments of the caller, as opposed to running out of attempts
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            AnagramError::TooManyFakes { .. }
                | AnagramError::WordTooShort(_)
                | AnagramError::NotEnoughWords { .. }
        )
    }
}

impl fmt::Display for AnagramError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AnagramError::TooManyFakes { count, count_fake } => write!(
                f,
                "Number of fake anagrams cannot be greater than number of total anagrams requested ({} > {})",
                count_fake, count
            ),
            AnagramError::WordTooShort(length) => write!(
                f,
                "No words are less than {} characters long (requested {})",
                MIN_WORD_LENGTH, length
            ),
            AnagramError::NotEnoughWords { word_size, requested, available } => write!(
                f,
                "Not enough words of desired length {} (requested {}, available {})",
                word_size, requested, available
            ),
            AnagramError::Unrenderable(key) => {
                write!(f, "Unable to scramble {} into something that isn't a solution", key)
            }
            AnagramError::FakesExhausted(puzzle) => {
                write!(f, "Unable to derive a unique fake from {}", puzzle)
            }
        }
    }
}

impl Error for AnagramError {}
