//! Anagen generates, solves and verifies anagram puzzles drawn from a word list.
//!
//! Words are indexed by an anagram value (a product of one prime per letter), so finding
//! every word that can be formed from a bag of letters is a single lookup. A secondary index
//! groups the anagrams by length, from which the generator samples puzzles and corrupts some
//! of them into believable fakes that have no solution.

extern crate ibig;
extern crate num_traits;

pub mod types;
pub mod anahash;
pub mod index;
pub mod vocab;
pub mod error;
pub mod dictionary;
pub mod fakify;
pub mod generator;
pub mod test;


pub use crate::types::*;
pub use crate::anahash::*;
pub use crate::index::*;
pub use crate::vocab::*;
pub use crate::error::*;
pub use crate::dictionary::*;
pub use crate::fakify::*;
pub use crate::generator::*;
