//! Generates batches of anagram puzzles, a mix of real ones (scrambled dictionary words) and
//! fakes (believable letter sequences that no dictionary word can be formed from).

use std::collections::{BTreeMap,BTreeSet};

use log::{debug,info};
use rand::{Rng,SeedableRng};
use rand::seq::SliceRandom;
use rand_xorshift::XorShiftRng;

use crate::dictionary::Dictionary;
use crate::error::AnagramError;
use crate::fakify::fakify;
use crate::types::*;

pub struct AnagramGenerator<R: Rng = XorShiftRng> {
    dictionary: Dictionary,
    rng: R,
    pub params: GeneratorParams,
}

impl AnagramGenerator<XorShiftRng> {
    ///A generator producing the same puzzles for the same seed and dictionary
    pub fn with_seed(dictionary: Dictionary, seed: u64) -> Self {
        AnagramGenerator::new(dictionary, XorShiftRng::seed_from_u64(seed))
    }

    pub fn from_entropy(dictionary: Dictionary) -> Self {
        AnagramGenerator::new(dictionary, XorShiftRng::from_entropy())
    }
}

impl<R: Rng> AnagramGenerator<R> {
    pub fn new(dictionary: Dictionary, rng: R) -> Self {
        AnagramGenerator {
            dictionary,
            rng,
            params: GeneratorParams::default(),
        }
    }

    pub fn with_params(mut self, params: GeneratorParams) -> Self {
        self.params = params;
        self
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    ///Return the set of possible solutions for an anagram
    pub fn solve(&self, anagram: &str) -> BTreeSet<&str> {
        self.dictionary.solve(anagram)
    }

    ///Determine whether the answer (ignoring case) is a valid solution to the anagram
    pub fn verify(&self, anagram: &str, answer: &str) -> bool {
        self.solve(anagram).iter().any(|solution| solution.eq_ignore_ascii_case(answer))
    }

    ///Return `count` unique anagram puzzles of `word_size` letters, `count_fake` of which
    ///can not be solved. Either all puzzles are produced or none are.
    pub fn generate_anagrams(&mut self, word_size: usize, count: usize, count_fake: usize) -> Result<Vec<String>, AnagramError> {
        if count_fake > count {
            return Err(AnagramError::TooManyFakes { count, count_fake });
        }
        if count == 0 {
            return Ok(Vec::new());
        }

        let mut anagrams = self.get_anagrams(word_size, count)?;

        // take count_fake puzzles from the batch and replace letters until we get a unique fake
        let positions = rand::seq::index::sample(&mut self.rng, count, count_fake);
        for idx in positions.iter() {
            let fake = self.unique_fake(&anagrams[idx], &anagrams)?;
            anagrams[idx] = fake;
        }
        info!("Generated {} anagrams of length {} ({} fake)", count, word_size, count_fake);
        Ok(anagrams)
    }

    ///Sample distinct anagrams and scramble each of them
    fn get_anagrams(&mut self, word_size: usize, count: usize) -> Result<Vec<String>, AnagramError> {
        let candidates = candidate_keys(&self.dictionary, word_size)?;
        if candidates.len() < count {
            return Err(AnagramError::NotEnoughWords {
                word_size,
                requested: count,
                available: candidates.len(),
            });
        }
        let rng = &mut self.rng;
        let sampled: Vec<&str> = candidates.choose_multiple(&mut *rng, count).copied().collect();
        sampled
            .into_iter()
            .map(|key| scramble(&self.dictionary, key, &mut *rng, self.params.max_shuffle_attempts))
            .collect()
    }

    ///Fakify a puzzle until the fake is not yet part of the batch
    fn unique_fake(&mut self, anagram: &str, batch: &[String]) -> Result<String, AnagramError> {
        for _ in 0..self.params.max_fake_attempts {
            if let Some(fake) = fakify(&self.dictionary, anagram, &mut self.rng, self.params.max_mutations) {
                if !batch.contains(&fake) {
                    return Ok(fake);
                }
                debug!("   (fake {} is already in the batch, retrying)", fake);
            }
        }
        Err(AnagramError::FakesExhausted(anagram.to_string()))
    }
}

///Canonical keys of the requested length that can be scrambled into a puzzle
pub fn candidate_keys(dictionary: &Dictionary, word_size: usize) -> Result<Vec<&str>, AnagramError> {
    let keys = dictionary.length_keys(word_size)?;
    let total = keys.len();
    let candidates: Vec<&str> = keys
        .into_iter()
        .filter(|key| {
            // a two letter key only has one other arrangement; if that is a word as well
            // the puzzle would give itself away
            word_size != 2 || !dictionary.contains(&key.chars().rev().collect::<String>())
        })
        .filter(|key| permutation_count_exceeds(key, dictionary.solve(key).len()))
        .collect();
    debug!(" (using {} out of {} anagrams of length {})", candidates.len(), total, word_size);
    Ok(candidates)
}

///Shuffle the letters of a key until the arrangement is not one of its solutions
pub fn scramble<R: Rng + ?Sized>(dictionary: &Dictionary, key: &str, rng: &mut R, max_attempts: usize) -> Result<String, AnagramError> {
    let solutions = dictionary.solve(key);
    let mut chars: Vec<char> = key.chars().collect();
    for _ in 0..max_attempts {
        chars.shuffle(rng);
        let candidate: String = chars.iter().collect();
        if !solutions.iter().any(|solution| solution.eq_ignore_ascii_case(&candidate)) {
            return Ok(candidate);
        }
    }
    Err(AnagramError::Unrenderable(key.to_string()))
}

///Whether the letters have more distinct arrangements than `bound`.
///A key with no more arrangements than solutions can't be scrambled into a non-solution.
fn permutation_count_exceeds(letters: &str, bound: usize) -> bool {
    let mut counts: BTreeMap<char, u32> = BTreeMap::new();
    for c in letters.chars() {
        *counts.entry(c).or_default() += 1;
    }
    // multinomial coefficient, built up one binomial factor at a time; it never decreases
    let bound = bound as u128;
    let mut total: u128 = 0;
    let mut permutations: u128 = 1;
    for count in counts.into_values() {
        for j in 1..=count as u128 {
            total += 1;
            permutations = permutations * total / j;
            if permutations > bound {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permutation_counts() {
        assert!(!permutation_count_exceeds("ZZZ", 1));
        assert!(permutation_count_exceeds("AB", 1));
        assert!(!permutation_count_exceeds("AB", 2));
        // AABB has 6 arrangements
        assert!(permutation_count_exceeds("AABB", 5));
        assert!(!permutation_count_exceeds("AABB", 6));
        assert!(permutation_count_exceeds("EILNST", 3));
    }

    #[test]
    fn scramble_gives_up() {
        let dictionary = Dictionary::from_words(["AB", "BA"]);
        let mut rng = XorShiftRng::seed_from_u64(1);
        assert_eq!(
            scramble(&dictionary, "AB", &mut rng, 50),
            Err(AnagramError::Unrenderable("AB".to_string()))
        );
    }
}
