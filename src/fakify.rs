use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::anahash::*;
use crate::dictionary::Dictionary;
use crate::types::*;

///Picks a replacement for a letter from the common letters of the same class,
///so a vowel is replaced by a vowel and anything else by a consonant
pub fn substitute<R: Rng + ?Sized>(letter: char, rng: &mut R) -> char {
    let pool = if VOWELS.contains(&letter.to_ascii_uppercase()) {
        COMMON_VOWELS
    } else {
        COMMON_CONSONANTS
    };
    pool.choose(rng).copied().unwrap_or(letter)
}

///Swaps a single letter in an anagram value
fn replace_character(anahash: &AnaValue, old: char, new: char) -> Option<AnaValue> {
    let old = AnaValue::character(alphabet_index(old).unwrap_or(ALPHABET_SIZE));
    let new = AnaValue::character(alphabet_index(new)?);
    Some(anahash.delete(&old)?.insert(&new))
}

///Creates a fake but believable anagram by replacing one letter at a time
///until no word in the dictionary can be formed from the letters.
///The result is upper case. Returns None if the dictionary still had
///solutions after `max_mutations` replacements.
pub fn fakify<R: Rng + ?Sized>(dictionary: &Dictionary, anagram: &str, rng: &mut R, max_mutations: usize) -> Option<String> {
    let mut letters: Vec<char> = anagram.chars().map(|c| c.to_ascii_uppercase()).collect();
    let mut anahash = anagram.anahash();
    let mut mutations = 0;
    while dictionary.contains_key(&anahash) {
        if mutations >= max_mutations || letters.is_empty() {
            debug!("   (gave up fakifying {} after {} mutations)", anagram, mutations);
            return None;
        }
        let pos = rng.gen_range(0..letters.len());
        let old = letters[pos];
        let new = substitute(old, rng);
        letters[pos] = new;
        anahash = replace_character(&anahash, old, new)
            .unwrap_or_else(|| letters.iter().collect::<String>().anahash());
        mutations += 1;
    }
    let fake: String = letters.into_iter().collect();
    debug!("   (fakified {} into {} in {} mutations)", anagram, fake, mutations);
    Some(fake)
}
