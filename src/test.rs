use crate::dictionary::Dictionary;
use crate::generator::AnagramGenerator;

pub const TEST_WORDS: &[&str] = &[
    "CAT", "DOG", "ACT", "TAC", "GOD", "BIRD", "LISTEN", "SILENT",
    "ENLIST", "EAT", "TEA", "ATE", "AT", "TA"
];

///Five letter words without anagrams of each other, plenty to draw batches from
pub const TEST_WORDS_5: &[&str] = &[
    "APPLE", "BREAD", "CHAIR", "DANCE", "EAGLE", "FLAME", "GRAPE", "HOUSE",
    "IVORY", "JOKER", "KNIFE", "LEMON", "MOUSE", "NURSE", "OCEAN", "PIANO",
    "QUEEN", "RIVER", "STONE", "TIGER", "UNCLE", "VOICE", "WHALE", "YOUTH",
    "ZEBRA", "PLANT", "CLOUD", "BRICK", "SHEEP", "TRAIN",
];

pub fn get_test_dictionary() -> Dictionary {
    Dictionary::from_words(TEST_WORDS)
}

pub fn get_test_generator(seed: u64) -> AnagramGenerator {
    AnagramGenerator::with_seed(get_test_dictionary(), seed)
}

pub fn get_test_generator_5(seed: u64) -> AnagramGenerator {
    AnagramGenerator::with_seed(Dictionary::from_words(TEST_WORDS_5), seed)
}
