use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader,BufRead};

use log::{debug,info};
use rayon::prelude::*;

use crate::anahash::*;
use crate::error::AnagramError;
use crate::index::*;
use crate::types::*;
use crate::vocab::*;

///The word list, indexed by anagram value
#[derive(Clone,Debug,Default)]
pub struct Dictionary {
    pub decoder: VocabDecoder,
    pub encoder: VocabEncoder,

    ///The main index, mapping anagrams to instances
    pub index: AnaIndex,

    ///A secondary index, grouping the anagram values by their length (in chars)
    ///Inner sets are always sorted
    pub lengthindex: LengthIndex,

    /// Stores the names of the loaded word lists, they will be referenced by index from individual
    /// items for provenance reasons
    pub lexicons: Vec<String>,
}

///Only ASCII letters are accepted and words need at least two of them
pub fn is_valid_word(word: &str) -> bool {
    word.len() >= MIN_WORD_LENGTH && word.chars().all(|c| c.is_ascii_alphabetic())
}

impl Dictionary {
    pub fn new() -> Dictionary {
        Dictionary::default()
    }

    ///Builds a dictionary from a sequence of words
    pub fn from_words<I,S>(words: I) -> Dictionary
    where
        I: IntoIterator<Item=S>,
        S: AsRef<str>,
    {
        let mut dictionary = Dictionary::new();
        for word in words {
            dictionary.insert(word.as_ref());
        }
        dictionary
    }

    ///Number of distinct words
    pub fn len(&self) -> usize {
        self.decoder.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoder.is_empty()
    }

    ///Number of distinct anagrams (realizable keys)
    pub fn anagram_count(&self) -> usize {
        self.index.len()
    }

    ///All word lengths present in the dictionary, ascending
    pub fn lengths(&self) -> Vec<u16> {
        self.lengthindex.keys().copied().collect()
    }

    pub fn get_or_create_node<'a>(&'a mut self, anahash: &AnaValue, key: &str) -> &'a mut AnaIndexNode {
        self.index.entry(anahash.clone()).or_insert_with(|| AnaIndexNode::new(key.to_string()))
    }

    ///Add a word to the dictionary. Returns true if the word is new.
    ///Duplicates and words that aren't made of at least two ASCII letters are skipped.
    pub fn insert(&mut self, word: &str) -> bool {
        if !is_valid_word(word) {
            debug!(" -- Skipping invalid word: {}", word);
            return false;
        }
        let anahash = word.anahash();
        let key = word.canonical_key();
        self.insert_hashed(word, anahash, &key, 0)
    }

    fn insert_hashed(&mut self, word: &str, anahash: AnaValue, key: &str, lexindex: usize) -> bool {
        let charcount = match u16::try_from(key.len()) {
            Ok(charcount) => charcount,
            Err(_) => {
                debug!(" -- Skipping word of {} characters, too long to index", key.len());
                return false;
            }
        };
        //duplicates are detected regardless of case, the first spelling is kept
        let normalized = word.to_ascii_uppercase();
        if self.encoder.contains_key(&normalized) {
            return false;
        }
        let vocab_id = self.decoder.len() as VocabId;
        self.encoder.insert(normalized, vocab_id);
        self.decoder.push(VocabValue {
            text: word.to_string(),
            lexindex,
        });

        self.get_or_create_node(&anahash, key).instances.push(vocab_id);
        self.lengthindex.entry(charcount).or_default().insert(anahash);
        true
    }

    ///Read a word list from file, one word per line
    ///Lines may consist of multiple tab-separated columns, the parameters define
    ///which one holds the word. Returns the number of words that were added.
    pub fn read_wordlist(&mut self, filename: &str, params: &VocabParams) -> Result<usize, std::io::Error> {
        info!("Reading word list from {}...", filename);
        let f = File::open(filename)?;
        let f_buffer = BufReader::new(f);
        let mut words: Vec<String> = Vec::new();
        for line in f_buffer.lines() {
            let line = line?;
            if let Some(text) = line.split('\t').nth(params.text_column as usize) {
                let text = text.trim();
                if !text.is_empty() {
                    words.push(text.to_string());
                }
            }
        }
        debug!(" - Read {} lines, computing anagram values...", words.len());

        let hashed: Vec<(&str, AnaValue, CanonicalKey)> = words
            .par_iter()
            .filter(|word| is_valid_word(word))
            .map(|word| (word.as_str(), word.anahash(), word.canonical_key()))
            .collect();
        let skipped = words.len() - hashed.len();

        let lexindex = self.lexicons.len();
        let mut added = 0;
        for (word, anahash, key) in hashed {
            if self.insert_hashed(word, anahash, &key, lexindex) {
                added += 1;
            }
        }
        self.lexicons.push(filename.to_string());

        info!(" - Added {} words ({} skipped), dictionary now has {} words and {} anagrams", added, skipped, self.len(), self.anagram_count());
        for (length, keys) in self.lengthindex.iter() {
            debug!(" - Found {} anagrams of length {}", keys.len(), length);
        }
        Ok(added)
    }

    pub fn contains_key(&self, key: &AnaValue) -> bool {
        self.index.contains_key(key)
    }

    ///Get all anagram instances for a specific entry
    pub fn get_anagram_instances(&self, text: &str) -> Vec<&VocabValue> {
        let anavalue = text.anahash();
        let mut instances: Vec<&VocabValue> = Vec::new();
        if let Some(node) = self.index.get(&anavalue) {
            for vocab_id in node.instances.iter() {
                if let Some(value) = self.decoder.get(*vocab_id as usize) {
                    instances.push(value);
                }
            }
        }
        instances
    }

    ///Resolves a vocabulary ID
    pub fn get_vocab(&self, vocab_id: VocabId) -> Option<&VocabValue> {
        self.decoder.get(vocab_id as usize)
    }

    ///All words made of exactly the letters of the query, ignoring case
    pub fn solve(&self, query: &str) -> BTreeSet<&str> {
        if query.is_empty() {
            return BTreeSet::new();
        }
        self.get_anagram_instances(query).into_iter().map(|value| value.text.as_str()).collect()
    }

    ///Tests if the dictionary has a specific word (ignoring case)
    pub fn contains(&self, word: &str) -> bool {
        self.solve(word).iter().any(|w| w.eq_ignore_ascii_case(word))
    }

    ///Canonical keys of all anagrams of the given length, ordered by anagram value
    pub fn length_keys(&self, length: usize) -> Result<Vec<&str>, AnagramError> {
        if length < MIN_WORD_LENGTH {
            return Err(AnagramError::WordTooShort(length));
        }
        let keys: Vec<&str> = u16::try_from(length)
            .ok()
            .and_then(|length| self.lengthindex.get(&length))
            .map(|anavalues| {
                anavalues
                    .iter()
                    .filter_map(|anavalue| self.index.get(anavalue))
                    .map(|node| node.key.as_str())
                    .collect()
            })
            .unwrap_or_default();
        Ok(keys)
    }

    ///Iterates over all anagrams in the index, grouped by length
    pub fn iter_anagrams(&self) -> impl Iterator<Item=&AnaIndexNode> {
        self.lengthindex
            .values()
            .flat_map(|anavalues| anavalues.iter())
            .filter_map(|anavalue| self.index.get(anavalue))
    }
}
