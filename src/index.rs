use std::collections::HashMap;

use crate::types::*;

///A node in the anagram index, holds all words that are anagrams of each other
#[derive(Clone,Debug)]
pub struct AnaIndexNode {
    ///The letters shared by all instances, sorted
    pub key: CanonicalKey,

    ///The words that instantiate this anagram
    pub instances: Vec<VocabId>,
}

impl AnaIndexNode {
    pub fn new(key: CanonicalKey) -> Self {
        AnaIndexNode {
            key,
            instances: Vec::new(),
        }
    }
}

///The main index, mapping anagram values to the words that instantiate them
pub type AnaIndex = HashMap<AnaValue,AnaIndexNode>;
