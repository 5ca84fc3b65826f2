use std::collections::HashMap;

use crate::types::*;

#[derive(Clone,Debug)]
pub struct VocabValue {
    ///The word as supplied by the word list
    pub text: String,

    /// The first lexicon index which contains this word
    pub lexindex: usize
}

///Map integers (indices correspond to VocabId) to string values
pub type VocabDecoder = Vec<VocabValue>;

///Maps upper-cased words to integers
pub type VocabEncoder = HashMap<String, VocabId>;

pub struct VocabParams {
    ///Column containing the Text (0-indexed), columns are tab separated
    pub text_column: u8,
}

impl Default for VocabParams {
    fn default() -> Self {
        Self {
            text_column: 0,
        }
    }
}

impl VocabParams {
    pub fn with_text_column(mut self, column: u8) -> Self {
        self.text_column = column;
        self
    }
}
