use std::collections::BTreeMap;

use crate::error::Result;

/// Word -> ARPAbet pronunciations, in storage order
pub type Pronunciations = BTreeMap<String, Vec<String>>;

/// One stored (word, pronunciation) row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub word: String,         // e.g., "read"
    pub arpa: Option<String>, // e.g., "R IY D"
    pub ipa: Option<String>,  // never filled by the file loader
}

pub trait PronunciationDictionary {
    /// Pronunciations for every non-empty word, empty list when unknown
    fn pronunciations(&mut self, words: &[&str]) -> Result<Pronunciations>;

    /// True when the word has at least one pronunciation
    fn has_word(&mut self, word: &str) -> Result<bool> {
        let word = word.to_lowercase();
        let results = self.pronunciations(&[word.as_str()])?;
        Ok(results.get(&word).is_some_and(|arpa| !arpa.is_empty()))
    }
}
