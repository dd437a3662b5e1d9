use serde::{
    Deserialize,
    Serialize,
};

use crate::core::CoachError;

/// One flashcard record: an English word paired with a Chinese
/// homophone mnemonic and its meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub word: String,
    pub phonetic: String,
    pub mnemonic: String,
    pub meaning: String,
    pub explanation: String,
}

const WORDS_JSON: &str = include_str!("../../assets/words.json");

/// Parses the dataset bundled into the binary. Ordering and length are
/// fixed per build.
pub fn load_bundled() -> Result<Vec<VocabularyEntry>, CoachError> {
    let entries: Vec<VocabularyEntry> = serde_json::from_str(WORDS_JSON)?;
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_dataset_parses() {
        let entries = load_bundled().expect("bundled dataset must parse");
        assert!(!entries.is_empty());

        for entry in &entries {
            assert!(!entry.word.is_empty());
            assert!(!entry.mnemonic.is_empty());
            assert!(!entry.meaning.is_empty());
        }
    }

    #[test]
    fn test_bundled_dataset_order_is_stable() {
        let first = load_bundled().unwrap();
        let second = load_bundled().unwrap();
        assert_eq!(first, second);
    }
}
