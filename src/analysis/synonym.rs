//! Synonym lookup adapter and a synset dictionary backed by a JSON file.

use std::path::Path;
use std::sync::Arc;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::token::PosCategory;
use crate::error::{ParagenError, Result};

/// External synonym store, queried by word and part-of-speech category.
pub trait SynonymLookup: Send + Sync {
    /// Candidate synonyms for `word` used as `category`, in the store's
    /// preference order. The list may be empty and may contain `word` itself.
    fn synonyms(&self, word: &str, category: PosCategory) -> Result<Vec<String>>;

    /// Get the name of this store (for debugging and logging).
    fn name(&self) -> &str;
}

/// Synsets grouped by part-of-speech category, as stored on disk.
///
/// Example format:
/// ```json
/// {
///   "NOUN": [["घर", "मकान", "गृह"]],
///   "VERB": [["जाना", "गमन करना"]],
///   "ADJECTIVE": [["सुंदर", "खूबसूरत"]]
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SynsetFile {
    #[serde(rename = "NOUN", default)]
    pub noun: Vec<Vec<String>>,
    #[serde(rename = "VERB", default)]
    pub verb: Vec<Vec<String>>,
    #[serde(rename = "ADJECTIVE", default)]
    pub adjective: Vec<Vec<String>>,
}

/// WordNet-style synset dictionary.
///
/// A word may belong to several synsets; its synonyms are the lemmas of every
/// synset containing it, in synset order, with duplicates removed.
#[derive(Debug, Clone, Default)]
pub struct SynsetDictionary {
    synsets: Arc<AHashMap<PosCategory, Vec<Vec<String>>>>,
    /// (category, word) -> indexes into that category's synsets
    membership: Arc<AHashMap<(PosCategory, String), Vec<usize>>>,
}

impl SynsetDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a synset dictionary from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ParagenError::synonym(format!(
                "Failed to read synset file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let file: SynsetFile = serde_json::from_str(&content).map_err(|e| {
            ParagenError::synonym(format!(
                "Failed to parse synset JSON from '{}': {}",
                path.display(),
                e
            ))
        })?;

        let dictionary = Self::from_synset_file(file);
        log::info!(
            "Loaded {} synsets from {}",
            dictionary.synset_count(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Build a dictionary from parsed synset groups.
    pub fn from_synset_file(file: SynsetFile) -> Self {
        let mut dictionary = Self::new();
        for (category, groups) in [
            (PosCategory::Noun, file.noun),
            (PosCategory::Verb, file.verb),
            (PosCategory::Adjective, file.adjective),
        ] {
            for group in groups {
                dictionary.add_synset(category, group);
            }
        }
        dictionary
    }

    /// Add one synset. Empty groups are ignored.
    pub fn add_synset(&mut self, category: PosCategory, lemmas: Vec<String>) {
        if lemmas.is_empty() {
            return;
        }

        let synsets = Arc::make_mut(&mut self.synsets);
        let entry = synsets.entry(category).or_default();
        let synset_idx = entry.len();

        let membership = Arc::make_mut(&mut self.membership);
        for lemma in &lemmas {
            let indexes = membership.entry((category, lemma.clone())).or_default();
            if !indexes.contains(&synset_idx) {
                indexes.push(synset_idx);
            }
        }
        entry.push(lemmas);
    }

    /// Total number of synsets across all categories.
    pub fn synset_count(&self) -> usize {
        self.synsets.values().map(Vec::len).sum()
    }

    /// Whether `word` appears in any synset of `category`.
    pub fn contains(&self, word: &str, category: PosCategory) -> bool {
        self.membership
            .contains_key(&(category, word.to_string()))
    }
}

impl SynonymLookup for SynsetDictionary {
    fn synonyms(&self, word: &str, category: PosCategory) -> Result<Vec<String>> {
        let Some(indexes) = self.membership.get(&(category, word.to_string())) else {
            return Ok(Vec::new());
        };
        let Some(synsets) = self.synsets.get(&category) else {
            return Ok(Vec::new());
        };

        let mut synonyms: Vec<String> = Vec::new();
        for &idx in indexes {
            for lemma in &synsets[idx] {
                if !synonyms.contains(lemma) {
                    synonyms.push(lemma.clone());
                }
            }
        }
        Ok(synonyms)
    }

    fn name(&self) -> &str {
        "synset_dictionary"
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_synonyms_by_category() {
        let mut dict = SynsetDictionary::new();
        dict.add_synset(PosCategory::Noun, strings(&["घर", "मकान", "गृह"]));
        dict.add_synset(PosCategory::Verb, strings(&["घर", "बसना"]));

        let nouns = dict.synonyms("घर", PosCategory::Noun).unwrap();
        assert_eq!(nouns, strings(&["घर", "मकान", "गृह"]));

        let verbs = dict.synonyms("घर", PosCategory::Verb).unwrap();
        assert_eq!(verbs, strings(&["घर", "बसना"]));

        assert!(dict.synonyms("घर", PosCategory::Adjective).unwrap().is_empty());
        assert!(dict.synonyms("पानी", PosCategory::Noun).unwrap().is_empty());
    }

    #[test]
    fn test_multiple_synsets_are_merged_in_order() {
        let mut dict = SynsetDictionary::new();
        dict.add_synset(PosCategory::Noun, strings(&["कल", "मशीन"]));
        dict.add_synset(PosCategory::Noun, strings(&["कल", "आगामी दिन", "मशीन"]));

        let synonyms = dict.synonyms("कल", PosCategory::Noun).unwrap();
        assert_eq!(synonyms, strings(&["कल", "मशीन", "आगामी दिन"]));
        assert_eq!(dict.synset_count(), 2);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"NOUN": [["घर", "मकान"]], "ADJECTIVE": [["सुंदर", "खूबसूरत"]]}}"#
        )
        .unwrap();

        let dict = SynsetDictionary::load_from_file(file.path()).unwrap();
        assert!(dict.contains("मकान", PosCategory::Noun));
        assert!(dict.contains("सुंदर", PosCategory::Adjective));
        assert!(!dict.contains("सुंदर", PosCategory::Verb));
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(SynsetDictionary::load_from_file(file.path()).is_err());
        assert!(SynsetDictionary::load_from_file("/nonexistent/synsets.json").is_err());
    }
}
