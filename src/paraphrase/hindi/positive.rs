//! Hindi paraphrase generation by synonym substitution and conjunct
//! rotation.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::analysis::synonym::SynonymLookup;
use crate::analysis::tagger::{DependencyParser, Tagger};
use crate::analysis::token::DependencyEdge;
use crate::error::Result;
use crate::paraphrase::hindi::DEFAULT_PROPER_NOUN_TAG;
use crate::paraphrase::{Language, ParaphraseGenerator, ParaphraseSet, Polarity, or_no_result};

const CONJ_RELATION: &str = "conj";

/// Produces Hindi paraphrases.
pub struct HindiPositiveGenerator {
    tagger: Arc<dyn Tagger>,
    parser: Arc<dyn DependencyParser>,
    synonyms: Arc<dyn SynonymLookup>,
    proper_noun_tag: String,
}

impl std::fmt::Debug for HindiPositiveGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HindiPositiveGenerator")
            .field("tagger", &self.tagger.name())
            .field("parser", &self.parser.name())
            .field("synonyms", &self.synonyms.name())
            .field("proper_noun_tag", &self.proper_noun_tag)
            .finish()
    }
}

impl HindiPositiveGenerator {
    pub fn new(
        tagger: Arc<dyn Tagger>,
        parser: Arc<dyn DependencyParser>,
        synonyms: Arc<dyn SynonymLookup>,
    ) -> Self {
        Self {
            tagger,
            parser,
            synonyms,
            proper_noun_tag: DEFAULT_PROPER_NOUN_TAG.to_string(),
        }
    }

    /// Use a different tag to recognise proper nouns.
    pub fn with_proper_noun_tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.proper_noun_tag = tag.into();
        self
    }

    /// Replace every noun, verb and adjective (proper nouns excepted) with
    /// its first synonym that differs from the word.
    ///
    /// Returns `None` when no word could be replaced or an adapter failed.
    pub fn get_paraphrase_by_synonym(&self, sentence: &str) -> Option<String> {
        or_no_result(
            "get_paraphrase_by_synonym",
            self.try_paraphrase_by_synonym(sentence),
        )
    }

    /// Like [`Self::get_paraphrase_by_synonym`], surfacing adapter failures.
    pub fn try_paraphrase_by_synonym(&self, sentence: &str) -> Result<Option<String>> {
        if sentence.trim().is_empty() {
            return Ok(None);
        }

        let tagged = self.tagger.tag(sentence)?;
        let mut words = Vec::with_capacity(tagged.len());
        let mut replaced = 0;

        for token in &tagged {
            let candidate = match token.category() {
                Some(category) if token.tag != self.proper_noun_tag => self
                    .synonyms
                    .synonyms(&token.word, category)?
                    .into_iter()
                    .find(|synonym| *synonym != token.word),
                _ => None,
            };

            match candidate {
                Some(synonym) => {
                    log::debug!("synonym: {} -> {}", token.word, synonym);
                    replaced += 1;
                    words.push(synonym);
                }
                None => words.push(token.word.clone()),
            }
        }

        if replaced == 0 {
            return Ok(None);
        }
        Ok(Some(words.join(" ")))
    }

    /// Rotate the words that take part in `conj` relations one step left:
    /// each takes the word of the next participant and the last takes the
    /// first.
    ///
    /// Returns `None` when fewer than two words participate or an adapter
    /// failed. The result is not guaranteed to be grammatical.
    pub fn get_paraphrase_by_change_conj(&self, sentence: &str) -> Option<String> {
        or_no_result(
            "get_paraphrase_by_change_conj",
            self.try_paraphrase_by_change_conj(sentence),
        )
    }

    /// Like [`Self::get_paraphrase_by_change_conj`], surfacing adapter
    /// failures.
    pub fn try_paraphrase_by_change_conj(&self, sentence: &str) -> Result<Option<String>> {
        if sentence.trim().is_empty() {
            return Ok(None);
        }

        let edges = self.parser.parse(sentence)?;
        Ok(rotate_conjuncts(&edges).map(|words| words.join(" ")))
    }
}

/// Indexes of every `conj` dependent and of its head, sorted.
pub fn conjunct_indexes(edges: &[DependencyEdge]) -> Vec<usize> {
    let mut indexes = BTreeSet::new();
    for (i, edge) in edges.iter().enumerate() {
        if edge.relation != CONJ_RELATION {
            continue;
        }
        indexes.insert(i);
        if let Some(parent) = edge.parent_position().filter(|&p| p < edges.len()) {
            indexes.insert(parent);
        }
    }
    indexes.into_iter().collect()
}

/// Build the rotated word sequence, leaving `edges` untouched.
///
/// Returns `None` when fewer than two positions participate or the rotation
/// reproduces the input.
pub fn rotate_conjuncts(edges: &[DependencyEdge]) -> Option<Vec<String>> {
    let indexes = conjunct_indexes(edges);
    if indexes.len() < 2 {
        return None;
    }

    let rotated: Vec<String> = edges
        .iter()
        .enumerate()
        .map(|(i, edge)| match indexes.binary_search(&i) {
            Ok(k) => edges[indexes[(k + 1) % indexes.len()]].child.text.clone(),
            Err(_) => edge.child.text.clone(),
        })
        .collect();

    let unchanged = rotated
        .iter()
        .zip(edges)
        .all(|(word, edge)| *word == edge.child.text);
    if unchanged {
        return None;
    }
    Some(rotated)
}

impl ParaphraseGenerator for HindiPositiveGenerator {
    fn generate(&self, sentence: &str) -> ParaphraseSet {
        self.get_paraphrase_by_synonym(sentence)
            .into_iter()
            .chain(self.get_paraphrase_by_change_conj(sentence))
            .collect()
    }

    fn language(&self) -> Language {
        Language::Hindi
    }

    fn polarity(&self) -> Polarity {
        Polarity::Positive
    }

    fn name(&self) -> &'static str {
        "hindi_positive"
    }
}
