//! Hindi non-paraphrase generation by proper-noun swap and compound negation.

use std::sync::Arc;

use crate::analysis::tagger::{DependencyParser, Tagger};
use crate::analysis::token::DependencyEdge;
use crate::error::Result;
use crate::paraphrase::hindi::{DEFAULT_NEGATION_PARTICLE, DEFAULT_PROPER_NOUN_TAG};
use crate::paraphrase::{Language, ParaphraseGenerator, ParaphraseSet, Polarity, or_no_result};

const COMPOUND_RELATION: &str = "compound";
const NOUN_UPOS: &str = "NOUN";
const VERB_UPOS: &str = "VERB";

/// Produces Hindi sentences that do not paraphrase their input.
pub struct HindiNegativeGenerator {
    tagger: Arc<dyn Tagger>,
    parser: Arc<dyn DependencyParser>,
    proper_noun_tag: String,
    negation_particle: String,
}

impl std::fmt::Debug for HindiNegativeGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HindiNegativeGenerator")
            .field("tagger", &self.tagger.name())
            .field("parser", &self.parser.name())
            .field("proper_noun_tag", &self.proper_noun_tag)
            .field("negation_particle", &self.negation_particle)
            .finish()
    }
}

impl HindiNegativeGenerator {
    pub fn new(tagger: Arc<dyn Tagger>, parser: Arc<dyn DependencyParser>) -> Self {
        Self {
            tagger,
            parser,
            proper_noun_tag: DEFAULT_PROPER_NOUN_TAG.to_string(),
            negation_particle: DEFAULT_NEGATION_PARTICLE.to_string(),
        }
    }

    pub fn with_proper_noun_tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.proper_noun_tag = tag.into();
        self
    }

    pub fn with_negation_particle<S: Into<String>>(mut self, particle: S) -> Self {
        self.negation_particle = particle.into();
        self
    }

    /// Swap the first two proper nouns of the sentence.
    ///
    /// Returns `None` with fewer than two proper nouns. Applying the swap to
    /// its own output gives back the input.
    pub fn proper_noun_swap(&self, sentence: &str) -> Option<String> {
        or_no_result("proper_noun_swap", self.try_proper_noun_swap(sentence))
    }

    /// Like [`Self::proper_noun_swap`], surfacing adapter failures.
    pub fn try_proper_noun_swap(&self, sentence: &str) -> Result<Option<String>> {
        if sentence.trim().is_empty() {
            return Ok(None);
        }

        let tagged = self.tagger.tag(sentence)?;
        let mut proper_nouns = tagged
            .iter()
            .enumerate()
            .filter(|(_, token)| token.tag == self.proper_noun_tag)
            .map(|(i, _)| i);

        let (Some(first), Some(second)) = (proper_nouns.next(), proper_nouns.next()) else {
            return Ok(None);
        };
        if tagged[first].word == tagged[second].word {
            log::debug!("proper_noun_swap: both proper nouns are '{}'", tagged[first].word);
            return Ok(None);
        }

        let mut words: Vec<&str> = tagged.iter().map(|t| t.word.as_str()).collect();
        words.swap(first, second);
        Ok(Some(words.join(" ")))
    }

    /// Insert the negation particle after the first compound noun that is
    /// directly followed by a verb (noun-verb complex predicates).
    ///
    /// Returns `None` if no such noun exists.
    pub fn negation_by_compound(&self, sentence: &str) -> Option<String> {
        or_no_result("negation_by_compound", self.try_negation_by_compound(sentence))
    }

    /// Like [`Self::negation_by_compound`], surfacing adapter failures.
    pub fn try_negation_by_compound(&self, sentence: &str) -> Result<Option<String>> {
        if sentence.trim().is_empty() {
            return Ok(None);
        }

        let edges = self.parser.parse(sentence)?;
        let Some(position) = compound_negation_position(&edges) else {
            return Ok(None);
        };

        let mut words: Vec<&str> = Vec::with_capacity(edges.len() + 1);
        for (i, edge) in edges.iter().enumerate() {
            words.push(&edge.child.text);
            if i == position {
                words.push(&self.negation_particle);
            }
        }
        Ok(Some(words.join(" ")))
    }
}

/// Position of the first `compound` noun whose next word is a verb.
pub fn compound_negation_position(edges: &[DependencyEdge]) -> Option<usize> {
    edges.windows(2).position(|pair| {
        pair[0].child.upos == NOUN_UPOS
            && pair[0].relation == COMPOUND_RELATION
            && pair[1].child.upos == VERB_UPOS
    })
}

impl ParaphraseGenerator for HindiNegativeGenerator {
    fn generate(&self, sentence: &str) -> ParaphraseSet {
        self.proper_noun_swap(sentence)
            .into_iter()
            .chain(self.negation_by_compound(sentence))
            .collect()
    }

    fn language(&self) -> Language {
        Language::Hindi
    }

    fn polarity(&self) -> Polarity {
        Polarity::Negative
    }

    fn name(&self) -> &'static str {
        "hindi_negative"
    }
}
