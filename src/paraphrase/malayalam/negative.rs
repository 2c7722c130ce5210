//! Malayalam non-paraphrase generation.
//!
//! Negative samples should stay grammatical and keep the context of the
//! input, so they are built by swapping members of closed word-groups and by
//! negating a sentence-final copula.

use std::sync::Arc;

use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::paraphrase::malayalam::rules::NonSynonymRules;
use crate::paraphrase::{Language, ParaphraseGenerator, ParaphraseSet, Polarity};

/// The copula "is".
pub const COPULA: &str = "ആണ്";

/// The negated copula "is not".
pub const NEGATED_COPULA: &str = "അല്ല";

const ZERO_WIDTH_NON_JOINER: char = '\u{200C}';

/// Produces Malayalam sentences that do not paraphrase their input.
#[derive(Clone)]
pub struct MalayalamNegativeGenerator {
    tokenizer: Arc<dyn Tokenizer>,
    rules: NonSynonymRules,
}

impl std::fmt::Debug for MalayalamNegativeGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MalayalamNegativeGenerator")
            .field("tokenizer", &self.tokenizer.name())
            .field("rules", &self.rules)
            .finish()
    }
}

impl Default for MalayalamNegativeGenerator {
    fn default() -> Self {
        Self::new(NonSynonymRules::default())
    }
}

impl MalayalamNegativeGenerator {
    pub fn new(rules: NonSynonymRules) -> Self {
        Self {
            tokenizer: Arc::new(WhitespaceTokenizer::new()),
            rules,
        }
    }

    pub fn rules(&self) -> &NonSynonymRules {
        &self.rules
    }

    /// Replace one word at a time with every other member of each rule set
    /// the word belongs to.
    pub fn subst_with_non_synonyms(&self, sentence: &str) -> ParaphraseSet {
        let sentence = self.tokenizer.tokenize(sentence);
        let mut variants = ParaphraseSet::new();

        for (idx, word) in sentence.tokens().iter().enumerate() {
            for set in self.rules.matching(word) {
                for alternative in set.alternatives(word) {
                    if let Some(variant) = sentence.with_replaced(idx, alternative) {
                        variants.insert(variant.join());
                    }
                }
                log::debug!("subst_with_non_synonyms: '{}' matched {}", word, set.name());
            }
        }
        variants
    }

    /// Negate a sentence ending in the copula by replacing it with its
    /// negated form.
    pub fn negate_if_last_word_is_is(&self, sentence: &str) -> ParaphraseSet {
        let sentence = self.tokenizer.tokenize(sentence);
        let mut variants = ParaphraseSet::new();

        let Some(last) = sentence.last() else {
            return variants;
        };
        if last.trim_end_matches(ZERO_WIDTH_NON_JOINER) == COPULA {
            if let Some(negated) = sentence.with_replaced(sentence.len() - 1, NEGATED_COPULA) {
                variants.insert(negated.join());
            }
        }
        variants
    }
}

impl ParaphraseGenerator for MalayalamNegativeGenerator {
    fn generate(&self, sentence: &str) -> ParaphraseSet {
        let mut variants = self.subst_with_non_synonyms(sentence);
        variants.extend(self.negate_if_last_word_is_is(sentence));
        variants
    }

    fn language(&self) -> Language {
        Language::Malayalam
    }

    fn polarity(&self) -> Polarity {
        Polarity::Negative
    }

    fn name(&self) -> &'static str {
        "malayalam_negative"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::strip_sentence;
    use crate::paraphrase::malayalam::rules::{FUTURE_TIME_ADVERBS, RuleSet};

    #[test]
    fn test_subst_future_time() {
        let generator = MalayalamNegativeGenerator::default();
        let variants = generator.subst_with_non_synonyms("അവൻ നാളെ വരും");

        for alternative in FUTURE_TIME_ADVERBS.iter().filter(|w| **w != "നാളെ") {
            assert!(variants.contains(&format!("അവൻ {alternative} വരും")));
        }
        assert!(!variants.contains("അവൻ നാളെ വരും"));
        // അവൻ is a subject pronoun too: 6 time variants + 6 pronoun variants.
        assert_eq!(variants.len(), 12);
        assert!(variants.contains("ഞാൻ നാളെ വരും"));
    }

    #[test]
    fn test_subst_never_returns_input() {
        let generator = MalayalamNegativeGenerator::default();
        for sentence in [
            "ഞാൻ ഇന്നലെ അവനെ കണ്ടു.",
            "അവർ രാവിലെ വരും",
            "ഇത് ഒരു പുസ്തകം ആണ്",
        ] {
            let variants = generator.subst_with_non_synonyms(sentence);
            assert!(!variants.contains(strip_sentence(sentence)));
        }
    }

    #[test]
    fn test_subst_without_rule_words() {
        let generator = MalayalamNegativeGenerator::default();
        assert!(generator.subst_with_non_synonyms("ഇത് ഒരു പുസ്തകം ആണ്").is_empty());
        assert!(generator.subst_with_non_synonyms("").is_empty());
    }

    #[test]
    fn test_subst_with_extra_rule_set() {
        let extra = RuleSet::new("people", ["അവൻ", "രാമൻ"]).unwrap();
        let generator = MalayalamNegativeGenerator::new(NonSynonymRules::default().with_rule_set(extra));

        let variants = generator.subst_with_non_synonyms("അവൻ വരും");
        assert!(variants.contains("രാമൻ വരും"));
        assert!(variants.contains("അവൾ വരും"));
        assert_eq!(variants.len(), 7);
    }

    #[test]
    fn test_negate_copula_with_zwnj() {
        let generator = MalayalamNegativeGenerator::default();
        let variants = generator.negate_if_last_word_is_is("അവൻ പോണ് ആണ്\u{200C}");

        assert_eq!(variants.len(), 1);
        assert!(variants.contains("അവൻ പോണ് അല്ല"));
    }

    #[test]
    fn test_negate_copula_plain() {
        let generator = MalayalamNegativeGenerator::default();
        let variants = generator.negate_if_last_word_is_is("ഇത് ഒരു പുസ്തകം ആണ്.");
        assert_eq!(variants.into_iter().collect::<Vec<_>>(), vec!["ഇത് ഒരു പുസ്തകം അല്ല"]);
    }

    #[test]
    fn test_negate_copula_not_last() {
        let generator = MalayalamNegativeGenerator::default();
        assert!(generator.negate_if_last_word_is_is("ആണ് അവൻ വരും").is_empty());
        assert!(generator.negate_if_last_word_is_is("").is_empty());
    }

    #[test]
    fn test_generate_union() {
        let generator = MalayalamNegativeGenerator::default();
        let variants = generator.generate("അവൻ ഡോക്ടർ ആണ്");

        assert!(variants.contains("അവൻ ഡോക്ടർ അല്ല"));
        assert!(variants.contains("അവൾ ഡോക്ടർ ആണ്"));
        assert_eq!(variants.len(), 7);
    }
}
