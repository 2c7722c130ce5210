//! Malayalam paraphrase generation.
//!
//! Two single-sentence rules ([`MalayalamPositiveGenerator::morphology_and_agglutination_based_paraphrasing`]
//! and [`MalayalamPositiveGenerator::back_translation`]) and one rule for
//! sentence pairs in other languages
//! ([`MalayalamPositiveGenerator::translate_pairs_to_paraphrases`]).

use std::sync::Arc;

use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer, strip_sentence};
use crate::error::{ParagenError, Result};
use crate::paraphrase::malayalam::sandhi::SandhiRule;
use crate::paraphrase::{Language, ParaphraseGenerator, ParaphraseSet, Polarity, or_no_result};
use crate::translation::{LanguageCode, Translator};

/// Produces Malayalam paraphrases.
#[derive(Clone)]
pub struct MalayalamPositiveGenerator {
    tokenizer: Arc<dyn Tokenizer>,
    sandhi_rules: Vec<SandhiRule>,
    translator: Option<Arc<dyn Translator>>,
    pivot_language: LanguageCode,
}

impl std::fmt::Debug for MalayalamPositiveGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MalayalamPositiveGenerator")
            .field("tokenizer", &self.tokenizer.name())
            .field("sandhi_rules", &self.sandhi_rules.len())
            .field("translator", &self.translator.as_ref().map(|t| t.name()))
            .field("pivot_language", &self.pivot_language)
            .finish()
    }
}

impl Default for MalayalamPositiveGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MalayalamPositiveGenerator {
    /// Create a generator with the default sandhi rule and no translator.
    pub fn new() -> Self {
        Self {
            tokenizer: Arc::new(WhitespaceTokenizer::new()),
            sandhi_rules: vec![SandhiRule::default()],
            translator: None,
            pivot_language: LanguageCode::english(),
        }
    }

    /// Add a sandhi rule, tried after the ones already present.
    pub fn with_sandhi_rule(mut self, rule: SandhiRule) -> Self {
        self.sandhi_rules.push(rule);
        self
    }

    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = Some(translator);
        self
    }

    /// Language used as the intermediate step of back-translation.
    pub fn with_pivot_language(mut self, language: LanguageCode) -> Self {
        self.pivot_language = language;
        self
    }

    /// Fuse words with a following complementizer according to the sandhi
    /// rules ("കണ്ടു എന്ന്" -> "കണ്ടെന്ന്").
    ///
    /// Returns one variant if at least one fusion happened, else nothing.
    pub fn morphology_and_agglutination_based_paraphrasing(&self, sentence: &str) -> ParaphraseSet {
        let sentence = self.tokenizer.tokenize(sentence);
        let tokens = sentence.tokens();
        let mut words: Vec<String> = Vec::with_capacity(tokens.len());
        let mut fused = 0;

        let mut i = 0;
        while i < tokens.len() {
            let word = &tokens[i];
            let rewritten = if self.is_trigger(word) {
                None
            } else {
                tokens
                    .get(i + 1)
                    .and_then(|next| self.sandhi_rules.iter().find_map(|r| r.rewrite(word, next)))
            };

            match rewritten {
                Some(rewritten) => {
                    log::debug!("sandhi: {} {} -> {}", word, tokens[i + 1], rewritten);
                    words.push(rewritten);
                    fused += 1;
                    // The particle is now part of the fused word.
                    i += 2;
                }
                None => {
                    words.push(word.clone());
                    i += 1;
                }
            }
        }

        let mut variants = ParaphraseSet::new();
        if fused > 0 {
            variants.insert(words.join(" "));
        }
        variants
    }

    fn is_trigger(&self, word: &str) -> bool {
        self.sandhi_rules.iter().any(|r| r.is_trigger(word))
    }

    /// Translate a Malayalam sentence to the pivot language and back.
    ///
    /// Returns the round-tripped sentence if it differs from the input.
    /// Non-Malayalam input, a missing translator or a translation failure
    /// give no result.
    pub fn back_translation(&self, sentence: &str) -> ParaphraseSet {
        or_no_result("back_translation", self.try_back_translation(sentence))
            .into_iter()
            .collect()
    }

    /// Like [`Self::back_translation`], surfacing translator failures.
    pub fn try_back_translation(&self, sentence: &str) -> Result<Option<String>> {
        let original = strip_sentence(sentence.trim());
        if original.is_empty() {
            return Ok(None);
        }
        let translator = self.translator()?;

        let detected = translator.detect_language(original)?;
        if !detected.is_malayalam() {
            log::info!("back_translation: expected Malayalam input, detected '{detected}'");
            return Ok(None);
        }

        let pivot = translator.translate(original, &self.pivot_language)?;
        let round_trip = translator.translate(&pivot, &LanguageCode::malayalam())?;
        let round_trip = strip_sentence(round_trip.trim());

        if round_trip.is_empty() || round_trip == original {
            return Ok(None);
        }
        Ok(Some(round_trip.to_string()))
    }

    /// Translate a pair of sentences into Malayalam; if the translations
    /// differ, they form a candidate paraphrase pair.
    ///
    /// Sentences already in Malayalam are used as they are. Returns both
    /// translations, or nothing if they are identical or translation fails.
    pub fn translate_pairs_to_paraphrases(
        &self,
        sent1: &str,
        sent2: &str,
        lang1: &LanguageCode,
        lang2: &LanguageCode,
    ) -> Vec<String> {
        or_no_result(
            "translate_pairs_to_paraphrases",
            self.try_translate_pairs_to_paraphrases(sent1, sent2, lang1, lang2),
        )
    }

    /// Like [`Self::translate_pairs_to_paraphrases`], surfacing translator
    /// failures.
    pub fn try_translate_pairs_to_paraphrases(
        &self,
        sent1: &str,
        sent2: &str,
        lang1: &LanguageCode,
        lang2: &LanguageCode,
    ) -> Result<Vec<String>> {
        let first = self.to_malayalam(sent1, lang1)?;
        let second = self.to_malayalam(sent2, lang2)?;

        if first.is_empty() || second.is_empty() {
            return Ok(Vec::new());
        }
        if first == second {
            log::info!("translate_pairs_to_paraphrases: both sentences translate to '{first}'");
            return Ok(Vec::new());
        }
        Ok(vec![first, second])
    }

    /// Every rule for sentence pairs, deduplicated.
    pub fn generate_for_pair(
        &self,
        sent1: &str,
        sent2: &str,
        lang1: &LanguageCode,
        lang2: &LanguageCode,
    ) -> ParaphraseSet {
        self.translate_pairs_to_paraphrases(sent1, sent2, lang1, lang2)
            .into_iter()
            .collect()
    }

    fn to_malayalam(&self, sentence: &str, language: &LanguageCode) -> Result<String> {
        let translated = if language.is_malayalam() {
            sentence.to_string()
        } else {
            self.translator()?
                .translate(sentence, &LanguageCode::malayalam())?
        };
        Ok(strip_sentence(translated.trim()).to_string())
    }

    fn translator(&self) -> Result<&dyn Translator> {
        self.translator
            .as_deref()
            .ok_or_else(|| ParagenError::translator_unavailable("no translator configured"))
    }
}

impl ParaphraseGenerator for MalayalamPositiveGenerator {
    fn generate(&self, sentence: &str) -> ParaphraseSet {
        let mut variants = self.morphology_and_agglutination_based_paraphrasing(sentence);
        variants.extend(self.back_translation(sentence));
        variants
    }

    fn language(&self) -> Language {
        Language::Malayalam
    }

    fn polarity(&self) -> Polarity {
        Polarity::Positive
    }

    fn name(&self) -> &'static str {
        "malayalam_positive"
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    /// Translator answering from a fixed table.
    struct TableTranslator {
        table: HashMap<(&'static str, &'static str), &'static str>,
        language: &'static str,
    }

    impl Translator for TableTranslator {
        fn translate(&self, text: &str, target: &LanguageCode) -> Result<String> {
            self.table
                .iter()
                .find(|((source, lang), _)| *source == text && *lang == target.as_str())
                .map(|(_, out)| out.to_string())
                .ok_or_else(|| ParagenError::translation(format!("no entry for '{text}'")))
        }

        fn detect_language(&self, _text: &str) -> Result<LanguageCode> {
            Ok(LanguageCode::new(self.language))
        }

        fn name(&self) -> &str {
            "table"
        }
    }

    fn translator(language: &'static str) -> Arc<dyn Translator> {
        let mut table = HashMap::new();
        table.insert(("അവൻ നാളെ വരും", "en"), "He will come tomorrow");
        table.insert(("He will come tomorrow", "ml"), "അവൻ നാളെ എത്തും");
        table.insert(("ഞാൻ വന്നു", "en"), "I came");
        table.insert(("I came", "ml"), "ഞാൻ വന്നു");
        table.insert(("I came home", "ml"), "ഞാൻ വീട്ടിൽ വന്നു.");
        table.insert(("मैं घर आया", "ml"), "ഞാൻ വീട്ടിലേക്ക് വന്നു");
        table.insert(("I arrived", "ml"), "ഞാൻ വന്നു");
        Arc::new(TableTranslator { table, language })
    }

    #[test]
    fn test_morphology_fuses_complementizer() {
        let generator = MalayalamPositiveGenerator::new();
        let variants =
            generator.morphology_and_agglutination_based_paraphrasing("അവൻ വന്നു എന്ന് ഞാൻ കേട്ടു.");

        assert_eq!(
            variants.into_iter().collect::<Vec<_>>(),
            vec!["അവൻ വന്നെന്ന് ഞാൻ കേട്ടു"]
        );
    }

    #[test]
    fn test_morphology_consumes_only_following_particle() {
        let generator = MalayalamPositiveGenerator::new();
        // Second complementizer follows a stem the rule does not apply to.
        let variants = generator
            .morphology_and_agglutination_based_paraphrasing("കണ്ടു എന്നു പറഞ്ഞു വരാം എന്ന്");

        assert_eq!(
            variants.into_iter().collect::<Vec<_>>(),
            vec!["കണ്ടെന്ന് പറഞ്ഞു വരാം എന്ന്"]
        );
    }

    #[test]
    fn test_morphology_without_match() {
        let generator = MalayalamPositiveGenerator::new();
        assert!(generator
            .morphology_and_agglutination_based_paraphrasing("അവൻ നാളെ വരും")
            .is_empty());
        assert!(generator
            .morphology_and_agglutination_based_paraphrasing("എന്ന്")
            .is_empty());
        assert!(generator.morphology_and_agglutination_based_paraphrasing("").is_empty());
    }

    #[test]
    fn test_back_translation() {
        let generator = MalayalamPositiveGenerator::new().with_translator(translator("ml"));
        let variants = generator.back_translation("അവൻ നാളെ വരും.");

        assert_eq!(variants.into_iter().collect::<Vec<_>>(), vec!["അവൻ നാളെ എത്തും"]);
    }

    #[test]
    fn test_back_translation_identical_round_trip() {
        let generator = MalayalamPositiveGenerator::new().with_translator(translator("ml"));
        assert!(generator.back_translation("ഞാൻ വന്നു").is_empty());
    }

    #[test]
    fn test_back_translation_rejects_other_languages() {
        let generator = MalayalamPositiveGenerator::new().with_translator(translator("hi"));
        assert_eq!(generator.try_back_translation("अवन").unwrap(), None);
    }

    #[test]
    fn test_back_translation_failures_are_typed() {
        let generator = MalayalamPositiveGenerator::new();
        assert!(matches!(
            generator.try_back_translation("അവൻ നാളെ വരും"),
            Err(ParagenError::TranslatorUnavailable(_))
        ));
        assert!(generator.back_translation("അവൻ നാളെ വരും").is_empty());

        let generator = MalayalamPositiveGenerator::new().with_translator(translator("ml"));
        assert!(matches!(
            generator.try_back_translation("പുതിയ വാക്യം"),
            Err(ParagenError::Translation(_))
        ));
        assert!(generator.back_translation("പുതിയ വാക്യം").is_empty());
    }

    #[test]
    fn test_translate_pairs() {
        let generator = MalayalamPositiveGenerator::new().with_translator(translator("ml"));
        let pair = generator.translate_pairs_to_paraphrases(
            "I came home",
            "मैं घर आया",
            &LanguageCode::new("en"),
            &LanguageCode::new("hi"),
        );
        assert_eq!(pair, vec!["ഞാൻ വീട്ടിൽ വന്നു", "ഞാൻ വീട്ടിലേക്ക് വന്നു"]);
    }

    #[test]
    fn test_translate_pairs_malayalam_input_is_kept() {
        // No translator needed when both sides are already Malayalam.
        let generator = MalayalamPositiveGenerator::new();
        let ml = LanguageCode::malayalam();
        let pair = generator.translate_pairs_to_paraphrases("ഞാൻ വന്നു.", "ഞാൻ എത്തി", &ml, &ml);
        assert_eq!(pair, vec!["ഞാൻ വന്നു", "ഞാൻ എത്തി"]);
    }

    #[test]
    fn test_translate_pairs_identical() {
        let generator = MalayalamPositiveGenerator::new().with_translator(translator("ml"));
        let pair = generator.translate_pairs_to_paraphrases(
            "I arrived",
            "ഞാൻ വന്നു",
            &LanguageCode::english(),
            &LanguageCode::malayalam(),
        );
        assert!(pair.is_empty());
    }

    #[test]
    fn test_translate_pairs_failure() {
        let generator = MalayalamPositiveGenerator::new();
        let result = generator.try_translate_pairs_to_paraphrases(
            "I came home",
            "ഞാൻ വന്നു",
            &LanguageCode::english(),
            &LanguageCode::malayalam(),
        );
        assert!(result.is_err());
        assert!(generator
            .generate_for_pair(
                "I came home",
                "ഞാൻ വന്നു",
                &LanguageCode::english(),
                &LanguageCode::malayalam()
            )
            .is_empty());
    }

    #[test]
    fn test_generate_union() {
        let generator = MalayalamPositiveGenerator::new().with_translator(translator("ml"));
        let variants = generator.generate("അവൻ നാളെ വരും");
        assert_eq!(variants.len(), 1);
        assert!(variants.contains("അവൻ നാളെ എത്തും"));

        let generator = MalayalamPositiveGenerator::new();
        let variants = generator.generate("കണ്ടു എന്ന്");
        assert_eq!(variants.into_iter().collect::<Vec<_>>(), vec!["കണ്ടെന്ന്"]);
    }
}
