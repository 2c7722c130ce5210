//! Builds generators and their adapters from configuration.

use std::sync::Arc;

use crate::analysis::conllu::ConlluAnnotator;
use crate::analysis::synonym::SynsetDictionary;
use crate::config::ParagenConfig;
use crate::error::{ParagenError, Result};
use crate::paraphrase::hindi::{HindiNegativeGenerator, HindiPositiveGenerator};
use crate::paraphrase::malayalam::{
    MalayalamNegativeGenerator, MalayalamPositiveGenerator, NonSynonymRules, RuleSet, SandhiRule,
};
use crate::paraphrase::{Language, ParaphraseGenerator, Polarity};
use crate::translation::{LanguageCode, Translator};

/// Creates generators from a [`ParagenConfig`].
///
/// File-backed adapters are loaded once, on first use, and shared by every
/// generator built afterwards.
pub struct GeneratorFactory {
    config: ParagenConfig,
    annotator: Option<Arc<ConlluAnnotator>>,
    synsets: Option<Arc<SynsetDictionary>>,
}

impl GeneratorFactory {
    pub fn new(config: ParagenConfig) -> Self {
        Self {
            config,
            annotator: None,
            synsets: None,
        }
    }

    pub fn config(&self) -> &ParagenConfig {
        &self.config
    }

    /// Generators for `language`, one per requested polarity.
    pub fn generators(
        &mut self,
        language: Language,
        polarities: &[Polarity],
    ) -> Result<Vec<Box<dyn ParaphraseGenerator>>> {
        let mut generators: Vec<Box<dyn ParaphraseGenerator>> = Vec::new();
        for polarity in polarities {
            let generator: Box<dyn ParaphraseGenerator> = match (language, polarity) {
                (Language::Hindi, Polarity::Positive) => Box::new(self.hindi_positive()?),
                (Language::Hindi, Polarity::Negative) => Box::new(self.hindi_negative()?),
                (Language::Malayalam, Polarity::Positive) => Box::new(self.malayalam_positive()?),
                (Language::Malayalam, Polarity::Negative) => Box::new(self.malayalam_negative()?),
            };
            generators.push(generator);
        }
        Ok(generators)
    }

    pub fn hindi_positive(&mut self) -> Result<HindiPositiveGenerator> {
        let annotator = self.annotator()?;
        let synsets = self.synsets()?;
        Ok(
            HindiPositiveGenerator::new(annotator.clone(), annotator, synsets)
                .with_proper_noun_tag(self.config.hindi.proper_noun_tag.clone()),
        )
    }

    pub fn hindi_negative(&mut self) -> Result<HindiNegativeGenerator> {
        let annotator = self.annotator()?;
        Ok(HindiNegativeGenerator::new(annotator.clone(), annotator)
            .with_proper_noun_tag(self.config.hindi.proper_noun_tag.clone())
            .with_negation_particle(self.config.hindi.negation_particle.clone()))
    }

    pub fn malayalam_negative(&self) -> Result<MalayalamNegativeGenerator> {
        let mut rules = NonSynonymRules::default();
        for (i, words) in self.config.malayalam.extra_rule_sets.iter().enumerate() {
            rules = rules.with_rule_set(RuleSet::new(format!("extra_{i}"), words.iter().cloned())?);
        }
        Ok(MalayalamNegativeGenerator::new(rules))
    }

    pub fn malayalam_positive(&self) -> Result<MalayalamPositiveGenerator> {
        let malayalam = &self.config.malayalam;
        let mut generator = MalayalamPositiveGenerator::new()
            .with_pivot_language(LanguageCode::new(&malayalam.pivot_language));

        for rule in &malayalam.extra_sandhi_rules {
            generator = generator.with_sandhi_rule(SandhiRule::from_config(rule)?);
        }
        if malayalam.back_translation {
            if let Some(translator) = self.translator()? {
                generator = generator.with_translator(translator);
            }
        }
        Ok(generator)
    }

    /// The configured translator, if any.
    pub fn translator(&self) -> Result<Option<Arc<dyn Translator>>> {
        let Some(config) = self.config.translation.as_ref() else {
            return Ok(None);
        };

        #[cfg(feature = "translation-http")]
        {
            let translator = crate::translation::HttpTranslator::new(config.clone())?;
            Ok(Some(Arc::new(translator)))
        }

        #[cfg(not(feature = "translation-http"))]
        {
            log::warn!(
                "translation service '{}' configured but paragen was built without the \
                 `translation-http` feature; translation rules are disabled",
                config.api_url
            );
            Ok(None)
        }
    }

    fn annotator(&mut self) -> Result<Arc<ConlluAnnotator>> {
        if let Some(annotator) = &self.annotator {
            return Ok(annotator.clone());
        }
        let path = self.config.hindi.conllu_path.as_ref().ok_or_else(|| {
            ParagenError::config("hindi.conllu_path is required for the Hindi generators")
        })?;
        let annotator = Arc::new(ConlluAnnotator::load_from_file(path)?);
        self.annotator = Some(annotator.clone());
        Ok(annotator)
    }

    fn synsets(&mut self) -> Result<Arc<SynsetDictionary>> {
        if let Some(synsets) = &self.synsets {
            return Ok(synsets.clone());
        }
        let synsets = match self.config.hindi.synset_path.as_ref() {
            Some(path) => SynsetDictionary::load_from_file(path)?,
            None => {
                log::warn!("hindi.synset_path not set; synonym substitution will find nothing");
                SynsetDictionary::new()
            }
        };
        let synsets = Arc::new(synsets);
        self.synsets = Some(synsets.clone());
        Ok(synsets)
    }
}
