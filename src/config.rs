//! Configuration for paragen.
//!
//! Configuration is read from a JSON file. Every field has a default, so an
//! empty object (`{}`) is a valid configuration.
//!
//! ```json
//! {
//!   "hindi": {
//!     "conllu_path": "data/hi.conllu",
//!     "synset_path": "data/hi_synsets.json"
//!   },
//!   "malayalam": {
//!     "extra_rule_sets": [["ഇന്ന്", "ഇപ്പോൾ"]],
//!     "pivot_language": "en"
//!   },
//!   "translation": { "api_url": "http://localhost:5000" }
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ParagenError, Result};
use crate::paraphrase::hindi::{DEFAULT_NEGATION_PARTICLE, DEFAULT_PROPER_NOUN_TAG};
use crate::paraphrase::malayalam::sandhi::{SandhiRule, SandhiRuleConfig};
use crate::translation::TranslationConfig;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagenConfig {
    pub hindi: HindiConfig,
    pub malayalam: MalayalamConfig,
    /// Translation service; back-translation and pair translation are
    /// disabled without it.
    pub translation: Option<TranslationConfig>,
}

/// Settings for the Hindi generators.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HindiConfig {
    /// CoNLL-U file with tagger/parser output for the input sentences.
    pub conllu_path: Option<PathBuf>,
    /// JSON synset file used for synonym substitution.
    pub synset_path: Option<PathBuf>,
    /// Tag that marks proper nouns.
    pub proper_noun_tag: String,
    /// Particle inserted by compound negation.
    pub negation_particle: String,
}

impl Default for HindiConfig {
    fn default() -> Self {
        Self {
            conllu_path: None,
            synset_path: None,
            proper_noun_tag: DEFAULT_PROPER_NOUN_TAG.to_string(),
            negation_particle: DEFAULT_NEGATION_PARTICLE.to_string(),
        }
    }
}

/// Settings for the Malayalam generators.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MalayalamConfig {
    /// Word groups added to the built-in non-synonym rule sets.
    pub extra_rule_sets: Vec<Vec<String>>,
    /// Sandhi rules tried after the built-in complementizer rule.
    pub extra_sandhi_rules: Vec<SandhiRuleConfig>,
    /// Intermediate language for back-translation.
    pub pivot_language: String,
    /// Whether the positive generator uses back-translation.
    pub back_translation: bool,
}

impl Default for MalayalamConfig {
    fn default() -> Self {
        Self {
            extra_rule_sets: Vec::new(),
            extra_sandhi_rules: Vec::new(),
            pivot_language: "en".to_string(),
            back_translation: true,
        }
    }
}

impl ParagenConfig {
    /// Load and validate a configuration file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ParagenError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: ParagenConfig = serde_json::from_str(&content).map_err(|e| {
            ParagenError::config(format!(
                "Failed to parse config JSON from '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialization alone cannot.
    pub fn validate(&self) -> Result<()> {
        if self.hindi.proper_noun_tag.trim().is_empty() {
            return Err(ParagenError::config("hindi.proper_noun_tag must not be empty"));
        }
        if self.hindi.negation_particle.trim().is_empty() {
            return Err(ParagenError::config("hindi.negation_particle must not be empty"));
        }
        if self.malayalam.pivot_language.trim().is_empty() {
            return Err(ParagenError::config("malayalam.pivot_language must not be empty"));
        }
        for (i, set) in self.malayalam.extra_rule_sets.iter().enumerate() {
            let mut distinct: Vec<&String> = set.iter().collect();
            distinct.sort();
            distinct.dedup();
            if distinct.len() < 2 {
                return Err(ParagenError::config(format!(
                    "malayalam.extra_rule_sets[{i}] needs at least two distinct words"
                )));
            }
        }
        for rule in &self.malayalam.extra_sandhi_rules {
            SandhiRule::from_config(rule)?;
        }
        if let Some(translation) = &self.translation {
            if translation.api_url.trim().is_empty() {
                return Err(ParagenError::config("translation.api_url must not be empty"));
            }
        }
        Ok(())
    }
}
