//! Sandhi (phonological fusion) rewrite rules.
//!
//! Malayalam lets a word and a following particle be written apart or fused:
//! "കണ്ടു എന്ന്" can also be written "കണ്ടെന്ന്". A [`SandhiRule`] describes
//! one such fusion: which particles trigger it, which stems it applies to
//! (`pattern`) and how the fused word is spelled (`replacement`, with regex
//! capture references).

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ParagenError, Result};

/// Complementizer "that" in its two spellings.
pub const COMPLEMENTIZERS: &[&str] = &["എന്നു", "എന്ന്"];

/// Stems ending in the vowel sign ു or the virama ്.
const DEFAULT_PATTERN: &str = "^(.*)[ു്]$";

/// Drop the final sign and fuse with the complementizer.
const DEFAULT_REPLACEMENT: &str = "${1}െന്ന്";

/// Serializable form of a [`SandhiRule`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandhiRuleConfig {
    /// Particles that trigger the rule when they follow the stem.
    pub triggers: Vec<String>,
    /// Regex the stem must match.
    pub pattern: String,
    /// Replacement for the stem; the trigger token is consumed.
    pub replacement: String,
}

impl Default for SandhiRuleConfig {
    fn default() -> Self {
        Self {
            triggers: COMPLEMENTIZERS.iter().map(|s| s.to_string()).collect(),
            pattern: DEFAULT_PATTERN.to_string(),
            replacement: DEFAULT_REPLACEMENT.to_string(),
        }
    }
}

/// One stem + particle fusion rule.
#[derive(Debug, Clone)]
pub struct SandhiRule {
    triggers: Vec<String>,
    pattern: Regex,
    replacement: String,
}

impl Default for SandhiRule {
    fn default() -> Self {
        Self {
            triggers: COMPLEMENTIZERS.iter().map(|s| s.to_string()).collect(),
            pattern: Regex::new(DEFAULT_PATTERN).expect("default sandhi pattern is valid"),
            replacement: DEFAULT_REPLACEMENT.to_string(),
        }
    }
}

impl SandhiRule {
    /// Compile a rule from its configuration.
    pub fn from_config(config: &SandhiRuleConfig) -> Result<Self> {
        if config.triggers.is_empty() {
            return Err(ParagenError::config("sandhi rule needs at least one trigger"));
        }
        let pattern = Regex::new(&config.pattern).map_err(|e| {
            ParagenError::config(format!("invalid sandhi pattern '{}': {}", config.pattern, e))
        })?;
        Ok(Self {
            triggers: config.triggers.clone(),
            pattern,
            replacement: config.replacement.clone(),
        })
    }

    /// Whether `word` is one of this rule's trigger particles.
    pub fn is_trigger(&self, word: &str) -> bool {
        self.triggers.iter().any(|t| t == word)
    }

    /// Fuse `word` with the following token `next`, if the rule applies.
    pub fn rewrite(&self, word: &str, next: &str) -> Option<String> {
        if !self.is_trigger(next) || !self.pattern.is_match(word) {
            return None;
        }
        let fused = self.pattern.replace(word, self.replacement.as_str());
        (fused != word).then(|| fused.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rule_vowel_sign() {
        let rule = SandhiRule::default();
        assert_eq!(rule.rewrite("കണ്ടു", "എന്ന്").as_deref(), Some("കണ്ടെന്ന്"));
        assert_eq!(rule.rewrite("കണ്ടു", "എന്നു").as_deref(), Some("കണ്ടെന്ന്"));
    }

    #[test]
    fn test_default_rule_virama() {
        let rule = SandhiRule::default();
        assert_eq!(rule.rewrite("പറഞ്ഞ്", "എന്ന്").as_deref(), Some("പറഞ്ഞെന്ന്"));
    }

    #[test]
    fn test_default_rule_not_applicable() {
        let rule = SandhiRule::default();
        // Ends in a vowel sign other than ു.
        assert_eq!(rule.rewrite("വരാം", "എന്ന്"), None);
        // Not followed by a complementizer.
        assert_eq!(rule.rewrite("കണ്ടു", "അവൻ"), None);
    }

    #[test]
    fn test_rule_from_config() {
        let config = SandhiRuleConfig {
            triggers: vec!["ഉം".to_string()],
            pattern: "^(.*)ം$".to_string(),
            replacement: "${1}മും".to_string(),
        };
        let rule = SandhiRule::from_config(&config).unwrap();
        assert_eq!(rule.rewrite("പണം", "ഉം").as_deref(), Some("പണമും"));
        assert!(rule.is_trigger("ഉം"));
    }

    #[test]
    fn test_invalid_config() {
        let config = SandhiRuleConfig {
            pattern: "(".to_string(),
            ..SandhiRuleConfig::default()
        };
        assert!(SandhiRule::from_config(&config).is_err());

        let config = SandhiRuleConfig {
            triggers: vec![],
            ..SandhiRuleConfig::default()
        };
        assert!(SandhiRule::from_config(&config).is_err());
    }

    #[test]
    fn test_default_config_matches_default_rule() {
        let rule = SandhiRule::from_config(&SandhiRuleConfig::default()).unwrap();
        assert_eq!(rule.rewrite("കണ്ടു", "എന്ന്").as_deref(), Some("കണ്ടെന്ന്"));
    }
}
