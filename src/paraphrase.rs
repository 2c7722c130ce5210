//! Paraphrase and non-paraphrase generators.
//!
//! Every generator turns one input sentence into a [`ParaphraseSet`] of
//! candidate sentences. Positive generators produce paraphrases, negative
//! generators produce sentences that look alike but mean something else.
//!
//! # Architecture
//!
//! - [`ParaphraseGenerator`] - common interface used by the dataset builder
//! - [`hindi`] - tagger/parser driven rules (synonyms, conjunct rotation,
//!   proper-noun swap, compound negation)
//! - [`malayalam`] - rule-table driven rules (closed-class substitution,
//!   copula negation, sandhi rewriting, back-translation)
//! - [`factory::GeneratorFactory`] - builds generators and their adapters
//!   from a [`crate::config::ParagenConfig`]
//!
//! Rules never fail loudly. Each rule has a `try_*` form returning
//! [`crate::error::Result`]; the plain form logs adapter failures and returns
//! no result.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ParagenError, Result};

pub mod factory;
pub mod hindi;
pub mod malayalam;

pub use factory::GeneratorFactory;
pub use hindi::{HindiNegativeGenerator, HindiPositiveGenerator};
pub use malayalam::{MalayalamNegativeGenerator, MalayalamPositiveGenerator};

/// Deduplicated set of generated sentences.
pub type ParaphraseSet = BTreeSet<String>;

/// Whether generated sentences are paraphrases of the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Polarity::Positive => "positive",
            Polarity::Negative => "negative",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Languages with generator support.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Hindi,
    Malayalam,
}

impl Language {
    /// ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Hindi => "hi",
            Language::Malayalam => "ml",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A generator of sentence variants.
pub trait ParaphraseGenerator: Send + Sync {
    /// Generate variants of `sentence` using every rule of this generator.
    ///
    /// Never returns the unchanged input. Adapter failures only remove the
    /// failing rule's contribution.
    fn generate(&self, sentence: &str) -> ParaphraseSet;

    /// Language of the sentences this generator handles.
    fn language(&self) -> Language;

    /// Label of the pairs this generator produces.
    fn polarity(&self) -> Polarity;

    /// Get the name of this generator (for debugging and dataset records).
    fn name(&self) -> &'static str;
}

/// Collapse a rule's typed outcome into its "no result" form.
///
/// A missing translator is expected in offline setups and is only logged at
/// debug level; every other error is a warning.
pub(crate) fn or_no_result<T: Default>(rule: &str, outcome: Result<T>) -> T {
    match outcome {
        Ok(value) => value,
        Err(ParagenError::TranslatorUnavailable(msg)) => {
            log::debug!("{rule}: skipped ({msg})");
            T::default()
        }
        Err(e) => {
            log::warn!("{rule}: {e}");
            T::default()
        }
    }
}
