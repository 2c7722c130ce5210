//! # Paragen
//!
//! Rule-based generation of paraphrase and non-paraphrase sentence pairs for
//! Hindi and Malayalam, for training paraphrase-detection models.
//!
//! ## Features
//!
//! - Hindi: synonym substitution, conjunct rotation, proper-noun swap and
//!   compound negation over tagger/parser output
//! - Malayalam: closed word-group substitution, copula negation, sandhi
//!   rewriting and back-translation
//! - Pluggable adapters for the tagger, the parser, the synonym store and
//!   the translation service
//! - JSON Lines dataset output

pub mod analysis;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod paraphrase;
pub mod translation;

pub mod prelude {
    pub use crate::analysis::{
        ConlluAnnotator, DependencyParser, PosCategory, Sentence, SynonymLookup,
        SynsetDictionary, Tagger,
    };
    pub use crate::config::ParagenConfig;
    pub use crate::dataset::{DatasetBuilder, DatasetStats, SentencePair};
    pub use crate::error::{ParagenError, Result};
    pub use crate::paraphrase::{
        GeneratorFactory, HindiNegativeGenerator, HindiPositiveGenerator, Language,
        MalayalamNegativeGenerator, MalayalamPositiveGenerator, ParaphraseGenerator,
        ParaphraseSet, Polarity,
    };
    pub use crate::translation::{LanguageCode, Translator};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
