//! Hindi generators, driven by the POS tagger, the dependency parser and the
//! synonym store.

pub mod negative;
pub mod positive;

pub use negative::HindiNegativeGenerator;
pub use positive::HindiPositiveGenerator;

/// Treebank tag of proper nouns in the Hindi tagset.
pub const DEFAULT_PROPER_NOUN_TAG: &str = "NNP";

/// Negation particle inserted after compound nouns.
pub const DEFAULT_NEGATION_PARTICLE: &str = "नही";
