//! Malayalam generators.
//!
//! Usable taggers and parsers for Malayalam are scarce, so these generators
//! work from closed word-group tables and sandhi rewrite rules over a plain
//! whitespace tokenization. Back-translation and pair translation go through
//! the optional [`crate::translation::Translator`].

pub mod negative;
pub mod positive;
pub mod rules;
pub mod sandhi;

pub use negative::MalayalamNegativeGenerator;
pub use positive::MalayalamPositiveGenerator;
pub use rules::{NonSynonymRules, RuleSet};
pub use sandhi::{SandhiRule, SandhiRuleConfig};
