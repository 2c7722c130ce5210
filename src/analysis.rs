//! Text analysis for paraphrase generation.
//!
//! This module provides tokenization, the shared token types, and the adapter
//! traits through which generators reach the external tagger, dependency
//! parser and synonym store.

pub mod conllu;
pub mod synonym;
pub mod tagger;
pub mod token;
pub mod tokenizer;

pub use conllu::ConlluAnnotator;
pub use synonym::{SynonymLookup, SynsetDictionary};
pub use tagger::{DependencyParser, Tagger};
pub use token::{ChildToken, DependencyEdge, PosCategory, Sentence, TaggedToken};
pub use tokenizer::{Tokenizer, WhitespaceTokenizer};
