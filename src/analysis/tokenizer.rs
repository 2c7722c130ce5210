//! Sentence tokenization.
//!
//! The generators that do not go through the external tagger split raw
//! sentences with a [`Tokenizer`]. The default [`WhitespaceTokenizer`] strips
//! sentence-final periods and surrounding spaces, then splits on whitespace.
//!
//! # Examples
//!
//! ```
//! use paragen::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let sentence = tokenizer.tokenize("അവൻ നാളെ വരും.");
//! assert_eq!(sentence.tokens(), ["അവൻ", "നാളെ", "വരും"]);
//! ```

use crate::analysis::token::Sentence;

/// Trait for tokenizers that convert raw text into a [`Sentence`].
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text. Empty or whitespace-only input yields an
    /// empty sentence.
    fn tokenize(&self, text: &str) -> Sentence;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A tokenizer that strips `.` and spaces from both ends of the text and
/// splits the rest on whitespace.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Sentence {
        Sentence::new(strip_sentence(text).split_whitespace())
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

/// Strip sentence-final periods and spaces from both ends of `text`.
pub fn strip_sentence(text: &str) -> &str {
    text.trim_matches(|c| c == '.' || c == ' ')
}
