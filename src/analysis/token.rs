//! Token types shared by the tokenizer, the annotation adapters and the
//! generators.
//!
//! # Core Types
//!
//! - [`Sentence`] - An ordered sequence of word tokens
//! - [`TaggedToken`] - A word paired with its part-of-speech tag
//! - [`PosCategory`] - Coarse category used for synonym lookups
//! - [`DependencyEdge`] - A labelled head/dependent relation from the parser
//!
//! # Examples
//!
//! ```
//! use paragen::analysis::token::{PosCategory, TaggedToken};
//!
//! let token = TaggedToken::new("लड़का", "NN");
//! assert_eq!(token.category(), Some(PosCategory::Noun));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// An ordered sequence of word tokens.
///
/// Sentences are never mutated in place; rules build new sequences.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    tokens: Vec<String>,
}

impl Sentence {
    /// Create a sentence from already-split tokens.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Sentence {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.tokens.last().map(String::as_str)
    }

    /// Join the tokens with single spaces.
    pub fn join(&self) -> String {
        self.tokens.join(" ")
    }

    /// Return a copy of this sentence with the token at `index` replaced.
    ///
    /// Returns `None` if `index` is out of range.
    pub fn with_replaced(&self, index: usize, word: &str) -> Option<Sentence> {
        if index >= self.tokens.len() {
            return None;
        }
        let mut tokens = self.tokens.clone();
        tokens[index] = word.to_string();
        Some(Sentence { tokens })
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.join())
    }
}

/// A word paired with the part-of-speech tag assigned by the tagger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub word: String,
    pub tag: String,
}

impl TaggedToken {
    pub fn new<W: Into<String>, T: Into<String>>(word: W, tag: T) -> Self {
        TaggedToken {
            word: word.into(),
            tag: tag.into(),
        }
    }

    /// The synonym-lookup category for this token's tag, if any.
    pub fn category(&self) -> Option<PosCategory> {
        PosCategory::from_tag(&self.tag)
    }
}

/// Part-of-speech categories the synonym store is queried with.
///
/// Only nouns, verbs and adjectives are ever replaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosCategory {
    Noun,
    Verb,
    Adjective,
}

impl PosCategory {
    /// Map a treebank tag to a category.
    ///
    /// `NN*` maps to [`PosCategory::Noun`], `V*` to [`PosCategory::Verb`] and
    /// `JJ*` to [`PosCategory::Adjective`]. Every other tag has no category.
    pub fn from_tag(tag: &str) -> Option<Self> {
        if tag.starts_with("NN") {
            Some(PosCategory::Noun)
        } else if tag.starts_with('V') {
            Some(PosCategory::Verb)
        } else if tag.starts_with("JJ") {
            Some(PosCategory::Adjective)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PosCategory::Noun => "NOUN",
            PosCategory::Verb => "VERB",
            PosCategory::Adjective => "ADJECTIVE",
        }
    }
}

impl fmt::Display for PosCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The dependent side of a [`DependencyEdge`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildToken {
    pub text: String,
    /// Coarse (universal) part of speech, e.g. `NOUN`, `VERB`.
    pub upos: String,
}

/// A labelled relation between a head word and a dependent word.
///
/// Edges are ordered by dependent: the i-th edge's child is the i-th word of
/// the sentence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEdge {
    /// 1-based index of the head word; 0 denotes the root.
    pub parent_index: usize,
    pub relation: String,
    pub child: ChildToken,
}

impl DependencyEdge {
    pub fn new<R, T, U>(parent_index: usize, relation: R, text: T, upos: U) -> Self
    where
        R: Into<String>,
        T: Into<String>,
        U: Into<String>,
    {
        DependencyEdge {
            parent_index,
            relation: relation.into(),
            child: ChildToken {
                text: text.into(),
                upos: upos.into(),
            },
        }
    }

    /// 0-based position of the head word, or `None` for the root.
    pub fn parent_position(&self) -> Option<usize> {
        self.parent_index.checked_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_category_mapping() {
        assert_eq!(PosCategory::from_tag("NN"), Some(PosCategory::Noun));
        assert_eq!(PosCategory::from_tag("NNP"), Some(PosCategory::Noun));
        assert_eq!(PosCategory::from_tag("VM"), Some(PosCategory::Verb));
        assert_eq!(PosCategory::from_tag("VAUX"), Some(PosCategory::Verb));
        assert_eq!(PosCategory::from_tag("JJ"), Some(PosCategory::Adjective));
        assert_eq!(PosCategory::from_tag("PSP"), None);
        assert_eq!(PosCategory::from_tag(""), None);
    }

    #[test]
    fn test_sentence_with_replaced() {
        let sentence = Sentence::new(["a", "b", "c"]);
        let replaced = sentence.with_replaced(1, "x").unwrap();

        assert_eq!(replaced.join(), "a x c");
        assert_eq!(sentence.join(), "a b c");
        assert!(sentence.with_replaced(3, "x").is_none());
    }

    #[test]
    fn test_parent_position() {
        assert_eq!(DependencyEdge::new(0, "root", "गया", "VERB").parent_position(), None);
        assert_eq!(DependencyEdge::new(3, "conj", "और", "CCONJ").parent_position(), Some(2));
    }
}
