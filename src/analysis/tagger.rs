//! Adapter traits for the external part-of-speech tagger and dependency
//! parser.
//!
//! paragen does not tag or parse text itself. Generators receive these
//! adapters at construction time as `Arc<dyn ...>` handles. See
//! [`crate::analysis::conllu::ConlluAnnotator`] for the bundled
//! implementation backed by pre-computed CoNLL-U output.

use crate::analysis::token::{DependencyEdge, TaggedToken};
use crate::error::Result;

/// Part-of-speech tagger.
pub trait Tagger: Send + Sync {
    /// Tag the given sentence, one entry per token in input order.
    fn tag(&self, sentence: &str) -> Result<Vec<TaggedToken>>;

    /// Get the name of this tagger (for debugging and logging).
    fn name(&self) -> &str;
}

/// Dependency parser.
pub trait DependencyParser: Send + Sync {
    /// Parse the given sentence. The i-th edge's child is the i-th token.
    fn parse(&self, sentence: &str) -> Result<Vec<DependencyEdge>>;

    /// Get the name of this parser (for debugging and logging).
    fn name(&self) -> &str;
}
