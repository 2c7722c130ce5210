//! CoNLL-U backed tagger and dependency parser.
//!
//! Hindi tagging and parsing are done offline by a Universal Dependencies
//! pipeline that emits CoNLL-U. [`ConlluAnnotator`] loads that output and
//! serves it through the [`Tagger`] and [`DependencyParser`] adapters, keyed
//! by sentence text.
//!
//! Each sentence block is indexed under its `# text = ...` comment (if any)
//! and under its space-joined FORM column. Lookups normalize runs of
//! whitespace, so `"राम  गया"` finds the block for `"राम गया"`.
//!
//! # Examples
//!
//! ```
//! use paragen::analysis::conllu::ConlluAnnotator;
//! use paragen::analysis::tagger::Tagger;
//!
//! let conllu = "# text = राम गया\n\
//!               1\tराम\tराम\tPROPN\tNNP\t_\t2\tnsubj\t_\t_\n\
//!               2\tगया\tजा\tVERB\tVM\t_\t0\troot\t_\t_\n";
//! let annotator = ConlluAnnotator::parse_str(conllu).unwrap();
//! let tagged = annotator.tag("राम गया").unwrap();
//! assert_eq!(tagged[0].tag, "NNP");
//! ```

use std::path::Path;
use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::tagger::{DependencyParser, Tagger};
use crate::analysis::token::{DependencyEdge, TaggedToken};
use crate::error::{ParagenError, Result};

const EMPTY_FIELD: &str = "_";

/// One word line of a CoNLL-U sentence block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConlluWord {
    pub form: String,
    pub upos: String,
    pub xpos: String,
    pub head: usize,
    pub deprel: String,
}

impl ConlluWord {
    /// The tag reported by the tagger: XPOS, or UPOS when XPOS is absent.
    pub fn tag(&self) -> &str {
        if self.xpos == EMPTY_FIELD {
            &self.upos
        } else {
            &self.xpos
        }
    }
}

/// In-memory index of annotated sentences.
#[derive(Clone, Debug, Default)]
pub struct ConlluAnnotator {
    sentences: Arc<Vec<Vec<ConlluWord>>>,
    index: Arc<AHashMap<String, usize>>,
}

impl ConlluAnnotator {
    /// Load annotations from a CoNLL-U file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ParagenError::annotation(format!(
                "Failed to read CoNLL-U file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let annotator = Self::parse_str(&content)?;
        log::info!(
            "Loaded {} annotated sentences from {}",
            annotator.len(),
            path.display()
        );
        Ok(annotator)
    }

    /// Parse CoNLL-U text.
    pub fn parse_str(content: &str) -> Result<Self> {
        let mut sentences: Vec<Vec<ConlluWord>> = Vec::new();
        let mut index: AHashMap<String, usize> = AHashMap::new();

        let mut words: Vec<ConlluWord> = Vec::new();
        let mut text: Option<String> = None;

        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim_end_matches('\r');

            if line.trim().is_empty() {
                Self::flush(&mut sentences, &mut index, &mut words, &mut text);
                continue;
            }

            if let Some(comment) = line.strip_prefix('#') {
                if let Some(value) = comment.trim_start().strip_prefix("text") {
                    if let Some(value) = value.trim_start().strip_prefix('=') {
                        text = Some(value.trim().to_string());
                    }
                }
                continue;
            }

            if let Some(word) = Self::parse_word_line(line, line_num + 1)? {
                words.push(word);
            }
        }
        Self::flush(&mut sentences, &mut index, &mut words, &mut text);

        Ok(Self {
            sentences: Arc::new(sentences),
            index: Arc::new(index),
        })
    }

    /// Number of annotated sentences.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Look up the annotation for a sentence.
    pub fn lookup(&self, sentence: &str) -> Option<&[ConlluWord]> {
        let key = normalize_key(sentence);
        let idx = *self.index.get(&key)?;
        self.sentences.get(idx).map(Vec::as_slice)
    }

    fn require(&self, sentence: &str) -> Result<&[ConlluWord]> {
        self.lookup(sentence).ok_or_else(|| {
            ParagenError::annotation(format!("No CoNLL-U annotation for sentence '{sentence}'"))
        })
    }

    fn flush(
        sentences: &mut Vec<Vec<ConlluWord>>,
        index: &mut AHashMap<String, usize>,
        words: &mut Vec<ConlluWord>,
        text: &mut Option<String>,
    ) {
        if words.is_empty() {
            *text = None;
            return;
        }

        let idx = sentences.len();
        let forms = words
            .iter()
            .map(|w| w.form.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        index.entry(normalize_key(&forms)).or_insert(idx);
        if let Some(text) = text.take() {
            index.entry(normalize_key(&text)).or_insert(idx);
        }
        sentences.push(std::mem::take(words));
    }

    fn parse_word_line(line: &str, line_num: usize) -> Result<Option<ConlluWord>> {
        let columns: Vec<&str> = line.split('\t').collect();
        if columns.len() != 10 {
            return Err(ParagenError::parse(format!(
                "CoNLL-U line {}: expected 10 columns, found {}",
                line_num,
                columns.len()
            )));
        }

        // Multiword tokens ("1-2") and empty nodes ("1.1") carry no edge.
        let id = columns[0];
        if id.contains('-') || id.contains('.') {
            return Ok(None);
        }

        let head = columns[6].parse::<usize>().map_err(|e| {
            ParagenError::parse(format!(
                "CoNLL-U line {}: invalid HEAD '{}': {}",
                line_num, columns[6], e
            ))
        })?;

        Ok(Some(ConlluWord {
            form: columns[1].to_string(),
            upos: columns[3].to_string(),
            xpos: columns[4].to_string(),
            head,
            deprel: columns[7].to_string(),
        }))
    }
}

impl Tagger for ConlluAnnotator {
    fn tag(&self, sentence: &str) -> Result<Vec<TaggedToken>> {
        Ok(self
            .require(sentence)?
            .iter()
            .map(|w| TaggedToken::new(w.form.clone(), w.tag()))
            .collect())
    }

    fn name(&self) -> &str {
        "conllu"
    }
}

impl DependencyParser for ConlluAnnotator {
    fn parse(&self, sentence: &str) -> Result<Vec<DependencyEdge>> {
        Ok(self
            .require(sentence)?
            .iter()
            .map(|w| DependencyEdge::new(w.head, w.deprel.clone(), w.form.clone(), w.upos.clone()))
            .collect())
    }

    fn name(&self) -> &str {
        "conllu"
    }
}

fn normalize_key(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    const SAMPLE: &str = "\
# sent_id = 1
# text = राम और श्याम आए
1\tराम\tराम\tPROPN\tNNP\t_\t4\tnsubj\t_\t_
2\tऔर\tऔर\tCCONJ\tCC\t_\t3\tcc\t_\t_
3\tश्याम\tश्याम\tPROPN\tNNP\t_\t1\tconj\t_\t_
4\tआए\tआ\tVERB\tVM\t_\t0\troot\t_\t_

# sent_id = 2
1\tवह\tवह\tPRON\t_\t_\t2\tnsubj\t_\t_
2\tगया\tजा\tVERB\tVM\t_\t0\troot\t_\t_
";

    #[test]
    fn test_parse_and_lookup_by_text_comment() {
        let annotator = ConlluAnnotator::parse_str(SAMPLE).unwrap();
        assert_eq!(annotator.len(), 2);

        let tagged = annotator.tag("राम और श्याम आए").unwrap();
        assert_eq!(tagged.len(), 4);
        assert_eq!(tagged[0], TaggedToken::new("राम", "NNP"));
        assert_eq!(tagged[3], TaggedToken::new("आए", "VM"));
    }

    #[test]
    fn test_lookup_by_forms_and_upos_fallback() {
        let annotator = ConlluAnnotator::parse_str(SAMPLE).unwrap();

        let tagged = annotator.tag("वह   गया").unwrap();
        assert_eq!(tagged[0].tag, "PRON");
        assert_eq!(tagged[1].tag, "VM");
    }

    #[test]
    fn test_parse_edges() {
        let annotator = ConlluAnnotator::parse_str(SAMPLE).unwrap();
        let edges = annotator.parse("राम और श्याम आए").unwrap();

        assert_eq!(edges[2].relation, "conj");
        assert_eq!(edges[2].parent_index, 1);
        assert_eq!(edges[2].child.text, "श्याम");
        assert_eq!(edges[3].parent_position(), None);
    }

    #[test]
    fn test_missing_sentence_is_an_error() {
        let annotator = ConlluAnnotator::parse_str(SAMPLE).unwrap();
        let err = annotator.tag("अनजान वाक्य").unwrap_err();
        assert!(err.is_adapter_failure());
    }

    #[test]
    fn test_skips_multiword_tokens() {
        let content = "1-2\tवाला\t_\t_\t_\t_\t_\t_\t_\t_\n\
                       1\tवा\tवा\tNOUN\tNN\t_\t0\troot\t_\t_\n\
                       2\tला\tला\tADP\tPSP\t_\t1\tcase\t_\t_\n";
        let annotator = ConlluAnnotator::parse_str(content).unwrap();
        assert_eq!(annotator.tag("वा ला").unwrap().len(), 2);
    }

    #[test]
    fn test_malformed_line() {
        let result = ConlluAnnotator::parse_str("1\tराम\tNNP\n");
        assert!(result.is_err());

        let result = ConlluAnnotator::parse_str("1\tराम\tराम\tPROPN\tNNP\t_\tx\tnsubj\t_\t_\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let annotator = ConlluAnnotator::load_from_file(file.path()).unwrap();
        assert_eq!(annotator.len(), 2);
        assert!(ConlluAnnotator::load_from_file("/nonexistent/file.conllu").is_err());
    }
}
