//! Dataset assembly.
//!
//! Runs a list of generators over a corpus and emits labelled sentence pairs
//! as JSON Lines, one record per line:
//! ```jsonl
//! {"sentence1":"അവൻ നാളെ വരും","sentence2":"അവൻ ഇന്നലെ വരും","label":"negative","language":"malayalam","method":"malayalam_negative"}
//! ```

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::paraphrase::{Language, ParaphraseGenerator, Polarity};

/// One labelled record of the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentencePair {
    pub sentence1: String,
    pub sentence2: String,
    pub label: Polarity,
    pub language: Language,
    /// Name of the generator that produced `sentence2`.
    pub method: String,
}

/// Counters collected while building a dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    /// Sentences that were run through the generators.
    pub sentences: usize,
    /// Blank input lines.
    pub skipped: usize,
    pub positive: usize,
    pub negative: usize,
}

impl DatasetStats {
    pub fn pairs(&self) -> usize {
        self.positive + self.negative
    }
}

/// Pairs every input sentence with the variants of each generator.
pub struct DatasetBuilder {
    generators: Vec<Box<dyn ParaphraseGenerator>>,
}

impl std::fmt::Debug for DatasetBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatasetBuilder")
            .field(
                "generators",
                &self.generators.iter().map(|g| g.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl DatasetBuilder {
    pub fn new(generators: Vec<Box<dyn ParaphraseGenerator>>) -> Self {
        Self { generators }
    }

    pub fn add_generator(mut self, generator: Box<dyn ParaphraseGenerator>) -> Self {
        self.generators.push(generator);
        self
    }

    pub fn generators(&self) -> &[Box<dyn ParaphraseGenerator>] {
        &self.generators
    }

    /// Build the pairs for `sentences`.
    pub fn build<I, S>(&self, sentences: I) -> Vec<SentencePair>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.build_with_stats(sentences).0
    }

    /// Build the pairs for `sentences` and report what was produced.
    pub fn build_with_stats<I, S>(&self, sentences: I) -> (Vec<SentencePair>, DatasetStats)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pairs = Vec::new();
        let mut stats = DatasetStats::default();

        for sentence in sentences {
            let sentence = sentence.as_ref().trim();
            if sentence.is_empty() {
                stats.skipped += 1;
                continue;
            }
            stats.sentences += 1;

            for generator in &self.generators {
                let variants = generator.generate(sentence);
                log::debug!(
                    "{}: {} variant(s) for '{}'",
                    generator.name(),
                    variants.len(),
                    sentence
                );
                for variant in variants {
                    match generator.polarity() {
                        Polarity::Positive => stats.positive += 1,
                        Polarity::Negative => stats.negative += 1,
                    }
                    pairs.push(SentencePair {
                        sentence1: sentence.to_string(),
                        sentence2: variant,
                        label: generator.polarity(),
                        language: generator.language(),
                        method: generator.name().to_string(),
                    });
                }
            }
        }

        log::info!(
            "Built {} pair(s) from {} sentence(s) ({} positive, {} negative, {} skipped)",
            stats.pairs(),
            stats.sentences,
            stats.positive,
            stats.negative,
            stats.skipped
        );
        (pairs, stats)
    }
}

/// Read one sentence per line.
pub fn read_sentences<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut sentences = Vec::new();
    for line in reader.lines() {
        sentences.push(line?);
    }
    Ok(sentences)
}

/// Write `pairs` as JSON Lines.
pub fn write_jsonl<W: Write>(pairs: &[SentencePair], mut writer: W) -> Result<()> {
    for pair in pairs {
        serde_json::to_writer(&mut writer, pair)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}
