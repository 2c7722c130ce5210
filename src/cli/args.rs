//! Command line argument parsing for the paragen CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::paraphrase::{Language, Polarity};

/// Paragen - rule-based paraphrase dataset generation for Hindi and Malayalam
#[derive(Parser, Debug, Clone)]
#[command(name = "paragen")]
#[command(about = "Generate paraphrase and non-paraphrase sentence pairs for Hindi and Malayalam")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ParagenArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "FILE", env = "PARAGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ParagenArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate variants of a single sentence
    Generate(GenerateArgs),

    /// Build a labelled dataset from a file with one sentence per line
    Dataset(DatasetArgs),

    /// Translate a sentence pair into Malayalam paraphrase candidates
    Pair(PairArgs),
}

/// Arguments for generating variants of one sentence
#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    /// Sentence to rewrite
    #[arg(value_name = "SENTENCE")]
    pub sentence: String,

    /// Language of the sentence
    #[arg(short, long)]
    pub language: LanguageArg,

    /// Which generators to run
    #[arg(short, long, default_value = "both")]
    pub polarity: PolarityArg,
}

/// Arguments for building a dataset
#[derive(Parser, Debug, Clone)]
pub struct DatasetArgs {
    /// Input file, one sentence per line
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output JSONL file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Language of the input sentences
    #[arg(short, long)]
    pub language: LanguageArg,

    /// Which generators to run
    #[arg(short, long, default_value = "both")]
    pub polarity: PolarityArg,
}

/// Arguments for translating a sentence pair
#[derive(Parser, Debug, Clone)]
pub struct PairArgs {
    /// First sentence
    #[arg(value_name = "SENT1")]
    pub sentence1: String,

    /// Second sentence
    #[arg(value_name = "SENT2")]
    pub sentence2: String,

    /// Language code of the first sentence (e.g. en, hi, ml)
    #[arg(long)]
    pub lang1: String,

    /// Language code of the second sentence
    #[arg(long)]
    pub lang2: String,
}

/// Language selector accepting ISO 639-1 codes
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageArg {
    /// Hindi
    Hi,
    /// Malayalam
    Ml,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::Hi => Language::Hindi,
            LanguageArg::Ml => Language::Malayalam,
        }
    }
}

/// Generator polarity selector
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolarityArg {
    /// Paraphrases only
    Positive,
    /// Non-paraphrases only
    Negative,
    /// Both kinds
    Both,
}

impl PolarityArg {
    pub fn polarities(&self) -> Vec<Polarity> {
        match self {
            PolarityArg::Positive => vec![Polarity::Positive],
            PolarityArg::Negative => vec![Polarity::Negative],
            PolarityArg::Both => vec![Polarity::Positive, Polarity::Negative],
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
