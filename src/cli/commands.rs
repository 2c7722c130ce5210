//! Command implementations for the paragen CLI.

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::ParagenConfig;
use crate::dataset::{DatasetBuilder, read_sentences, write_jsonl};
use crate::error::{ParagenError, Result};
use crate::paraphrase::{GeneratorFactory, Language, MalayalamPositiveGenerator};
use crate::translation::LanguageCode;

/// Execute a CLI command.
pub fn execute_command(args: ParagenArgs) -> Result<()> {
    let config = load_config(&args)?;
    let mut factory = GeneratorFactory::new(config);

    match &args.command {
        Command::Generate(generate_args) => generate(generate_args, &mut factory, &args),
        Command::Dataset(dataset_args) => build_dataset(dataset_args, &mut factory, &args),
        Command::Pair(pair_args) => translate_pair(pair_args, &factory, &args),
    }
}

/// Load the configuration file, or the defaults when none is given.
fn load_config(args: &ParagenArgs) -> Result<ParagenConfig> {
    match &args.config {
        Some(path) => {
            log::info!("Loading configuration from {}", path.display());
            ParagenConfig::load_from_file(path)
        }
        None => Ok(ParagenConfig::default()),
    }
}

/// Generate variants of one sentence.
fn generate(args: &GenerateArgs, factory: &mut GeneratorFactory, cli_args: &ParagenArgs) -> Result<()> {
    let language = Language::from(args.language);
    let generators = factory.generators(language, &args.polarity.polarities())?;

    let mut variants = Vec::new();
    for generator in &generators {
        for sentence in generator.generate(&args.sentence) {
            variants.push(GeneratedVariant {
                method: generator.name().to_string(),
                label: generator.polarity(),
                sentence,
            });
        }
    }

    output_result(
        "Generated variants",
        &GenerationResult {
            sentence: args.sentence.clone(),
            language,
            variants,
        },
        cli_args,
    )
}

/// Build a JSONL dataset from a sentence file.
fn build_dataset(
    args: &DatasetArgs,
    factory: &mut GeneratorFactory,
    cli_args: &ParagenArgs,
) -> Result<()> {
    let start_time = Instant::now();

    let file = File::open(&args.input).map_err(|e| {
        ParagenError::invalid_argument(format!(
            "Failed to open input file '{}': {}",
            args.input.display(),
            e
        ))
    })?;
    let sentences = read_sentences(BufReader::new(file))?;

    let generators = factory.generators(Language::from(args.language), &args.polarity.polarities())?;
    let builder = DatasetBuilder::new(generators);
    let (pairs, stats) = builder.build_with_stats(&sentences);

    match &args.output {
        Some(path) => {
            let file = File::create(path)?;
            write_jsonl(&pairs, BufWriter::new(file))?;
        }
        None => {
            write_jsonl(&pairs, io::stdout().lock())?;
            // Records already went to stdout; keep it machine-readable.
            return Ok(());
        }
    }

    output_result(
        "Dataset written",
        &DatasetSummary {
            input: args.input.to_string_lossy().to_string(),
            output: args.output.as_ref().map(|p| p.to_string_lossy().to_string()),
            duration_ms: start_time.elapsed().as_millis() as u64,
            stats,
        },
        cli_args,
    )
}

/// Translate a sentence pair into Malayalam paraphrase candidates.
fn translate_pair(args: &PairArgs, factory: &GeneratorFactory, cli_args: &ParagenArgs) -> Result<()> {
    let mut generator = MalayalamPositiveGenerator::new();
    if let Some(translator) = factory.translator()? {
        generator = generator.with_translator(translator);
    }
    let paraphrases = generator.try_translate_pairs_to_paraphrases(
        &args.sentence1,
        &args.sentence2,
        &LanguageCode::new(&args.lang1),
        &LanguageCode::new(&args.lang2),
    )?;

    output_result(
        "Translated pair",
        &PairResult {
            sentence1: args.sentence1.clone(),
            sentence2: args.sentence2.clone(),
            paraphrases,
        },
        cli_args,
    )
}
