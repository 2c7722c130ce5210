//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, ParagenArgs};
use crate::dataset::DatasetStats;
use crate::error::Result;
use crate::paraphrase::{Language, Polarity};

/// Result structure for the generate command.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerationResult {
    pub sentence: String,
    pub language: Language,
    pub variants: Vec<GeneratedVariant>,
}

/// One generated sentence and where it came from.
#[derive(Debug, Serialize, Deserialize)]
pub struct GeneratedVariant {
    pub method: String,
    pub label: Polarity,
    pub sentence: String,
}

/// Result structure for the dataset command.
#[derive(Debug, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub input: String,
    pub output: Option<String>,
    pub duration_ms: u64,
    pub stats: DatasetStats,
}

/// Result structure for the pair command.
#[derive(Debug, Serialize, Deserialize)]
pub struct PairResult {
    pub sentence1: String,
    pub sentence2: String,
    /// Malayalam translations of both sentences; empty when they coincide.
    pub paraphrases: Vec<String>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &ParagenArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &ParagenArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;

    match std::any::type_name::<T>() {
        name if name.ends_with("GenerationResult") => output_generation_human(&value),
        name if name.ends_with("PairResult") => output_pair_human(&value),
        _ => output_generic_human(&value),
    }
}

/// Output generated variants in human format.
fn output_generation_human(value: &serde_json::Value) -> Result<()> {
    let sentence = value.get("sentence").map(format_value).unwrap_or_default();
    println!("Input: {sentence}");
    println!("═══════════════");

    let variants = value
        .get("variants")
        .and_then(|v| v.as_array())
        .cloned()
        .unwrap_or_default();

    if variants.is_empty() {
        println!("No variants generated.");
        return Ok(());
    }

    for variant in &variants {
        let label = variant.get("label").map(format_value).unwrap_or_default();
        let method = variant.get("method").map(format_value).unwrap_or_default();
        let sentence = variant.get("sentence").map(format_value).unwrap_or_default();
        println!("[{label}] ({method}) {sentence}");
    }
    println!();
    println!("Total: {} variant(s)", variants.len());
    Ok(())
}

/// Output a translated pair in human format.
fn output_pair_human(value: &serde_json::Value) -> Result<()> {
    let paraphrases = value
        .get("paraphrases")
        .and_then(|v| v.as_array())
        .cloned()
        .unwrap_or_default();

    if paraphrases.is_empty() {
        println!("No paraphrase pair: the sentences translate identically or could not be translated.");
        return Ok(());
    }
    for (i, sentence) in paraphrases.iter().enumerate() {
        println!("{}: {}", i + 1, format_value(sentence));
    }
    Ok(())
}

/// Generic human output.
fn output_generic_human(value: &serde_json::Value) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                match val {
                    serde_json::Value::Object(inner) => {
                        println!("{key}:");
                        for (inner_key, inner_val) in inner {
                            println!("  {inner_key}: {}", format_value(inner_val));
                        }
                    }
                    _ => println!("{key}: {}", format_value(val)),
                }
            }
        }
        _ => println!("{}", format_value(value)),
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &ParagenArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for human output.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}
