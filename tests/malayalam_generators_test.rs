//! Integration tests for the Malayalam generators and dataset output.

use std::collections::HashMap;
use std::sync::Arc;

use paragen::dataset::write_jsonl;
use paragen::paraphrase::malayalam::{RuleSet, SandhiRuleConfig};
use paragen::prelude::*;
use tempfile::TempDir;

/// Translator answering from a fixed table, keyed by (text, target).
struct FixedTranslator {
    table: HashMap<(String, String), String>,
}

impl FixedTranslator {
    fn new(entries: &[(&str, &str, &str)]) -> Self {
        let table = entries
            .iter()
            .map(|(text, target, out)| ((text.to_string(), target.to_string()), out.to_string()))
            .collect();
        Self { table }
    }
}

impl Translator for FixedTranslator {
    fn translate(&self, text: &str, target: &LanguageCode) -> Result<String> {
        self.table
            .get(&(text.to_string(), target.to_string()))
            .cloned()
            .ok_or_else(|| ParagenError::translation(format!("no translation for '{text}'")))
    }

    fn detect_language(&self, text: &str) -> Result<LanguageCode> {
        let malayalam = text
            .chars()
            .any(|c| ('\u{0D00}'..='\u{0D7F}').contains(&c));
        Ok(if malayalam {
            LanguageCode::malayalam()
        } else {
            LanguageCode::english()
        })
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

#[test]
fn test_negative_generation_end_to_end() {
    let generator = MalayalamNegativeGenerator::default();
    let variants = generator.generate("ഞാൻ ഇന്നലെ അവനെ കണ്ടു.");

    assert!(variants.contains("ഞാൻ മിനിയാന്ന് അവനെ കണ്ടു"));
    assert!(variants.contains("ഞാൻ ഇന്നലെ അവളെ കണ്ടു"));
    assert!(variants.contains("അവൻ ഇന്നലെ അവനെ കണ്ടു"));
    assert!(!variants.contains("ഞാൻ ഇന്നലെ അവനെ കണ്ടു"));
    // 6 subjects + 4 past-time adverbs + 6 objects.
    assert_eq!(variants.len(), 16);
}

#[test]
fn test_positive_generation_with_translator() {
    let translator = FixedTranslator::new(&[
        ("അവൻ വന്നു എന്ന് ഞാൻ കേട്ടു", "en", "I heard that he came"),
        ("I heard that he came", "ml", "അവൻ വന്നതായി ഞാൻ കേട്ടു"),
    ]);
    let generator = MalayalamPositiveGenerator::new().with_translator(Arc::new(translator));

    let variants = generator.generate("അവൻ വന്നു എന്ന് ഞാൻ കേട്ടു.");
    assert!(variants.contains("അവൻ വന്നെന്ന് ഞാൻ കേട്ടു"));
    assert!(variants.contains("അവൻ വന്നതായി ഞാൻ കേട്ടു"));
    assert_eq!(variants.len(), 2);
}

#[test]
fn test_positive_generation_survives_translator_failure() {
    let generator =
        MalayalamPositiveGenerator::new().with_translator(Arc::new(FixedTranslator::new(&[])));

    let variants = generator.generate("അവൻ വന്നു എന്ന് ഞാൻ കേട്ടു");
    assert_eq!(
        variants.into_iter().collect::<Vec<_>>(),
        vec!["അവൻ വന്നെന്ന് ഞാൻ കേട്ടു"]
    );
}

#[test]
fn test_pair_translation() {
    let translator = FixedTranslator::new(&[
        ("The rain stopped", "ml", "മഴ നിന്നു."),
        ("बारिश रुक गई", "ml", "മഴ തോർന്നു"),
    ]);
    let generator = MalayalamPositiveGenerator::new().with_translator(Arc::new(translator));

    let pair = generator.translate_pairs_to_paraphrases(
        "The rain stopped",
        "बारिश रुक गई",
        &LanguageCode::english(),
        &LanguageCode::new("hi"),
    );
    assert_eq!(pair, vec!["മഴ നിന്നു", "മഴ തോർന്നു"]);

    let same = generator.generate_for_pair(
        "The rain stopped",
        "മഴ നിന്നു",
        &LanguageCode::english(),
        &LanguageCode::malayalam(),
    );
    assert!(same.is_empty());
}

#[test]
fn test_configured_generators() -> Result<()> {
    let mut config = ParagenConfig::default();
    config.malayalam.extra_rule_sets = vec![vec!["ചായ".to_string(), "കാപ്പി".to_string()]];
    config.malayalam.extra_sandhi_rules = vec![SandhiRuleConfig {
        triggers: vec!["ഉം".to_string()],
        pattern: "^(.*)ം$".to_string(),
        replacement: "${1}മും".to_string(),
    }];
    let factory = GeneratorFactory::new(config);

    let negative = factory.malayalam_negative()?;
    assert!(negative.generate("ചായ തണുത്തു").contains("കാപ്പി തണുത്തു"));

    let positive = factory.malayalam_positive()?;
    assert!(positive
        .generate("പണം ഉം സമയം ഉം വേണം")
        .contains("പണമും സമയമും വേണം"));

    assert!(RuleSet::new("single", ["ചായ"]).is_err());
    Ok(())
}

#[test]
fn test_malayalam_dataset_to_file() -> Result<()> {
    let mut factory = GeneratorFactory::new(ParagenConfig::default());
    let generators =
        factory.generators(Language::Malayalam, &[Polarity::Positive, Polarity::Negative])?;
    let builder = DatasetBuilder::new(generators);

    let (pairs, stats) = builder.build_with_stats(["അവൻ ഡോക്ടർ ആണ്", "കണ്ടു എന്ന് പറഞ്ഞു"]);
    assert_eq!(stats.sentences, 2);
    assert_eq!(stats.positive, 1);
    assert_eq!(stats.negative, 7);

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("pairs.jsonl");
    write_jsonl(&pairs, std::fs::File::create(&path)?)?;

    let written = std::fs::read_to_string(&path)?;
    let records: Vec<SentencePair> = written
        .lines()
        .map(serde_json::from_str)
        .collect::<std::result::Result<_, _>>()?;
    assert_eq!(records, pairs);
    assert!(records.iter().any(|r| r.method == "malayalam_positive"
        && r.sentence2 == "കണ്ടെന്ന് പറഞ്ഞു"));
    Ok(())
}
