//! Translation adapter used for back-translation and cross-lingual pairs.
//!
//! The core never talks to a translation service directly. It goes through
//! the [`Translator`] trait, whose failures are typed
//! ([`crate::error::ParagenError::Translation`]) so that callers can tell a
//! missing rule apart from an unreachable service.
//!
//! # Feature flags
//!
//! - `translation-http` - [`http::HttpTranslator`], a client for
//!   LibreTranslate-compatible JSON APIs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[cfg(feature = "translation-http")]
pub mod http;

#[cfg(feature = "translation-http")]
pub use http::HttpTranslator;

/// ISO 639-1 language code such as `ml`, `hi` or `en`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub const MALAYALAM: &'static str = "ml";
    pub const HINDI: &'static str = "hi";
    pub const ENGLISH: &'static str = "en";

    /// Create a language code. The code is trimmed and lowercased.
    pub fn new<S: AsRef<str>>(code: S) -> Self {
        LanguageCode(code.as_ref().trim().to_ascii_lowercase())
    }

    pub fn malayalam() -> Self {
        LanguageCode::new(Self::MALAYALAM)
    }

    pub fn english() -> Self {
        LanguageCode::new(Self::ENGLISH)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_malayalam(&self) -> bool {
        self.0 == Self::MALAYALAM
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageCode {
    fn from(code: &str) -> Self {
        LanguageCode::new(code)
    }
}

/// External machine-translation service.
pub trait Translator: Send + Sync {
    /// Translate `text` into `target`.
    fn translate(&self, text: &str, target: &LanguageCode) -> Result<String>;

    /// Detect the language of `text`.
    fn detect_language(&self, text: &str) -> Result<LanguageCode>;

    /// Get the name of this translator (for debugging and logging).
    fn name(&self) -> &str;
}

/// Connection settings for an HTTP translation service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationConfig {
    /// Base URL of the service, e.g. `http://localhost:5000`.
    pub api_url: String,
    /// Optional API key sent with every request.
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:5000".to_string(),
            api_key: None,
            timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code_normalization() {
        let code = LanguageCode::new(" ML ");
        assert_eq!(code.as_str(), "ml");
        assert!(code.is_malayalam());
        assert!(!LanguageCode::from("hi").is_malayalam());
        assert_eq!(LanguageCode::english().to_string(), "en");
    }

    #[test]
    fn test_translation_config_default() {
        let config = TranslationConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_translation_config_partial_json() {
        let config: TranslationConfig =
            serde_json::from_str(r#"{"api_url": "https://translate.example.org"}"#).unwrap();
        assert_eq!(config.api_url, "https://translate.example.org");
        assert_eq!(config.timeout_secs, 30);
    }
}
