//! HTTP translator for LibreTranslate-compatible APIs.
//!
//! Requires the `translation-http` feature.
//!
//! Endpoints used:
//! - `POST {api_url}/translate` with `{"q", "source": "auto", "target",
//!   "format": "text", "api_key"?}`, answering `{"translatedText": "..."}`
//! - `POST {api_url}/detect` with `{"q", "api_key"?}`, answering
//!   `[{"language": "ml", "confidence": 92.0}, ...]`

use std::time::Duration;

use serde_json::{Value, json};
use ureq::AgentBuilder;

use crate::error::{ParagenError, Result};
use crate::translation::{LanguageCode, TranslationConfig, Translator};

/// Blocking client for a LibreTranslate-compatible service.
pub struct HttpTranslator {
    agent: ureq::Agent,
    config: TranslationConfig,
}

impl std::fmt::Debug for HttpTranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTranslator")
            .field("api_url", &self.config.api_url)
            .field("timeout_secs", &self.config.timeout_secs)
            .finish()
    }
}

impl HttpTranslator {
    /// Create a new translator. No request is made until first use.
    pub fn new(config: TranslationConfig) -> Result<Self> {
        if config.api_url.trim().is_empty() {
            return Err(ParagenError::config("translation.api_url must not be empty"));
        }
        let agent = AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build();
        Ok(Self { agent, config })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_url.trim_end_matches('/'), path)
    }

    fn with_key(&self, mut payload: Value) -> Value {
        if let (Some(key), Value::Object(map)) = (self.config.api_key.as_ref(), &mut payload) {
            map.insert("api_key".to_string(), Value::String(key.clone()));
        }
        payload
    }

    fn post(&self, path: &str, payload: Value) -> Result<Value> {
        let url = self.endpoint(path);
        log::debug!("POST {url}");

        let response = self
            .agent
            .post(&url)
            .set("Content-Type", "application/json")
            .send_string(&payload.to_string())
            .map_err(|e| ParagenError::translation(format!("request to {url} failed: {e}")))?;

        let body = response
            .into_string()
            .map_err(|e| ParagenError::translation(format!("reading {url} response: {e}")))?;
        serde_json::from_str(&body)
            .map_err(|e| ParagenError::translation(format!("malformed {url} response: {e}")))
    }
}

impl Translator for HttpTranslator {
    fn translate(&self, text: &str, target: &LanguageCode) -> Result<String> {
        let payload = self.with_key(json!({
            "q": text,
            "source": "auto",
            "target": target.as_str(),
            "format": "text",
        }));
        parse_translation(self.post("translate", payload)?)
    }

    fn detect_language(&self, text: &str) -> Result<LanguageCode> {
        let payload = self.with_key(json!({ "q": text }));
        parse_detection(self.post("detect", payload)?)
    }

    fn name(&self) -> &str {
        "http"
    }
}

fn parse_translation(value: Value) -> Result<String> {
    if let Some(message) = value.get("error").and_then(Value::as_str) {
        return Err(ParagenError::translation(message.to_string()));
    }
    value
        .get("translatedText")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ParagenError::translation("response has no `translatedText` field"))
}

fn parse_detection(value: Value) -> Result<LanguageCode> {
    if let Some(message) = value.get("error").and_then(Value::as_str) {
        return Err(ParagenError::translation(message.to_string()));
    }

    let candidates = value
        .as_array()
        .ok_or_else(|| ParagenError::translation("detect response is not an array"))?;

    candidates
        .iter()
        .filter_map(|c| {
            let language = c.get("language")?.as_str()?;
            let confidence = c.get("confidence").and_then(Value::as_f64).unwrap_or(0.0);
            Some((language, confidence))
        })
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(language, _)| LanguageCode::new(language))
        .ok_or_else(|| ParagenError::translation("detect response has no candidates"))
}
