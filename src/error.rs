//! Error types for paragen.
//!
//! All fallible operations return [`ParagenError`]. Generators never surface
//! these errors through their rule-named operations: those log the failure and
//! return "no result". The `try_*` forms of each rule return the error so that
//! callers can tell "no rule applied" apart from "adapter unavailable".
//!
//! # Examples
//!
//! ```
//! use paragen::error::{ParagenError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ParagenError::invalid_argument("empty sentence"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for paragen operations.
#[derive(Error, Debug)]
pub enum ParagenError {
    /// I/O errors (annotation files, dataset output, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Tagger or dependency parser errors
    #[error("Annotation error: {0}")]
    Annotation(String),

    /// Synonym store errors
    #[error("Synonym error: {0}")]
    Synonym(String),

    /// Translation service errors (network, malformed response, ...)
    #[error("Translation error: {0}")]
    Translation(String),

    /// No translation backend was configured
    #[error("Translator unavailable: {0}")]
    TranslatorUnavailable(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with ParagenError.
pub type Result<T> = std::result::Result<T, ParagenError>;

impl ParagenError {
    /// Create a new annotation error.
    pub fn annotation<S: Into<String>>(msg: S) -> Self {
        ParagenError::Annotation(msg.into())
    }

    /// Create a new synonym store error.
    pub fn synonym<S: Into<String>>(msg: S) -> Self {
        ParagenError::Synonym(msg.into())
    }

    /// Create a new translation error.
    pub fn translation<S: Into<String>>(msg: S) -> Self {
        ParagenError::Translation(msg.into())
    }

    /// Create a new translator-unavailable error.
    pub fn translator_unavailable<S: Into<String>>(msg: S) -> Self {
        ParagenError::TranslatorUnavailable(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ParagenError::Config(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        ParagenError::Annotation(msg.into()) // Parse errors are annotation errors
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        ParagenError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        ParagenError::Other(msg.into())
    }

    /// Whether this error came from an external adapter rather than from the
    /// caller's input or configuration.
    pub fn is_adapter_failure(&self) -> bool {
        matches!(
            self,
            ParagenError::Annotation(_)
                | ParagenError::Synonym(_)
                | ParagenError::Translation(_)
                | ParagenError::TranslatorUnavailable(_)
        )
    }
}
