//! Error handling module for the organic guide
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Lookups into the static tables fail with [`GuideError::UnknownKey`]; the
//! remaining variants belong to the terminal and CLI hosts.

use strum::Display;
use thiserror::Error;

/// Which static table a failed lookup was made against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum KeyKind {
    /// The price premium table
    #[strum(serialize = "price item")]
    Item,
    /// The citation catalog
    #[strum(serialize = "topic")]
    Topic,
    /// The page list
    #[strum(serialize = "page")]
    Page,
}

/// Main error type for the organic guide
#[derive(Error, Debug)]
pub enum GuideError {
    /// A selection that is not part of the closed option set.
    ///
    /// Selectors only ever offer known labels, so this signals a caller bug
    /// (or bad CLI/config input) rather than a recoverable condition.
    #[error("unknown {kind}: {key}")]
    UnknownKey { kind: KeyKind, key: String },

    /// IO errors (terminal, config and log files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Configuration errors (loading, parsing, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for guide operations
pub type Result<T> = std::result::Result<T, GuideError>;

// Convenient error constructors
impl GuideError {
    /// Create an unknown key error
    pub fn unknown(kind: KeyKind, key: impl Into<String>) -> Self {
        Self::UnknownKey {
            kind,
            key: key.into(),
        }
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error is a lookup miss against a static table
    pub fn is_unknown_key(&self) -> bool {
        matches!(self, Self::UnknownKey { .. })
    }
}
