//! SignBridge Error Types
//!
//! Centralized error handling for the translation pipeline and its stores.

use thiserror::Error;

/// Central error type for SignBridge
#[derive(Error, Debug)]
pub enum SignError {
    #[error("Input is empty")]
    EmptyInput,

    #[error("Lexicon error: {0}")]
    Lexicon(String),

    #[error("Language model error: {0}")]
    Llm(#[from] crate::core::llm::LlmError),

    #[error("History error: {0}")]
    History(String),

    #[error("Unknown category '{name}'{}", did_you_mean(.suggestion))]
    UnknownCategory {
        name: String,
        suggestion: Option<String>,
    },

    #[error("Lock poisoned: {0}")]
    Lock(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|s| format!(" (did you mean '{s}'?)"))
        .unwrap_or_default()
}

/// Result type alias for SignBridge operations
pub type SignResult<T> = Result<T, SignError>;

/// Helper to convert Mutex poison errors
impl<T> From<std::sync::PoisonError<T>> for SignError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        SignError::Lock(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_message() {
        let err = SignError::UnknownCategory {
            name: "colours".to_string(),
            suggestion: Some("Colors".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Unknown category 'colours' (did you mean 'Colors'?)"
        );

        let err = SignError::UnknownCategory {
            name: "xyz".to_string(),
            suggestion: None,
        };
        assert_eq!(err.to_string(), "Unknown category 'xyz'");
    }
}
