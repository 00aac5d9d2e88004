use std::io;

use thiserror::Error;

use super::alerts::model::{AlertLevel, Language};

pub type Result<T> = std::result::Result<T, AegisError>;

#[derive(Debug, Error)]
pub enum AegisError {
    /// No message template exists for this level and language.
    #[error("no alert message for level '{level}' in {language}")]
    UnsupportedCombination { level: AlertLevel, language: Language },

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid settings json: {0}")]
    Json(#[from] serde_json::Error),

    /// A batch evaluation task panicked or was cancelled.
    #[error("village evaluation task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_combination_message() {
        let err = AegisError::UnsupportedCombination {
            level: AlertLevel::NoAlert,
            language: Language::Khasi,
        };
        assert_eq!(err.to_string(), "no alert message for level 'No Alert' in Khasi");
    }
}
