//! Error types for the converter.

use catalogue_core::ParseError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display_names_file_and_line() {
        let error = CliError::Parse {
            path: PathBuf::from("data/keys_en_2024.txt"),
            source: ParseError::InvalidAnswerField {
                line: 4,
                answers: "a;b".to_string(),
            },
        };
        assert_eq!(
            error.to_string(),
            "data/keys_en_2024.txt: invalid answers field at line 4: \"a;b\""
        );
    }

    #[test]
    fn config_error_display() {
        let error = CliError::Config("no languages given".to_string());
        assert_eq!(error.to_string(), "configuration error: no languages given");
    }
}
