//! Error types for catalogue-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that abort a catalogue or answer-key parse.
///
/// Line numbers are 0-based indices into the line sequence handed to the
/// builder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unrecognized line {line}: {content:?}")]
    Grammar { line: usize, content: String },

    #[error("question {key} at line {line} has no answer-key entry")]
    UnknownQuestionKey { key: String, line: usize },

    #[error("question {key} at line {line} has no answer choices")]
    EmptyChoiceSet { key: String, line: usize },

    #[error("invalid answers field at line {line}: {answers:?}")]
    InvalidAnswerField { line: usize, answers: String },
}

impl ParseError {
    /// Index of the source line the error refers to.
    pub fn line(&self) -> usize {
        match self {
            Self::Grammar { line, .. }
            | Self::UnknownQuestionKey { line, .. }
            | Self::EmptyChoiceSet { line, .. }
            | Self::InvalidAnswerField { line, .. } => *line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grammar_error_display_quotes_content() {
        let error = ParseError::Grammar {
            line: 7,
            content: "1.1 missing tab".to_string(),
        };
        assert_eq!(error.to_string(), "unrecognized line 7: \"1.1 missing tab\"");
    }

    #[test]
    fn unknown_key_display() {
        let error = ParseError::UnknownQuestionKey {
            key: "RSZ.4".to_string(),
            line: 12,
        };
        assert_eq!(
            error.to_string(),
            "question RSZ.4 at line 12 has no answer-key entry"
        );
    }

    #[test]
    fn line_accessor_covers_all_variants() {
        let errors = [
            ParseError::Grammar { line: 1, content: String::new() },
            ParseError::UnknownQuestionKey { key: "1.1".into(), line: 2 },
            ParseError::EmptyChoiceSet { key: "1.1".into(), line: 3 },
            ParseError::InvalidAnswerField { line: 4, answers: "a;b".into() },
        ];
        let lines: Vec<usize> = errors.iter().map(ParseError::line).collect();
        assert_eq!(lines, vec![1, 2, 3, 4]);
    }
}
