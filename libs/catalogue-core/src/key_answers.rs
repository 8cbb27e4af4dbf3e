//! Answer-key table builder.

use crate::error::{ParseError, Result};
use crate::grammar::{self, KeyLine};
use crate::types::{ChoiceLabel, KeyAnswerRecord, KeyAnswerTable};

/// Build the key-answer table from answer-key lines.
///
/// Fails on the first malformed line; no partial table is returned. A key
/// cited twice keeps the later record.
pub fn build_key_answer_table<I, S>(lines: I) -> Result<KeyAnswerTable>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut table = KeyAnswerTable::default();

    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        let KeyLine { key, answers, rules } =
            grammar::split_key_line(line).ok_or_else(|| ParseError::Grammar {
                line: idx,
                content: line.to_string(),
            })?;

        let record = KeyAnswerRecord {
            answers: parse_answers(answers, idx)?,
            rules: rules.trim().to_string(),
        };

        if let Some(previous) = table.insert(key.clone(), record) {
            tracing::warn!(line = idx, %key, ?previous, "answer key cited twice, keeping later entry");
        }
    }

    tracing::debug!(records = table.len(), "built key-answer table");
    Ok(table)
}

/// Parse a comma-separated answers field such as `a, c` into labels.
fn parse_answers(field: &str, line: usize) -> Result<Vec<ChoiceLabel>> {
    let stripped: String = field.chars().filter(|&c| c != ' ').collect();
    let invalid = || ParseError::InvalidAnswerField {
        line,
        answers: stripped.clone(),
    };

    if stripped.is_empty() || !stripped.chars().all(|c| c.is_ascii_lowercase() || c == ',') {
        return Err(invalid());
    }

    let mut labels = Vec::new();
    for part in stripped.split(',') {
        let mut chars = part.chars();
        let label = match (chars.next(), chars.next()) {
            (Some(letter), None) => ChoiceLabel::from_letter(letter),
            _ => None,
        }
        .ok_or_else(invalid)?;
        if !labels.contains(&label) {
            labels.push(label);
        }
    }
    Ok(labels)
}
