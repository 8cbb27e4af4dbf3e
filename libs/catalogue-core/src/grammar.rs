//! Line grammars for the catalogue and answer-key sources.
//!
//! # Catalogue
//! ```text
//! 1.1	Question text            (key, tab, text)
//! RSZ.2) Question text         (key, ") ", text)
//! a)	Answer text              (letter, ")", tab, text)
//! ```
//!
//! # Answer key
//! ```text
//! 1.1	a, c	Rule 4.2
//! 1.2)	b	Rule 5
//! ```

use crate::types::{ChoiceLabel, QuestionKey};

const KEY_PREFIXES: [&str; 2] = ["RSZ", "SAR"];

/// A recognized catalogue line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CatalogueLine<'a> {
    Question { key: QuestionKey, text: &'a str },
    Answer { label: ChoiceLabel, text: &'a str },
}

/// Fields of an answer-key line, before the answers field is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct KeyLine<'a> {
    pub key: QuestionKey,
    pub answers: &'a str,
    pub rules: &'a str,
}

/// Drop one trailing line terminator (`\n` or `\r\n`).
pub(crate) fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Scan a question key at the start of `s`, returning it and the rest.
pub(crate) fn scan_question_key(s: &str) -> Option<(QuestionKey, &str)> {
    let after_major = KEY_PREFIXES
        .iter()
        .find_map(|prefix| s.strip_prefix(prefix))
        .or_else(|| scan_digits(s).map(|(_, rest)| rest))?;
    let after_dot = after_major.strip_prefix('.')?;
    let (_, rest) = scan_digits(after_dot)?;
    let key_len = s.len() - rest.len();
    Some((QuestionKey::from_scanned(&s[..key_len]), rest))
}

/// One or two ASCII digits, not followed by a third.
fn scan_digits(s: &str) -> Option<(&str, &str)> {
    let count = s.bytes().take_while(u8::is_ascii_digit).count();
    if (1..=2).contains(&count) {
        Some(s.split_at(count))
    } else {
        None
    }
}

pub(crate) fn classify_catalogue_line(line: &str) -> Option<CatalogueLine<'_>> {
    let line = strip_line_ending(line);
    parse_question_line(line).or_else(|| parse_answer_line(line))
}

fn parse_question_line(line: &str) -> Option<CatalogueLine<'_>> {
    let (key, rest) = scan_question_key(line)?;
    let text = rest
        .strip_prefix('\t')
        .or_else(|| rest.strip_prefix(") "))?;
    non_empty(text).map(|text| CatalogueLine::Question { key, text })
}

fn parse_answer_line(line: &str) -> Option<CatalogueLine<'_>> {
    let mut chars = line.chars();
    let label = ChoiceLabel::from_letter(chars.next()?)?;
    let text = chars.as_str().strip_prefix(")\t")?;
    non_empty(text).map(|text| CatalogueLine::Answer { label, text })
}

/// Split an answer-key line into key, answers and rules.
///
/// The answers field runs up to the last tab on the line.
pub(crate) fn split_key_line(line: &str) -> Option<KeyLine<'_>> {
    let line = strip_line_ending(line);
    let (key, rest) = scan_question_key(line)?;
    let rest = rest.strip_prefix(')').unwrap_or(rest);
    let fields = rest.strip_prefix('\t')?;
    let (answers, rules) = fields.rsplit_once('\t')?;
    Some(KeyLine {
        key,
        answers: non_empty(answers)?,
        rules: non_empty(rules)?,
    })
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}
