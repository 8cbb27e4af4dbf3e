//! Core types for the question catalogue.

use crate::grammar;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier joining a catalogue question to its answer-key record.
///
/// Either `<major>.<minor>` with one or two digits on each side, or
/// `RSZ.<minor>` / `SAR.<minor>`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuestionKey(String);

impl QuestionKey {
    /// Parse a complete key, rejecting any trailing input.
    pub fn parse(s: &str) -> Option<Self> {
        match grammar::scan_question_key(s) {
            Some((key, "")) => Some(key),
            _ => None,
        }
    }

    pub(crate) fn from_scanned(raw: &str) -> Self {
        Self(raw.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Externally visible identifier, marked as derived from the source
    /// numbering with a leading underscore.
    pub fn orig_id(&self) -> String {
        format!("_{}", self.0)
    }
}

impl fmt::Display for QuestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for QuestionKey {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid question key: {value}"))
    }
}

impl From<QuestionKey> for String {
    fn from(key: QuestionKey) -> Self {
        key.0
    }
}

/// Multiple-choice option marker, rendered as `a)`, `b)`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChoiceLabel(char);

impl ChoiceLabel {
    /// Create a label from its letter. Only ASCII lowercase letters are valid.
    pub fn from_letter(letter: char) -> Option<Self> {
        letter.is_ascii_lowercase().then_some(Self(letter))
    }

    /// Parse the rendered form, e.g. `c)`.
    pub fn parse(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(letter), Some(')'), None) => Self::from_letter(letter),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        self.0
    }
}

impl fmt::Display for ChoiceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{})", self.0)
    }
}

impl TryFrom<String> for ChoiceLabel {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid choice label: {value}"))
    }
}

impl From<ChoiceLabel> for String {
    fn from(label: ChoiceLabel) -> Self {
        label.to_string()
    }
}

/// Whether a choice is among the correct answers. Serialized as `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Correctness {
    Incorrect,
    Correct,
}

impl Correctness {
    pub fn is_correct(self) -> bool {
        self == Self::Correct
    }
}

impl From<bool> for Correctness {
    fn from(correct: bool) -> Self {
        if correct { Self::Correct } else { Self::Incorrect }
    }
}

impl From<Correctness> for u8 {
    fn from(value: Correctness) -> Self {
        match value {
            Correctness::Incorrect => 0,
            Correctness::Correct => 1,
        }
    }
}

impl TryFrom<u8> for Correctness {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Incorrect),
            1 => Ok(Self::Correct),
            other => Err(format!("correctness must be 0 or 1, got {other}")),
        }
    }
}

/// Correct choices and rule citation for one question, from the answer key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyAnswerRecord {
    /// Correct labels in the order they are cited. No duplicates.
    pub answers: Vec<ChoiceLabel>,
    pub rules: String,
}

impl KeyAnswerRecord {
    pub fn is_correct(&self, label: ChoiceLabel) -> bool {
        self.answers.contains(&label)
    }
}

/// Lookup table from question key to its answer-key record.
///
/// Read-only once built; see [`crate::build_key_answer_table`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyAnswerTable {
    records: BTreeMap<QuestionKey, KeyAnswerRecord>,
}

impl KeyAnswerTable {
    pub(crate) fn insert(
        &mut self,
        key: QuestionKey,
        record: KeyAnswerRecord,
    ) -> Option<KeyAnswerRecord> {
        self.records.insert(key, record)
    }

    pub fn get(&self, key: &QuestionKey) -> Option<&KeyAnswerRecord> {
        self.records.get(key)
    }

    pub fn contains(&self, key: &QuestionKey) -> bool {
        self.records.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionKey, &KeyAnswerRecord)> + '_ {
        self.records.iter()
    }
}

/// One multiple-choice option of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubAnswer {
    pub orig_id: ChoiceLabel,
    pub text: String,
    pub correctness: Correctness,
}

/// A fully resolved catalogue question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Sequential id, 1-based, in catalogue order.
    pub id: u32,
    /// Source key with a leading underscore, e.g. `_3.2`.
    pub orig_id: String,
    pub text: String,
    pub rules: String,
    pub subanswers: Vec<SubAnswer>,
}

impl Question {
    /// Recover the question key from `orig_id`.
    pub fn key(&self) -> Option<QuestionKey> {
        self.orig_id.strip_prefix('_').and_then(QuestionKey::parse)
    }

    pub fn correct_labels(&self) -> impl Iterator<Item = ChoiceLabel> + '_ {
        self.subanswers
            .iter()
            .filter(|a| a.correctness.is_correct())
            .map(|a| a.orig_id)
    }
}

/// Ordered list of questions, the output of [`crate::build_catalogue`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalogue {
    pub all_questions: Vec<Question>,
}

impl Catalogue {
    pub fn len(&self) -> usize {
        self.all_questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_questions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.all_questions.iter()
    }
}

impl<'a> IntoIterator for &'a Catalogue {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn question_key_accepts_numeric_and_prefixed_forms() {
        for raw in ["1.1", "12.3", "4.56", "99.99", "RSZ.1", "SAR.12"] {
            assert!(QuestionKey::parse(raw).is_some(), "{raw} should parse");
        }
    }

    #[test]
    fn question_key_rejects_malformed() {
        for raw in ["", "1", "1.", ".1", "123.1", "1.123", "ABC.1", "rsz.1", "RSZ.", "1.1)"] {
            assert!(QuestionKey::parse(raw).is_none(), "{raw} should be rejected");
        }
    }

    #[test]
    fn question_key_orig_id_has_underscore() {
        let key = QuestionKey::parse("SAR.3").unwrap();
        assert_eq!(key.orig_id(), "_SAR.3");
        assert_eq!(key.to_string(), "SAR.3");
    }

    #[test]
    fn choice_label_round_trips_display() {
        let label = ChoiceLabel::parse("c)").unwrap();
        assert_eq!(label.letter(), 'c');
        assert_eq!(label.to_string(), "c)");
        assert!(ChoiceLabel::parse("C)").is_none());
        assert!(ChoiceLabel::parse("ab)").is_none());
        assert!(ChoiceLabel::from_letter('ż').is_none());
    }

    #[test]
    fn correctness_serializes_as_integer() {
        let answer = SubAnswer {
            orig_id: ChoiceLabel::from_letter('b').unwrap(),
            text: "Opt".to_string(),
            correctness: Correctness::Correct,
        };
        let json = serde_json::to_string(&answer).unwrap();
        assert_eq!(json, r#"{"orig_id":"b)","text":"Opt","correctness":1}"#);
    }

    #[test]
    fn correctness_rejects_out_of_range() {
        let result: std::result::Result<SubAnswer, _> =
            serde_json::from_str(r#"{"orig_id":"a)","text":"x","correctness":2}"#);
        assert!(result.is_err());
    }

    #[test]
    fn question_key_from_orig_id() {
        let question = Question {
            id: 1,
            orig_id: "_RSZ.2".to_string(),
            text: "Q".to_string(),
            rules: "R".to_string(),
            subanswers: vec![],
        };
        assert_eq!(question.key(), QuestionKey::parse("RSZ.2"));
    }

    #[test]
    fn catalogue_serializes_under_all_questions() {
        let catalogue = Catalogue::default();
        let json = serde_json::to_string(&catalogue).unwrap();
        assert_eq!(json, r#"{"all_questions":[]}"#);
    }
}
