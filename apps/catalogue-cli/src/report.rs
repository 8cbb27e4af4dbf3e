//! Field length report used to size database columns.

use catalogue_core::Catalogue;

/// Longest texts in a catalogue, counted in characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldLengths {
    /// Longest question text.
    pub max_question: usize,
    /// Longest single answer text.
    pub max_subanswer: usize,
    /// Longest question text plus all of its answer texts.
    pub max_full: usize,
}

impl FieldLengths {
    pub fn measure(catalogue: &Catalogue) -> Self {
        catalogue.iter().fold(Self::default(), |acc, question| {
            let question_len = question.text.chars().count();
            let answer_lens: Vec<usize> = question
                .subanswers
                .iter()
                .map(|a| a.text.chars().count())
                .collect();
            let full = question_len + answer_lens.iter().sum::<usize>();

            Self {
                max_question: acc.max_question.max(question_len),
                max_subanswer: acc
                    .max_subanswer
                    .max(answer_lens.into_iter().max().unwrap_or(0)),
                max_full: acc.max_full.max(full),
            }
        })
    }
}
