//! Catalogue builder.
//!
//! Walks the catalogue lines once, grouping answer lines under the question
//! header above them and resolving correctness and rules through the
//! key-answer table.

use crate::error::{ParseError, Result};
use crate::grammar::{self, CatalogueLine};
use crate::key_answers::build_key_answer_table;
use crate::types::{
    Catalogue, ChoiceLabel, KeyAnswerRecord, KeyAnswerTable, Question, QuestionKey, SubAnswer,
};

/// Knobs for [`build_catalogue_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Accept a last question with no answer lines. Mid-stream questions
    /// without answers are rejected regardless.
    pub allow_empty_final_question: bool,
}

/// Build the catalogue with default options.
pub fn build_catalogue<I, S>(lines: I, table: &KeyAnswerTable) -> Result<Catalogue>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    build_catalogue_with(lines, table, ParseOptions::default())
}

/// Build the catalogue from its lines, resolving each question against
/// `table`. All-or-nothing: the first error discards everything parsed so far.
pub fn build_catalogue_with<I, S>(
    lines: I,
    table: &KeyAnswerTable,
    options: ParseOptions,
) -> Result<Catalogue>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = CatalogueBuilder::new(table, options);
    for (idx, line) in lines.into_iter().enumerate() {
        builder.process_line(line.as_ref(), idx)?;
    }
    builder.finish()
}

/// Parse a catalogue source and its answer key in one go.
pub fn parse_sources(catalogue: &str, answer_key: &str, options: ParseOptions) -> Result<Catalogue> {
    let table = build_key_answer_table(answer_key.lines())?;
    build_catalogue_with(catalogue.lines(), &table, options)
}

/// Question header waiting for its answers.
struct PendingQuestion<'t> {
    key: QuestionKey,
    text: String,
    line: usize,
    record: Option<&'t KeyAnswerRecord>,
}

impl<'t> PendingQuestion<'t> {
    fn record(&mut self, table: &'t KeyAnswerTable) -> Result<&'t KeyAnswerRecord> {
        if let Some(record) = self.record {
            return Ok(record);
        }
        let record = table.get(&self.key).ok_or_else(|| ParseError::UnknownQuestionKey {
            key: self.key.to_string(),
            line: self.line,
        })?;
        self.record = Some(record);
        Ok(record)
    }
}

enum State<'t> {
    NoPendingQuestion,
    AccumulatingAnswers {
        pending: PendingQuestion<'t>,
        buffer: Vec<SubAnswer>,
    },
}

struct CatalogueBuilder<'t> {
    table: &'t KeyAnswerTable,
    options: ParseOptions,
    state: State<'t>,
    questions: Vec<Question>,
}

impl<'t> CatalogueBuilder<'t> {
    fn new(table: &'t KeyAnswerTable, options: ParseOptions) -> Self {
        Self {
            table,
            options,
            state: State::NoPendingQuestion,
            questions: Vec::new(),
        }
    }

    fn process_line(&mut self, line: &str, line_num: usize) -> Result<()> {
        match grammar::classify_catalogue_line(line) {
            Some(CatalogueLine::Question { key, text }) => {
                self.handle_question(key, text, line_num)
            }
            Some(CatalogueLine::Answer { label, text }) => {
                self.handle_answer(label, text, line, line_num)
            }
            None => Err(ParseError::Grammar {
                line: line_num,
                content: line.to_string(),
            }),
        }
    }

    fn handle_question(&mut self, key: QuestionKey, text: &str, line_num: usize) -> Result<()> {
        let next = PendingQuestion {
            key,
            text: text.to_string(),
            line: line_num,
            record: None,
        };

        let previous = std::mem::replace(
            &mut self.state,
            State::AccumulatingAnswers {
                pending: next,
                buffer: Vec::new(),
            },
        );
        if let State::AccumulatingAnswers { pending, buffer } = previous {
            self.flush(pending, buffer, true)?;
        }
        Ok(())
    }

    fn handle_answer(
        &mut self,
        label: ChoiceLabel,
        text: &str,
        line: &str,
        line_num: usize,
    ) -> Result<()> {
        let State::AccumulatingAnswers { pending, buffer } = &mut self.state else {
            return Err(ParseError::Grammar {
                line: line_num,
                content: line.to_string(),
            });
        };

        let record = pending.record(self.table)?;
        buffer.push(SubAnswer {
            orig_id: label,
            text: text.to_string(),
            correctness: record.is_correct(label).into(),
        });
        Ok(())
    }

    /// Finalize a pending question into the output list.
    fn flush(
        &mut self,
        mut pending: PendingQuestion<'t>,
        subanswers: Vec<SubAnswer>,
        require_choices: bool,
    ) -> Result<()> {
        if require_choices && subanswers.is_empty() {
            return Err(ParseError::EmptyChoiceSet {
                key: pending.key.to_string(),
                line: pending.line,
            });
        }

        let rules = pending.record(self.table)?.rules.clone();
        let id = self.questions.len() as u32 + 1;
        tracing::trace!(id, key = %pending.key, choices = subanswers.len(), "flushed question");

        self.questions.push(Question {
            id,
            orig_id: pending.key.orig_id(),
            text: pending.text,
            rules,
            subanswers,
        });
        Ok(())
    }

    fn finish(mut self) -> Result<Catalogue> {
        let state = std::mem::replace(&mut self.state, State::NoPendingQuestion);
        if let State::AccumulatingAnswers { pending, buffer } = state {
            let require_choices = !self.options.allow_empty_final_question;
            self.flush(pending, buffer, require_choices)?;
        }

        tracing::debug!(questions = self.questions.len(), "built catalogue");
        Ok(Catalogue {
            all_questions: self.questions,
        })
    }
}
