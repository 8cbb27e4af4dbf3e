//! Question catalogue parsing shared by the converter tools.
//!
//! Provides:
//! - Answer-key parser building the key-answer table
//! - Catalogue parser grouping answer choices under their questions
//! - Shared types (Question, SubAnswer, QuestionKey, etc.)

pub mod catalogue;
pub mod error;
mod grammar;
pub mod key_answers;
pub mod types;

pub use catalogue::{build_catalogue, build_catalogue_with, parse_sources, ParseOptions};
pub use error::{ParseError, Result};
pub use key_answers::build_key_answer_table;
pub use types::{
    Catalogue, ChoiceLabel, Correctness, KeyAnswerRecord, KeyAnswerTable, Question, QuestionKey,
    SubAnswer,
};
