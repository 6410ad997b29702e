//! quizmark-core — Multiple-choice quiz model, evaluation, and scoring.
//!
//! This crate defines answer options, questions and quizzes, the rules for
//! grading a submission, and the file formats and reports built around them.

pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod quiz;
pub mod report;

pub use error::QuizError;
pub use model::{AnswerOption, AnswerResult, MultipleChoiceQuestion};
pub use quiz::Quiz;
