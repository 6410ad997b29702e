//! Core data model types for quizmark.
//!
//! Answer options, multiple-choice questions, and the result vocabulary
//! returned when a submission is evaluated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::QuizError;

/// Outcome of evaluating one question's submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerResult {
    Correct,
    Incorrect,
    /// Reserved for partial-credit scoring. Never produced.
    Partial,
    NotAnswered,
}

impl fmt::Display for AnswerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerResult::Correct => write!(f, "correct"),
            AnswerResult::Incorrect => write!(f, "incorrect"),
            AnswerResult::Partial => write!(f, "partial"),
            AnswerResult::NotAnswered => write!(f, "not answered"),
        }
    }
}

impl FromStr for AnswerResult {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['_', '-'], " ").as_str() {
            "correct" => Ok(AnswerResult::Correct),
            "incorrect" => Ok(AnswerResult::Incorrect),
            "partial" => Ok(AnswerResult::Partial),
            "not answered" | "unanswered" => Ok(AnswerResult::NotAnswered),
            other => Err(format!("unknown answer result: {other}")),
        }
    }
}

/// A single labeled choice within a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    text: String,
    is_correct: bool,
}

impl AnswerOption {
    /// Create an option. The text must contain at least one non-whitespace
    /// character.
    pub fn new(text: impl Into<String>, is_correct: bool) -> Result<Self, QuizError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuizError::invalid_argument(
                "text",
                "option text must not be null or blank",
            ));
        }
        Ok(Self { text, is_correct })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    /// Whether selecting this option counts as a correct choice.
    pub fn check_answer(&self) -> bool {
        self.is_correct
    }
}

/// A question with an ordered list of options.
///
/// The position of each option is its index in user submissions, so the list
/// is fixed once the question is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultipleChoiceQuestion {
    text: String,
    options: Vec<AnswerOption>,
}

impl MultipleChoiceQuestion {
    /// Minimum number of options a question must carry.
    pub const MIN_OPTIONS: usize = 2;

    /// Create a question. The text may be empty; at least
    /// [`MIN_OPTIONS`](Self::MIN_OPTIONS) options are required. Nothing
    /// checks that any option is marked correct.
    pub fn new(text: impl Into<String>, options: Vec<AnswerOption>) -> Result<Self, QuizError> {
        if options.len() < Self::MIN_OPTIONS {
            return Err(QuizError::invalid_argument(
                "options",
                "a question needs at least two options",
            ));
        }
        Ok(Self {
            text: text.into(),
            options,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    /// Whether any option is marked correct.
    pub fn has_correct_option(&self) -> bool {
        self.options.iter().any(AnswerOption::is_correct)
    }

    /// Evaluate the option indices a user selected.
    ///
    /// - No selection yields [`AnswerResult::NotAnswered`].
    /// - Indices are checked in order. An out-of-range index fails, and the
    ///   first index pointing at an incorrect option yields
    ///   [`AnswerResult::Incorrect`] without looking further.
    /// - Otherwise [`AnswerResult::Correct`], even if some correct options
    ///   were left unselected.
    pub fn evaluate_answer(&self, user_answer: &[i64]) -> Result<AnswerResult, QuizError> {
        if user_answer.is_empty() {
            return Ok(AnswerResult::NotAnswered);
        }

        for &index in user_answer {
            if !self.option_at(index)?.check_answer() {
                return Ok(AnswerResult::Incorrect);
            }
        }

        Ok(AnswerResult::Correct)
    }

    fn option_at(&self, index: i64) -> Result<&AnswerOption, QuizError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.options.get(i))
            .ok_or_else(|| {
                QuizError::invalid_argument(
                    "user_answer",
                    format!(
                        "option index {index} is out of range for {} options",
                        self.options.len()
                    ),
                )
            })
    }
}
