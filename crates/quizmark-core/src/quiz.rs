//! The quiz aggregate: an ordered list of questions and the scoring built on
//! top of per-question evaluation.
//!
//! A `Quiz` is not synchronized. `add_question` takes `&mut self`, so sharing
//! one quiz between threads needs the caller's own locking.
//!
//! Questions are held behind `Arc`, and a question counts as already present
//! only when the very same handle was added before. Two separately built
//! questions with equal contents are distinct entries.

use std::sync::Arc;

use serde::Serialize;

use crate::error::QuizError;
use crate::model::{AnswerResult, MultipleChoiceQuestion};

/// Notice emitted when `add_question` skips a question it already holds.
pub const DUPLICATE_QUESTION_NOTICE: &str = "the question already exists in the quiz";

/// A titled, ordered collection of multiple-choice questions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quiz {
    title: String,
    questions: Vec<Arc<MultipleChoiceQuestion>>,
}

impl Quiz {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            questions: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Questions in evaluation order.
    pub fn questions(&self) -> &[Arc<MultipleChoiceQuestion>] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Append a question.
    ///
    /// Accepts an owned question or a shared `Arc` handle. Returns `false`
    /// and leaves the quiz untouched if this same handle is already present;
    /// the skip is reported as an informational notice.
    pub fn add_question(&mut self, question: impl Into<Arc<MultipleChoiceQuestion>>) -> bool {
        let question = question.into();
        if self.questions.iter().any(|q| Arc::ptr_eq(q, &question)) {
            tracing::info!(quiz = %self.title, "{DUPLICATE_QUESTION_NOTICE}");
            return false;
        }

        self.questions.push(question);
        true
    }

    /// Evaluate one answer list per question, in question order.
    ///
    /// Fails if the number of answer lists differs from the number of
    /// questions, or with the first error raised by a question.
    pub fn evaluate_all<A: AsRef<[i64]>>(
        &self,
        user_answers: &[A],
    ) -> Result<Vec<AnswerResult>, QuizError> {
        if user_answers.len() != self.questions.len() {
            return Err(QuizError::invalid_argument(
                "user_answers",
                format!(
                    "the number of answers ({}) does not match the number of questions ({})",
                    user_answers.len(),
                    self.questions.len()
                ),
            ));
        }

        self.questions
            .iter()
            .zip(user_answers)
            .enumerate()
            .map(|(i, (question, answer))| {
                let result = question.evaluate_answer(answer.as_ref())?;
                tracing::debug!(question = i, %result, "evaluated answer");
                Ok(result)
            })
            .collect()
    }

    /// Number of questions answered correctly.
    pub fn total_score<A: AsRef<[i64]>>(&self, user_answers: &[A]) -> Result<usize, QuizError> {
        let results = self.evaluate_all(user_answers)?;
        Ok(count_correct(&results))
    }

    /// Share of correctly answered questions, from 0 to 100.
    ///
    /// A quiz without questions divides zero by zero and returns `NaN`.
    pub fn score_percentage<A: AsRef<[i64]>>(
        &self,
        user_answers: &[A],
    ) -> Result<f64, QuizError> {
        let score = self.total_score(user_answers)?;
        Ok(percentage(score, self.questions.len()))
    }
}

pub(crate) fn count_correct(results: &[AnswerResult]) -> usize {
    results
        .iter()
        .filter(|&&r| r == AnswerResult::Correct)
        .count()
}

pub(crate) fn percentage(score: usize, question_count: usize) -> f64 {
    (score as f64 / question_count as f64) * 100.0
}
