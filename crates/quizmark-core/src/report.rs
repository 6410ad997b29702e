//! Graded quiz report with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::QuizError;
use crate::model::AnswerResult;
use crate::quiz::{count_correct, percentage, Quiz};

/// A graded submission for one quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the submission was graded.
    pub created_at: DateTime<Utc>,
    /// Title of the graded quiz.
    pub quiz_title: String,
    /// Number of questions in the quiz.
    pub question_count: usize,
    /// Per-question outcomes, in question order.
    pub outcomes: Vec<QuestionOutcome>,
    /// Tally of outcomes by result.
    pub counts: ResultCounts,
    /// Number of correct answers.
    pub total_score: usize,
    /// Percentage of correct answers. `None` when undefined (no questions).
    pub percentage: Option<f64>,
}

/// The graded answer to a single question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionOutcome {
    pub question: String,
    pub selected: Vec<i64>,
    pub result: AnswerResult,
}

/// How many questions ended with each result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultCounts {
    pub correct: usize,
    pub incorrect: usize,
    pub partial: usize,
    pub not_answered: usize,
}

impl ResultCounts {
    pub fn tally(results: &[AnswerResult]) -> Self {
        let mut counts = Self::default();
        for result in results {
            match result {
                AnswerResult::Correct => counts.correct += 1,
                AnswerResult::Incorrect => counts.incorrect += 1,
                AnswerResult::Partial => counts.partial += 1,
                AnswerResult::NotAnswered => counts.not_answered += 1,
            }
        }
        counts
    }
}

impl QuizReport {
    /// Grade a submission against a quiz.
    pub fn grade(quiz: &Quiz, user_answers: &[Vec<i64>]) -> Result<Self, QuizError> {
        let results = quiz.evaluate_all(user_answers)?;
        let total_score = count_correct(&results);
        let pct = percentage(total_score, quiz.len());

        let outcomes = quiz
            .questions()
            .iter()
            .zip(user_answers)
            .zip(&results)
            .map(|((question, selected), &result)| QuestionOutcome {
                question: question.text().to_string(),
                selected: selected.clone(),
                result,
            })
            .collect();

        Ok(Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            quiz_title: quiz.title().to_string(),
            question_count: quiz.len(),
            outcomes,
            counts: ResultCounts::tally(&results),
            total_score,
            percentage: pct.is_finite().then_some(pct),
        })
    }

    /// Human-readable score line, e.g. `3/4 (75.0%)`.
    pub fn score_line(&self) -> String {
        match self.percentage {
            Some(pct) => format!("{}/{} ({pct:.1}%)", self.total_score, self.question_count),
            None => format!("{}/{} (n/a)", self.total_score, self.question_count),
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: QuizReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Format the report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!("## {}\n\n", self.quiz_title));
        md.push_str(&format!("**Score:** {}\n\n", self.score_line()));

        if !self.outcomes.is_empty() {
            md.push_str("| # | Question | Selected | Result |\n");
            md.push_str("|---|----------|----------|--------|\n");
            for (i, outcome) in self.outcomes.iter().enumerate() {
                md.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    i + 1,
                    outcome.question.replace('|', "\\|"),
                    format_selection(&outcome.selected),
                    outcome.result
                ));
            }
            md.push('\n');
        }

        md.push_str(&format!(
            "{} correct, {} incorrect, {} not answered\n",
            self.counts.correct, self.counts.incorrect, self.counts.not_answered
        ));

        md
    }
}

/// Render selected indices as `0, 2`, or `-` for no selection.
pub fn format_selection(selected: &[i64]) -> String {
    if selected.is_empty() {
        return "-".to_string();
    }
    selected
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerOption, MultipleChoiceQuestion};

    fn sample_quiz() -> Quiz {
        let mut quiz = Quiz::new("Rust Trivia");
        let questions = [
            ("Keyword for immutable binding?", ["let", "var", "mut"], 0),
            ("Macro for formatted output?", ["println!", "echo!", "say!"], 0),
            ("Smart pointer for shared ownership?", ["Box", "Rc", "Cell"], 1),
            ("Trait for cloning?", ["Copy", "Dup", "Clone"], 2),
        ];
        for (text, options, correct) in questions {
            let options = options
                .iter()
                .enumerate()
                .map(|(i, o)| AnswerOption::new(*o, i == correct).unwrap())
                .collect();
            quiz.add_question(MultipleChoiceQuestion::new(text, options).unwrap());
        }
        quiz
    }

    #[test]
    fn grade_three_of_four() {
        let quiz = sample_quiz();
        let answers = vec![vec![0], vec![0], vec![0], vec![2]];
        let report = QuizReport::grade(&quiz, &answers).unwrap();

        assert_eq!(report.quiz_title, "Rust Trivia");
        assert_eq!(report.question_count, 4);
        assert_eq!(report.total_score, 3);
        assert_eq!(report.percentage, Some(75.0));
        assert_eq!(report.outcomes[2].result, AnswerResult::Incorrect);
        assert_eq!(
            report.counts,
            ResultCounts {
                correct: 3,
                incorrect: 1,
                partial: 0,
                not_answered: 0,
            }
        );
        assert_eq!(report.score_line(), "3/4 (75.0%)");
    }

    #[test]
    fn grade_counts_unanswered() {
        let quiz = sample_quiz();
        let answers = vec![vec![], vec![0], vec![], vec![1]];
        let report = QuizReport::grade(&quiz, &answers).unwrap();
        assert_eq!(report.counts.not_answered, 2);
        assert_eq!(report.counts.incorrect, 1);
        assert_eq!(report.total_score, 1);
    }

    #[test]
    fn grade_empty_quiz_has_no_percentage() {
        let quiz = Quiz::new("Empty");
        let report = QuizReport::grade(&quiz, &[]).unwrap();
        assert_eq!(report.percentage, None);
        assert_eq!(report.score_line(), "0/0 (n/a)");
    }

    #[test]
    fn grade_propagates_errors() {
        let quiz = sample_quiz();
        assert!(QuizReport::grade(&quiz, &[vec![0]]).is_err());
        let err = QuizReport::grade(&quiz, &[vec![0], vec![0], vec![3], vec![2]]).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn json_roundtrip() {
        let quiz = sample_quiz();
        let report = QuizReport::grade(&quiz, &[vec![0], vec![0], vec![1], vec![2]]).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("report.json");

        report.save_json(&path).unwrap();
        let loaded = QuizReport::load_json(&path).unwrap();

        assert_eq!(loaded.id, report.id);
        assert_eq!(loaded.total_score, 4);
        assert_eq!(loaded.outcomes.len(), 4);
        assert_eq!(loaded.outcomes[0].result, AnswerResult::Correct);
    }

    #[test]
    fn load_missing_report_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(QuizReport::load_json(&dir.path().join("nope.json")).is_err());
    }

    #[test]
    fn markdown_output() {
        let quiz = sample_quiz();
        let report = QuizReport::grade(&quiz, &[vec![0], vec![], vec![0], vec![2]]).unwrap();
        let md = report.to_markdown();
        assert!(md.contains("## Rust Trivia"));
        assert!(md.contains("**Score:** 2/4 (50.0%)"));
        assert!(md.contains("| 2 | Macro for formatted output? | - | not answered |"));
        assert!(md.contains("2 correct, 1 incorrect, 1 not answered"));
    }

    #[test]
    fn selection_formatting() {
        assert_eq!(format_selection(&[]), "-");
        assert_eq!(format_selection(&[0, 2]), "0, 2");
    }
}
