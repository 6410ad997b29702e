//! TOML quiz parser and answer sheet loader.
//!
//! Loads quizzes from TOML files and directories, validates them, and reads
//! answer sheets in TOML or JSON.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::QuizError;
use crate::model::{AnswerOption, MultipleChoiceQuestion};
use crate::quiz::Quiz;

/// Intermediate TOML structure for parsing quiz files.
#[derive(Debug, Deserialize)]
struct TomlQuizFile {
    quiz: TomlQuizHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlQuizHeader {
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    text: Option<String>,
    options: Option<Vec<TomlOption>>,
}

#[derive(Debug, Deserialize)]
struct TomlOption {
    text: Option<String>,
    #[serde(default)]
    correct: bool,
}

/// Parse a single TOML file into a `Quiz`.
pub fn parse_quiz(path: &Path) -> Result<Quiz> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read quiz file: {}", path.display()))?;

    parse_quiz_str(&content, path)
}

/// Parse a TOML string into a `Quiz` (useful for testing).
pub fn parse_quiz_str(content: &str, source_path: &Path) -> Result<Quiz> {
    let parsed: TomlQuizFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let title = parsed
        .quiz
        .title
        .ok_or_else(|| QuizError::null_argument("title", "quiz title must not be null"))?;

    let mut quiz = Quiz::new(title);
    for (i, q) in parsed.questions.into_iter().enumerate() {
        let question = build_question(q)
            .with_context(|| format!("invalid question #{} in {}", i + 1, source_path.display()))?;
        quiz.add_question(question);
    }

    Ok(quiz)
}

fn build_question(raw: TomlQuestion) -> Result<MultipleChoiceQuestion, QuizError> {
    let text = raw
        .text
        .ok_or_else(|| QuizError::null_argument("text", "question text must not be null"))?;
    let raw_options = raw
        .options
        .ok_or_else(|| QuizError::null_argument("options", "options must not be null"))?;

    let options = raw_options
        .into_iter()
        .map(|o| AnswerOption::new(o.text.unwrap_or_default(), o.correct))
        .collect::<Result<Vec<_>, _>>()?;

    MultipleChoiceQuestion::new(text, options)
}

/// Recursively load all `.toml` quiz files from a directory.
///
/// Files that fail to parse are skipped with a warning.
pub fn load_quiz_directory(dir: &Path) -> Result<Vec<Quiz>> {
    let mut quizzes = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut paths = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    paths.sort();

    for path in paths {
        if path.is_dir() {
            quizzes.extend(load_quiz_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_quiz(&path) {
                Ok(quiz) => quizzes.push(quiz),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(quizzes)
}

/// A warning from quiz validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Zero-based question index (if applicable).
    pub question: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Validate a quiz for authoring mistakes that construction lets through.
pub fn validate_quiz(quiz: &Quiz) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if quiz.is_empty() {
        warnings.push(ValidationWarning {
            question: None,
            message: "quiz has no questions; its score percentage is undefined".into(),
        });
    }

    for (i, question) in quiz.questions().iter().enumerate() {
        if question.text().trim().is_empty() {
            warnings.push(ValidationWarning {
                question: Some(i),
                message: "question text is blank".into(),
            });
        }

        if !question.has_correct_option() {
            warnings.push(ValidationWarning {
                question: Some(i),
                message: "no option is marked correct; every answer will be incorrect".into(),
            });
        }

        let mut seen_options = HashSet::new();
        for option in question.options() {
            if !seen_options.insert(option.text()) {
                warnings.push(ValidationWarning {
                    question: Some(i),
                    message: format!("duplicate option text: {}", option.text()),
                });
            }
        }
    }

    // Separately parsed questions are distinct entries even when equal.
    let mut seen_texts = HashSet::new();
    for (i, question) in quiz.questions().iter().enumerate() {
        if !question.text().trim().is_empty() && !seen_texts.insert(question.text()) {
            warnings.push(ValidationWarning {
                question: Some(i),
                message: format!("duplicate question text: {}", question.text()),
            });
        }
    }

    warnings
}

/// On-disk format of an answer sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerSheetFormat {
    Toml,
    Json,
}

impl AnswerSheetFormat {
    /// Pick the format from a file extension; anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        if path.extension().is_some_and(|ext| ext == "json") {
            AnswerSheetFormat::Json
        } else {
            AnswerSheetFormat::Toml
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawAnswerSheet {
    #[serde(default)]
    answers: Vec<Option<Vec<i64>>>,
}

/// Read an answer sheet: one list of selected option indices per question.
pub fn parse_answer_sheet(path: &Path) -> Result<Vec<Vec<i64>>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read answer sheet: {}", path.display()))?;

    parse_answer_sheet_str(&content, AnswerSheetFormat::from_path(path))
        .with_context(|| format!("invalid answer sheet: {}", path.display()))
}

/// Parse answer sheet content. A `null` entry (JSON only) counts as no answer.
pub fn parse_answer_sheet_str(content: &str, format: AnswerSheetFormat) -> Result<Vec<Vec<i64>>> {
    let raw: RawAnswerSheet = match format {
        AnswerSheetFormat::Toml => toml::from_str(content).context("failed to parse TOML")?,
        AnswerSheetFormat::Json => serde_json::from_str(content).context("failed to parse JSON")?,
    };

    Ok(raw
        .answers
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}
