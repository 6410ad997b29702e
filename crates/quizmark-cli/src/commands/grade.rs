//! The `quizmark grade` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use quizmark_core::config::load_config_from;
use quizmark_core::model::AnswerResult;
use quizmark_core::parser;
use quizmark_core::report::{format_selection, QuizReport};

pub fn execute(
    quiz_path: PathBuf,
    answers_path: PathBuf,
    format: Option<String>,
    save: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let quiz = parser::parse_quiz(&quiz_path)?;
    let answers = parser::parse_answer_sheet(&answers_path)?;
    tracing::debug!(quiz = quiz.title(), answers = answers.len(), "grading submission");

    let report = QuizReport::grade(&quiz, &answers)
        .with_context(|| format!("failed to grade {}", answers_path.display()))?;

    let format = format.unwrap_or(config.default_format);
    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "markdown" | "md" => {
            println!("{}", report.to_markdown());
        }
        "text" => print_summary(&report),
        other => {
            tracing::warn!("unknown output format '{other}', using text");
            print_summary(&report);
        }
    }

    if save {
        let path = config.output_dir.join(format!("{}.json", report.id));
        report.save_json(&path)?;
        eprintln!("Report saved to {}", path.display());
    }

    Ok(())
}

fn print_summary(report: &QuizReport) {
    use comfy_table::{Cell, Color, Table};

    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Selected", "Result"]);

    for (i, outcome) in report.outcomes.iter().enumerate() {
        let color = match outcome.result {
            AnswerResult::Correct => Color::Green,
            AnswerResult::Incorrect => Color::Red,
            AnswerResult::Partial => Color::Yellow,
            AnswerResult::NotAnswered => Color::Grey,
        };
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&outcome.question),
            Cell::new(format_selection(&outcome.selected)),
            Cell::new(outcome.result).fg(color),
        ]);
    }

    println!("Quiz: {}", report.quiz_title);
    println!("{table}");
    println!("Score: {}", report.score_line());
}
