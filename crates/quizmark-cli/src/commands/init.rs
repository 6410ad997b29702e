//! The `quizmark init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("quizmark.toml"), SAMPLE_CONFIG)?;

    std::fs::create_dir_all("quizzes")?;
    write_if_missing(Path::new("quizzes/example.toml"), EXAMPLE_QUIZ)?;

    std::fs::create_dir_all("answers")?;
    write_if_missing(Path::new("answers/example.toml"), EXAMPLE_ANSWERS)?;

    println!("\nNext steps:");
    println!("  1. Run: quizmark validate");
    println!("  2. Run: quizmark grade --quiz quizzes/example.toml --answers answers/example.toml");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizmark configuration

quiz_dir = "./quizzes"
output_dir = "./quizmark-results"
default_format = "text"
"#;

const EXAMPLE_QUIZ: &str = r#"[quiz]
title = "Example Quiz"

[[questions]]
text = "What is the capital of Japan?"

[[questions.options]]
text = "Tokyo"
correct = true

[[questions.options]]
text = "Kyoto"

[[questions.options]]
text = "Osaka"

[[questions]]
text = "Which of these are prime numbers?"

[[questions.options]]
text = "2"
correct = true

[[questions.options]]
text = "4"

[[questions.options]]
text = "7"
correct = true

[[questions]]
text = "Which planet is closest to the sun?"

[[questions.options]]
text = "Venus"

[[questions.options]]
text = "Mercury"
correct = true

[[questions]]
text = "How many bits are in a byte?"

[[questions.options]]
text = "4"

[[questions.options]]
text = "8"
correct = true

[[questions.options]]
text = "16"
"#;

const EXAMPLE_ANSWERS: &str = r#"# One list of selected option indices per question, in order.
# An empty list leaves the question unanswered.
answers = [[0], [0, 2], [0], [1]]
"#;
