//! quizmark configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level quizmark configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizmarkConfig {
    /// Directory scanned when no quiz path is given.
    #[serde(default = "default_quiz_dir")]
    pub quiz_dir: PathBuf,
    /// Where saved reports are written.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Output format used when none is passed on the command line.
    #[serde(default = "default_format")]
    pub default_format: String,
}

fn default_quiz_dir() -> PathBuf {
    PathBuf::from("./quizzes")
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./quizmark-results")
}
fn default_format() -> String {
    "text".to_string()
}

impl Default for QuizmarkConfig {
    fn default() -> Self {
        Self {
            quiz_dir: default_quiz_dir(),
            output_dir: default_output_dir(),
            default_format: default_format(),
        }
    }
}

/// Expand `${VAR}` references from the environment. Unset variables expand
/// to nothing; an unterminated `${` is kept literally.
fn expand_env_refs(raw: &str) -> String {
    let mut expanded = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some((before, after)) = rest.split_once("${") {
        expanded.push_str(before);
        match after.split_once('}') {
            Some((name, tail)) => {
                expanded.push_str(&std::env::var(name).unwrap_or_default());
                rest = tail;
            }
            None => {
                expanded.push_str("${");
                rest = after;
                break;
            }
        }
    }

    expanded.push_str(rest);
    expanded
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(expand_env_refs(&path.to_string_lossy()))
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `quizmark.toml` in the current directory
/// 2. `~/.config/quizmark/config.toml`
///
/// Environment variable override: `QUIZMARK_OUTPUT_DIR`.
pub fn load_config() -> Result<QuizmarkConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizmarkConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizmark.toml");
        if local.exists() {
            Some(local)
        } else {
            global_config_file().filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizmarkConfig::default(),
    };

    if let Ok(dir) = std::env::var("QUIZMARK_OUTPUT_DIR") {
        config.output_dir = PathBuf::from(dir);
    }

    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

/// Parse a TOML config string and resolve `${VAR}` references in its paths.
pub fn parse_config_str(content: &str) -> Result<QuizmarkConfig> {
    let mut config: QuizmarkConfig = toml::from_str(content)?;
    config.quiz_dir = resolve_path(&config.quiz_dir);
    config.output_dir = resolve_path(&config.output_dir);
    Ok(config)
}

/// `$HOME/.config/quizmark/config.toml`, if `HOME` is set.
fn global_config_file() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    let mut path = PathBuf::from(home);
    path.extend([".config", "quizmark", "config.toml"]);
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_env_refs_substitutes_and_keeps_literals() {
        std::env::set_var("_QUIZMARK_TEST_VAR", "hello");
        assert_eq!(expand_env_refs("${_QUIZMARK_TEST_VAR}"), "hello");
        assert_eq!(
            expand_env_refs("prefix_${_QUIZMARK_TEST_VAR}_suffix"),
            "prefix_hello_suffix"
        );
        assert_eq!(
            expand_env_refs("${_QUIZMARK_TEST_VAR}/${_QUIZMARK_TEST_VAR}"),
            "hello/hello"
        );
        assert_eq!(expand_env_refs("no_vars_here"), "no_vars_here");
        assert_eq!(expand_env_refs("${unterminated"), "${unterminated");
        assert_eq!(
            expand_env_refs("${_QUIZMARK_TEST_VAR}/${open"),
            "hello/${open"
        );
        assert_eq!(expand_env_refs("a/${_QUIZMARK_UNSET_VAR}/b"), "a//b");
        std::env::remove_var("_QUIZMARK_TEST_VAR");
    }

    #[test]
    fn global_config_file_lives_under_home() {
        if let Some(home) = std::env::var_os("HOME") {
            let path = global_config_file().unwrap();
            assert!(path.starts_with(home));
            assert!(path.ends_with(".config/quizmark/config.toml"));
        }
    }

    #[test]
    fn default_config() {
        let config = QuizmarkConfig::default();
        assert_eq!(config.quiz_dir, PathBuf::from("./quizzes"));
        assert_eq!(config.output_dir, PathBuf::from("./quizmark-results"));
        assert_eq!(config.default_format, "text");
    }

    #[test]
    fn parse_partial_config() {
        let config = parse_config_str("default_format = \"markdown\"\n").unwrap();
        assert_eq!(config.default_format, "markdown");
        assert_eq!(config.quiz_dir, PathBuf::from("./quizzes"));
    }

    #[test]
    fn parse_config_resolves_paths() {
        std::env::set_var("_QUIZMARK_TEST_ROOT", "/srv/quiz");
        let config = parse_config_str(
            "quiz_dir = \"${_QUIZMARK_TEST_ROOT}/sets\"\noutput_dir = \"out\"\n",
        )
        .unwrap();
        assert_eq!(config.quiz_dir, PathBuf::from("/srv/quiz/sets"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        std::env::remove_var("_QUIZMARK_TEST_ROOT");
    }

    #[test]
    fn explicit_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from(Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quizmark.toml");
        std::fs::write(&path, "quiz_dir = \"custom\"\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.quiz_dir, PathBuf::from("custom"));
    }
}
