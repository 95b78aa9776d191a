//! Quiz configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::Shuffle;
use crate::report::TimeoutReport;

/// Name of the config file looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "quizrun.toml";

/// Top-level quizrun configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// CSV file holding the questions.
    #[serde(default = "default_quiz_path")]
    pub quiz_path: PathBuf,
    /// Time limit for the whole quiz in seconds. 0 disables the limit.
    #[serde(default = "default_duration")]
    pub duration_secs: u64,
    /// Randomize question order once at load.
    #[serde(default = "default_true")]
    pub shuffle: bool,
    /// Seed for a reproducible shuffle.
    #[serde(default)]
    pub seed: Option<u64>,
    /// What to print when time runs out.
    #[serde(default)]
    pub timeout_report: TimeoutReport,
}

fn default_quiz_path() -> PathBuf {
    PathBuf::from("problems.csv")
}
fn default_duration() -> u64 {
    10
}
fn default_true() -> bool {
    true
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            quiz_path: default_quiz_path(),
            duration_secs: default_duration(),
            shuffle: true,
            seed: None,
            timeout_report: TimeoutReport::default(),
        }
    }
}

impl QuizConfig {
    /// The quiz deadline, or `None` when unlimited.
    pub fn deadline(&self) -> Option<Duration> {
        (self.duration_secs > 0).then(|| Duration::from_secs(self.duration_secs))
    }

    pub fn shuffle_mode(&self) -> Shuffle {
        Shuffle::from_options(self.shuffle, self.seed)
    }
}

/// Load config from an explicit path, or from `quizrun.toml` in the current
/// directory if present, or fall back to defaults.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from(CONFIG_FILE_NAME);
            local.exists().then_some(local)
        }
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<QuizConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(config)
        }
        None => Ok(QuizConfig::default()),
    }
}
