//! Running a quiz: the default command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{ArgAction, Args};

use quizrun_core::config::{load_config_from, QuizConfig};
use quizrun_core::engine::{QuizEngine, QuizEngineConfig};
use quizrun_core::loader;
use quizrun_core::report::TimeoutReport;
use quizrun_core::sink::ConsoleSink;
use quizrun_core::source::ThreadedLines;

/// Flags for running a quiz. Anything left unset comes from the config file
/// or the built-in defaults.
#[derive(Debug, Args)]
pub struct QuizArgs {
    /// Path to quiz CSV data file [default: problems.csv]
    #[arg(long)]
    pub quizpath: Option<PathBuf>,

    /// Time limit for the quiz in seconds, 0 for no limit [default: 10]
    #[arg(long)]
    pub duration: Option<u64>,

    /// Randomize question order [default: true]
    #[arg(long, action = ArgAction::Set)]
    pub shuffle: Option<bool>,

    /// Seed for a reproducible shuffle
    #[arg(long)]
    pub seed: Option<u64>,

    /// What to print when time runs out: notice, tally [default: notice]
    #[arg(long)]
    pub timeout_report: Option<TimeoutReport>,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl QuizArgs {
    /// Overlay the flags that were given on top of `config`.
    fn apply(self, mut config: QuizConfig) -> QuizConfig {
        if let Some(path) = self.quizpath {
            config.quiz_path = path;
        }
        if let Some(duration) = self.duration {
            config.duration_secs = duration;
        }
        if let Some(shuffle) = self.shuffle {
            config.shuffle = shuffle;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(mode) = self.timeout_report {
            config.timeout_report = mode;
        }
        config
    }
}

pub async fn execute(args: QuizArgs) -> Result<()> {
    let file_config = load_config_from(args.config.as_deref())?;
    let config = args.apply(file_config);
    tracing::debug!(?config, "resolved quiz config");

    let mut records = loader::load_quiz(&config.quiz_path)
        .with_context(|| format!("failed to load quiz from {}", config.quiz_path.display()))?;
    records.shuffle(config.shuffle_mode());

    let lines = ThreadedLines::stdin().context("failed to start reading input")?;
    let engine = QuizEngine::new(Arc::new(ConsoleSink), QuizEngineConfig::from(&config));

    engine
        .run(records, lines)
        .await
        .with_context(|| format!("cannot run quiz from {}", config.quiz_path.display()))?;

    Ok(())
}
