//! The `quizrun validate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use quizrun_core::config::load_config_from;
use quizrun_core::loader;

pub fn execute(quizpath: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let path = match quizpath {
        Some(path) => path,
        None => load_config_from(config_path.as_deref())?.quiz_path,
    };

    let records = loader::load_quiz(&path)
        .with_context(|| format!("failed to load quiz from {}", path.display()))?;
    anyhow::ensure!(
        !records.is_empty(),
        "quiz file {} doesn't contain any questions",
        path.display()
    );

    println!("Quiz file: {} ({} questions)", path.display(), records.len());

    let warnings = loader::validate_records(&records);
    for w in &warnings {
        println!("  [#{}] WARNING: {}", w.index, w.message);
    }

    if warnings.is_empty() {
        println!("Quiz file valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
