//! The `quizrun init` command.

use std::path::Path;

use anyhow::Result;

use quizrun_core::config::CONFIG_FILE_NAME;

pub fn execute() -> Result<()> {
    write_if_missing(Path::new(CONFIG_FILE_NAME), SAMPLE_CONFIG)?;
    write_if_missing(Path::new("problems.csv"), SAMPLE_QUIZ)?;

    println!("\nNext steps:");
    println!("  1. Edit problems.csv with your own question,answer rows");
    println!("  2. Run: quizrun validate");
    println!("  3. Run: quizrun");

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

const SAMPLE_CONFIG: &str = r#"# quizrun configuration

quiz_path = "problems.csv"

# Time limit for the whole quiz in seconds; 0 disables it.
duration_secs = 30

shuffle = true
# seed = 42

# "notice" prints only "Time is up!"; "tally" adds the partial score.
timeout_report = "notice"
"#;

const SAMPLE_QUIZ: &str = "5+5,10
7+3,10
1+1,2
8+3,11
1+2,3
8+6,14
3+1,4
1+4,5
5+1,6
2+3,5
3+3,6
2+4,6
5+2,7
";
