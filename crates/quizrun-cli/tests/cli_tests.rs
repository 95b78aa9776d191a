//! CLI integration tests using assert_cmd.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn quizrun() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("quizrun").unwrap()
}

fn quiz_file(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("problems.csv");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn answers_every_question() {
    let dir = TempDir::new().unwrap();
    let path = quiz_file(&dir, "2+2,4\n3+3,6\n");

    quizrun()
        .current_dir(dir.path())
        .arg("--quizpath")
        .arg(&path)
        .args(["--shuffle", "false", "--duration", "0"])
        .write_stdin("\n4\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Press [Enter] to begin the quiz."))
        .stdout(predicate::str::contains("What is 2+2?\nWhat is 3+3?\n"))
        .stdout(predicate::str::ends_with(
            "You answered correctly to 2 out of 2 questions.\n",
        ));
}

#[test]
fn counts_wrong_answers() {
    let dir = TempDir::new().unwrap();
    let path = quiz_file(&dir, "2+2,4\n3+3,6\n");

    quizrun()
        .current_dir(dir.path())
        .arg("--quizpath")
        .arg(&path)
        .args(["--shuffle", "false", "--duration", "0"])
        .write_stdin("\n4\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "You answered correctly to 1 out of 2 questions.",
        ));
}

#[test]
fn answers_are_trimmed_before_matching() {
    let dir = TempDir::new().unwrap();
    let path = quiz_file(&dir, "2+2,4\n");

    quizrun()
        .current_dir(dir.path())
        .arg("--quizpath")
        .arg(&path)
        .args(["--duration", "0"])
        .write_stdin("\n   4  \r\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "You answered correctly to 1 out of 1 questions.",
        ));
}

#[test]
fn input_running_out_reports_partial_score() {
    let dir = TempDir::new().unwrap();
    let path = quiz_file(&dir, "2+2,4\n3+3,6\n5+5,10\n");

    quizrun()
        .current_dir(dir.path())
        .arg("--quizpath")
        .arg(&path)
        .args(["--shuffle", "false"])
        .write_stdin("\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "You answered correctly to 1 out of 3 questions.",
        ))
        .stdout(predicate::str::contains("What is 5+5?").not());
}

#[test]
fn seeded_shuffle_is_repeatable() {
    let dir = TempDir::new().unwrap();
    let rows: String = (0..10).map(|i| format!("{i}+1,{}\n", i + 1)).collect();
    let path = quiz_file(&dir, &rows);

    let run = || {
        let output = quizrun()
            .current_dir(dir.path())
            .arg("--quizpath")
            .arg(&path)
            .args(["--seed", "17", "--duration", "0"])
            .write_stdin("\n")
            .output()
            .unwrap();
        String::from_utf8(output.stdout).unwrap()
    };

    assert_eq!(run(), run());
}

#[test]
fn missing_quiz_file_fails_before_prompting() {
    let dir = TempDir::new().unwrap();

    quizrun()
        .current_dir(dir.path())
        .args(["--quizpath", "nonexistent.csv"])
        .write_stdin("\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Press [Enter]").not())
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("nonexistent.csv"));
}

#[test]
fn malformed_quiz_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = quiz_file(&dir, "q1, a1 \nq2\n");

    quizrun()
        .current_dir(dir.path())
        .arg("--quizpath")
        .arg(&path)
        .write_stdin("\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("What is").not())
        .stderr(predicate::str::contains("malformed quiz data on line 2"));
}

#[test]
fn unterminated_quote_fails() {
    let dir = TempDir::new().unwrap();
    let path = quiz_file(&dir, "2+2,\"4\n");

    quizrun()
        .current_dir(dir.path())
        .arg("--quizpath")
        .arg(&path)
        .write_stdin("\n4\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("What is").not())
        .stderr(predicate::str::contains("unterminated quoted field"));
}

#[test]
fn empty_quiz_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = quiz_file(&dir, "");

    quizrun()
        .current_dir(dir.path())
        .arg("--quizpath")
        .arg(&path)
        .write_stdin("\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Press [Enter]").not())
        .stderr(predicate::str::contains("doesn't contain any questions"));
}

#[test]
fn closed_input_at_start_fails() {
    let dir = TempDir::new().unwrap();
    let path = quiz_file(&dir, "2+2,4\n");

    quizrun()
        .current_dir(dir.path())
        .arg("--quizpath")
        .arg(&path)
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input closed before the quiz was started"));
}

#[test]
fn reads_settings_from_config_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("capitals.csv"), "capital of France,Paris\n").unwrap();
    std::fs::write(
        dir.path().join("quizrun.toml"),
        "quiz_path = \"capitals.csv\"\nduration_secs = 0\nshuffle = false\n",
    )
    .unwrap();

    quizrun()
        .current_dir(dir.path())
        .write_stdin("\nparis\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("What is capital of France?"))
        .stdout(predicate::str::contains(
            "You answered correctly to 0 out of 1 questions.",
        ));
}

#[test]
fn explicit_missing_config_fails() {
    let dir = TempDir::new().unwrap();

    quizrun()
        .current_dir(dir.path())
        .args(["--config", "nope.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn rejects_unknown_timeout_report_mode() {
    quizrun()
        .args(["--timeout-report", "loud"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown timeout report mode"));
}

#[test]
fn validate_clean_quiz() {
    let dir = TempDir::new().unwrap();
    let path = quiz_file(&dir, "2+2,4\n3+3,6\n");

    quizrun()
        .arg("validate")
        .arg("--quizpath")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("(2 questions)"))
        .stdout(predicate::str::contains("Quiz file valid."));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let path = quiz_file(&dir, "2+2,4\n2+2,4\n3+3, 6\n");

    quizrun()
        .arg("validate")
        .arg("--quizpath")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("[#2] WARNING: duplicate question: 2+2"))
        .stdout(predicate::str::contains("[#3] WARNING"))
        .stdout(predicate::str::contains("2 warning(s) found."));
}

#[test]
fn validate_malformed_quiz() {
    let dir = TempDir::new().unwrap();
    let path = quiz_file(&dir, "q1,a1\nq2\n");

    quizrun()
        .arg("validate")
        .arg("--quizpath")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    quizrun()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quizrun.toml"))
        .stdout(predicate::str::contains("Created problems.csv"));

    assert!(dir.path().join("quizrun.toml").exists());
    assert!(dir.path().join("problems.csv").exists());

    quizrun()
        .current_dir(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("(13 questions)"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("problems.csv"), "mine,1\n").unwrap();

    quizrun()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("problems.csv already exists"));

    let kept = std::fs::read_to_string(dir.path().join("problems.csv")).unwrap();
    assert_eq!(kept, "mine,1\n");
}
