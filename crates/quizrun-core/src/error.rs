//! Quiz error types.
//!
//! Every variant here is fatal at startup. Running out of input mid-quiz and
//! hitting the deadline are normal session endings and never show up as errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can stop a quiz from starting.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The quiz source could not be read.
    #[error("failed to read quiz file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row was malformed. No records are returned when this happens.
    #[error("malformed quiz data on line {line}: {message}")]
    Parse { line: u64, message: String },

    /// The source parsed cleanly but contained no questions.
    #[error("quiz doesn't contain any questions")]
    EmptyQuiz,

    /// Input closed before the user acknowledged the begin prompt.
    #[error("input closed before the quiz was started")]
    NoStartSignal,

    /// Writing to the output sink failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_the_file() {
        let err = QuizError::Io {
            path: PathBuf::from("missing.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("missing.csv"));
    }
}
