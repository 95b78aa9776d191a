//! Results reporting.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::model::Outcome;
use crate::traits::OutputSink;

/// What to print when the deadline wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeoutReport {
    /// Only "Time is up!".
    #[default]
    Notice,
    /// "Time is up!" followed by the partial score.
    Tally,
}

impl fmt::Display for TimeoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeoutReport::Notice => write!(f, "notice"),
            TimeoutReport::Tally => write!(f, "tally"),
        }
    }
}

impl FromStr for TimeoutReport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "notice" => Ok(TimeoutReport::Notice),
            "tally" => Ok(TimeoutReport::Tally),
            _ => Err(format!(
                "unknown timeout report mode: '{s}' (expected 'notice' or 'tally')"
            )),
        }
    }
}

/// Format the final message for an outcome.
pub fn render(outcome: &Outcome, timeout_report: TimeoutReport) -> String {
    match outcome {
        Outcome::Completed(score) => format!(
            "You answered correctly to {} out of {} questions.\n",
            score.correct, score.total
        ),
        Outcome::TimedOut(score) => match timeout_report {
            TimeoutReport::Notice => "Time is up!\n".to_string(),
            TimeoutReport::Tally => format!(
                "Time is up!\nYou answered {} of {} questions before time ran out, {} correctly.\n",
                score.answered, score.total, score.correct
            ),
        },
    }
}

/// Writes the final message to a sink.
pub struct Reporter {
    sink: Arc<dyn OutputSink>,
    timeout_report: TimeoutReport,
}

impl Reporter {
    pub fn new(sink: Arc<dyn OutputSink>, timeout_report: TimeoutReport) -> Self {
        Self {
            sink,
            timeout_report,
        }
    }

    /// Emit the message for `outcome` and return what was written.
    pub fn report(&self, outcome: &Outcome) -> Result<String, QuizError> {
        let text = render(outcome, self.timeout_report);
        self.sink.emit(&text)?;
        Ok(text)
    }
}
