//! Quiz startup and orchestration.
//!
//! Validates the record set, waits for the user to start, runs the session
//! under the configured deadline, and reports exactly once.

use std::sync::Arc;
use std::time::Duration;

use crate::config::QuizConfig;
use crate::coordinator::run_with_deadline;
use crate::error::QuizError;
use crate::model::{Outcome, RecordSet};
use crate::report::{Reporter, TimeoutReport};
use crate::session::QuizSession;
use crate::traits::{LineSource, OutputSink};

/// Shown before the quiz starts. Any line of input acknowledges it.
pub const BEGIN_PROMPT: &str = "Press [Enter] to begin the quiz.\n";

/// Configuration for the quiz engine.
#[derive(Debug, Clone, Default)]
pub struct QuizEngineConfig {
    /// Time limit for the whole quiz. `None` runs without a timer.
    pub deadline: Option<Duration>,
    /// What to print when the deadline wins.
    pub timeout_report: TimeoutReport,
}

impl From<&QuizConfig> for QuizEngineConfig {
    fn from(config: &QuizConfig) -> Self {
        Self {
            deadline: config.deadline(),
            timeout_report: config.timeout_report,
        }
    }
}

/// Runs one quiz from start prompt to final report.
pub struct QuizEngine {
    sink: Arc<dyn OutputSink>,
    config: QuizEngineConfig,
}

impl QuizEngine {
    pub fn new(sink: Arc<dyn OutputSink>, config: QuizEngineConfig) -> Self {
        Self { sink, config }
    }

    /// Run the quiz over `records`, reading the start signal and every
    /// answer from `lines`.
    ///
    /// Errors only happen before the first question is asked. Once the ask
    /// loop starts, the quiz always ends in an [`Outcome`].
    pub async fn run<L>(&self, records: RecordSet, mut lines: L) -> Result<Outcome, QuizError>
    where
        L: LineSource + 'static,
    {
        let session = QuizSession::new(records, Arc::clone(&self.sink))?;

        self.sink.emit(BEGIN_PROMPT)?;
        match lines.next_line().await {
            Ok(Some(_)) => {}
            Ok(None) => return Err(QuizError::NoStartSignal),
            Err(e) => {
                tracing::warn!("failed to read start signal: {e:#}");
                return Err(QuizError::NoStartSignal);
            }
        }

        let outcome = run_with_deadline(session, lines, self.config.deadline).await;
        let score = outcome.score();
        tracing::info!(
            timed_out = outcome.is_timed_out(),
            perfect = score.is_perfect(),
            correct = score.correct,
            total = score.total,
            "quiz finished"
        );

        let reporter = Reporter::new(Arc::clone(&self.sink), self.config.timeout_report);
        if let Err(e) = reporter.report(&outcome) {
            tracing::warn!("failed to report results: {e}");
        }

        Ok(outcome)
    }
}
