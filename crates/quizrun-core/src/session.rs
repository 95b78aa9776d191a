//! The ask/read/check loop.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::QuizError;
use crate::model::{RecordSet, Score};
use crate::traits::{LineSource, OutputSink};

#[derive(Debug, Default)]
struct TallyState {
    correct: usize,
    answered: usize,
    sealed: bool,
}

/// Running score of one session.
///
/// Only the session's own loop records answers. The coordinator may read it
/// from another task at any time and may seal it, after which further answers
/// are rejected and the score stays frozen.
#[derive(Debug)]
pub struct Tally {
    total: usize,
    state: Mutex<TallyState>,
}

impl Tally {
    fn new(total: usize) -> Self {
        Self {
            total,
            state: Mutex::new(TallyState::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, TallyState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Count one answer. Returns `false` without counting if sealed.
    pub fn record(&self, correct: bool) -> bool {
        let mut state = self.lock();
        if state.sealed {
            return false;
        }
        state.answered += 1;
        if correct {
            state.correct += 1;
        }
        true
    }

    /// Write a prompt unless sealed. Returns `Ok(false)` without writing if
    /// sealed. Holding the lock across the write means a prompt is either
    /// fully written before [`Tally::seal`] returns or never written at all.
    pub fn ask(&self, sink: &dyn OutputSink, prompt: &str) -> std::io::Result<bool> {
        let state = self.lock();
        if state.sealed {
            return Ok(false);
        }
        sink.emit(prompt)?;
        Ok(true)
    }

    /// Freeze the score. Waits for any prompt being written by [`Tally::ask`].
    pub fn seal(&self) {
        self.lock().sealed = true;
    }

    pub fn is_sealed(&self) -> bool {
        self.lock().sealed
    }

    pub fn snapshot(&self) -> Score {
        let state = self.lock();
        Score {
            correct: state.correct,
            answered: state.answered,
            total: self.total,
        }
    }
}

/// One run through a record set.
pub struct QuizSession {
    records: RecordSet,
    tally: Arc<Tally>,
    sink: Arc<dyn OutputSink>,
}

impl QuizSession {
    /// Create a session. A quiz with no questions is rejected.
    pub fn new(records: RecordSet, sink: Arc<dyn OutputSink>) -> Result<Self, QuizError> {
        if records.is_empty() {
            return Err(QuizError::EmptyQuiz);
        }
        Ok(Self {
            tally: Arc::new(Tally::new(records.len())),
            records,
            sink,
        })
    }

    /// Shared handle to this session's score.
    pub fn tally(&self) -> Arc<Tally> {
        Arc::clone(&self.tally)
    }

    /// Ask every question in order, reading one line per question.
    ///
    /// Stops early, without error, when input runs out or fails, when the
    /// sink can't be written, or when the tally has been sealed.
    pub async fn run<L: LineSource>(self, mut lines: L) -> Score {
        for (i, record) in self.records.iter().enumerate() {
            let prompt = format!("What is {}?\n", record.question);
            match self.tally.ask(self.sink.as_ref(), &prompt) {
                Ok(true) => {}
                Ok(false) => {
                    tracing::debug!(question = i + 1, "tally sealed, leaving ask loop");
                    break;
                }
                Err(e) => {
                    tracing::warn!("failed to write prompt: {e}");
                    break;
                }
            }

            let input = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => {
                    tracing::debug!(question = i + 1, "input exhausted");
                    break;
                }
                Err(e) => {
                    tracing::warn!("input failed, ending quiz early: {e:#}");
                    break;
                }
            };

            if !self.tally.record(record.is_correct(&input)) {
                break;
            }
        }

        let score = self.tally.snapshot();
        tracing::debug!(
            correct = score.correct,
            answered = score.answered,
            total = score.total,
            "ask loop finished"
        );
        score
    }
}
