//! Core data model types for quizrun.
//!
//! A quiz is an ordered [`RecordSet`] of question/answer [`Record`]s. Running
//! a session over it produces a [`Score`], and the coordinator wraps that
//! score in an [`Outcome`] that says whether the session actually finished.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// One question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// The question text, shown as "What is {question}?".
    pub question: String,
    /// The expected answer. Compared byte-for-byte against user input.
    pub answer: String,
}

impl Record {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Exact, case-sensitive comparison against already-trimmed input.
    pub fn is_correct(&self, input: &str) -> bool {
        self.answer == input
    }
}

/// How the record order is randomized at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shuffle {
    /// Keep file order.
    #[default]
    Off,
    /// Shuffle with a fresh seed every run.
    Random,
    /// Shuffle reproducibly from the given seed.
    Seeded(u64),
}

impl Shuffle {
    /// Build a shuffle mode from the `shuffle` flag and an optional seed.
    pub fn from_options(enabled: bool, seed: Option<u64>) -> Self {
        match (enabled, seed) {
            (false, _) => Shuffle::Off,
            (true, None) => Shuffle::Random,
            (true, Some(seed)) => Shuffle::Seeded(seed),
        }
    }
}

/// The ordered questions of one quiz.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Reorder the records once. Afterwards the order is fixed for the session.
    pub fn shuffle(&mut self, mode: Shuffle) {
        match mode {
            Shuffle::Off => {}
            Shuffle::Random => {
                let mut rng = rand::rng();
                self.records.as_mut_slice().shuffle(&mut rng);
            }
            Shuffle::Seeded(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                self.records.as_mut_slice().shuffle(&mut rng);
            }
        }
        tracing::debug!(?mode, count = self.records.len(), "applied shuffle");
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// A point-in-time view of a session's tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    /// Answers that matched exactly.
    pub correct: usize,
    /// Questions the user responded to, right or wrong.
    pub answered: usize,
    /// Size of the record set.
    pub total: usize,
}

impl Score {
    pub fn is_perfect(&self) -> bool {
        self.correct == self.total
    }
}

/// Terminal result of running a session, possibly under a deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The session finished asking, or ran out of input.
    Completed(Score),
    /// The deadline elapsed first. The score is whatever had accumulated.
    TimedOut(Score),
}

impl Outcome {
    pub fn score(&self) -> Score {
        match self {
            Outcome::Completed(score) | Outcome::TimedOut(score) => *score,
        }
    }

    pub fn is_timed_out(&self) -> bool {
        matches!(self, Outcome::TimedOut(_))
    }
}
