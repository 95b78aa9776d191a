//! Races a quiz session against a wall-clock deadline.
//!
//! With a deadline, the session runs on its own task and the coordinator
//! waits for whichever comes first: the task finishing or the timer firing.
//! The loser is abandoned, not cancelled. A blocking read of user input
//! can't be interrupted, so a timed-out session task is simply detached; its
//! tally is sealed first, so nothing it does afterwards changes the result.

use std::time::Duration;

use tokio::task::JoinError;

use crate::model::{Outcome, Score};
use crate::session::{QuizSession, Tally};
use crate::traits::LineSource;

/// Run `session` to completion, or until `deadline` elapses.
///
/// `None` or a zero duration means no deadline: the session runs inline on
/// the calling task and no timer is created.
pub async fn run_with_deadline<L>(
    session: QuizSession,
    lines: L,
    deadline: Option<Duration>,
) -> Outcome
where
    L: LineSource + 'static,
{
    let Some(deadline) = deadline.filter(|d| !d.is_zero()) else {
        return Outcome::Completed(session.run(lines).await);
    };

    let tally = session.tally();
    let mut handle = tokio::spawn(session.run(lines));

    tokio::select! {
        joined = &mut handle => resolve_join(joined, &tally),
        _ = tokio::time::sleep(deadline) => {
            tally.seal();
            tracing::debug!(?deadline, "deadline elapsed, abandoning session");
            Outcome::TimedOut(tally.snapshot())
        }
    }
}

/// Turn the session task's join result into an outcome. A task that was
/// cancelled did not finish, so it is never reported as completed.
fn resolve_join(joined: Result<Score, JoinError>, tally: &Tally) -> Outcome {
    match joined {
        Ok(score) => {
            tracing::debug!("session finished before the deadline");
            Outcome::Completed(score)
        }
        Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
        Err(e) => {
            tracing::warn!("session task ended without finishing: {e}");
            tally.seal();
            Outcome::TimedOut(tally.snapshot())
        }
    }
}
