//! Line sources: a background-thread reader for stdin and a scripted source
//! for tests.

use std::collections::VecDeque;
use std::io::BufRead;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::traits::LineSource;

/// Reads lines on a dedicated OS thread and hands them over a channel.
///
/// A blocking read can't be cancelled, so it must not live on the runtime's
/// blocking pool or shutdown would wait for the user to press enter. The
/// thread is detached and dies with the process.
pub struct ThreadedLines {
    rx: mpsc::UnboundedReceiver<std::io::Result<String>>,
}

impl ThreadedLines {
    /// Start reading from `reader` in the background.
    pub fn spawn<R>(reader: R) -> std::io::Result<Self>
    where
        R: BufRead + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        std::thread::Builder::new()
            .name("quizrun-input".into())
            .spawn(move || {
                for line in reader.lines() {
                    let failed = line.is_err();
                    if tx.send(line).is_err() || failed {
                        break;
                    }
                }
            })?;
        Ok(Self { rx })
    }

    /// Read from process stdin.
    pub fn stdin() -> std::io::Result<Self> {
        Self::spawn(std::io::BufReader::new(std::io::stdin()))
    }
}

#[async_trait]
impl LineSource for ThreadedLines {
    async fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        match self.rx.recv().await {
            Some(Ok(line)) => Ok(Some(line.trim().to_string())),
            Some(Err(e)) => Err(anyhow::Error::new(e).context("failed to read input")),
            None => Ok(None),
        }
    }
}

/// A fixed list of answers, optionally handed out with a delay to simulate
/// someone typing.
#[derive(Debug, Clone, Default)]
pub struct ScriptedLines {
    lines: VecDeque<String>,
    delay: Option<Duration>,
    hang_when_empty: bool,
}

impl ScriptedLines {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            delay: None,
            hang_when_empty: false,
        }
    }

    /// Wait `delay` before returning each line.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Block forever instead of reporting end of input once the script runs
    /// out, like a user who walked away from the keyboard.
    pub fn hang_when_empty(mut self) -> Self {
        self.hang_when_empty = true;
        self
    }

    /// Lines not yet handed out.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

#[async_trait]
impl LineSource for ScriptedLines {
    async fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        if self.lines.is_empty() && self.hang_when_empty {
            std::future::pending::<()>().await;
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.lines.pop_front())
    }
}
