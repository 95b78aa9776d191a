//! Core trait definitions for quiz input and output.
//!
//! The session never touches process stdin/stdout directly. It reads answers
//! from a [`LineSource`] and writes prompts to an [`OutputSink`], both of
//! which are injected by the caller.

use async_trait::async_trait;

// ---------------------------------------------------------------------------
// Line source trait
// ---------------------------------------------------------------------------

/// Supplies one line of user input per call.
#[async_trait]
pub trait LineSource: Send {
    /// Wait for the next line, stripped of surrounding whitespace and line
    /// terminators. `Ok(None)` means the input is exhausted.
    async fn next_line(&mut self) -> anyhow::Result<Option<String>>;
}

// ---------------------------------------------------------------------------
// Output sink trait
// ---------------------------------------------------------------------------

/// Destination for prompts and results.
pub trait OutputSink: Send + Sync {
    /// Write `text` as-is and make it visible immediately.
    fn emit(&self, text: &str) -> std::io::Result<()>;
}
