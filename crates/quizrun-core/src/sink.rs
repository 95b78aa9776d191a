//! Output sinks: the real console and an in-memory capture for tests.

use std::io::Write;
use std::sync::{Arc, Mutex};

use crate::traits::OutputSink;

/// Writes to process stdout, flushing after every write so prompts without a
/// trailing newline still show up.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn emit(&self, text: &str) -> std::io::Result<()> {
        let mut out = std::io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()
    }
}

/// Collects everything written to it. Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct BufferSink {
    buffer: Arc<Mutex<String>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        self.buffer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl OutputSink for BufferSink {
    fn emit(&self, text: &str) -> std::io::Result<()> {
        self.buffer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push_str(text);
        Ok(())
    }
}
