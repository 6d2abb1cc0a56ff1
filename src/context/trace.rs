//! Trace sinks for the context's observable output.
//!
//! Tracing is the only I/O in the crate, so it is isolated behind the
//! `TraceSink` trait: the demo routes lines to stdout, tests capture them
//! in memory and assert on the exact sequence.

use std::sync::{Arc, Mutex};

/// Destination for the context's trace lines.
pub trait TraceSink: Send {
    /// Emit one trace line (without a trailing newline).
    fn emit(&mut self, line: &str);
}

/// Sink that prints each line to stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutSink;

impl TraceSink for StdoutSink {
    fn emit(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Sink that captures lines in memory.
///
/// Cloning yields a handle over the same buffer, so a caller can keep one
/// handle for inspection and hand the other to the context.
///
/// # Example
///
/// ```rust
/// use demeanor::context::{MemorySink, TraceSink};
///
/// let sink = MemorySink::new();
/// let mut handle = sink.clone();
/// handle.emit("hello");
/// assert_eq!(sink.lines(), vec!["hello".to_string()]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    /// Create a sink with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines emitted so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("trace buffer lock poisoned").clone()
    }
}

impl TraceSink for MemorySink {
    fn emit(&mut self, line: &str) {
        self.lines
            .lock()
            .expect("trace buffer lock poisoned")
            .push(line.to_owned());
    }
}
