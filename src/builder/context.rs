//! Builder for constructing contexts.

use crate::builder::error::BuildError;
use crate::context::{Context, StdoutSink, TraceSink};
use crate::core::State;

/// Builder for constructing a context with a fluent API.
///
/// The initial state is mandatory; trace output defaults to stdout.
pub struct ContextBuilder<S: State> {
    initial: Option<S>,
    sink: Option<Box<dyn TraceSink>>,
}

impl<S: State> ContextBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            sink: None,
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Route trace lines to a custom sink instead of stdout.
    pub fn trace<T: TraceSink + 'static>(mut self, sink: T) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Build the context.
    /// Returns an error if no initial state was given.
    pub fn build(self) -> Result<Context<S>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let sink = self.sink.unwrap_or_else(|| Box::new(StdoutSink));
        Ok(Context::attach(initial, sink))
    }
}

impl<S: State> Default for ContextBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
