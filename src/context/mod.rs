//! Imperative shell: the context that owns the active state.
//!
//! The context forwards its two requests to whatever state is currently
//! attached, then applies the handler's outcome: emitting trace lines,
//! swapping the current-state slot, and recording the transition. All
//! side effects in the crate happen here.

mod trace;

pub use trace::{MemorySink, StdoutSink, TraceSink};

use crate::core::{Outcome, State, StateHistory, StateTransition};
use chrono::Utc;

/// An object whose apparent behavior is whatever its attached state does.
///
/// A context always holds exactly one state value: construction (via
/// [`crate::builder::ContextBuilder`]) requires an initial state, and
/// [`Context::transition_to`] drops the previous one when swapping.
///
/// # Example
///
/// ```rust
/// use demeanor::builder::ContextBuilder;
/// use demeanor::context::MemorySink;
/// use demeanor::toggle::Toggle;
///
/// let sink = MemorySink::new();
/// let mut context = ContextBuilder::new()
///     .initial(Toggle::ConcreteStateA)
///     .trace(sink.clone())
///     .build()
///     .unwrap();
///
/// context.request_1();
/// assert_eq!(context.current_state(), &Toggle::ConcreteStateB);
/// ```
pub struct Context<S: State> {
    current: S,
    sink: Box<dyn TraceSink>,
    history: StateHistory<S>,
}

impl<S: State> Context<S> {
    /// Attach the initial state. Only the builder constructs contexts, so a
    /// context without a state cannot exist.
    ///
    /// Emits the attach trace but records no history entry: history holds
    /// real swaps only.
    pub(crate) fn attach(initial: S, mut sink: Box<dyn TraceSink>) -> Self {
        sink.emit(&format!("Context: transition to {}.", initial.name()));
        Self {
            current: initial,
            sink,
            history: StateHistory::new(),
        }
    }

    /// Get the currently attached state (pure).
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Get the transition history (pure).
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Swap the active state for `next`, dropping the previous one.
    ///
    /// The trace line is emitted before the new state is installed; callers
    /// observing the trace see the announcement first, then behavior from
    /// the new state.
    pub fn transition_to(&mut self, next: S) {
        self.sink
            .emit(&format!("Context: transition to {}.", next.name()));
        let record = StateTransition {
            from: self.current.clone(),
            to: next.clone(),
            timestamp: Utc::now(),
        };
        self.history = self.history.record(record);
        self.current = next;
    }

    /// Forward the first request to the attached state.
    pub fn request_1(&mut self) {
        let outcome = self.current.handle1();
        self.sink
            .emit(&format!("{} handles request1.", self.current.name()));
        self.apply(outcome);
    }

    /// Forward the second request to the attached state.
    pub fn request_2(&mut self) {
        let outcome = self.current.handle2();
        self.sink
            .emit(&format!("{} handles request2.", self.current.name()));
        self.apply(outcome);
    }

    fn apply(&mut self, outcome: Outcome<S>) {
        if let Outcome::Transition(next) = outcome {
            self.sink.emit(&format!(
                "{} wants to change the state of the context.",
                self.current.name()
            ));
            self.transition_to(next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ContextBuilder;
    use crate::toggle::Toggle;

    fn traced_context(initial: Toggle) -> (Context<Toggle>, MemorySink) {
        let sink = MemorySink::new();
        let context = ContextBuilder::new()
            .initial(initial)
            .trace(sink.clone())
            .build()
            .unwrap();
        (context, sink)
    }

    #[test]
    fn construction_emits_attach_trace_only() {
        let (context, sink) = traced_context(Toggle::ConcreteStateA);

        assert_eq!(
            sink.lines(),
            vec!["Context: transition to ConcreteStateA.".to_string()]
        );
        assert_eq!(context.current_state(), &Toggle::ConcreteStateA);
        assert!(context.history().transitions().is_empty());
    }

    #[test]
    fn request_one_from_a_transitions_to_b() {
        let (mut context, sink) = traced_context(Toggle::ConcreteStateA);

        context.request_1();

        assert_eq!(context.current_state(), &Toggle::ConcreteStateB);
        assert_eq!(
            sink.lines(),
            vec![
                "Context: transition to ConcreteStateA.".to_string(),
                "ConcreteStateA handles request1.".to_string(),
                "ConcreteStateA wants to change the state of the context.".to_string(),
                "Context: transition to ConcreteStateB.".to_string(),
            ]
        );
    }

    #[test]
    fn request_two_on_a_is_a_no_op() {
        let (mut context, sink) = traced_context(Toggle::ConcreteStateA);

        context.request_2();

        assert_eq!(context.current_state(), &Toggle::ConcreteStateA);
        assert_eq!(
            sink.lines(),
            vec![
                "Context: transition to ConcreteStateA.".to_string(),
                "ConcreteStateA handles request2.".to_string(),
            ]
        );
        assert!(context.history().transitions().is_empty());
    }

    #[test]
    fn transition_is_recorded_in_history() {
        let (mut context, _sink) = traced_context(Toggle::ConcreteStateA);

        context.request_1();

        let transitions = context.history().transitions();
        assert_eq!(transitions.len(), 1);
        assert_eq!(transitions[0].from, Toggle::ConcreteStateA);
        assert_eq!(transitions[0].to, Toggle::ConcreteStateB);
    }

    #[test]
    fn full_cycle_returns_to_a() {
        let (mut context, _sink) = traced_context(Toggle::ConcreteStateA);

        context.request_1();
        context.request_2();

        assert_eq!(context.current_state(), &Toggle::ConcreteStateA);
        assert_eq!(
            context.history().get_path(),
            vec![
                &Toggle::ConcreteStateA,
                &Toggle::ConcreteStateB,
                &Toggle::ConcreteStateA,
            ]
        );
    }

    #[test]
    fn direct_transition_traces_before_install() {
        let (mut context, sink) = traced_context(Toggle::ConcreteStateA);

        context.transition_to(Toggle::ConcreteStateB);

        assert_eq!(
            sink.lines().last().map(String::as_str),
            Some("Context: transition to ConcreteStateB.")
        );
        assert_eq!(context.current_state(), &Toggle::ConcreteStateB);
    }

    #[test]
    fn initial_state_b_handles_symmetrically() {
        let (mut context, _sink) = traced_context(Toggle::ConcreteStateB);

        context.request_1();
        assert_eq!(context.current_state(), &Toggle::ConcreteStateB);

        context.request_2();
        assert_eq!(context.current_state(), &Toggle::ConcreteStateA);
    }
}
