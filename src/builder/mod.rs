//! Builder API for ergonomic context construction.
//!
//! This module provides the fluent [`ContextBuilder`] and the
//! [`state_enum!`](crate::state_enum) macro for declaring states with
//! minimal boilerplate while maintaining type safety.

pub mod context;
pub mod error;
pub mod macros;

pub use context::ContextBuilder;
pub use error::BuildError;

use crate::context::Context;
use crate::core::State;

/// Build a context over the given initial state, tracing to stdout.
///
/// # Example
///
/// ```
/// use demeanor::builder::stdout_context;
/// use demeanor::toggle::Toggle;
///
/// let mut context = stdout_context(Toggle::ConcreteStateA);
/// context.request_1();
/// ```
pub fn stdout_context<S: State>(initial: S) -> Context<S> {
    ContextBuilder::new()
        .initial(initial)
        .build()
        .expect("initial state is set")
}
