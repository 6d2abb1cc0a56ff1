//! Demeanor: a State pattern library with a pure core and an imperative shell.
//!
//! A [`Context`] delegates its two request operations to whatever state
//! value is currently attached, and that state can ask for a different one
//! to take its place - changing the context's apparent behavior without
//! changing its type. Handlers are pure functions returning an [`Outcome`];
//! the context applies outcomes by tracing, swapping the active state, and
//! recording the transition in an immutable history.
//!
//! # Core Concepts
//!
//! - **State**: type-safe state representation via the [`State`] trait
//! - **Outcome**: how a handler requests (never performs) a transition
//! - **Context**: the imperative shell owning the single current-state slot
//! - **History**: immutable tracking of transitions over time
//!
//! # Example
//!
//! ```rust
//! use demeanor::builder::ContextBuilder;
//! use demeanor::context::MemorySink;
//! use demeanor::toggle::Toggle;
//!
//! let sink = MemorySink::new();
//! let mut context = ContextBuilder::new()
//!     .initial(Toggle::ConcreteStateA)
//!     .trace(sink.clone())
//!     .build()
//!     .unwrap();
//!
//! context.request_1();
//! assert_eq!(context.current_state(), &Toggle::ConcreteStateB);
//!
//! context.request_2();
//! assert_eq!(context.current_state(), &Toggle::ConcreteStateA);
//!
//! assert_eq!(
//!     sink.lines().first().map(String::as_str),
//!     Some("Context: transition to ConcreteStateA.")
//! );
//! ```

pub mod builder;
pub mod context;
pub mod core;
pub mod toggle;

// Re-export commonly used types
pub use builder::{BuildError, ContextBuilder};
pub use context::{Context, MemorySink, StdoutSink, TraceSink};
pub use core::{Outcome, State, StateHistory, StateTransition};
