//! Pure core of the State pattern.
//!
//! This module contains the side-effect-free half of the crate:
//! - State definitions via the `State` trait
//! - Handler outcomes that request (never perform) transitions
//! - Immutable history tracking
//!
//! All logic in this module is pure, following the
//! "pure core, imperative shell" philosophy. The shell lives in
//! [`crate::context`].

mod history;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::{Outcome, State};
