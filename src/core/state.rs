//! Core State capability for context-driven behavior.
//!
//! A state is a value the context delegates its requests to. Handlers are
//! pure methods: they inspect the state and return an [`Outcome`] describing
//! what the context should do next, without performing any side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// What a request handler asks the context to do.
///
/// Handlers never mutate the context directly. A transition is requested by
/// returning `Transition(next)`; the context, as sole owner of the
/// current-state slot, applies it.
///
/// # Example
///
/// ```rust
/// use demeanor::core::Outcome;
/// use demeanor::toggle::Toggle;
///
/// let stay: Outcome<Toggle> = Outcome::Stay;
/// let go = Outcome::Transition(Toggle::ConcreteStateB);
/// assert_ne!(stay, go);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<S> {
    /// Keep the current state attached.
    Stay,
    /// Replace the current state with the given one.
    Transition(S),
}

/// Trait for states a context can delegate to.
///
/// All methods are pure - no side effects. A state is an immutable value;
/// which variant it is alone determines how the two requests are handled.
///
/// # Required Traits
///
/// - `Clone`: states must be cloneable for history tracking
/// - `PartialEq`: states must be comparable for transition assertions
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable so recorded
///   history can be persisted by callers
///
/// # Example
///
/// ```rust
/// use demeanor::core::{Outcome, State};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
///
///     fn handle1(&self) -> Outcome<Self> {
///         match self {
///             Self::Open => Outcome::Transition(Self::Closed),
///             Self::Closed => Outcome::Stay,
///         }
///     }
///
///     fn handle2(&self) -> Outcome<Self> {
///         match self {
///             Self::Closed => Outcome::Transition(Self::Open),
///             Self::Open => Outcome::Stay,
///         }
///     }
/// }
///
/// assert_eq!(Door::Open.handle1(), Outcome::Transition(Door::Closed));
/// assert_eq!(Door::Open.handle2(), Outcome::Stay);
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's stable display name for tracing.
    ///
    /// The name is part of the state's contract and appears verbatim in
    /// trace output, so it must not depend on runtime type identity.
    fn name(&self) -> &str;

    /// Handle the context's first request.
    fn handle1(&self) -> Outcome<Self>;

    /// Handle the context's second request.
    fn handle2(&self) -> Outcome<Self>;
}
