//! The canonical two-variant toggle.
//!
//! Exactly one handler per variant requests a transition to the other
//! variant; the opposite handler leaves the state alone. This is the
//! classic demonstration of the State pattern, and the mapping below is
//! the observable contract the scenario tests assert.

use crate::state_enum;

state_enum! {
    /// Two-state cycle: A moves to B on `handle1`, B moves back to A on
    /// `handle2`. There is no terminal state.
    pub enum Toggle {
        ConcreteStateA,
        ConcreteStateB,
    }
    handle1: [ConcreteStateA => ConcreteStateB]
    handle2: [ConcreteStateB => ConcreteStateA]
}
