//! Build errors for context construction.

use thiserror::Error;

/// Errors that can occur when building a context.
///
/// Construction is the only fallible operation in the crate: a context
/// cannot exist without a state, so "no state attached" surfaces here
/// instead of at the request call sites.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,
}
