//! Error types.
//!
//! Unification failure is not an error: it shows up as `None` from
//! the unifier or as an empty stream from a goal. The types here
//! report misuse of the engine's building blocks.

use thiserror::Error;

/// Error returned when extending a substitution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("variable {name}#{id} is already bound")]
    AlreadyBound { name: &'static str, id: usize },
}

/// Error returned while driving a stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("step limit of {limit} exceeded before the next answer was found")]
    StepLimitExceeded { limit: usize },
}
