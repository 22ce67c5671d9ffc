//! Error types for domain operations.

use thiserror::Error;

/// Result type alias for domain operations.
pub type Result<T> = std::result::Result<T, DomainError>;

/// Failures the domain model can report.
///
/// Lookups by id never produce these; they answer with `Option` and leave
/// the decision about presenting a missing entity to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An entity addressed by id does not exist.
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// Kind of entity that was looked up
        resource: &'static str,
        /// Id that was looked up
        id: u64,
    },

    /// A positional removal was given an index past the end of the sequence.
    #[error("index {index} out of range for {len} todos")]
    IndexOutOfRange {
        /// Requested position
        index: usize,
        /// Length of the sequence at the time of the call
        len: usize,
    },

    /// A constructor argument was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
