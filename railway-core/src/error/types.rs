//! Failure type for the crate's own escape hatches
//!
//! Result and Error values never use this type to propagate ordinary
//! failures; it is only produced where a caller deliberately leaves the
//! result discipline or misuses an API.

use super::value::Error;

/// Errors reported by railway-core itself
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RailwayError {
    /// An accessor was used in a state where it has no meaning
    #[error("Invalid operation '{operation}': {reason}")]
    InvalidOperation { operation: String, reason: String },

    /// A failed result was turned into a fault by `ensure_success`
    #[error("{message}")]
    FailureResult {
        #[source]
        error: Error,
        message: String,
    },

    /// A failure result was requested without any error
    #[error("A failure result requires at least one error")]
    EmptyFailure,

    #[error("Error type '{name}' is already registered with message '{existing}'")]
    DuplicateErrorType { name: String, existing: String },

    #[error("Unknown error type: {name}")]
    UnknownErrorType { name: String },
}

pub type RailwayResult<T> = std::result::Result<T, RailwayError>;
