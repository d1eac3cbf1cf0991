//! Conversions from foreign faults into error values
//!
//! Anything that arrives as a Rust error becomes an `Unexpected` error whose
//! message is the source's display text.

use super::types::RailwayError;
use super::value::Error;
use crate::error_type::ErrorType;

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::new(ErrorType::UNEXPECTED, err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::from_error(&err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::from_error(&err)
    }
}

impl From<RailwayError> for Error {
    fn from(err: RailwayError) -> Self {
        match err {
            // The fault already wraps an error value; hand it back unchanged
            RailwayError::FailureResult { error, .. } => error,
            other => Error::from_error(&other),
        }
    }
}
