//! Factories and builders for errors
//!
//! Every built-in [`ErrorType`] has a factory that fills in the type's
//! default message. The consuming `with_*` methods finish the value before it
//! is handed to a result.
//!
//! ```rust
//! use railway_core::{Error, ErrorType};
//!
//! let err = Error::validation()
//!     .with_message("bad input")
//!     .with_code("E1");
//!
//! assert_eq!(err.error_type(), ErrorType::VALIDATION);
//! assert_eq!(err.to_string(), "(E1) bad input");
//! ```

use super::details::Details;
use super::types::RailwayError;
use super::value::Error;
use crate::error_type::ErrorType;
use serde_json::Value;

impl Error {
    /// Create an error of any type with the given message
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
            code: None,
            details: None,
        }
    }

    /// Create an error of any type, built-in or declared elsewhere, using the
    /// type's default message
    pub fn custom(error_type: ErrorType) -> Self {
        Self::new(error_type, error_type.message())
    }

    pub fn failure() -> Self {
        Self::custom(ErrorType::FAILURE)
    }

    pub fn validation() -> Self {
        Self::custom(ErrorType::VALIDATION)
    }

    pub fn conflict() -> Self {
        Self::custom(ErrorType::CONFLICT)
    }

    pub fn not_found() -> Self {
        Self::custom(ErrorType::NOT_FOUND)
    }

    pub fn unauthorized() -> Self {
        Self::custom(ErrorType::UNAUTHORIZED)
    }

    pub fn forbidden() -> Self {
        Self::custom(ErrorType::FORBIDDEN)
    }

    pub fn unavailable() -> Self {
        Self::custom(ErrorType::UNAVAILABLE)
    }

    pub fn locked() -> Self {
        Self::custom(ErrorType::LOCKED)
    }

    pub fn unexpected() -> Self {
        Self::custom(ErrorType::UNEXPECTED)
    }

    /// Create an `Unexpected` error from a foreign error, keeping its message
    pub fn from_error<E>(err: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        Self::new(ErrorType::UNEXPECTED, err.to_string())
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Replace the details with the given entries
    pub fn with_details<I, K, V>(mut self, details: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.details = Some(details.into_iter().collect());
        self
    }

    /// Add one detail entry, creating the details map if needed
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let details = self.details.take().unwrap_or_default();
        self.details = Some(details.with_entry(key.into(), value.into()));
        self
    }

    /// Attach an already built details map
    pub fn with_details_map(mut self, details: Details) -> Self {
        self.details = Some(details);
        self
    }
}

impl RailwayError {
    /// Create an invalid operation error
    pub fn invalid_operation(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        RailwayError::InvalidOperation {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Create the fault raised for a failed result
    pub fn failure_result(error: Error, message: impl Into<String>) -> Self {
        RailwayError::FailureResult {
            error,
            message: message.into(),
        }
    }

    /// The error value carried by a `FailureResult` fault
    pub fn result_error(&self) -> Option<&Error> {
        match self {
            RailwayError::FailureResult { error, .. } => Some(error),
            _ => None,
        }
    }
}
