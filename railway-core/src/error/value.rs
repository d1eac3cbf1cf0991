//! The error value carried by failed results

use super::details::Details;
use crate::error_type::ErrorType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// One failure: its type, a message, an optional code and optional details.
///
/// Errors are plain immutable values. Two errors are equal when type,
/// message, code and details all match, regardless of where they were built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Error {
    #[serde(rename = "type")]
    pub(crate) error_type: ErrorType,
    pub(crate) message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) details: Option<Details>,
}

impl Error {
    pub fn error_type(&self) -> ErrorType {
        self.error_type
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn details(&self) -> Option<&Details> {
        self.details.as_ref()
    }

    /// Whether this error is of the given type
    pub fn is(&self, error_type: ErrorType) -> bool {
        self.error_type == error_type
    }
}

// Details are left out of the hash; equal errors still hash equally.
impl Hash for Error {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.error_type.hash(state);
        self.message.hash(state);
        self.code.hash(state);
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(code) = &self.code {
            write!(f, "({}) ", code)?;
        }
        f.write_str(&self.message)?;
        if let Some(details) = &self.details {
            write!(f, " | Details: {}", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
