//! Failure type for the HTTP mapping layer

use thiserror::Error;

/// Errors reported while mapping results to responses or loading mappings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    #[error("Error type '{error_type}' is not supported by the convention.")]
    Unsupported { error_type: String },

    #[error("Invalid status code {code} for error type '{error_type}'")]
    InvalidStatusCode { error_type: String, code: u16 },

    #[error("Unknown error type in status code configuration: {name}")]
    UnknownErrorType { name: String },

    #[error("A problem response requires at least one error")]
    NoErrors,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to build response: {0}")]
    Response(String),
}

pub type MappingResult<T> = std::result::Result<T, MappingError>;

impl From<serde_json::Error> for MappingError {
    fn from(err: serde_json::Error) -> Self {
        MappingError::Response(format!("Failed to serialize body: {}", err))
    }
}

impl From<http::Error> for MappingError {
    fn from(err: http::Error) -> Self {
        MappingError::Response(err.to_string())
    }
}

impl From<toml::de::Error> for MappingError {
    fn from(err: toml::de::Error) -> Self {
        MappingError::Config(format!("Failed to parse TOML: {}", err))
    }
}
