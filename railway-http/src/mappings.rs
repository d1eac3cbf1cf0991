//! Error type to HTTP status code table

use crate::error::{MappingError, MappingResult};
use http::StatusCode;
use railway_core::{BuiltIn, ErrorType, ErrorTypeSet};
use std::collections::HashMap;

/// Maps error types to the status code of the response they produce.
///
/// `Default` gives the conventional table:
///
/// | Error type | Status |
/// |---|---|
/// | Validation | 400 |
/// | Unauthorized | 401 |
/// | Forbidden | 403 |
/// | NotFound | 404 |
/// | Conflict | 409 |
/// | Failure | 422 |
/// | Locked | 423 |
/// | Unexpected | 500 |
/// | Unavailable | 503 |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCodeMappings {
    codes: HashMap<ErrorType, StatusCode>,
}

impl Default for StatusCodeMappings {
    fn default() -> Self {
        let codes = BuiltIn::VARIANTS
            .iter()
            .filter_map(|error_type| {
                default_status(*error_type).map(|status| (*error_type, status))
            })
            .collect();
        Self { codes }
    }
}

fn default_status(error_type: ErrorType) -> Option<StatusCode> {
    let status = match error_type.name() {
        "Validation" => StatusCode::BAD_REQUEST,
        "Unauthorized" => StatusCode::UNAUTHORIZED,
        "Forbidden" => StatusCode::FORBIDDEN,
        "NotFound" => StatusCode::NOT_FOUND,
        "Conflict" => StatusCode::CONFLICT,
        "Failure" => StatusCode::UNPROCESSABLE_ENTITY,
        "Locked" => StatusCode::LOCKED,
        "Unexpected" => StatusCode::INTERNAL_SERVER_ERROR,
        "Unavailable" => StatusCode::SERVICE_UNAVAILABLE,
        _ => return None,
    };
    Some(status)
}

impl StatusCodeMappings {
    /// The conventional table
    pub fn new() -> Self {
        Self::default()
    }

    /// A table without any mapping
    pub fn empty() -> Self {
        Self {
            codes: HashMap::new(),
        }
    }

    /// Map `error_type` to `status`, replacing any previous mapping
    pub fn map(&mut self, error_type: ErrorType, status: StatusCode) -> &mut Self {
        self.codes.insert(error_type, status);
        self
    }

    /// Builder form of [`StatusCodeMappings::map`]
    pub fn with(mut self, error_type: ErrorType, status: StatusCode) -> Self {
        self.map(error_type, status);
        self
    }

    pub fn status_for(&self, error_type: ErrorType) -> MappingResult<StatusCode> {
        self.codes
            .get(&error_type)
            .copied()
            .ok_or_else(|| MappingError::Unsupported {
                error_type: error_type.name().to_string(),
            })
    }

    pub fn contains(&self, error_type: ErrorType) -> bool {
        self.codes.contains_key(&error_type)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Mappings sorted by error type name
    pub fn entries(&self) -> Vec<(ErrorType, StatusCode)> {
        let mut entries: Vec<_> = self.codes.iter().map(|(k, v)| (*k, *v)).collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}
