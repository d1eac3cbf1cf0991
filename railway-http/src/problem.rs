//! Problem details bodies for failed results
//!
//! A failure made only of validation errors becomes a validation problem:
//! messages grouped under each error's code, with the `"failure"` bucket for
//! errors without a usable code. Any other failure becomes a general problem
//! describing its first error, with the status mapped from that error's type.

use crate::error::{MappingError, MappingResult};
use crate::mappings::StatusCodeMappings;
use http::StatusCode;
use railway_core::{Details, Error, ErrorType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Bucket used for validation errors without a code
pub const FALLBACK_CODE: &str = "failure";

const PROBLEM_TYPE: &str = "about:blank";

/// RFC 7807 style problem body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    pub errors: ProblemErrors,
}

/// Error payload of a problem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProblemErrors {
    /// Messages of validation errors, grouped by code
    Validation(BTreeMap<String, Vec<String>>),
    /// The error a general problem was built from
    General(Vec<ProblemEntry>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemEntry {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Details>,
}

impl From<&Error> for ProblemEntry {
    fn from(error: &Error) -> Self {
        Self {
            message: error.message().to_string(),
            code: error.code().map(str::to_string),
            details: error.details().cloned(),
        }
    }
}

impl ProblemDetails {
    /// Build the problem for a failed result's errors
    pub fn from_errors(errors: &[Error], mappings: &StatusCodeMappings) -> MappingResult<Self> {
        let first = errors.first().ok_or(MappingError::NoErrors)?;

        if errors.iter().all(|error| error.is(ErrorType::VALIDATION)) {
            let status = mappings.status_for(ErrorType::VALIDATION)?;
            debug!(
                status = status.as_u16(),
                count = errors.len(),
                "Rendering validation problem"
            );
            return Ok(Self::new(
                status,
                ProblemErrors::Validation(group_by_code(errors)),
            ));
        }

        let status = mappings.status_for(first.error_type())?;
        debug!(
            status = status.as_u16(),
            error_type = %first.error_type(),
            "Rendering problem"
        );
        Ok(Self::new(
            status,
            ProblemErrors::General(vec![ProblemEntry::from(first)]),
        ))
    }

    fn new(status: StatusCode, errors: ProblemErrors) -> Self {
        Self {
            problem_type: PROBLEM_TYPE.to_string(),
            title: status
                .canonical_reason()
                .unwrap_or("Unknown Status")
                .to_string(),
            status: status.as_u16(),
            trace_id: None,
            errors,
        }
    }

    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn is_validation(&self) -> bool {
        matches!(self.errors, ProblemErrors::Validation(_))
    }
}

fn group_by_code(errors: &[Error]) -> BTreeMap<String, Vec<String>> {
    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for error in errors {
        let code = match error.code() {
            Some(code) if !code.trim().is_empty() => code,
            _ => FALLBACK_CODE,
        };
        groups
            .entry(code.to_string())
            .or_default()
            .push(error.message().to_string());
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn mappings() -> StatusCodeMappings {
        StatusCodeMappings::default()
    }

    #[test]
    fn test_validation_errors_are_grouped_by_code() {
        let errors = vec![
            Error::validation().with_message("Email is required").with_code("email"),
            Error::validation().with_message("Name is too short").with_code("name"),
            Error::validation().with_message("Email is malformed").with_code("email"),
            Error::validation().with_message("Something is off"),
            Error::validation().with_message("Blank code").with_code("  "),
        ];

        let problem = ProblemDetails::from_errors(&errors, &mappings()).unwrap();
        assert!(problem.is_validation());
        assert_eq!(problem.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            serde_json::to_value(&problem).unwrap(),
            json!({
                "type": "about:blank",
                "title": "Bad Request",
                "status": 400,
                "errors": {
                    "email": ["Email is required", "Email is malformed"],
                    "failure": ["Something is off", "Blank code"],
                    "name": ["Name is too short"]
                }
            })
        );
    }

    #[test]
    fn test_mixed_errors_use_first_error() {
        let errors = vec![
            Error::conflict()
                .with_message("Duplicate email address")
                .with_code("USR409")
                .with_detail("email", "john@doe.com"),
            Error::validation().with_code("name"),
        ];

        let problem = ProblemDetails::from_errors(&errors, &mappings())
            .unwrap()
            .with_trace_id("trace-1");
        assert!(!problem.is_validation());
        assert_eq!(
            serde_json::to_value(&problem).unwrap(),
            json!({
                "type": "about:blank",
                "title": "Conflict",
                "status": 409,
                "trace_id": "trace-1",
                "errors": [{
                    "message": "Duplicate email address",
                    "code": "USR409",
                    "details": { "email": "john@doe.com" }
                }]
            })
        );
    }

    #[test]
    fn test_general_problem_omits_missing_fields() {
        let problem = ProblemDetails::from_errors(&[Error::unexpected()], &mappings()).unwrap();
        assert_eq!(problem.title, "Internal Server Error");
        assert_eq!(
            serde_json::to_value(&problem.errors).unwrap(),
            json!([{ "message": "An unexpected error has occurred." }])
        );
    }

    #[test]
    fn test_no_errors() {
        assert_eq!(
            ProblemDetails::from_errors(&[], &mappings()),
            Err(MappingError::NoErrors)
        );
    }

    #[test]
    fn test_unmapped_type() {
        let errors = vec![Error::locked()];
        let result = ProblemDetails::from_errors(&errors, &StatusCodeMappings::empty());
        assert!(matches!(result, Err(MappingError::Unsupported { .. })));
    }

    #[test]
    fn test_round_trip() {
        let problem = ProblemDetails::from_errors(&[Error::not_found()], &mappings()).unwrap();
        let text = serde_json::to_string(&problem).unwrap();
        let parsed: ProblemDetails = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, problem);
    }
}
