//! HTTP mapping for railway results
//!
//! Converts [`railway_core::Result`] values into status-coded responses:
//! successes into the response the caller picks, failures into problem
//! details bodies whose status comes from an overridable error type table.
//! The crate only depends on the `http` types, so any server framework can
//! consume [`ApiResponse::into_http`].

pub mod config;
pub mod error;
pub mod global;
pub mod mappings;
pub mod problem;
pub mod response;

pub use config::MappingConfig;
pub use error::{MappingError, MappingResult};
pub use mappings::StatusCodeMappings;
pub use problem::{ProblemDetails, ProblemEntry, ProblemErrors};
pub use response::{
    ApiResponse, HttpResultExt, HttpResultFutureExt, ResponseBody, ResponseContext,
};
