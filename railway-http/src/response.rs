//! Framework-neutral responses built from results
//!
//! A successful result becomes the response chosen by the caller (`ok`,
//! `created`, ...). A failed result always becomes a problem response, see
//! [`crate::problem`]. [`ApiResponse::into_http`] turns either into an
//! [`http::Response`] with a JSON body for whatever server sits on top.
//!
//! ```rust
//! use http::StatusCode;
//! use railway_core::{Error, Result};
//! use railway_http::HttpResultExt;
//!
//! let found = Result::success("Ada").ok().unwrap();
//! assert_eq!(found.status(), StatusCode::OK);
//!
//! let missing: Result<&str> = Error::not_found().into();
//! let response = missing.ok().unwrap();
//! assert_eq!(response.status(), StatusCode::NOT_FOUND);
//! ```

use crate::error::MappingResult;
use crate::global;
use crate::mappings::StatusCodeMappings;
use crate::problem::ProblemDetails;
use futures::FutureExt;
use http::header::{CONTENT_TYPE, LOCATION};
use http::StatusCode;
use railway_core::{Error, Result};
use serde::Serialize;
use std::future::Future;

/// Content type of problem bodies
pub const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Body of an [`ApiResponse`]
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody<B> {
    Empty,
    Value(B),
    Problem(ProblemDetails),
}

/// Status, optional location and body of a response
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<B> {
    status: StatusCode,
    location: Option<String>,
    body: ResponseBody<B>,
}

impl<B> ApiResponse<B> {
    pub fn new(status: StatusCode, body: B) -> Self {
        Self {
            status,
            location: None,
            body: ResponseBody::Value(body),
        }
    }

    /// 200 with a body
    pub fn ok(body: B) -> Self {
        Self::new(StatusCode::OK, body)
    }

    /// 201 with a location and a body
    pub fn created(location: impl Into<String>, body: B) -> Self {
        Self::new(StatusCode::CREATED, body).with_location(location)
    }

    /// 202 with an optional location and a body
    pub fn accepted(location: Option<String>, body: B) -> Self {
        Self {
            status: StatusCode::ACCEPTED,
            location,
            body: ResponseBody::Value(body),
        }
    }

    /// 204 without a body
    pub fn no_content() -> Self {
        Self {
            status: StatusCode::NO_CONTENT,
            location: None,
            body: ResponseBody::Empty,
        }
    }

    pub fn problem(problem: ProblemDetails) -> Self {
        Self {
            status: problem.status_code(),
            location: None,
            body: ResponseBody::Problem(problem),
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn body(&self) -> &ResponseBody<B> {
        &self.body
    }

    pub fn into_body(self) -> ResponseBody<B> {
        self.body
    }

    /// The problem body, if this is a problem response
    pub fn as_problem(&self) -> Option<&ProblemDetails> {
        match &self.body {
            ResponseBody::Problem(problem) => Some(problem),
            _ => None,
        }
    }

    pub fn is_problem(&self) -> bool {
        self.as_problem().is_some()
    }

    /// Convert into an [`http::Response`] with a JSON body
    pub fn into_http(self) -> MappingResult<http::Response<Vec<u8>>>
    where
        B: Serialize,
    {
        let mut builder = http::Response::builder().status(self.status);
        if let Some(location) = &self.location {
            builder = builder.header(LOCATION, location.as_str());
        }

        let response = match &self.body {
            ResponseBody::Empty => builder.body(Vec::new())?,
            ResponseBody::Value(value) => builder
                .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
                .body(serde_json::to_vec(value)?)?,
            ResponseBody::Problem(problem) => builder
                .header(CONTENT_TYPE, PROBLEM_CONTENT_TYPE)
                .body(serde_json::to_vec(problem)?)?,
        };
        Ok(response)
    }
}

/// Request-scoped settings used while building responses
#[derive(Debug, Clone, Default)]
pub struct ResponseContext {
    trace_id: Option<String>,
    mappings: Option<StatusCodeMappings>,
}

impl ResponseContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trace identifier copied into problem bodies
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Use `mappings` instead of the process-wide table
    pub fn with_mappings(mut self, mappings: StatusCodeMappings) -> Self {
        self.mappings = Some(mappings);
        self
    }

    /// Trace id of the context.
    ///
    /// Without an explicit id this falls back to the id of the current
    /// tracing span, rendered as hex. Span ids are process-local: they
    /// correlate log lines of one process, not requests across services.
    pub fn trace_id(&self) -> Option<String> {
        self.trace_id.clone().or_else(|| {
            tracing::Span::current()
                .id()
                .map(|id| format!("{:016x}", id.into_u64()))
        })
    }

    /// Problem body for the errors of a failed result
    pub fn problem(&self, errors: &[Error]) -> MappingResult<ProblemDetails> {
        let problem = match &self.mappings {
            Some(mappings) => ProblemDetails::from_errors(errors, mappings)?,
            None => ProblemDetails::from_errors(errors, &global::snapshot())?,
        };
        Ok(match self.trace_id() {
            Some(trace_id) => problem.with_trace_id(trace_id),
            None => problem,
        })
    }

    /// Build the success response with `on_success`, or a problem response
    pub fn respond<T, B, F>(
        &self,
        result: Result<T>,
        on_success: F,
    ) -> MappingResult<ApiResponse<B>>
    where
        F: FnOnce(T) -> ApiResponse<B>,
    {
        result.match_all(
            |value| Ok(on_success(value)),
            |errors| self.problem(&errors).map(ApiResponse::problem),
        )
    }
}

/// Response builders on resolved results
pub trait HttpResultExt<T>: Sized {
    /// Build the response with `on_success` in the given context
    fn to_response_in<B, F>(
        self,
        context: &ResponseContext,
        on_success: F,
    ) -> MappingResult<ApiResponse<B>>
    where
        F: FnOnce(T) -> ApiResponse<B>;

    fn to_response<B, F>(self, on_success: F) -> MappingResult<ApiResponse<B>>
    where
        F: FnOnce(T) -> ApiResponse<B>,
    {
        self.to_response_in(&ResponseContext::default(), on_success)
    }

    /// 200 with the success value as body
    fn ok(self) -> MappingResult<ApiResponse<T>> {
        self.to_response(ApiResponse::ok)
    }

    /// 200 with a body derived from the success value
    fn ok_with<B, F>(self, transform: F) -> MappingResult<ApiResponse<B>>
    where
        F: FnOnce(T) -> B,
    {
        self.to_response(|value| ApiResponse::ok(transform(value)))
    }

    fn created(self, location: impl Into<String>) -> MappingResult<ApiResponse<T>> {
        let location = location.into();
        self.to_response(|value| ApiResponse::created(location, value))
    }

    /// 201 with a body derived from the success value
    fn created_with<B, F>(
        self,
        location: impl Into<String>,
        transform: F,
    ) -> MappingResult<ApiResponse<B>>
    where
        F: FnOnce(T) -> B,
    {
        let location = location.into();
        self.to_response(|value| ApiResponse::created(location, transform(value)))
    }

    fn accepted(self, location: Option<String>) -> MappingResult<ApiResponse<T>> {
        self.to_response(|value| ApiResponse::accepted(location, value))
    }

    /// 202 with a body derived from the success value
    fn accepted_with<B, F>(
        self,
        location: Option<String>,
        transform: F,
    ) -> MappingResult<ApiResponse<B>>
    where
        F: FnOnce(T) -> B,
    {
        self.to_response(|value| ApiResponse::accepted(location, transform(value)))
    }

    /// 204 on success, the value is dropped
    fn no_content(self) -> MappingResult<ApiResponse<()>> {
        self.to_response(|_| ApiResponse::no_content())
    }
}

impl<T> HttpResultExt<T> for Result<T> {
    fn to_response_in<B, F>(
        self,
        context: &ResponseContext,
        on_success: F,
    ) -> MappingResult<ApiResponse<B>>
    where
        F: FnOnce(T) -> ApiResponse<B>,
    {
        context.respond(self, on_success)
    }
}

/// Response builders on pending results
pub trait HttpResultFutureExt<T>: Future<Output = Result<T>> + Sized {
    /// Build the response with `on_success` in the given context.
    ///
    /// Unlike [`HttpResultExt::to_response_in`], the context is taken by
    /// value: the returned future owns it until the result resolves.
    fn to_response_in<B, F>(
        self,
        context: ResponseContext,
        on_success: F,
    ) -> impl Future<Output = MappingResult<ApiResponse<B>>>
    where
        F: FnOnce(T) -> ApiResponse<B>,
    {
        self.map(move |result| context.respond(result, on_success))
    }

    fn to_response<B, F>(self, on_success: F) -> impl Future<Output = MappingResult<ApiResponse<B>>>
    where
        F: FnOnce(T) -> ApiResponse<B>,
    {
        self.map(|result| result.to_response(on_success))
    }

    fn ok(self) -> impl Future<Output = MappingResult<ApiResponse<T>>> {
        self.map(|result| result.ok())
    }

    fn ok_with<B, F>(self, transform: F) -> impl Future<Output = MappingResult<ApiResponse<B>>>
    where
        F: FnOnce(T) -> B,
    {
        self.map(|result| result.ok_with(transform))
    }

    fn created(
        self,
        location: impl Into<String>,
    ) -> impl Future<Output = MappingResult<ApiResponse<T>>> {
        let location = location.into();
        self.map(|result| result.created(location))
    }

    fn created_with<B, F>(
        self,
        location: impl Into<String>,
        transform: F,
    ) -> impl Future<Output = MappingResult<ApiResponse<B>>>
    where
        F: FnOnce(T) -> B,
    {
        let location = location.into();
        self.map(|result| result.created_with(location, transform))
    }

    fn accepted(
        self,
        location: Option<String>,
    ) -> impl Future<Output = MappingResult<ApiResponse<T>>> {
        self.map(|result| result.accepted(location))
    }

    fn accepted_with<B, F>(
        self,
        location: Option<String>,
        transform: F,
    ) -> impl Future<Output = MappingResult<ApiResponse<B>>>
    where
        F: FnOnce(T) -> B,
    {
        self.map(|result| result.accepted_with(location, transform))
    }

    fn no_content(self) -> impl Future<Output = MappingResult<ApiResponse<()>>> {
        self.map(|result| result.no_content())
    }
}

impl<T, Fut> HttpResultFutureExt<T> for Fut where Fut: Future<Output = Result<T>> {}
