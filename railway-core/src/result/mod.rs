//! The `Result<T>` railway
//!
//! A [`Result`] is either a success carrying a value of `T` or a failure
//! carrying one or more [`Error`]s in the order they were reported. It is a
//! plain value: every combinator consumes it and hands back either the same
//! result or a new one.
//!
//! Chains short-circuit. Once a stage fails, no later `then_*` callback runs,
//! and `else_*` callbacks only ever see failures.
//!
//! ```rust
//! use railway_core::{Error, IntoSuccess, Result};
//!
//! let doubled = 21.into_success().then_map(|x| x * 2);
//! assert_eq!(doubled, Result::success(42));
//!
//! let missing: Result<i32> = Error::not_found().into();
//! let untouched = missing.clone().then_map(|x| x + 1);
//! assert_eq!(untouched.errors(), missing.errors());
//! ```

mod matching;
mod otherwise;
mod then;

#[cfg(test)]
mod tests;

use crate::error::{Error, RailwayError, RailwayResult};
use std::fmt;
use tracing::debug;

/// Success value of `T` or a non-empty ordered sequence of errors.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Result<T> {
    state: State<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum State<T> {
    Success(T),
    Failure(Vec<Error>),
}

impl<T> Result<T> {
    /// A successful result holding `value`
    pub fn success(value: T) -> Self {
        Self {
            state: State::Success(value),
        }
    }

    /// A failed result holding a single error
    pub fn failure(error: Error) -> Self {
        Self::failed(vec![error])
    }

    /// A failed result holding every given error, in order.
    ///
    /// Fails with [`RailwayError::EmptyFailure`] when `errors` yields nothing.
    pub fn failures<I>(errors: I) -> RailwayResult<Self>
    where
        I: IntoIterator<Item = Error>,
    {
        let errors: Vec<Error> = errors.into_iter().collect();
        if errors.is_empty() {
            return Err(RailwayError::EmptyFailure);
        }
        Ok(Self::failed(errors))
    }

    /// A failure when `errors` is non-empty, otherwise a success with `value`
    pub fn from_errors_or<I>(errors: I, value: T) -> Self
    where
        I: IntoIterator<Item = Error>,
    {
        Self::from_errors_or_else(errors, || value)
    }

    /// Like [`Result::from_errors_or`], computing the value only on success
    pub fn from_errors_or_else<I, F>(errors: I, value: F) -> Self
    where
        I: IntoIterator<Item = Error>,
        F: FnOnce() -> T,
    {
        let errors: Vec<Error> = errors.into_iter().collect();
        if errors.is_empty() {
            Self::success(value())
        } else {
            Self::failed(errors)
        }
    }

    // Callers guarantee `errors` is non-empty.
    pub(crate) fn failed(errors: Vec<Error>) -> Self {
        debug_assert!(!errors.is_empty());
        Self {
            state: State::Failure(errors),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.state, State::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The success value, if any
    pub fn value(&self) -> Option<&T> {
        match &self.state {
            State::Success(value) => Some(value),
            State::Failure(_) => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self.state {
            State::Success(value) => Some(value),
            State::Failure(_) => None,
        }
    }

    /// The success value, or `T::default()` for a failed result
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        self.into_value().unwrap_or_default()
    }

    /// The errors of a failed result; empty on success
    pub fn errors(&self) -> &[Error] {
        match &self.state {
            State::Success(_) => &[],
            State::Failure(errors) => errors,
        }
    }

    pub fn into_errors(self) -> Vec<Error> {
        match self.state {
            State::Success(_) => Vec::new(),
            State::Failure(errors) => errors,
        }
    }

    /// The first reported error.
    ///
    /// Fails with [`RailwayError::InvalidOperation`] on a successful result.
    pub fn first_error(&self) -> RailwayResult<&Error> {
        match &self.state {
            State::Failure(errors) => errors.first().ok_or(RailwayError::EmptyFailure),
            State::Success(_) => Err(RailwayError::invalid_operation(
                "first_error",
                "The result is successful.",
            )),
        }
    }

    /// Convert into a standard library result
    pub fn into_std(self) -> std::result::Result<T, Vec<Error>> {
        match self.state {
            State::Success(value) => Ok(value),
            State::Failure(errors) => Err(errors),
        }
    }

    /// Leave the railway: `Ok(self)` on success, otherwise a
    /// [`RailwayError::FailureResult`] named after the first error's type.
    pub fn ensure_success(self) -> RailwayResult<Self> {
        let message = match self.errors().first() {
            Some(first) => format!("{} result", first.error_type()),
            None => return Ok(self),
        };
        self.ensure_success_with(message)
    }

    /// Like [`Result::ensure_success`] with an explicit fault message
    pub fn ensure_success_with(self, message: impl Into<String>) -> RailwayResult<Self> {
        match self.state {
            State::Success(_) => Ok(self),
            State::Failure(errors) => {
                let first = into_first(errors);
                let message = message.into();
                debug!(
                    error_type = %first.error_type(),
                    fault = %message,
                    "Converting failed result into a fault"
                );
                Err(RailwayError::failure_result(first, message))
            }
        }
    }
}

// Failure states are never empty, so the fallback is never taken.
pub(crate) fn into_first(errors: Vec<Error>) -> Error {
    errors.into_iter().next().unwrap_or_else(Error::unexpected)
}

impl<T> From<Error> for Result<T> {
    fn from(error: Error) -> Self {
        Self::failure(error)
    }
}

impl<T> TryFrom<Vec<Error>> for Result<T> {
    type Error = RailwayError;

    fn try_from(errors: Vec<Error>) -> RailwayResult<Self> {
        Self::failures(errors)
    }
}

impl<T> From<std::result::Result<T, Error>> for Result<T> {
    fn from(result: std::result::Result<T, Error>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error),
        }
    }
}

impl<T> From<Result<T>> for std::result::Result<T, Vec<Error>> {
    fn from(result: Result<T>) -> Self {
        result.into_std()
    }
}

impl<T> fmt::Display for Result<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Success(_) => f.write_str("Success"),
            State::Failure(errors) => match errors.first() {
                Some(first) => fmt::Display::fmt(first, f),
                None => f.write_str("Failure"),
            },
        }
    }
}

/// Wrap any value in a successful [`Result`]
pub trait IntoSuccess: Sized {
    fn into_success(self) -> Result<Self> {
        Result::success(self)
    }
}

impl<T> IntoSuccess for T {}
