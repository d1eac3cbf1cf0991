//! Fluent assertions over results and errors
//!
//! ```rust
//! use railway_core::{Error, Result};
//! use railway_testing::{ErrorShould, ResultShould};
//!
//! let result: Result<i32> = Error::not_found().with_code("USR404").into();
//! result
//!     .should()
//!     .be_failure()
//!     .be_failure_with(&Error::not_found().with_code("USR404"));
//!
//! Error::validation().with_code("email").should().have_code("email");
//! ```
//!
//! Every assertion panics with a descriptive message and otherwise returns
//! the assertion so checks can be chained.

use railway_core::{Error, ErrorType, Result};
use serde_json::Value;
use std::fmt::Debug;

/// Entry point for result assertions
pub trait ResultShould<T> {
    fn should(&self) -> ResultAssertions<'_, T>;
}

impl<T> ResultShould<T> for Result<T> {
    fn should(&self) -> ResultAssertions<'_, T> {
        ResultAssertions {
            subject: self,
            because: None,
        }
    }
}

/// Entry point for error assertions
pub trait ErrorShould {
    fn should(&self) -> ErrorAssertions<'_>;
}

impl ErrorShould for Error {
    fn should(&self) -> ErrorAssertions<'_> {
        ErrorAssertions {
            subject: self,
            because: None,
        }
    }
}

fn fail(because: Option<&str>, message: String) -> ! {
    match because {
        Some(reason) => panic!("{} because {}", message, reason),
        None => panic!("{}", message),
    }
}

pub struct ResultAssertions<'a, T> {
    subject: &'a Result<T>,
    because: Option<String>,
}

impl<'a, T> ResultAssertions<'a, T> {
    /// Append a reason to any failure message raised afterwards
    pub fn because(mut self, reason: impl Into<String>) -> Self {
        self.because = Some(reason.into());
        self
    }

    /// The result under test
    pub fn which(&self) -> &'a Result<T> {
        self.subject
    }

    pub fn be_success(self) -> Self {
        if self.subject.is_failure() {
            fail(
                self.because.as_deref(),
                format!(
                    "Expected a success result, but found a failure result with errors: {:?}.",
                    self.subject.errors()
                ),
            );
        }
        self
    }

    pub fn be_success_with(self, expected: &T) -> Self
    where
        T: PartialEq + Debug,
    {
        let this = self.be_success();
        let actual = this.subject.value();
        if actual != Some(expected) {
            fail(
                this.because.as_deref(),
                format!("Expected value to be {:?}, but found {:?}.", expected, actual),
            );
        }
        this
    }

    pub fn be_failure(self) -> Self
    where
        T: Debug,
    {
        if let Some(value) = self.subject.value() {
            fail(
                self.because.as_deref(),
                format!(
                    "Expected a failure result, but found a success result with value: {:?}.",
                    value
                ),
            );
        }
        self
    }

    /// The result failed and its errors include `error`
    pub fn be_failure_with(self, error: &Error) -> Self
    where
        T: Debug,
    {
        let this = self.be_failure();
        if !this.subject.errors().contains(error) {
            fail(
                this.because.as_deref(),
                format!(
                    "Expected errors {:?} to contain {:?}, but it did not.",
                    this.subject.errors(),
                    error
                ),
            );
        }
        this
    }

    /// The result failed and each of its errors is among `errors`, in any
    /// order
    pub fn be_failure_containing(self, errors: &[Error]) -> Self
    where
        T: Debug,
    {
        let this = self.be_failure();
        let unexpected: Vec<&Error> = this
            .subject
            .errors()
            .iter()
            .filter(|error| !errors.contains(error))
            .collect();
        if !unexpected.is_empty() {
            fail(
                this.because.as_deref(),
                format!(
                    "Expected errors {:?} to be among {:?}, but found {:?}.",
                    this.subject.errors(),
                    errors,
                    unexpected
                ),
            );
        }
        this
    }

    /// The result failed with exactly `errors`, in the same order
    pub fn be_failure_sequentially(self, errors: &[Error]) -> Self
    where
        T: Debug,
    {
        let this = self.be_failure();
        if this.subject.errors() != errors {
            fail(
                this.because.as_deref(),
                format!(
                    "Expected errors {:?} to contain same elements in the same order as {:?}, but it did not.",
                    this.subject.errors(),
                    errors
                ),
            );
        }
        this
    }

    /// The result equals `expected`: same state, same value or same ordered
    /// errors
    pub fn be_equivalent(self, expected: &Result<T>) -> Self
    where
        T: PartialEq + Debug,
    {
        if self.subject != expected {
            fail(
                self.because.as_deref(),
                format!("Expected result to be {:?}, but found {:?}.", expected, self.subject),
            );
        }
        self
    }
}

pub struct ErrorAssertions<'a> {
    subject: &'a Error,
    because: Option<String>,
}

impl<'a> ErrorAssertions<'a> {
    pub fn because(mut self, reason: impl Into<String>) -> Self {
        self.because = Some(reason.into());
        self
    }

    pub fn which(&self) -> &'a Error {
        self.subject
    }

    pub fn have_type(self, expected: ErrorType) -> Self {
        if !self.subject.is(expected) {
            fail(
                self.because.as_deref(),
                format!(
                    "Expected error type {}, but found {}.",
                    expected,
                    self.subject.error_type()
                ),
            );
        }
        self
    }

    pub fn have_message(self, expected: &str) -> Self {
        if self.subject.message() != expected {
            fail(
                self.because.as_deref(),
                format!(
                    "Expected error message {:?}, but found {:?}.",
                    expected,
                    self.subject.message()
                ),
            );
        }
        self
    }

    pub fn have_code(self, expected: &str) -> Self {
        if self.subject.code() != Some(expected) {
            fail(
                self.because.as_deref(),
                format!(
                    "Expected error code {:?}, but found {:?}.",
                    expected,
                    self.subject.code()
                ),
            );
        }
        self
    }

    /// The error carries `key` with a value equal to `expected`
    pub fn have_detail(self, key: &str, expected: impl Into<Value>) -> Self {
        let expected = expected.into();
        let actual = self.subject.details().and_then(|details| details.get(key));
        if actual != Some(&expected) {
            fail(
                self.because.as_deref(),
                format!(
                    "Expected detail {:?} to be {}, but found {:?}.",
                    key, expected, actual
                ),
            );
        }
        self
    }
}
