//! Aggregating errors across independent operations
//!
//! Unlike a `then_*` chain, combining never short-circuits: every outcome is
//! inspected and its errors are appended in input order.
//!
//! ```rust
//! use railway_core::{combine_errors, Error, Result};
//!
//! let name: Result<String> = Error::validation().with_code("name").into();
//! let age: Result<u8> = Result::success(30);
//! let email: Result<String> = Error::validation().with_code("email").into();
//!
//! let errors = combine_errors!(name, age, email);
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors[1].code(), Some("email"));
//! ```

use crate::error::Error;
use crate::result::Result;

/// Anything that reports an outcome through an ordered error sequence
pub trait Fallible {
    /// Errors of the outcome; empty when it succeeded
    fn errors(&self) -> &[Error];

    fn is_success(&self) -> bool {
        self.errors().is_empty()
    }

    fn is_failure(&self) -> bool {
        !self.is_success()
    }
}

impl<T> Fallible for Result<T> {
    fn errors(&self) -> &[Error] {
        Result::errors(self)
    }

    fn is_success(&self) -> bool {
        Result::is_success(self)
    }
}

/// Concatenates the errors of several outcomes
pub struct ErrorCombiner;

impl ErrorCombiner {
    pub fn combine(outcomes: &[&dyn Fallible]) -> Vec<Error> {
        Self::combine_with(Vec::new(), outcomes)
    }

    /// Like [`ErrorCombiner::combine`], starting from `seed`
    pub fn combine_with(seed: Vec<Error>, outcomes: &[&dyn Fallible]) -> Vec<Error> {
        let mut combined = seed;
        combined.extend(
            outcomes
                .iter()
                .flat_map(|outcome| outcome.errors().iter().cloned()),
        );
        combined
    }
}

/// Combine the errors of any number of [`Fallible`] values.
///
/// `combine_errors!(a, b, c)` or, with a seed, `combine_errors!(seed; a, b)`.
#[macro_export]
macro_rules! combine_errors {
    ($seed:expr; $($outcome:expr),+ $(,)?) => {
        $crate::ErrorCombiner::combine_with($seed, &[$(&$outcome as &dyn $crate::Fallible),+])
    };
    ($($outcome:expr),+ $(,)?) => {
        $crate::ErrorCombiner::combine(&[$(&$outcome as &dyn $crate::Fallible),+])
    };
}
