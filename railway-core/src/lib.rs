//! Railway-oriented results for Rust services
//!
//! `railway-core` provides [`Result<T>`], a value that is either a success or
//! a non-empty ordered list of typed [`Error`]s, together with chainable
//! combinators for both resolved and pending results.

pub mod combiner;
pub mod error;
pub mod error_type;
pub mod future_ext;
pub mod registry;
pub mod result;
pub mod success;

pub use combiner::{ErrorCombiner, Fallible};
pub use error::{Details, Error, RailwayError, RailwayResult};
pub use error_type::{BuiltIn, ErrorType, ErrorTypeSet};
pub use future_ext::ResultFutureExt;
pub use result::{IntoSuccess, Result};
pub use success::{Success, UnitResult};
