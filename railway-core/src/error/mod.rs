//! Error values and the crate's own failure type
//!
//! Two different things live here:
//!
//! - [`Error`] is the *value* carried by a failed [`Result`](crate::Result):
//!   an [`ErrorType`](crate::ErrorType), a message, an optional code and
//!   optional structured [`Details`]. It is built through named factories
//!   (`Error::not_found()`, `Error::validation()`, ...) and never changes
//!   afterwards.
//! - [`RailwayError`] is what the crate itself reports at its few explicit
//!   escape hatches: reading the first error of a successful result,
//!   converting a failed result into a fault, building a failure from no
//!   errors, and registry conflicts.
//!
//! ## Rendering
//!
//! ```text
//! (code) message | Details: { key: value key: value }
//! ```
//!
//! The code prefix and the details suffix only appear when present.

pub mod constructors;
pub mod conversions;
pub mod details;
pub mod types;
pub mod value;


pub use details::Details;
pub use types::{RailwayError, RailwayResult};
pub use value::Error;
