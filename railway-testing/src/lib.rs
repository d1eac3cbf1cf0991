//! Test support for crates built on railway results
//!
//! - [`ResultShould`] / [`ErrorShould`]: `.should()` assertions
//! - [`init_test_logging`]: tracing output for test runs

pub mod assertions;
pub mod logging;

pub use assertions::{ErrorAssertions, ErrorShould, ResultAssertions, ResultShould};
pub use logging::init_test_logging;
