//! Failure-side combinators
//!
//! `else_*` callbacks run only for failed results and never change them.

use super::{Result, State};
use crate::error::Error;
use std::future::Future;

impl<T> Result<T> {
    /// Run a side effect on failure
    pub fn else_run<F>(self, on_failure: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_failure() {
            on_failure();
        }
        self
    }

    /// Run a side effect with the first error
    pub fn else_do<F>(self, on_failure: F) -> Self
    where
        F: FnOnce(&Error),
    {
        if let State::Failure(errors) = &self.state {
            if let Some(first) = errors.first() {
                on_failure(first);
            }
        }
        self
    }

    /// Run a side effect with every error, in order
    pub fn else_do_all<F>(self, on_failure: F) -> Self
    where
        F: FnOnce(&[Error]),
    {
        if let State::Failure(errors) = &self.state {
            on_failure(errors);
        }
        self
    }

    pub async fn else_run_async<F, Fut>(self, on_failure: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        if self.is_failure() {
            on_failure().await;
        }
        self
    }

    pub async fn else_do_async<F, Fut>(self, on_failure: F) -> Self
    where
        F: FnOnce(&Error) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let State::Failure(errors) = &self.state {
            if let Some(first) = errors.first() {
                on_failure(first).await;
            }
        }
        self
    }

    pub async fn else_do_all_async<F, Fut>(self, on_failure: F) -> Self
    where
        F: FnOnce(&[Error]) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let State::Failure(errors) = &self.state {
            on_failure(errors).await;
        }
        self
    }
}
