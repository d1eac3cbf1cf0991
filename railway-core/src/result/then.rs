//! Success-side combinators
//!
//! Every `then_*` method runs its callback only for a successful result.
//! Failures pass through untouched, retyped where the success type changes.
//!
//! The `_async` forms take callbacks returning futures and await that future
//! once. Callbacks that receive a reference must copy what they need out of it
//! before building their future.

use super::{Result, State};
use std::future::Future;

impl<T> Result<T> {
    /// Run a side effect on success
    pub fn then_run<F>(self, on_success: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_success() {
            on_success();
        }
        self
    }

    /// Run a side effect with the success value
    pub fn then_do<F>(self, on_success: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let State::Success(value) = &self.state {
            on_success(value);
        }
        self
    }

    /// Transform the success value
    pub fn then_map<U, F>(self, on_success: F) -> Result<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.state {
            State::Success(value) => Result::success(on_success(value)),
            State::Failure(errors) => Result::failed(errors),
        }
    }

    /// Continue with an operation that may itself fail
    pub fn then_bind<U, F>(self, on_success: F) -> Result<U>
    where
        F: FnOnce(T) -> Result<U>,
    {
        match self.state {
            State::Success(value) => on_success(value),
            State::Failure(errors) => Result::failed(errors),
        }
    }

    /// Continue with an operation that ignores the success value
    pub fn then_with<U, F>(self, on_success: F) -> Result<U>
    where
        F: FnOnce() -> Result<U>,
    {
        match self.state {
            State::Success(_) => on_success(),
            State::Failure(errors) => Result::failed(errors),
        }
    }

    pub async fn then_run_async<F, Fut>(self, on_success: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        if self.is_success() {
            on_success().await;
        }
        self
    }

    pub async fn then_do_async<F, Fut>(self, on_success: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let State::Success(value) = &self.state {
            on_success(value).await;
        }
        self
    }

    pub async fn then_map_async<U, F, Fut>(self, on_success: F) -> Result<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self.state {
            State::Success(value) => Result::success(on_success(value).await),
            State::Failure(errors) => Result::failed(errors),
        }
    }

    pub async fn then_bind_async<U, F, Fut>(self, on_success: F) -> Result<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<U>>,
    {
        match self.state {
            State::Success(value) => on_success(value).await,
            State::Failure(errors) => Result::failed(errors),
        }
    }

    pub async fn then_with_async<U, F, Fut>(self, on_success: F) -> Result<U>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<U>>,
    {
        match self.state {
            State::Success(_) => on_success().await,
            State::Failure(errors) => Result::failed(errors),
        }
    }
}
