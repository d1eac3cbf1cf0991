//! Collapsing a result into one value, or dispatching on its state
//!
//! `match_*` returns whatever the chosen callback returns. `switch*` is the
//! same dispatch for callbacks with no return value. Exactly one callback runs.

use super::{into_first, Result, State};
use crate::error::Error;
use std::future::Future;

impl<T> Result<T> {
    /// Map success with `on_success`, failure with `on_failure` applied to the
    /// first error
    pub fn match_with<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Error) -> R,
    {
        match self.state {
            State::Success(value) => on_success(value),
            State::Failure(errors) => on_failure(into_first(errors)),
        }
    }

    /// Like [`Result::match_with`], handing every error to `on_failure`
    pub fn match_all<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Vec<Error>) -> R,
    {
        match self.state {
            State::Success(value) => on_success(value),
            State::Failure(errors) => on_failure(errors),
        }
    }

    pub fn switch<S, F>(self, on_success: S, on_failure: F)
    where
        S: FnOnce(T),
        F: FnOnce(Error),
    {
        self.match_with(on_success, on_failure)
    }

    pub fn switch_all<S, F>(self, on_success: S, on_failure: F)
    where
        S: FnOnce(T),
        F: FnOnce(Vec<Error>),
    {
        self.match_all(on_success, on_failure)
    }

    pub async fn match_with_async<R, S, SFut, F, FFut>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(Error) -> FFut,
        FFut: Future<Output = R>,
    {
        match self.state {
            State::Success(value) => on_success(value).await,
            State::Failure(errors) => on_failure(into_first(errors)).await,
        }
    }

    pub async fn match_all_async<R, S, SFut, F, FFut>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(Vec<Error>) -> FFut,
        FFut: Future<Output = R>,
    {
        match self.state {
            State::Success(value) => on_success(value).await,
            State::Failure(errors) => on_failure(errors).await,
        }
    }

    pub async fn switch_async<S, SFut, F, FFut>(self, on_success: S, on_failure: F)
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = ()>,
        F: FnOnce(Error) -> FFut,
        FFut: Future<Output = ()>,
    {
        self.match_with_async(on_success, on_failure).await
    }

    pub async fn switch_all_async<S, SFut, F, FFut>(self, on_success: S, on_failure: F)
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = ()>,
        F: FnOnce(Vec<Error>) -> FFut,
        FFut: Future<Output = ()>,
    {
        self.match_all_async(on_success, on_failure).await
    }
}
