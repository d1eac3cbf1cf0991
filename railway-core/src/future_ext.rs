//! Combinators on pending results
//!
//! [`ResultFutureExt`] lets a chain start from a future of a [`Result`]
//! without awaiting it first. Each method awaits the input once and then
//! applies the resolved-result combinator of the same name, so effects still
//! happen in the order the chain is written.
//!
//! ```rust
//! use railway_core::{Error, Result, ResultFutureExt};
//!
//! async fn load(id: u32) -> Result<u32> {
//!     if id == 0 {
//!         Error::not_found().into()
//!     } else {
//!         Result::success(id)
//!     }
//! }
//!
//! # futures::executor::block_on(async {
//! let name = load(7)
//!     .then_map(|id| format!("user-{}", id))
//!     .then_bind_async(|name| async move { Result::success(name.to_uppercase()) })
//!     .await;
//! assert_eq!(name, Result::success("USER-7".to_string()));
//! # });
//! ```

use crate::error::Error;
use crate::result::Result;
use std::future::Future;

/// Extension methods for `Future<Output = Result<T>>`
pub trait ResultFutureExt<T>: Future<Output = Result<T>> + Sized {
    fn then_run<F>(self, on_success: F) -> impl Future<Output = Result<T>>
    where
        F: FnOnce(),
    {
        async move { self.await.then_run(on_success) }
    }

    fn then_do<F>(self, on_success: F) -> impl Future<Output = Result<T>>
    where
        F: FnOnce(&T),
    {
        async move { self.await.then_do(on_success) }
    }

    fn then_map<U, F>(self, on_success: F) -> impl Future<Output = Result<U>>
    where
        F: FnOnce(T) -> U,
    {
        async move { self.await.then_map(on_success) }
    }

    fn then_bind<U, F>(self, on_success: F) -> impl Future<Output = Result<U>>
    where
        F: FnOnce(T) -> Result<U>,
    {
        async move { self.await.then_bind(on_success) }
    }

    fn then_with<U, F>(self, on_success: F) -> impl Future<Output = Result<U>>
    where
        F: FnOnce() -> Result<U>,
    {
        async move { self.await.then_with(on_success) }
    }

    fn then_run_async<F, Fut>(self, on_success: F) -> impl Future<Output = Result<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        async move { self.await.then_run_async(on_success).await }
    }

    fn then_do_async<F, Fut>(self, on_success: F) -> impl Future<Output = Result<T>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move { self.await.then_do_async(on_success).await }
    }

    fn then_map_async<U, F, Fut>(self, on_success: F) -> impl Future<Output = Result<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move { self.await.then_map_async(on_success).await }
    }

    fn then_bind_async<U, F, Fut>(self, on_success: F) -> impl Future<Output = Result<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<U>>,
    {
        async move { self.await.then_bind_async(on_success).await }
    }

    fn then_with_async<U, F, Fut>(self, on_success: F) -> impl Future<Output = Result<U>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<U>>,
    {
        async move { self.await.then_with_async(on_success).await }
    }

    fn else_run<F>(self, on_failure: F) -> impl Future<Output = Result<T>>
    where
        F: FnOnce(),
    {
        async move { self.await.else_run(on_failure) }
    }

    fn else_do<F>(self, on_failure: F) -> impl Future<Output = Result<T>>
    where
        F: FnOnce(&Error),
    {
        async move { self.await.else_do(on_failure) }
    }

    fn else_do_all<F>(self, on_failure: F) -> impl Future<Output = Result<T>>
    where
        F: FnOnce(&[Error]),
    {
        async move { self.await.else_do_all(on_failure) }
    }

    fn else_run_async<F, Fut>(self, on_failure: F) -> impl Future<Output = Result<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        async move { self.await.else_run_async(on_failure).await }
    }

    fn else_do_async<F, Fut>(self, on_failure: F) -> impl Future<Output = Result<T>>
    where
        F: FnOnce(&Error) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move { self.await.else_do_async(on_failure).await }
    }

    fn else_do_all_async<F, Fut>(self, on_failure: F) -> impl Future<Output = Result<T>>
    where
        F: FnOnce(&[Error]) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move { self.await.else_do_all_async(on_failure).await }
    }

    fn match_with<R, S, F>(self, on_success: S, on_failure: F) -> impl Future<Output = R>
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Error) -> R,
    {
        async move { self.await.match_with(on_success, on_failure) }
    }

    fn match_all<R, S, F>(self, on_success: S, on_failure: F) -> impl Future<Output = R>
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Vec<Error>) -> R,
    {
        async move { self.await.match_all(on_success, on_failure) }
    }

    fn match_with_async<R, S, SFut, F, FFut>(
        self,
        on_success: S,
        on_failure: F,
    ) -> impl Future<Output = R>
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(Error) -> FFut,
        FFut: Future<Output = R>,
    {
        async move { self.await.match_with_async(on_success, on_failure).await }
    }

    fn match_all_async<R, S, SFut, F, FFut>(
        self,
        on_success: S,
        on_failure: F,
    ) -> impl Future<Output = R>
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(Vec<Error>) -> FFut,
        FFut: Future<Output = R>,
    {
        async move { self.await.match_all_async(on_success, on_failure).await }
    }

    fn switch<S, F>(self, on_success: S, on_failure: F) -> impl Future<Output = ()>
    where
        S: FnOnce(T),
        F: FnOnce(Error),
    {
        async move { self.await.switch(on_success, on_failure) }
    }

    fn switch_all<S, F>(self, on_success: S, on_failure: F) -> impl Future<Output = ()>
    where
        S: FnOnce(T),
        F: FnOnce(Vec<Error>),
    {
        async move { self.await.switch_all(on_success, on_failure) }
    }

    fn switch_async<S, SFut, F, FFut>(self, on_success: S, on_failure: F) -> impl Future<Output = ()>
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = ()>,
        F: FnOnce(Error) -> FFut,
        FFut: Future<Output = ()>,
    {
        async move { self.await.switch_async(on_success, on_failure).await }
    }

    fn switch_all_async<S, SFut, F, FFut>(
        self,
        on_success: S,
        on_failure: F,
    ) -> impl Future<Output = ()>
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = ()>,
        F: FnOnce(Vec<Error>) -> FFut,
        FFut: Future<Output = ()>,
    {
        async move { self.await.switch_all_async(on_success, on_failure).await }
    }

    /// Await the result and leave the railway, see [`Result::ensure_success`]
    fn ensure_success(self) -> impl Future<Output = crate::RailwayResult<Result<T>>> {
        async move { self.await.ensure_success() }
    }
}

impl<T, Fut> ResultFutureExt<T> for Fut where Fut: Future<Output = Result<T>> {}
