//! Asynchronous projection over optional values and sequences.
//!
//! The single-value form suspends only when there is a value to project; an
//! absent input completes immediately. The sequence form fans out one future
//! per element and joins on all of them. Completion order is up to the
//! runtime, but the joined result always matches the input order.
//!
//! ```rust
//! use shallows::MaybeFutureExt;
//!
//! # tokio_test::block_on(async {
//! let id = Some(7u64);
//! let name = id.with_async(|id| async move { format!("user-{id}") }).await;
//! assert_eq!(name, Some("user-7".to_string()));
//!
//! let missing: Option<u64> = None;
//! let name = missing.with_async(|id| async move { format!("user-{id}") }).await;
//! assert_eq!(name, None);
//! # });
//! ```

use std::future::Future;

use futures::future::{join_all, try_join_all};

/// Asynchronous projection for a single optional value.
pub trait MaybeFutureExt<T>: Sized {
    /// Project the value through an async closure, short-circuiting on
    /// `None` without suspending.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shallows::MaybeFutureExt;
    ///
    /// async fn lookup(id: u64) -> String {
    ///     format!("record {id}")
    /// }
    ///
    /// # tokio_test::block_on(async {
    /// assert_eq!(Some(3).with_async(lookup).await, Some("record 3".to_string()));
    /// # });
    /// ```
    async fn with_async<U, F, Fut>(self, project: F) -> Option<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>;
}

impl<T> MaybeFutureExt<T> for Option<T> {
    async fn with_async<U, F, Fut>(self, project: F) -> Option<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Some(value) => Some(project(value).await),
            None => None,
        }
    }
}

/// Asynchronous element-wise projection for an optional sequence.
///
/// Both methods fan out every element's future at once and resume only when
/// all of them have completed; the result order is the input order
/// regardless of when each future finishes. Neither cancels in-flight work;
/// callers needing timeouts wrap the projection themselves.
pub trait SeqFutureExt<T>: Sized {
    /// Concurrently project every element, preserving input order.
    ///
    /// An absent container completes immediately with `None`; an empty one
    /// yields `Some` of an empty `Vec`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shallows::SeqFutureExt;
    ///
    /// # tokio_test::block_on(async {
    /// let doubled = Some(vec![1, 2, 3])
    ///     .with_each_async(|n| async move { n * 2 })
    ///     .await;
    /// assert_eq!(doubled, Some(vec![2, 4, 6]));
    /// # });
    /// ```
    async fn with_each_async<U, F, Fut>(self, project: F) -> Option<Vec<U>>
    where
        F: FnMut(T) -> Fut,
        Fut: Future<Output = U>;

    /// Concurrently project every element with a fallible async closure,
    /// failing the whole call on the first error.
    ///
    /// The failure policy is fail-fast: one `Err` resolves the aggregate to
    /// that error and the remaining results are discarded. No partial-result
    /// recovery happens here; callers wanting capture compose
    /// [`try_with`](crate::TryExt::try_with) around the joined result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shallows::SeqFutureExt;
    ///
    /// async fn check(n: i32) -> Result<i32, String> {
    ///     if n >= 0 { Ok(n) } else { Err(format!("{n} is negative")) }
    /// }
    ///
    /// # tokio_test::block_on(async {
    /// let ok = Some(vec![1, 2, 3]).try_with_each_async(check).await;
    /// assert_eq!(ok, Ok(Some(vec![1, 2, 3])));
    ///
    /// let bad = Some(vec![1, -2, 3]).try_with_each_async(check).await;
    /// assert_eq!(bad, Err("-2 is negative".to_string()));
    ///
    /// let missing: Option<Vec<i32>> = None;
    /// assert_eq!(missing.try_with_each_async(check).await, Ok(None));
    /// # });
    /// ```
    async fn try_with_each_async<U, E, F, Fut>(self, project: F) -> Result<Option<Vec<U>>, E>
    where
        F: FnMut(T) -> Fut,
        Fut: Future<Output = Result<U, E>>;
}

impl<C, T> SeqFutureExt<T> for Option<C>
where
    C: IntoIterator<Item = T>,
{
    async fn with_each_async<U, F, Fut>(self, project: F) -> Option<Vec<U>>
    where
        F: FnMut(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Some(items) => Some(join_all(items.into_iter().map(project)).await),
            None => None,
        }
    }

    async fn try_with_each_async<U, E, F, Fut>(self, project: F) -> Result<Option<Vec<U>>, E>
    where
        F: FnMut(T) -> Fut,
        Fut: Future<Output = Result<U, E>>,
    {
        match self {
            Some(items) => try_join_all(items.into_iter().map(project)).await.map(Some),
            None => Ok(None),
        }
    }
}
