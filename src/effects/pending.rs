//! The asynchronous outcome variant.

use crate::core::{Fault, Outcome, Panic};
use crate::effects::eventual::Eventual;
use futures_util::future::{BoxFuture, FutureExt};
use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;

/// An outcome whose state is decided by a future.
///
/// The wrapped future always settles to `Ok`, `Error` or `Aborted`:
///
/// - a future that settles to another `Pending` is awaited through, so
///   nesting is flattened no matter how deep;
/// - a panic while the future is polled becomes `Aborted`.
///
/// Operations on a pending outcome are replayed against whatever variant the
/// future settles to (see [`Pending::then`]), which is what lets a chain keep
/// the same meaning once it turns asynchronous.
///
/// # Example
///
/// ```rust
/// use fate::{Outcome, Pending};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let nested = Pending::new(async {
///     Outcome::Pending(Pending::resolved(Outcome::<i32, String>::Ok(5)))
/// });
///
/// assert_eq!(nested.settle().await, Outcome::Ok(5));
/// # }
/// ```
pub struct Pending<T, E> {
    promise: BoxFuture<'static, Outcome<T, E>>,
}

impl<T, E> Pending<T, E>
where
    T: Send + 'static,
    E: Fault,
{
    /// Wrap a future of an outcome.
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = Outcome<T, E>> + Send + 'static,
    {
        let promise = async move {
            let mut outcome = match AssertUnwindSafe(future).catch_unwind().await {
                Ok(outcome) => outcome,
                Err(payload) => {
                    let panic = Panic::from_payload(payload);
                    tracing::debug!(%panic, "pending future panicked, outcome aborted");
                    return Outcome::Aborted(E::from(panic));
                }
            };
            loop {
                match outcome {
                    Outcome::Pending(inner) => {
                        tracing::trace!("flattening nested pending outcome");
                        outcome = inner.promise.await;
                    }
                    settled => return settled,
                }
            }
        };
        Self {
            promise: promise.boxed(),
        }
    }

    /// A pending outcome that settles to `outcome` on first poll.
    pub fn resolved(outcome: Outcome<T, E>) -> Self {
        Self::new(async move { outcome })
    }

    /// Replay `op` against the settled outcome.
    ///
    /// Whatever `op` returns (including another pending outcome) becomes the
    /// new pending outcome's state; a panic in `op` aborts it.
    pub fn then<U, F>(self, op: F) -> Pending<U, E>
    where
        U: Send + 'static,
        F: FnOnce(Outcome<T, E>) -> Outcome<U, E> + Send + 'static,
    {
        Pending::new(async move { op(self.promise.await) })
    }

    /// Replay a value-producing `op` against the settled outcome.
    ///
    /// Unlike [`Pending::then`], panics in `op` are not contained: they
    /// surface where the returned value is awaited.
    pub fn extract<V, F>(self, op: F) -> Eventual<V>
    where
        V: Send + 'static,
        F: FnOnce(Outcome<T, E>) -> Eventual<V> + Send + 'static,
    {
        Eventual::Later(async move { op(self.promise.await).await }.boxed())
    }

    /// Wait for the settled outcome. Never returns `Outcome::Pending`.
    pub async fn settle(self) -> Outcome<T, E> {
        self.promise.await
    }

    /// The boxed future, already flattened and panic-safe.
    pub fn into_promise(self) -> BoxFuture<'static, Outcome<T, E>> {
        self.promise
    }
}

impl<T, E> fmt::Debug for Pending<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pending").finish_non_exhaustive()
    }
}
