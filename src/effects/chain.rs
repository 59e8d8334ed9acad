//! Operations whose callbacks return futures.
//!
//! These mirror the synchronous operations on [`Outcome`], but the callback
//! hands back a future and the outcome becomes `Pending`. A callback future
//! yielding `Err(e)` is a rejection: the outcome aborts with `e`, exactly as
//! if the callback had panicked.

use crate::core::transform::{inspect_future, inspect_result, transform_future};
use crate::core::{attempt_async, Fault, IntoOutcome, Outcome};
use crate::dispatch;
use std::future::Future;

impl<T, E> Outcome<T, E>
where
    T: Send + 'static,
    E: Fault,
{
    /// ```rust
    /// use fate::Outcome;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let doubled: Outcome<i32, String> =
    ///     Outcome::Ok(21).map_async(|v| async move { Ok(v * 2) });
    /// assert_eq!(doubled.settle().await, Outcome::Ok(42));
    ///
    /// let rejected: Outcome<i32, String> =
    ///     Outcome::Ok(21).map_async(|_| async { Err("offline".to_string()) });
    /// assert_eq!(rejected.settle().await, Outcome::Aborted("offline".to_string()));
    /// # }
    /// ```
    pub fn map_async<U, F, Fut>(self, f: F) -> Outcome<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = Result<U, E>> + Send + 'static,
    {
        match self {
            Self::Ok(value) => transform_future(move || f(value), Outcome::Ok),
            Self::Error(error) => Outcome::Error(error),
            Self::Aborted(error) => Outcome::Aborted(error),
            Self::Pending(pending) => Outcome::Pending(pending.then(dispatch::map_async(f))),
        }
    }

    /// Like [`Outcome::expect_map`], with the callback's future output
    /// normalized once it is ready.
    pub fn expect_map_async<U, R, F, Fut>(self, f: F) -> Outcome<U, E>
    where
        U: Send + 'static,
        R: IntoOutcome<U, E>,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = R> + Send + 'static,
    {
        match self {
            Self::Ok(value) => attempt_async(move || f(value)),
            Self::Error(error) => Outcome::Error(error),
            Self::Aborted(error) => Outcome::Aborted(error),
            Self::Pending(pending) => {
                Outcome::Pending(pending.then(dispatch::expect_map_async(f)))
            }
        }
    }

    /// Like [`Outcome::flat_map`], with the callback's future output
    /// normalized once it is ready.
    pub fn flat_map_async<U, R, F, Fut>(self, f: F) -> Outcome<U, E>
    where
        U: Send + 'static,
        R: IntoOutcome<U, E>,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = R> + Send + 'static,
    {
        match self {
            Self::Pending(pending) => {
                Outcome::Pending(pending.then(dispatch::flat_map_async(f)))
            }
            settled => settled.expect_map_async(f),
        }
    }

    /// Keep the value when the future yields `Ok(true)`, otherwise
    /// `Error(E::default())`.
    pub fn filter_async<P, Fut>(self, predicate: P) -> Self
    where
        E: Default,
        P: FnOnce(&T) -> Fut + Send + 'static,
        Fut: Future<Output = Result<bool, E>> + Send + 'static,
    {
        match self {
            Self::Ok(value) => inspect_future(value, predicate, |value, keep| {
                if keep {
                    Self::Ok(value)
                } else {
                    Self::Error(E::default())
                }
            }),
            Self::Pending(pending) => {
                Self::Pending(pending.then(dispatch::filter_async(predicate)))
            }
            failed => failed,
        }
    }

    /// Inverse of [`Outcome::filter_async`].
    pub fn reject_async<P, Fut>(self, predicate: P) -> Self
    where
        E: Default,
        P: FnOnce(&T) -> Fut + Send + 'static,
        Fut: Future<Output = Result<bool, E>> + Send + 'static,
    {
        match self {
            Self::Ok(value) => inspect_future(value, predicate, |value, hit| {
                if hit {
                    Self::Error(E::default())
                } else {
                    Self::Ok(value)
                }
            }),
            Self::Pending(pending) => {
                Self::Pending(pending.then(dispatch::reject_async(predicate)))
            }
            failed => failed,
        }
    }

    /// Observe the value asynchronously; the outcome is unchanged unless
    /// the future rejects.
    pub fn tap_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), E>> + Send + 'static,
    {
        match self {
            Self::Ok(value) => inspect_future(value, f, |value, ()| Self::Ok(value)),
            Self::Pending(pending) => Self::Pending(pending.then(dispatch::tap_async(f))),
            failed => failed,
        }
    }

    /// Turn a recoverable error into a value with an async callback.
    /// Aborts pass through.
    pub fn recover_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(E) -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        match self {
            Self::Error(error) => transform_future(move || f(error), Self::Ok),
            Self::Pending(pending) => Self::Pending(pending.then(dispatch::recover_async(f))),
            other => other,
        }
    }

    /// Observe the error of an `Error` or `Aborted` outcome asynchronously.
    pub fn tap_error_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&E) -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), E>> + Send + 'static,
    {
        match self {
            Self::Error(error) => inspect_future(error, f, |error, ()| Self::Error(error)),
            Self::Aborted(error) => inspect_future(error, f, |error, ()| Self::Aborted(error)),
            Self::Pending(pending) => Self::Pending(pending.then(dispatch::tap_error_async(f))),
            ok => ok,
        }
    }

    /// Recover errors matching `predicate` with an async callback. Other
    /// errors and aborts pass through.
    pub fn recover_when_async<P, F, Fut>(self, predicate: P, f: F) -> Self
    where
        P: FnOnce(&E) -> bool + Send + 'static,
        F: FnOnce(E) -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        match self {
            Self::Error(error) => inspect_result(error, predicate, |error, matched| {
                if matched {
                    transform_future(move || f(error), Self::Ok)
                } else {
                    Self::Error(error)
                }
            }),
            Self::Pending(pending) => {
                Self::Pending(pending.then(dispatch::recover_when_async(predicate, f)))
            }
            other => other,
        }
    }

    /// Promote a recoverable error to an abort carrying what the future
    /// yields.
    pub fn abort_on_error_with_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(E) -> Fut + Send + 'static,
        Fut: Future<Output = Result<E, E>> + Send + 'static,
    {
        match self {
            Self::Error(error) => transform_future(move || f(error), Self::Aborted),
            Self::Pending(pending) => {
                Self::Pending(pending.then(dispatch::abort_on_error_with_async(f)))
            }
            other => other,
        }
    }

    /// The future yields `Ok(new_error)` to replace the error, or `Err` to
    /// reject (abort).
    pub fn map_error_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(E) -> Fut + Send + 'static,
        Fut: Future<Output = Result<E, E>> + Send + 'static,
    {
        match self {
            Self::Error(error) => transform_future(move || f(error), Self::Error),
            Self::Pending(pending) => Self::Pending(pending.then(dispatch::map_error_async(f))),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    type Out = Outcome<i32, String>;

    #[tokio::test]
    async fn map_async_lifts_to_pending() {
        let out = Out::Ok(2).map_async(|v| async move { Ok(v + 1) });
        assert!(out.is_asynchronous());
        assert_eq!(out.settle().await, Outcome::Ok(3));
    }

    #[tokio::test]
    async fn map_async_rejection_aborts() {
        let out = Out::Ok(2).map_async(|_| async { Err::<i32, _>("9".to_string()) });
        assert_eq!(out.settle().await, Outcome::Aborted("9".to_string()));
    }

    #[test]
    fn map_async_skips_errors_synchronously() {
        let out = Out::Error("e".into()).map_async(|v| async move { Ok(v + 1) });
        assert_eq!(out, Outcome::Error("e".to_string()));
    }

    #[tokio::test]
    async fn flat_map_async_normalizes_output() {
        let out = Out::Ok(2).flat_map_async(|v| async move { (v > 5).then_some(v) });
        assert_eq!(out.settle().await, Outcome::Error(String::new()));

        let out = Out::Ok(9).flat_map_async(|v| async move { (v > 5).then_some(v) });
        assert_eq!(out.settle().await, Outcome::Ok(9));
    }

    #[tokio::test]
    async fn filter_async_keeps_or_drops() {
        let keep = Out::Ok(4).filter_async(|v| {
            let even = *v % 2 == 0;
            async move { Ok(even) }
        });
        assert_eq!(keep.settle().await, Outcome::Ok(4));

        let dropped = Out::Ok(5).filter_async(|v| {
            let even = *v % 2 == 0;
            async move { Ok(even) }
        });
        assert_eq!(dropped.settle().await, Outcome::Error(String::new()));
    }

    #[tokio::test]
    async fn tap_async_runs_side_effect_and_keeps_value() {
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&seen);
        let out = Out::Ok(4).tap_async(move |v| {
            counter.fetch_add(*v as usize, Ordering::SeqCst);
            async { Ok(()) }
        });
        assert_eq!(out.settle().await, Outcome::Ok(4));
        assert_eq!(seen.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn recover_async_ignores_aborts() {
        let out = Out::Aborted("fatal".into()).recover_async(|_| async { Ok(0) });
        assert_eq!(out, Outcome::Aborted("fatal".to_string()));

        let out = Out::Error("soft".into()).recover_async(|e| async move { Ok(e.len() as i32) });
        assert_eq!(out.settle().await, Outcome::Ok(4));
    }

    #[tokio::test]
    async fn map_error_async_replaces_error() {
        let out = Out::Error("soft".into()).map_error_async(|e| async move { Ok(format!("{e}!")) });
        assert_eq!(out.settle().await, Outcome::Error("soft!".to_string()));
    }

    #[tokio::test]
    async fn expect_map_async_adopts_outcome() {
        let out = Out::Ok(3).expect_map_async(|v| async move { Out::Error(format!("{v}")) });
        assert_eq!(out.settle().await, Outcome::Error("3".to_string()));

        let out = Out::Aborted("a".into()).expect_map_async(|v| async move { Some(v) });
        assert_eq!(out, Outcome::Aborted("a".to_string()));
    }

    #[tokio::test]
    async fn reject_async_drops_matches() {
        let kept = Out::Ok(5).reject_async(|v| {
            let even = *v % 2 == 0;
            async move { Ok(even) }
        });
        assert_eq!(kept.settle().await, Outcome::Ok(5));

        let dropped = Out::Ok(4).reject_async(|v| {
            let even = *v % 2 == 0;
            async move { Ok(even) }
        });
        assert_eq!(dropped.settle().await, Outcome::Error(String::new()));
    }

    #[tokio::test]
    async fn tap_error_async_sees_errors_and_aborts() {
        let seen = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&seen);
        let out = Out::Error("ab".into()).tap_error_async(move |e| {
            counter.fetch_add(e.len(), Ordering::SeqCst);
            async { Ok(()) }
        });
        assert_eq!(out.settle().await, Outcome::Error("ab".to_string()));

        let counter = Arc::clone(&seen);
        let out = Out::Aborted("abc".into()).tap_error_async(move |e| {
            counter.fetch_add(e.len(), Ordering::SeqCst);
            async { Ok(()) }
        });
        assert_eq!(out.settle().await, Outcome::Aborted("abc".to_string()));
        assert_eq!(seen.load(Ordering::SeqCst), 5);
    }

    #[tokio::test]
    async fn recover_when_async_only_recovers_matching_errors() {
        let out = Out::Error("long error".into())
            .recover_when_async(|e| e.len() > 3, |e| async move { Ok(e.len() as i32) });
        assert_eq!(out.settle().await, Outcome::Ok(10));

        let out = Out::Error("e".into())
            .recover_when_async(|e| e.len() > 3, |e| async move { Ok(e.len() as i32) });
        assert_eq!(out, Outcome::Error("e".to_string()));

        let out = Out::Aborted("long abort".into())
            .recover_when_async(|_| true, |_| async { Ok(0) });
        assert_eq!(out, Outcome::Aborted("long abort".to_string()));
    }

    #[tokio::test]
    async fn recover_when_async_on_pending_leaves_aborts() {
        let out = Out::Aborted("fatal".into())
            .asynchronous()
            .recover_when_async(|_| true, |_| async { Ok(0) });
        assert_eq!(out.settle().await, Outcome::Aborted("fatal".to_string()));
    }

    #[tokio::test]
    async fn abort_on_error_with_async_promotes() {
        let out = Out::Error("soft".into())
            .abort_on_error_with_async(|e| async move { Ok(e.to_uppercase()) });
        assert_eq!(out.settle().await, Outcome::Aborted("SOFT".to_string()));

        let out = Out::Ok(1).abort_on_error_with_async(|e| async move { Ok(e) });
        assert_eq!(out, Outcome::Ok(1));
    }

    #[tokio::test]
    async fn async_step_then_sync_steps_stay_in_order() {
        let out = Out::Ok(1)
            .map_async(|v| async move { Ok(v + 1) })
            .map(|v| v * 10)
            .filter(|v| *v == 20)
            .map_async(|v| async move { Ok(v + 2) });
        assert_eq!(out.settle().await, Outcome::Ok(22));
    }
}
