//! Running user callbacks under a failure boundary.
//!
//! Every operation that invokes a user callback goes through one of these
//! functions. A panic in the callback becomes `Aborted`. A callback that hands
//! back a future lifts the outcome to `Pending`, where an `Err` from the
//! future (its rejection) also becomes `Aborted`.

use crate::core::error::{Fault, Panic};
use crate::core::outcome::Outcome;
use crate::effects::Pending;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

/// Run `f`, converting a panic into the error payload.
pub(crate) fn guard<R, E: Fault>(f: impl FnOnce() -> R) -> Result<R, E> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let panic = Panic::from_payload(payload);
        tracing::debug!(%panic, "callback panicked, outcome aborted");
        E::from(panic)
    })
}

/// Evaluate a predicate at an extraction point. A panic counts as `false`.
pub(crate) fn check(predicate: impl FnOnce() -> bool) -> bool {
    panic::catch_unwind(AssertUnwindSafe(predicate)).unwrap_or_else(|payload| {
        let panic = Panic::from_payload(payload);
        tracing::debug!(%panic, "predicate panicked, treated as unsatisfied");
        false
    })
}

/// Run `f` and pass what it returns through `wrap`.
pub(crate) fn transform_result<R, T, E: Fault>(
    f: impl FnOnce() -> R,
    wrap: impl FnOnce(R) -> Outcome<T, E>,
) -> Outcome<T, E> {
    match guard(f) {
        Ok(result) => wrap(result),
        Err(error) => Outcome::Aborted(error),
    }
}

/// Like [`transform_result`], for callbacks that only borrow the receiver.
/// The receiver is handed back to `wrap` together with the callback result.
pub(crate) fn inspect_result<A, R, T, E: Fault>(
    value: A,
    f: impl FnOnce(&A) -> R,
    wrap: impl FnOnce(A, R) -> Outcome<T, E>,
) -> Outcome<T, E> {
    match guard(|| f(&value)) {
        Ok(result) => wrap(value, result),
        Err(error) => Outcome::Aborted(error),
    }
}

/// Run an async callback. The outcome is always `Pending` unless producing
/// the future itself panics.
pub(crate) fn transform_future<R, T, E, Fut, W>(f: impl FnOnce() -> Fut, wrap: W) -> Outcome<T, E>
where
    T: Send + 'static,
    E: Fault,
    Fut: Future<Output = Result<R, E>> + Send + 'static,
    W: FnOnce(R) -> Outcome<T, E> + Send + 'static,
{
    match guard(f) {
        Ok(future) => Outcome::Pending(Pending::new(async move {
            match future.await {
                Ok(result) => wrap(result),
                Err(error) => rejected(error),
            }
        })),
        Err(error) => Outcome::Aborted(error),
    }
}

/// Like [`transform_future`], for callbacks that only borrow the receiver.
pub(crate) fn inspect_future<A, R, T, E, Fut, W>(
    value: A,
    f: impl FnOnce(&A) -> Fut,
    wrap: W,
) -> Outcome<T, E>
where
    A: Send + 'static,
    T: Send + 'static,
    E: Fault,
    Fut: Future<Output = Result<R, E>> + Send + 'static,
    W: FnOnce(A, R) -> Outcome<T, E> + Send + 'static,
{
    match guard(|| f(&value)) {
        Ok(future) => Outcome::Pending(Pending::new(async move {
            match future.await {
                Ok(result) => wrap(value, result),
                Err(error) => rejected(error),
            }
        })),
        Err(error) => Outcome::Aborted(error),
    }
}

fn rejected<T, E>(error: E) -> Outcome<T, E> {
    tracing::debug!("callback future rejected, outcome aborted");
    Outcome::Aborted(error)
}

#[cfg(test)]
mod tests {
    use super::*;

    type Out = Outcome<i32, String>;

    #[test]
    fn transform_wraps_success() {
        let out: Out = transform_result(|| 2, Outcome::Ok);
        assert_eq!(out, Outcome::Ok(2));
    }

    #[test]
    fn transform_aborts_on_panic() {
        let out: Out = transform_result(|| -> i32 { panic!("x") }, Outcome::Ok);
        assert_eq!(out, Outcome::Aborted("x".to_string()));
    }

    #[test]
    fn check_treats_panic_as_false() {
        assert!(check(|| true));
        assert!(!check(|| false));
        assert!(!check(|| panic!("predicate")));
    }

    #[test]
    fn inspect_hands_back_receiver() {
        let out: Out = inspect_result(5, |v| *v > 3, |v, big| {
            if big {
                Outcome::Ok(v)
            } else {
                Outcome::Error("small".into())
            }
        });
        assert_eq!(out, Outcome::Ok(5));
    }

    #[tokio::test]
    async fn transform_future_goes_pending_then_wraps() {
        let out: Out = transform_future(|| async { Ok::<_, String>(4) }, Outcome::Ok);
        assert!(out.is_asynchronous());
        assert_eq!(out.settle().await, Outcome::Ok(4));
    }

    #[tokio::test]
    async fn transform_future_rejection_aborts() {
        let out: Out = transform_future(|| async { Err::<i32, _>("no".to_string()) }, Outcome::Ok);
        assert_eq!(out.settle().await, Outcome::Aborted("no".to_string()));
    }

    #[tokio::test]
    async fn transform_future_panic_while_polling_aborts() {
        let out: Out = transform_future(
            || async {
                if true {
                    panic!("late");
                }
                Ok::<i32, String>(1)
            },
            Outcome::Ok,
        );
        assert_eq!(out.settle().await, Outcome::Aborted("late".to_string()));
    }

    #[test]
    fn transform_future_panic_before_future_aborts_synchronously() {
        let out: Out = transform_future(
            || -> std::future::Ready<Result<i32, String>> { panic!("early") },
            Outcome::Ok,
        );
        assert_eq!(out, Outcome::Aborted("early".to_string()));
    }

    #[tokio::test]
    async fn inspect_future_hands_back_receiver() {
        let out: Out = inspect_future(
            7,
            |v| {
                let v = *v;
                async move { Ok::<_, String>(v % 2 == 1) }
            },
            |v, odd| if odd { Outcome::Ok(v) } else { Outcome::Error("even".into()) },
        );
        assert_eq!(out.settle().await, Outcome::Ok(7));
    }
}
