//! Normalizing arbitrary values into outcomes.

use crate::core::error::Fault;
use crate::core::outcome::Outcome;
use crate::core::transform::transform_result;
use crate::effects::Pending;
use futures_util::future::FutureExt;
use serde_json::Value;
use std::future::Future;

/// Conversion into the canonical outcome representation.
///
/// Absence (`None`, JSON `null`) becomes `Error(E::default())`, presence
/// becomes `Ok`, and an outcome converts to itself.
pub trait IntoOutcome<T, E> {
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> IntoOutcome<T, E> for Outcome<T, E> {
    fn into_outcome(self) -> Outcome<T, E> {
        self
    }
}

impl<T, E: Default> IntoOutcome<T, E> for Option<T> {
    fn into_outcome(self) -> Outcome<T, E> {
        match self {
            Some(value) => Outcome::Ok(value),
            None => Outcome::Error(E::default()),
        }
    }
}

impl<T, E> IntoOutcome<T, E> for Result<T, E> {
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from(self)
    }
}

impl<E: Default> IntoOutcome<Value, E> for Value {
    fn into_outcome(self) -> Outcome<Value, E> {
        match self {
            Value::Null => Outcome::Error(E::default()),
            present => Outcome::Ok(present),
        }
    }
}

/// Normalize `value` into an outcome.
///
/// ```rust
/// use fate::{expect, Outcome};
///
/// let found: Outcome<i32, String> = expect(Some(1));
/// let missing: Outcome<i32, String> = expect(None);
///
/// assert_eq!(found, Outcome::Ok(1));
/// assert_eq!(missing, Outcome::Error(String::new()));
/// ```
pub fn expect<T, E, V>(value: V) -> Outcome<T, E>
where
    V: IntoOutcome<T, E>,
{
    value.into_outcome()
}

/// Normalize what `future` yields, once it does.
pub fn expect_async<T, E, V, F>(future: F) -> Outcome<T, E>
where
    T: Send + 'static,
    E: Fault,
    V: IntoOutcome<T, E>,
    F: Future<Output = V> + Send + 'static,
{
    Outcome::Pending(Pending::new(future.map(|value| value.into_outcome())))
}

/// Run `f` and normalize its result. A panic in `f` aborts.
pub fn attempt<T, E, V, F>(f: F) -> Outcome<T, E>
where
    E: Fault,
    V: IntoOutcome<T, E>,
    F: FnOnce() -> V,
{
    transform_result(f, |value| value.into_outcome())
}

/// Run `f` and normalize what its future yields. A panic in `f` or in the
/// future aborts.
pub fn attempt_async<T, E, V, Fut, F>(f: F) -> Outcome<T, E>
where
    T: Send + 'static,
    E: Fault,
    V: IntoOutcome<T, E>,
    Fut: Future<Output = V> + Send + 'static,
    F: FnOnce() -> Fut,
{
    transform_result(f, expect_async)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    type Out = Outcome<i32, String>;

    #[test]
    fn expect_is_identity_on_outcomes() {
        assert_eq!(expect(Out::Ok(1)), Outcome::Ok(1));
        assert_eq!(expect(Out::Error("e".into())), Outcome::Error("e".to_string()));
        assert_eq!(expect(Out::Aborted("a".into())), Outcome::Aborted("a".to_string()));
    }

    #[test]
    fn expect_keeps_pending_pending() {
        let pending = expect(Out::Ok(1).asynchronous());
        assert!(pending.is_asynchronous());
    }

    #[test]
    fn expect_maps_option() {
        let some: Out = expect(Some(3));
        let none: Out = expect(None);
        assert_eq!(some, Outcome::Ok(3));
        assert_eq!(none, Outcome::Error(String::new()));
    }

    #[test]
    fn expect_maps_result() {
        let ok: Out = expect(Ok::<_, String>(3));
        let err: Out = expect(Err::<i32, _>("bad".to_string()));
        assert_eq!(ok, Outcome::Ok(3));
        assert_eq!(err, Outcome::Error("bad".to_string()));
    }

    #[test]
    fn expect_treats_json_null_as_missing() {
        let null: Outcome<Value, String> = expect(Value::Null);
        let present: Outcome<Value, String> = expect(json!({ "a": 1 }));
        assert_eq!(null, Outcome::Error(String::new()));
        assert_eq!(present, Outcome::Ok(json!({ "a": 1 })));
    }

    #[tokio::test]
    async fn expect_async_normalizes_resolved_value() {
        let out: Out = expect_async(async { Some(4) });
        assert!(out.is_asynchronous());
        assert_eq!(out.settle().await, Outcome::Ok(4));

        let out: Out = expect_async(async { None });
        assert_eq!(out.settle().await, Outcome::Error(String::new()));
    }

    #[tokio::test]
    async fn expect_async_adopts_resolved_outcome() {
        let out: Out = expect_async(async { Out::Aborted("late".into()) });
        assert_eq!(out.settle().await, Outcome::Aborted("late".to_string()));
    }

    #[test]
    fn attempt_contains_panics() {
        let out: Out = attempt(|| -> Option<i32> { panic!("bad input") });
        assert_eq!(out, Outcome::Aborted("bad input".to_string()));

        let out: Out = attempt(|| "12".parse::<i32>().map_err(|e| e.to_string()));
        assert_eq!(out, Outcome::Ok(12));
    }

    #[tokio::test]
    async fn attempt_async_contains_panics_in_future() {
        let out: Out = attempt_async(|| async {
            if true {
                panic!("late");
            }
            Some(1)
        });
        assert_eq!(out.settle().await, Outcome::Aborted("late".to_string()));
    }

    #[tokio::test]
    async fn attempt_async_normalizes() {
        let out: Out = attempt_async(|| async { Some(8) });
        assert_eq!(out.settle().await, Outcome::Ok(8));
    }
}
