//! Partially applied outcome operations.
//!
//! Each function here takes an operation's arguments and returns a closure
//! waiting for the outcome to run it on. `Pending` replays chained operations
//! through these closures once its future settles; they also compose into
//! point-free pipelines:
//!
//! ```rust
//! use fate::{dispatch, Outcome};
//!
//! let double = dispatch::map(|v: i32| v * 2);
//! let at_least_ten = dispatch::filter(|v: &i32| *v >= 10);
//!
//! let outcome: Outcome<i32, String> = Outcome::Ok(6).pipe(double).pipe(at_least_ten);
//! assert_eq!(outcome, Outcome::Ok(12));
//! ```

use crate::core::{Cases, Fault, IntoOutcome, Outcome, Property};
use crate::effects::Eventual;
use futures_util::future::BoxFuture;
use std::future::Future;

/// Partially applied [`Outcome::map`].
pub fn map<T, U, E, F>(f: F) -> impl FnOnce(Outcome<T, E>) -> Outcome<U, E> + Send + 'static
where
    T: Send + 'static,
    U: Send + 'static,
    E: Fault,
    F: FnOnce(T) -> U + Send + 'static,
{
    move |outcome| outcome.map(f)
}

/// Partially applied [`Outcome::transform`].
pub fn transform<T, U, E, F>(f: F) -> impl FnOnce(Outcome<T, E>) -> Outcome<U, E> + Send + 'static
where
    T: Send + 'static,
    U: Send + 'static,
    E: Fault,
    F: FnOnce(T) -> U + Send + 'static,
{
    move |outcome| outcome.transform(f)
}

/// Partially applied [`Outcome::expect_map`].
pub fn expect_map<T, U, E, R, F>(
    f: F,
) -> impl FnOnce(Outcome<T, E>) -> Outcome<U, E> + Send + 'static
where
    T: Send + 'static,
    U: Send + 'static,
    E: Fault,
    R: IntoOutcome<U, E>,
    F: FnOnce(T) -> R + Send + 'static,
{
    move |outcome| outcome.expect_map(f)
}

/// Partially applied [`Outcome::flat_map`].
pub fn flat_map<T, U, E, R, F>(f: F) -> impl FnOnce(Outcome<T, E>) -> Outcome<U, E> + Send + 'static
where
    T: Send + 'static,
    U: Send + 'static,
    E: Fault,
    R: IntoOutcome<U, E>,
    F: FnOnce(T) -> R + Send + 'static,
{
    move |outcome| outcome.flat_map(f)
}

/// Partially applied [`Outcome::filter`].
pub fn filter<T, E, P>(
    predicate: P,
) -> impl FnOnce(Outcome<T, E>) -> Outcome<T, E> + Send + 'static
where
    T: Send + 'static,
    E: Fault + Default,
    P: FnOnce(&T) -> bool + Send + 'static,
{
    move |outcome| outcome.filter(predicate)
}

/// Partially applied [`Outcome::reject`].
pub fn reject<T, E, P>(
    predicate: P,
) -> impl FnOnce(Outcome<T, E>) -> Outcome<T, E> + Send + 'static
where
    T: Send + 'static,
    E: Fault + Default,
    P: FnOnce(&T) -> bool + Send + 'static,
{
    move |outcome| outcome.reject(predicate)
}

/// Partially applied [`Outcome::tap`].
pub fn tap<T, E, F>(f: F) -> impl FnOnce(Outcome<T, E>) -> Outcome<T, E> + Send + 'static
where
    T: Send + 'static,
    E: Fault,
    F: FnOnce(&T) + Send + 'static,
{
    move |outcome| outcome.tap(f)
}

/// Partially applied [`Outcome::replace`].
pub fn replace<T, U, E>(value: U) -> impl FnOnce(Outcome<T, E>) -> Outcome<U, E> + Send + 'static
where
    T: Send + 'static,
    U: Send + 'static,
    E: Fault,
{
    move |outcome| outcome.replace(value)
}

/// Partially applied [`Outcome::property`].
pub fn property<T, E, K>(
    key: K,
) -> impl FnOnce(Outcome<T, E>) -> Outcome<Option<T::Value>, E> + Send + 'static
where
    T: Send + 'static + Property<K>,
    T::Value: Send + 'static,
    E: Fault,
    K: Send + 'static,
{
    move |outcome| outcome.property(key)
}

/// Partially applied [`Outcome::expect_property`].
pub fn expect_property<T, E, K>(
    key: K,
) -> impl FnOnce(Outcome<T, E>) -> Outcome<T::Value, E> + Send + 'static
where
    T: Send + 'static + Property<K>,
    T::Value: Send + 'static,
    E: Fault + Default,
    K: Send + 'static,
{
    move |outcome| outcome.expect_property(key)
}

/// Partially applied [`Outcome::map_error`].
pub fn map_error<T, E, F>(f: F) -> impl FnOnce(Outcome<T, E>) -> Outcome<T, E> + Send + 'static
where
    T: Send + 'static,
    E: Fault,
    F: FnOnce(E) -> E + Send + 'static,
{
    move |outcome| outcome.map_error(f)
}

/// Partially applied [`Outcome::tap_error`].
pub fn tap_error<T, E, F>(f: F) -> impl FnOnce(Outcome<T, E>) -> Outcome<T, E> + Send + 'static
where
    T: Send + 'static,
    E: Fault,
    F: FnOnce(&E) + Send + 'static,
{
    move |outcome| outcome.tap_error(f)
}

/// Partially applied [`Outcome::recover`].
pub fn recover<T, E, F>(f: F) -> impl FnOnce(Outcome<T, E>) -> Outcome<T, E> + Send + 'static
where
    T: Send + 'static,
    E: Fault,
    F: FnOnce(E) -> T + Send + 'static,
{
    move |outcome| outcome.recover(f)
}

/// Partially applied [`Outcome::recover_when`].
pub fn recover_when<T, E, P, F>(
    predicate: P,
    f: F,
) -> impl FnOnce(Outcome<T, E>) -> Outcome<T, E> + Send + 'static
where
    T: Send + 'static,
    E: Fault,
    P: FnOnce(&E) -> bool + Send + 'static,
    F: FnOnce(E) -> T + Send + 'static,
{
    move |outcome| outcome.recover_when(predicate, f)
}

/// Partially applied [`Outcome::abort_on_error`].
pub fn abort_on_error<T, E>() -> impl FnOnce(Outcome<T, E>) -> Outcome<T, E> + Send + 'static
where
    T: Send + 'static,
    E: Fault,
{
    |outcome| outcome.abort_on_error()
}

/// Partially applied [`Outcome::abort_on_error_with`].
pub fn abort_on_error_with<T, E, F>(
    f: F,
) -> impl FnOnce(Outcome<T, E>) -> Outcome<T, E> + Send + 'static
where
    T: Send + 'static,
    E: Fault,
    F: FnOnce(E) -> E + Send + 'static,
{
    move |outcome| outcome.abort_on_error_with(f)
}

/// Partially applied [`Outcome::abort_on_error_as`].
pub fn abort_on_error_as<T, E>(
    error: E,
) -> impl FnOnce(Outcome<T, E>) -> Outcome<T, E> + Send + 'static
where
    T: Send + 'static,
    E: Fault,
{
    move |outcome| outcome.abort_on_error_as(error)
}

/// Partially applied [`Outcome::asynchronous`].
pub fn asynchronous<T, E>() -> impl FnOnce(Outcome<T, E>) -> Outcome<T, E> + Send + 'static
where
    T: Send + 'static,
    E: Fault,
{
    |outcome| outcome.asynchronous()
}

/// Partially applied [`Outcome::get`].
pub fn get<T, E>() -> impl FnOnce(Outcome<T, E>) -> Eventual<Result<T, E>> + Send + 'static
where
    T: Send + 'static,
    E: Fault,
{
    |outcome| outcome.get()
}

/// Partially applied [`Outcome::get_or_else`].
pub fn get_or_else<T, E>(default: T) -> impl FnOnce(Outcome<T, E>) -> Eventual<T> + Send + 'static
where
    T: Send + 'static,
    E: Fault,
{
    move |outcome| outcome.get_or_else(default)
}

/// Partially applied [`Outcome::satisfies`].
pub fn satisfies<T, E, P>(
    predicate: P,
) -> impl FnOnce(Outcome<T, E>) -> Eventual<bool> + Send + 'static
where
    T: Send + 'static,
    E: Fault,
    P: FnOnce(&T) -> bool + Send + 'static,
{
    move |outcome| outcome.satisfies(predicate)
}

/// Partially applied [`Outcome::value_equals`].
pub fn value_equals<T, E>(
    expected: T,
) -> impl FnOnce(Outcome<T, E>) -> Eventual<bool> + Send + 'static
where
    T: Send + 'static + PartialEq,
    E: Fault,
{
    move |outcome| outcome.value_equals(expected)
}

/// Partially applied [`Outcome::merge`].
pub fn merge<T>() -> impl FnOnce(Outcome<T, T>) -> Eventual<T> + Send + 'static
where
    T: Fault,
{
    |outcome| outcome.merge()
}

/// Partially applied [`Outcome::match_with`].
pub fn match_with<T, E, R>(
    cases: Cases<T, E, R>,
) -> impl FnOnce(Outcome<T, E>) -> Eventual<Result<R, E>> + Send + 'static
where
    T: Send + 'static,
    E: Fault,
    R: Send + 'static,
{
    move |outcome| outcome.match_with(cases)
}

/// Partially applied [`Outcome::to_optional`].
pub fn to_optional<T, E>() -> impl FnOnce(Outcome<T, E>) -> Eventual<Option<T>> + Send + 'static
where
    T: Send + 'static,
    E: Fault,
{
    |outcome| outcome.to_optional()
}

/// Partially applied [`Outcome::to_future`].
pub fn to_future<T, E>(
) -> impl FnOnce(Outcome<T, E>) -> BoxFuture<'static, Result<T, E>> + Send + 'static
where
    T: Send + 'static,
    E: Fault,
{
    |outcome| outcome.to_future()
}

/// Partially applied [`Outcome::map_async`].
pub fn map_async<T, U, E, F, Fut>(
    f: F,
) -> impl FnOnce(Outcome<T, E>) -> Outcome<U, E> + Send + 'static
where
    T: Send + 'static,
    U: Send + 'static,
    E: Fault,
    F: FnOnce(T) -> Fut + Send + 'static,
    Fut: Future<Output = Result<U, E>> + Send + 'static,
{
    move |outcome| outcome.map_async(f)
}

/// Partially applied [`Outcome::expect_map_async`].
pub fn expect_map_async<T, U, E, R, F, Fut>(
    f: F,
) -> impl FnOnce(Outcome<T, E>) -> Outcome<U, E> + Send + 'static
where
    T: Send + 'static,
    U: Send + 'static,
    E: Fault,
    R: IntoOutcome<U, E>,
    F: FnOnce(T) -> Fut + Send + 'static,
    Fut: Future<Output = R> + Send + 'static,
{
    move |outcome| outcome.expect_map_async(f)
}

/// Partially applied [`Outcome::flat_map_async`].
pub fn flat_map_async<T, U, E, R, F, Fut>(
    f: F,
) -> impl FnOnce(Outcome<T, E>) -> Outcome<U, E> + Send + 'static
where
    T: Send + 'static,
    U: Send + 'static,
    E: Fault,
    R: IntoOutcome<U, E>,
    F: FnOnce(T) -> Fut + Send + 'static,
    Fut: Future<Output = R> + Send + 'static,
{
    move |outcome| outcome.flat_map_async(f)
}

/// Partially applied [`Outcome::filter_async`].
pub fn filter_async<T, E, P, Fut>(
    predicate: P,
) -> impl FnOnce(Outcome<T, E>) -> Outcome<T, E> + Send + 'static
where
    T: Send + 'static,
    E: Fault + Default,
    P: FnOnce(&T) -> Fut + Send + 'static,
    Fut: Future<Output = Result<bool, E>> + Send + 'static,
{
    move |outcome| outcome.filter_async(predicate)
}

/// Partially applied [`Outcome::reject_async`].
pub fn reject_async<T, E, P, Fut>(
    predicate: P,
) -> impl FnOnce(Outcome<T, E>) -> Outcome<T, E> + Send + 'static
where
    T: Send + 'static,
    E: Fault + Default,
    P: FnOnce(&T) -> Fut + Send + 'static,
    Fut: Future<Output = Result<bool, E>> + Send + 'static,
{
    move |outcome| outcome.reject_async(predicate)
}

/// Partially applied [`Outcome::tap_async`].
pub fn tap_async<T, E, F, Fut>(f: F) -> impl FnOnce(Outcome<T, E>) -> Outcome<T, E> + Send + 'static
where
    T: Send + 'static,
    E: Fault,
    F: FnOnce(&T) -> Fut + Send + 'static,
    Fut: Future<Output = Result<(), E>> + Send + 'static,
{
    move |outcome| outcome.tap_async(f)
}

/// Partially applied [`Outcome::recover_async`].
pub fn recover_async<T, E, F, Fut>(
    f: F,
) -> impl FnOnce(Outcome<T, E>) -> Outcome<T, E> + Send + 'static
where
    T: Send + 'static,
    E: Fault,
    F: FnOnce(E) -> Fut + Send + 'static,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
{
    move |outcome| outcome.recover_async(f)
}

/// Partially applied [`Outcome::tap_error_async`].
pub fn tap_error_async<T, E, F, Fut>(
    f: F,
) -> impl FnOnce(Outcome<T, E>) -> Outcome<T, E> + Send + 'static
where
    T: Send + 'static,
    E: Fault,
    F: FnOnce(&E) -> Fut + Send + 'static,
    Fut: Future<Output = Result<(), E>> + Send + 'static,
{
    move |outcome| outcome.tap_error_async(f)
}

/// Partially applied [`Outcome::recover_when_async`].
pub fn recover_when_async<T, E, P, F, Fut>(
    predicate: P,
    f: F,
) -> impl FnOnce(Outcome<T, E>) -> Outcome<T, E> + Send + 'static
where
    T: Send + 'static,
    E: Fault,
    P: FnOnce(&E) -> bool + Send + 'static,
    F: FnOnce(E) -> Fut + Send + 'static,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
{
    move |outcome| outcome.recover_when_async(predicate, f)
}

/// Partially applied [`Outcome::abort_on_error_with_async`].
pub fn abort_on_error_with_async<T, E, F, Fut>(
    f: F,
) -> impl FnOnce(Outcome<T, E>) -> Outcome<T, E> + Send + 'static
where
    T: Send + 'static,
    E: Fault,
    F: FnOnce(E) -> Fut + Send + 'static,
    Fut: Future<Output = Result<E, E>> + Send + 'static,
{
    move |outcome| outcome.abort_on_error_with_async(f)
}

/// Partially applied [`Outcome::map_error_async`].
pub fn map_error_async<T, E, F, Fut>(
    f: F,
) -> impl FnOnce(Outcome<T, E>) -> Outcome<T, E> + Send + 'static
where
    T: Send + 'static,
    E: Fault,
    F: FnOnce(E) -> Fut + Send + 'static,
    Fut: Future<Output = Result<E, E>> + Send + 'static,
{
    move |outcome| outcome.map_error_async(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    type Out = Outcome<i32, String>;

    #[test]
    fn dispatch_matches_method_on_each_variant() {
        for outcome in [Out::Ok(2), Out::Error("e".into()), Out::Aborted("a".into())] {
            let expected = match &outcome {
                Outcome::Ok(v) => Out::Ok(v + 1),
                Outcome::Error(e) => Out::Error(e.clone()),
                Outcome::Aborted(e) => Out::Aborted(e.clone()),
                Outcome::Pending(_) => unreachable!(),
            };
            assert_eq!(outcome.pipe(map(|v: i32| v + 1)), expected);
        }
    }

    #[test]
    fn recovery_pipeline_composes() {
        let out = Out::Error("missing".into())
            .pipe(map_error(|e: String| e.to_uppercase()))
            .pipe(tap_error(|e: &String| assert_eq!(e, "MISSING")))
            .pipe(recover(|e: String| e.len() as i32));
        assert_eq!(out, Outcome::Ok(7));
    }

    #[test]
    fn value_extractors_are_ready_for_settled_outcomes() {
        assert_eq!(Out::Ok(3).pipe(get_or_else(0)).into_ready().ok(), Some(3));
        assert_eq!(Out::Error("e".into()).pipe(get_or_else(0)).into_ready().ok(), Some(0));
        assert_eq!(Out::Ok(3).pipe(to_optional()).into_ready().ok(), Some(Some(3)));
        assert_eq!(Out::Ok(3).pipe(value_equals(3)).into_ready().ok(), Some(true));
    }

    #[tokio::test]
    async fn dispatch_on_pending_outcome() {
        let out = Out::Ok(3).asynchronous().pipe(map(|v: i32| v * 3));
        assert!(out.is_asynchronous());
        assert_eq!(out.pipe(to_future()).await, Ok(9));
    }

    #[test]
    fn replace_pipeline() {
        assert_eq!(Out::Ok(3).pipe(replace("three")), Outcome::Ok("three"));
        assert_eq!(
            Out::Error("e".into()).pipe(replace("three")),
            Outcome::Error("e".to_string())
        );
    }

    #[tokio::test]
    async fn async_dispatch_replays_on_pending() {
        let out = Out::Error("soft".into())
            .asynchronous()
            .pipe(recover_when_async(
                |e: &String| e.len() > 2,
                |e: String| async move { Ok(e.len() as i32) },
            ));
        assert_eq!(out.settle().await, Outcome::Ok(4));
    }

    #[test]
    fn abort_promotion_pipeline() {
        let out = Out::Error("soft".into()).pipe(abort_on_error_as("hard".to_string()));
        assert_eq!(out, Outcome::Aborted("hard".to_string()));
        let out = Out::Error("soft".into()).pipe(abort_on_error());
        assert_eq!(out, Outcome::Aborted("soft".to_string()));
    }
}
