//! The outcome container and its synchronous surface.

use crate::core::cases::Cases;
use crate::core::error::{Fault, StateError};
use crate::core::helpers::{constant, Property};
use crate::core::normalize::IntoOutcome;
use crate::core::state::OutcomeState;
use crate::core::transform::{check, inspect_result, transform_result};
use crate::dispatch;
use crate::effects::{Eventual, Pending};
use futures_util::future::BoxFuture;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Error as _, Serialize, Serializer};
use std::fmt;
use std::future::{Future, IntoFuture};

/// A value, a failure, or a future deciding between them.
///
/// - `Ok` holds a success value.
/// - `Error` holds a recoverable failure. `recover`, `recover_when` and
///   `map_error` act on it.
/// - `Aborted` holds an unrecoverable failure: a panic inside a callback, a
///   rejected callback future, or an error promoted with `abort_on_error`.
///   Recovery operations pass it through untouched.
/// - `Pending` wraps a future that settles to one of the other three.
///
/// Every operation consumes the outcome and returns a new one. Operations on
/// a `Pending` outcome are replayed once it settles, so a chain means the same
/// thing whether any of its steps were asynchronous.
///
/// # Example
///
/// ```rust
/// use fate::Outcome;
///
/// let parsed: Outcome<i32, String> = Outcome::Ok("42")
///     .map(|s: &str| s.parse::<i32>())
///     .flat_map(|parsed| parsed.map_err(|e| e.to_string()));
///
/// assert_eq!(parsed, Outcome::Ok(42));
///
/// let crashed: Outcome<String, String> = Outcome::Ok(1).map(|_| panic!("x"));
/// assert!(crashed.is_aborted());
/// assert_eq!(crashed.merge().into_ready().ok(), Some("x".to_string()));
/// ```
pub enum Outcome<T, E> {
    Ok(T),
    Error(E),
    Aborted(E),
    Pending(Pending<T, E>),
}

impl<T, E> Outcome<T, E> {
    /// The state tag. Readable on a `Pending` outcome too.
    pub fn state(&self) -> OutcomeState {
        match self {
            Self::Ok(_) => OutcomeState::Ok,
            Self::Error(_) => OutcomeState::Error,
            Self::Aborted(_) => OutcomeState::Aborted,
            Self::Pending(_) => OutcomeState::Pending,
        }
    }

    /// True only for `Pending`.
    pub fn is_asynchronous(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    /// Whether the outcome is `Ok`, or an error if it is still pending.
    pub fn try_is_ok(&self) -> Result<bool, StateError> {
        self.settled_flag("is_ok", |state| state == OutcomeState::Ok)
    }

    /// Whether the outcome is `Error` or `Aborted`, or an error if it is
    /// still pending.
    pub fn try_is_error(&self) -> Result<bool, StateError> {
        self.settled_flag("is_error", |state| state.is_error())
    }

    /// Whether the outcome is `Aborted`, or an error if it is still pending.
    pub fn try_is_aborted(&self) -> Result<bool, StateError> {
        self.settled_flag("is_aborted", |state| state == OutcomeState::Aborted)
    }

    /// # Panics
    ///
    /// Panics on a `Pending` outcome, whose state is not known yet.
    pub fn is_ok(&self) -> bool {
        self.try_is_ok().unwrap_or_else(|err| panic!("{err}"))
    }

    /// True for both `Error` and `Aborted`.
    ///
    /// # Panics
    ///
    /// Panics on a `Pending` outcome, whose state is not known yet.
    pub fn is_error(&self) -> bool {
        self.try_is_error().unwrap_or_else(|err| panic!("{err}"))
    }

    /// # Panics
    ///
    /// Panics on a `Pending` outcome, whose state is not known yet.
    pub fn is_aborted(&self) -> bool {
        self.try_is_aborted().unwrap_or_else(|err| panic!("{err}"))
    }

    /// Apply a partially applied operation, typically one from
    /// [`dispatch`](crate::dispatch).
    pub fn pipe<R>(self, op: impl FnOnce(Self) -> R) -> R {
        op(self)
    }

    fn settled_flag(
        &self,
        flag: &'static str,
        test: impl FnOnce(OutcomeState) -> bool,
    ) -> Result<bool, StateError> {
        match self.state() {
            OutcomeState::Pending => Err(StateError::Unresolved { flag }),
            state => Ok(test(state)),
        }
    }
}

impl<T, E> Outcome<T, E>
where
    T: Send + 'static,
    E: Fault,
{
    /// `Ok(value)` when `condition` holds, `Error(error)` otherwise.
    pub fn when(condition: bool, value: T, error: E) -> Self {
        if condition {
            Self::Ok(value)
        } else {
            Self::Error(error)
        }
    }

    /// Adopt a fallible future. `Err` becomes a recoverable `Error`; only a
    /// panic while polling aborts.
    pub fn from_future<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self::Pending(Pending::new(async move { Self::from(future.await) }))
    }

    /// Wait until the outcome is settled. The result is never `Pending`.
    pub async fn settle(self) -> Self {
        match self {
            Self::Pending(pending) => pending.settle().await,
            settled => settled,
        }
    }

    /// The value as `Ok`, or the error of `Error` and `Aborted` as `Err`.
    pub fn get(self) -> Eventual<Result<T, E>> {
        match self {
            Self::Ok(value) => Eventual::Ready(Ok(value)),
            Self::Error(error) | Self::Aborted(error) => Eventual::Ready(Err(error)),
            Self::Pending(pending) => pending.extract(dispatch::get()),
        }
    }

    /// The value, or `default` for `Error` and `Aborted`.
    pub fn get_or_else(self, default: T) -> Eventual<T> {
        match self {
            Self::Ok(value) => Eventual::Ready(value),
            Self::Error(_) | Self::Aborted(_) => Eventual::Ready(default),
            Self::Pending(pending) => pending.extract(dispatch::get_or_else(default)),
        }
    }

    /// Transform the value. A panic in `f` aborts.
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        match self {
            Self::Ok(value) => transform_result(move || f(value), Outcome::Ok),
            Self::Error(error) => Outcome::Error(error),
            Self::Aborted(error) => Outcome::Aborted(error),
            Self::Pending(pending) => Outcome::Pending(pending.then(dispatch::map(f))),
        }
    }

    /// Alias of [`Outcome::map`].
    pub fn transform<U, F>(self, f: F) -> Outcome<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        self.map(f)
    }

    /// Map, then normalize what the callback returned: `None` becomes
    /// `Error`, an outcome is adopted as is.
    pub fn expect_map<U, R, F>(self, f: F) -> Outcome<U, E>
    where
        U: Send + 'static,
        R: IntoOutcome<U, E>,
        F: FnOnce(T) -> R + Send + 'static,
    {
        match self {
            Self::Ok(value) => transform_result(move || f(value), IntoOutcome::into_outcome),
            Self::Error(error) => Outcome::Error(error),
            Self::Aborted(error) => Outcome::Aborted(error),
            Self::Pending(pending) => Outcome::Pending(pending.then(dispatch::expect_map(f))),
        }
    }

    /// Chain a step whose result is normalized into an outcome; same
    /// semantics as [`Outcome::expect_map`].
    pub fn flat_map<U, R, F>(self, f: F) -> Outcome<U, E>
    where
        U: Send + 'static,
        R: IntoOutcome<U, E>,
        F: FnOnce(T) -> R + Send + 'static,
    {
        match self {
            Self::Pending(pending) => Outcome::Pending(pending.then(dispatch::flat_map(f))),
            settled => settled.expect_map(f),
        }
    }

    /// Keep the value when `predicate` holds, otherwise `Error(E::default())`.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        E: Default,
        P: FnOnce(&T) -> bool + Send + 'static,
    {
        match self {
            Self::Ok(value) => inspect_result(value, predicate, |value, keep| {
                if keep {
                    Self::Ok(value)
                } else {
                    Self::Error(E::default())
                }
            }),
            Self::Pending(pending) => Self::Pending(pending.then(dispatch::filter(predicate))),
            failed => failed,
        }
    }

    /// Inverse of [`Outcome::filter`].
    pub fn reject<P>(self, predicate: P) -> Self
    where
        E: Default,
        P: FnOnce(&T) -> bool + Send + 'static,
    {
        match self {
            Self::Ok(value) => inspect_result(value, predicate, |value, hit| {
                if hit {
                    Self::Error(E::default())
                } else {
                    Self::Ok(value)
                }
            }),
            Self::Pending(pending) => Self::Pending(pending.then(dispatch::reject(predicate))),
            failed => failed,
        }
    }

    /// Observe the value. The outcome is unchanged unless `f` panics.
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T) + Send + 'static,
    {
        match self {
            Self::Ok(value) => inspect_result(value, f, |value, ()| Self::Ok(value)),
            Self::Pending(pending) => Self::Pending(pending.then(dispatch::tap(f))),
            failed => failed,
        }
    }

    /// Replace the value with `value`.
    pub fn replace<U>(self, value: U) -> Outcome<U, E>
    where
        U: Send + 'static,
    {
        self.map(constant(value))
    }

    /// Look `key` up on the value. A missing key is `Ok(None)`; a JSON
    /// `null` is kept as `Ok(Some(Value::Null))`.
    pub fn property<K>(self, key: K) -> Outcome<Option<T::Value>, E>
    where
        T: Property<K>,
        T::Value: Send + 'static,
        K: Send + 'static,
    {
        self.map(move |value| value.property(key))
    }

    /// Look `key` up on the value. A missing key, or a JSON `null`, is
    /// `Error(E::default())`.
    pub fn expect_property<K>(self, key: K) -> Outcome<T::Value, E>
    where
        E: Default,
        T: Property<K>,
        T::Value: Send + 'static,
        K: Send + 'static,
    {
        self.expect_map(move |value| value.require(key))
    }

    /// Whether the outcome is `Ok` with a value satisfying `predicate`. A
    /// panicking predicate counts as `false`.
    pub fn satisfies<P>(self, predicate: P) -> Eventual<bool>
    where
        P: FnOnce(&T) -> bool + Send + 'static,
    {
        match self {
            Self::Ok(value) => Eventual::Ready(check(|| predicate(&value))),
            Self::Error(_) | Self::Aborted(_) => Eventual::Ready(false),
            Self::Pending(pending) => pending.extract(dispatch::satisfies(predicate)),
        }
    }

    /// Whether the outcome is `Ok` with a value equal to `expected`. A
    /// panicking comparison counts as `false`.
    pub fn value_equals(self, expected: T) -> Eventual<bool>
    where
        T: PartialEq,
    {
        match self {
            Self::Ok(value) => Eventual::Ready(check(|| value == expected)),
            Self::Error(_) | Self::Aborted(_) => Eventual::Ready(false),
            Self::Pending(pending) => pending.extract(dispatch::value_equals(expected)),
        }
    }

    /// Transform a recoverable error. Aborts pass through.
    pub fn map_error<F>(self, f: F) -> Self
    where
        F: FnOnce(E) -> E + Send + 'static,
    {
        match self {
            Self::Error(error) => transform_result(move || f(error), Self::Error),
            Self::Pending(pending) => Self::Pending(pending.then(dispatch::map_error(f))),
            other => other,
        }
    }

    /// Observe the error of an `Error` or `Aborted` outcome.
    pub fn tap_error<F>(self, f: F) -> Self
    where
        F: FnOnce(&E) + Send + 'static,
    {
        match self {
            Self::Error(error) => inspect_result(error, f, |error, ()| Self::Error(error)),
            Self::Aborted(error) => inspect_result(error, f, |error, ()| Self::Aborted(error)),
            Self::Pending(pending) => Self::Pending(pending.then(dispatch::tap_error(f))),
            ok => ok,
        }
    }

    /// Turn a recoverable error into a value. Aborts pass through.
    pub fn recover<F>(self, f: F) -> Self
    where
        F: FnOnce(E) -> T + Send + 'static,
    {
        match self {
            Self::Error(error) => transform_result(move || f(error), Self::Ok),
            Self::Pending(pending) => Self::Pending(pending.then(dispatch::recover(f))),
            other => other,
        }
    }

    /// Recover only errors matching `predicate`; others stay as they are.
    /// A panicking predicate aborts.
    pub fn recover_when<P, F>(self, predicate: P, f: F) -> Self
    where
        P: FnOnce(&E) -> bool + Send + 'static,
        F: FnOnce(E) -> T + Send + 'static,
    {
        match self {
            Self::Error(error) => inspect_result(error, predicate, |error, matched| {
                if matched {
                    transform_result(move || f(error), Self::Ok)
                } else {
                    Self::Error(error)
                }
            }),
            Self::Pending(pending) => {
                Self::Pending(pending.then(dispatch::recover_when(predicate, f)))
            }
            other => other,
        }
    }

    /// Promote a recoverable error to an abort.
    pub fn abort_on_error(self) -> Self {
        match self {
            Self::Error(error) => Self::Aborted(error),
            Self::Pending(pending) => Self::Pending(pending.then(dispatch::abort_on_error())),
            other => other,
        }
    }

    /// Promote a recoverable error to an abort carrying `f(error)`.
    pub fn abort_on_error_with<F>(self, f: F) -> Self
    where
        F: FnOnce(E) -> E + Send + 'static,
    {
        match self {
            Self::Error(error) => transform_result(move || f(error), Self::Aborted),
            Self::Pending(pending) => {
                Self::Pending(pending.then(dispatch::abort_on_error_with(f)))
            }
            other => other,
        }
    }

    /// Promote a recoverable error to an abort carrying `error` instead.
    pub fn abort_on_error_as(self, error: E) -> Self {
        self.abort_on_error_with(constant(error))
    }

    /// Run the clause matching the settled state.
    ///
    /// Returns `Err(error)` when the state has no clause. Clauses run outside
    /// the panic boundary.
    pub fn match_with<R>(self, cases: Cases<T, E, R>) -> Eventual<Result<R, E>>
    where
        R: Send + 'static,
    {
        match self {
            Self::Ok(value) => Eventual::Ready(Ok(cases.on_ok(value))),
            Self::Error(error) => Eventual::Ready(cases.on_error(error)),
            Self::Aborted(error) => Eventual::Ready(cases.on_aborted(error)),
            Self::Pending(pending) => pending.extract(dispatch::match_with(cases)),
        }
    }

    /// Lift the outcome to `Pending`. Already pending outcomes are returned
    /// as they are.
    pub fn asynchronous(self) -> Self {
        match self {
            Self::Pending(pending) => Self::Pending(pending),
            settled => Self::Pending(Pending::resolved(settled)),
        }
    }

    /// A future of the value; it yields `Err` for `Error` and `Aborted`.
    pub fn to_future(self) -> BoxFuture<'static, Result<T, E>> {
        self.get().into_future()
    }

    /// `Some(value)` for `Ok`, `None` otherwise.
    pub fn to_optional(self) -> Eventual<Option<T>> {
        match self {
            Self::Ok(value) => Eventual::Ready(Some(value)),
            Self::Error(_) | Self::Aborted(_) => Eventual::Ready(None),
            Self::Pending(pending) => pending.extract(dispatch::to_optional()),
        }
    }
}

impl<T: Fault> Outcome<T, T> {
    /// The value or the error, whichever is present.
    pub fn merge(self) -> Eventual<T> {
        match self {
            Self::Ok(value) | Self::Error(value) | Self::Aborted(value) => Eventual::Ready(value),
            Self::Pending(pending) => pending.extract(dispatch::merge()),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Error(error),
        }
    }
}

impl<T, E> From<Pending<T, E>> for Outcome<T, E> {
    fn from(pending: Pending<T, E>) -> Self {
        Self::Pending(pending)
    }
}

impl<T: Send + 'static, E: Fault> IntoFuture for Outcome<T, E> {
    type Output = Result<T, E>;
    type IntoFuture = BoxFuture<'static, Result<T, E>>;

    fn into_future(self) -> Self::IntoFuture {
        self.to_future()
    }
}

/// Settled outcomes compare by variant and payload. A `Pending` outcome is
/// never equal to anything, itself included.
impl<T: PartialEq, E: PartialEq> PartialEq for Outcome<T, E> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Ok(a), Self::Ok(b)) => a == b,
            (Self::Error(a), Self::Error(b)) | (Self::Aborted(a), Self::Aborted(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => f.debug_tuple("Ok").field(value).finish(),
            Self::Error(error) => f.debug_tuple("Error").field(error).finish(),
            Self::Aborted(error) => f.debug_tuple("Aborted").field(error).finish(),
            Self::Pending(pending) => f.debug_tuple("Pending").field(pending).finish(),
        }
    }
}

impl<T: Serialize, E: Serialize> Serialize for Outcome<T, E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Ok(value) => serializer.serialize_newtype_variant("Outcome", 0, "Ok", value),
            Self::Error(error) => {
                serializer.serialize_newtype_variant("Outcome", 1, "Error", error)
            }
            Self::Aborted(error) => {
                serializer.serialize_newtype_variant("Outcome", 2, "Aborted", error)
            }
            Self::Pending(_) => Err(S::Error::custom(
                "cannot serialize a pending outcome; settle it first",
            )),
        }
    }
}

#[derive(serde::Deserialize)]
#[serde(rename = "Outcome")]
enum Settled<T, E> {
    Ok(T),
    Error(E),
    Aborted(E),
}

impl<'de, T: Deserialize<'de>, E: Deserialize<'de>> Deserialize<'de> for Outcome<T, E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Settled::deserialize(deserializer)? {
            Settled::Ok(value) => Self::Ok(value),
            Settled::Error(error) => Self::Error(error),
            Settled::Aborted(error) => Self::Aborted(error),
        })
    }
}
