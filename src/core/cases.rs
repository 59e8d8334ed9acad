//! Clauses for `Outcome::match_with`.

use crate::core::helpers::identity;

type Clause<A, R> = Box<dyn FnOnce(A) -> R + Send>;

/// One clause per settled state, consumed by `Outcome::match_with`.
///
/// The `ok` clause is always present ([`Cases::identity`] returns the raw
/// value). The `error` and `aborted` clauses are optional; when the matching
/// clause is missing, `match_with` hands the error payload back as `Err`.
/// An `Aborted` outcome is only caught by the `aborted` clause, never by
/// `error`.
///
/// # Example
///
/// ```rust
/// use fate::{Cases, Outcome};
///
/// let describe = || {
///     Cases::ok(|n: i32| format!("got {n}"))
///         .error(|e: String| format!("failed: {e}"))
/// };
///
/// let ok: Outcome<i32, String> = Outcome::Ok(2);
/// assert_eq!(ok.match_with(describe()).into_ready().ok(), Some(Ok("got 2".to_string())));
///
/// let aborted: Outcome<i32, String> = Outcome::Aborted("crash".into());
/// assert_eq!(
///     aborted.match_with(describe()).into_ready().ok(),
///     Some(Err("crash".to_string()))
/// );
/// ```
pub struct Cases<T, E, R> {
    ok: Clause<T, R>,
    error: Option<Clause<E, R>>,
    aborted: Option<Clause<E, R>>,
}

impl<T: 'static, E> Cases<T, E, T> {
    /// Cases whose `ok` clause returns the value unchanged.
    pub fn identity() -> Self {
        Self {
            ok: Box::new(identity),
            error: None,
            aborted: None,
        }
    }
}

impl<T, E, R> Cases<T, E, R> {
    /// Cases with `f` as the `ok` clause and no error clauses.
    pub fn ok<F>(f: F) -> Self
    where
        F: FnOnce(T) -> R + Send + 'static,
    {
        Self {
            ok: Box::new(f),
            error: None,
            aborted: None,
        }
    }

    /// Handle `Error` outcomes with `f`.
    pub fn error<F>(mut self, f: F) -> Self
    where
        F: FnOnce(E) -> R + Send + 'static,
    {
        self.error = Some(Box::new(f));
        self
    }

    /// Handle `Aborted` outcomes with `f`.
    pub fn aborted<F>(mut self, f: F) -> Self
    where
        F: FnOnce(E) -> R + Send + 'static,
    {
        self.aborted = Some(Box::new(f));
        self
    }

    pub(crate) fn on_ok(self, value: T) -> R {
        (self.ok)(value)
    }

    pub(crate) fn on_error(self, error: E) -> Result<R, E> {
        match self.error {
            Some(clause) => Ok(clause(error)),
            None => Err(error),
        }
    }

    pub(crate) fn on_aborted(self, error: E) -> Result<R, E> {
        match self.aborted {
            Some(clause) => Ok(clause(error)),
            None => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_returns_value() {
        let cases: Cases<i32, String, i32> = Cases::identity();
        assert_eq!(cases.on_ok(3), 3);
    }

    #[test]
    fn missing_clauses_hand_error_back() {
        let cases: Cases<i32, String, i32> = Cases::identity();
        assert_eq!(cases.on_error("e".into()), Err("e".to_string()));

        let cases: Cases<i32, String, i32> = Cases::identity();
        assert_eq!(cases.on_aborted("a".into()), Err("a".to_string()));
    }

    #[test]
    fn error_clause_does_not_catch_aborts() {
        let cases: Cases<i32, String, i32> =
            Cases::identity().error(|e: String| e.len() as i32);
        assert_eq!(cases.on_aborted("abc".into()), Err("abc".to_string()));

        let cases: Cases<i32, String, i32> =
            Cases::identity().error(|e: String| e.len() as i32);
        assert_eq!(cases.on_error("abc".into()), Ok(3));
    }

    #[test]
    fn aborted_clause_catches_aborts() {
        let cases: Cases<i32, String, i32> = Cases::ok(|v| v * 2).aborted(|_| -1);
        assert_eq!(cases.on_aborted("x".into()), Ok(-1));
    }
}
