//! Conversions between outcomes and stillwater's `Validation`.
//!
//! A `Validation` has no notion of an aborted or pending computation, so the
//! mapping is lossy in one direction: `Aborted` collapses into `Failure`.

use crate::core::{Fault, IntoOutcome, Outcome};
use crate::effects::Eventual;
use stillwater::validation::Validation;

impl<T, E> IntoOutcome<T, E> for Validation<T, E> {
    fn into_outcome(self) -> Outcome<T, E> {
        match self {
            Validation::Success(value) => Outcome::Ok(value),
            Validation::Failure(error) => Outcome::Error(error),
        }
    }
}

impl<T, E> From<Validation<T, E>> for Outcome<T, E> {
    fn from(validation: Validation<T, E>) -> Self {
        validation.into_outcome()
    }
}

impl<T, E> Outcome<T, E>
where
    T: Send + 'static,
    E: Fault,
{
    /// Convert into a `Validation`, once the outcome is settled.
    ///
    /// ```rust
    /// use fate::Outcome;
    /// use stillwater::validation::Validation;
    ///
    /// let failed: Outcome<i32, String> = Outcome::Aborted("crash".into());
    /// let validation = failed.into_validation().into_ready().ok();
    /// assert!(matches!(validation, Some(Validation::Failure(e)) if e == "crash"));
    /// ```
    pub fn into_validation(self) -> Eventual<Validation<T, E>> {
        self.get().map(|result| match result {
            Ok(value) => Validation::Success(value),
            Err(error) => Validation::Failure(error),
        })
    }
}
