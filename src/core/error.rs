//! Error types raised by the outcome machinery itself.

use std::any::Any;
use thiserror::Error;

/// A panic caught while running a user callback.
///
/// Callbacks passed to outcome operations never unwind past the operation:
/// the panic is captured here and converted into the outcome's error type,
/// producing an `Aborted` outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("callback panicked: {message}")]
pub struct Panic {
    message: String,
}

impl Panic {
    /// Build a panic record from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build a panic record from a payload returned by `catch_unwind`.
    pub(crate) fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => (*message).to_string(),
                Err(_) => "Box<dyn Any>".to_string(),
            },
        };
        Self { message }
    }

    /// The message the callback panicked with.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Take the message out of the record.
    pub fn into_message(self) -> String {
        self.message
    }
}

impl From<Panic> for String {
    fn from(panic: Panic) -> Self {
        panic.message
    }
}

impl From<Panic> for serde_json::Value {
    fn from(panic: Panic) -> Self {
        serde_json::Value::String(panic.message)
    }
}

/// Errors from inspecting an outcome's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("cannot read `{flag}` on a pending outcome; settle it first")]
    Unresolved { flag: &'static str },
}

/// Bound for error payloads an outcome can carry.
///
/// The payload must be able to absorb a caught [`Panic`], and must be able to
/// travel inside a `'static` future.
pub trait Fault: From<Panic> + Send + 'static {}

impl<E> Fault for E where E: From<Panic> + Send + 'static {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic;

    #[test]
    fn payload_string_message_is_kept() {
        let payload = panic::catch_unwind(|| panic!("boom {}", 1)).unwrap_err();
        assert_eq!(Panic::from_payload(payload).message(), "boom 1");
    }

    #[test]
    fn payload_static_str_message_is_kept() {
        let payload = panic::catch_unwind(|| panic!("boom")).unwrap_err();
        assert_eq!(Panic::from_payload(payload).message(), "boom");
    }

    #[test]
    fn payload_of_unknown_type_is_described() {
        let payload = panic::catch_unwind(|| panic::panic_any(42_u8)).unwrap_err();
        assert_eq!(Panic::from_payload(payload).message(), "Box<dyn Any>");
    }

    #[test]
    fn panic_converts_into_common_payloads() {
        let text: String = Panic::new("x").into();
        assert_eq!(text, "x");

        let json: serde_json::Value = Panic::new("x").into();
        assert_eq!(json, serde_json::json!("x"));
    }

    #[test]
    fn panic_displays_message() {
        assert_eq!(Panic::new("x").to_string(), "callback panicked: x");
    }

    #[test]
    fn state_error_names_the_flag() {
        let err = StateError::Unresolved { flag: "is_ok" };
        assert_eq!(
            err.to_string(),
            "cannot read `is_ok` on a pending outcome; settle it first"
        );
    }
}
