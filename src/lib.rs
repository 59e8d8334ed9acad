//! Fate: result containers that chain the same way sync or async
//!
//! An [`Outcome`] is either a value (`Ok`), a recoverable failure (`Error`),
//! an unrecoverable failure (`Aborted`), or a future that will settle to one
//! of those (`Pending`). Operations are written once and replayed on a pending
//! outcome when it settles, so a chain keeps its meaning whether or not any
//! step went asynchronous.
//!
//! # Core Concepts
//!
//! - **Outcome**: the four-state container and its chainable operations
//! - **Abort**: a panic inside any callback is caught and turns the outcome
//!   into `Aborted`, which recovery operations never touch
//! - **Pending**: futures are flattened, so a pending outcome never settles to
//!   another pending outcome
//! - **Eventual**: plain values read out of an outcome, ready now or later
//! - **Normalization**: [`expect`] turns options, results and JSON values into
//!   outcomes
//!
//! # Example
//!
//! ```rust
//! use fate::{expect, Outcome};
//! use serde_json::{json, Value};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let user: Outcome<Value, String> = expect(json!({ "name": "ada", "age": 36 }));
//!
//! let name = user.expect_property("name");
//! assert_eq!(name, Outcome::Ok(json!("ada")));
//!
//! let missing: Outcome<Value, String> = expect(Value::Null);
//! assert!(missing.is_error());
//!
//! let later: Outcome<i32, String> = Outcome::Ok(20)
//!     .map_async(|v| async move { Ok(v + 1) })
//!     .map(|v| v * 2);
//! assert_eq!(later.settle().await, Outcome::Ok(42));
//! # }
//! ```

pub mod core;
pub mod dispatch;
pub mod effects;
#[cfg(feature = "validation")]
mod interop;

// Re-export commonly used types
pub use crate::core::{
    attempt, attempt_async, constant, expect, expect_async, identity, property, Cases, Fault,
    IntoOutcome, Outcome, OutcomeState, Panic, Property, StateError,
};
pub use crate::effects::{Eventual, Pending};
