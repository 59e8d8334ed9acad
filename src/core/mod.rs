//! The outcome container and its synchronous machinery.
//!
//! This module contains:
//! - the four-state `Outcome` type and its state tags
//! - the transform engine that runs callbacks under a panic boundary
//! - normalization of options, results and JSON values into outcomes
//! - the small helpers (`identity`, `constant`, `property`) used in chains
//!
//! Asynchronous support (`Pending`, `Eventual`) lives in `effects`.

mod cases;
mod error;
mod helpers;
mod normalize;
mod outcome;
mod state;
pub(crate) mod transform;

pub use cases::Cases;
pub use error::{Fault, Panic, StateError};
pub use helpers::{constant, identity, property, Property};
pub use normalize::{attempt, attempt_async, expect, expect_async, IntoOutcome};
pub use outcome::Outcome;
pub use state::OutcomeState;
