//! Asynchronous outcomes.
//!
//! This module is the shell around the synchronous core:
//!
//! - **Pending**: an outcome decided by a future, flattened and panic-safe
//! - **Eventual**: a plain value that is either ready now or awaited later
//! - **Async operations**: `map_async`, `filter_async`, ... whose callbacks
//!   return futures
//!
//! All futures are boxed as `Send + 'static`, so chains can be spawned on a
//! multi-threaded runtime.

mod chain;
mod eventual;
mod pending;

pub use eventual::Eventual;
pub use pending::Pending;
