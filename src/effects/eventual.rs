//! Plain values that may only be known later.

use futures_util::future::{self, BoxFuture, FutureExt};
use std::fmt;
use std::future::IntoFuture;

/// A plain value extracted from an outcome.
///
/// Extracting from a settled outcome (`get`, `get_or_else`, `to_optional`,
/// ...) gives `Ready`; extracting from a pending one gives `Later`. Both can
/// be awaited, so code that doesn't care which kind it holds can just
/// `.await` it.
///
/// ```rust
/// use fate::{Eventual, Outcome};
///
/// let ready = Outcome::<i32, String>::Ok(3).get_or_else(0);
/// assert!(ready.is_ready());
/// assert_eq!(ready.into_ready().ok(), Some(3));
///
/// let later = Outcome::<i32, String>::Ok(3).asynchronous().get_or_else(0);
/// assert!(matches!(later, Eventual::Later(_)));
/// ```
pub enum Eventual<V> {
    Ready(V),
    Later(BoxFuture<'static, V>),
}

impl<V> Eventual<V> {
    /// True when the value is already known.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Take the value if it is already known, otherwise hand `self` back.
    pub fn into_ready(self) -> Result<V, Self> {
        match self {
            Self::Ready(value) => Ok(value),
            later => Err(later),
        }
    }
}

impl<V: Send + 'static> Eventual<V> {
    /// Transform the value, now or once it arrives.
    pub fn map<W, F>(self, f: F) -> Eventual<W>
    where
        F: FnOnce(V) -> W + Send + 'static,
    {
        match self {
            Self::Ready(value) => Eventual::Ready(f(value)),
            Self::Later(future) => Eventual::Later(future.map(f).boxed()),
        }
    }
}

impl<V: Send + 'static> IntoFuture for Eventual<V> {
    type Output = V;
    type IntoFuture = BoxFuture<'static, V>;

    fn into_future(self) -> Self::IntoFuture {
        match self {
            Self::Ready(value) => future::ready(value).boxed(),
            Self::Later(future) => future,
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for Eventual<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(value) => f.debug_tuple("Ready").field(value).finish(),
            Self::Later(_) => f.write_str("Later(..)"),
        }
    }
}
