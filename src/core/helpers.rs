//! Small transform helpers and keyed lookup.

use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Return the argument unchanged.
pub fn identity<T>(value: T) -> T {
    value
}

/// A callback that ignores its argument and yields `value`.
///
/// ```rust
/// use fate::{constant, Outcome};
///
/// let outcome: Outcome<i32, String> = Outcome::Error("missing".into());
/// assert_eq!(outcome.recover(constant(0)), Outcome::Ok(0));
/// ```
pub fn constant<A, T>(value: T) -> impl FnOnce(A) -> T {
    move |_| value
}

/// A callback that looks `key` up on its argument.
///
/// ```rust
/// use fate::property;
/// use serde_json::json;
///
/// let name = property::<_, serde_json::Value>("name");
/// assert_eq!(name(&json!({ "name": "ada" })), Some(json!("ada")));
/// ```
pub fn property<K, T>(key: K) -> impl FnOnce(&T) -> Option<T::Value>
where
    T: Property<K>,
{
    move |target| target.property(key)
}

/// Keyed lookup into a value.
///
/// This is the accessor behind `Outcome::property` and
/// `Outcome::expect_property`. A missing key is `None`.
pub trait Property<K> {
    type Value;

    /// The value stored under `key`, as is.
    fn property(&self, key: K) -> Option<Self::Value>;

    /// The value under `key` if it counts as present. Defaults to
    /// [`Property::property`]; JSON documents also treat `null` as absent.
    fn require(&self, key: K) -> Option<Self::Value> {
        self.property(key)
    }
}

impl<'k> Property<&'k str> for Value {
    type Value = Value;

    fn property(&self, key: &'k str) -> Option<Value> {
        self.get(key).cloned()
    }

    fn require(&self, key: &'k str) -> Option<Value> {
        self.get(key).filter(|v| !v.is_null()).cloned()
    }
}

impl Property<String> for Value {
    type Value = Value;

    fn property(&self, key: String) -> Option<Value> {
        self.property(key.as_str())
    }

    fn require(&self, key: String) -> Option<Value> {
        self.require(key.as_str())
    }
}

impl Property<usize> for Value {
    type Value = Value;

    fn property(&self, index: usize) -> Option<Value> {
        self.get(index).cloned()
    }

    fn require(&self, index: usize) -> Option<Value> {
        self.get(index).filter(|v| !v.is_null()).cloned()
    }
}

impl<'k, V: Clone, S: BuildHasher> Property<&'k str> for HashMap<String, V, S> {
    type Value = V;

    fn property(&self, key: &'k str) -> Option<V> {
        self.get(key).cloned()
    }
}

impl<'k, V: Clone> Property<&'k str> for BTreeMap<String, V> {
    type Value = V;

    fn property(&self, key: &'k str) -> Option<V> {
        self.get(key).cloned()
    }
}

impl<V: Clone> Property<usize> for Vec<V> {
    type Value = V;

    fn property(&self, index: usize) -> Option<V> {
        self.get(index).cloned()
    }
}
