//! KeyedContainer trait: the capability set shared by keyed lookup objects.
//!
//! Both the host mapping ([`PlainMap`](crate::PlainMap)) and the normalizing
//! map ([`Mash`](crate::Mash)) implement it, which lets a computed default
//! inspect whichever container missed.

use crate::types::Key;
use crate::value::Value;

/// Object-safe interface for a keyed container.
///
/// # Design Notes
///
/// - **`read` resolves misses**: it consults the container's default and
///   never fails.
/// - **`lookup` does not**: it returns only stored entries.
/// - Implementations decide how keys and values are converted on the way in.
pub trait KeyedContainer {
    /// Read the value for `key`, resolving a miss through the default.
    fn read(&self, key: &Key) -> Value;

    /// The stored value for `key`, if any.
    fn lookup(&self, key: &Key) -> Option<&Value>;

    /// Store `value` under `key`.
    fn write(&mut self, key: Key, value: Value);

    /// Whether an entry exists for `key`.
    fn exists(&self, key: &Key) -> bool;

    /// Remove the entry for `key`, returning the stored value.
    fn erase(&mut self, key: &Key) -> Option<Value>;

    /// Number of stored entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over stored entries.
    fn entries(&self) -> Box<dyn Iterator<Item = (&Key, &Value)> + '_>;
}
