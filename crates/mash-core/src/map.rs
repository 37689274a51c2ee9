//! The key-normalizing map.
//!
//! A [`Mash`] wraps an insertion-ordered map and rewrites everything that
//! goes in:
//!
//! - **Keys**: a [`Key::Symbol`] is stored and looked up as [`Key::Text`],
//!   so `:name` and `"name"` address the same entry.
//! - **Values**: a [`Value::Map`] is replaced by a [`Value::Mash`] over the
//!   same entries, and a [`Value::Array`] is converted element-wise, at any
//!   depth. A [`Value::Mash`] is stored as-is.
//!
//! A nested map carries its own default into the wrapping `Mash`. When it has
//! none, the wrapper takes the default of the container it is written into.

use std::fmt;

use indexmap::IndexMap;

use crate::container::KeyedContainer;
use crate::default::DefaultValue;
use crate::error::{MashError, Result};
use crate::types::Key;
use crate::value::{PlainMap, Value};

/// A map addressable interchangeably by symbol or text.
///
/// Not synchronized: share it behind a caller-owned lock if needed.
#[derive(Clone, Default)]
pub struct Mash {
    entries: IndexMap<Key, Value>,
    default: DefaultValue,
}

fn convert_key(key: Key) -> Key {
    key.into_canonical()
}

fn convert_value(value: Value, inherited: &DefaultValue) -> Value {
    match value {
        Value::Map(map) => {
            let (entries, default) = map.into_parts();
            let default = if default.is_absent() {
                inherited.clone()
            } else {
                default
            };
            tracing::trace!(entries = entries.len(), "wrapping nested mapping");
            let mut mash = Mash::with_default_value(default);
            mash.update(entries);
            Value::Mash(mash)
        }
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| convert_value(item, inherited))
                .collect(),
        ),
        other => other,
    }
}

impl Mash {
    // ─────────────────────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────────────────────

    /// Create an empty mash with no default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Import every entry of `source` through [`Mash::set`].
    ///
    /// The result has no default, whatever `source` carried.
    pub fn from_mapping<I, K, V>(source: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Value>,
    {
        let mut mash = Self::new();
        mash.update(source);
        mash
    }

    /// Create an empty mash that returns `value` on every miss.
    pub fn with_default(value: impl Into<Value>) -> Self {
        Self::with_default_value(DefaultValue::fixed(value))
    }

    /// Create an empty mash that computes the value for every miss.
    pub fn with_default_fn<F>(f: F) -> Self
    where
        F: Fn(&dyn KeyedContainer, &Key) -> Value + Send + Sync + 'static,
    {
        Self::with_default_value(DefaultValue::computed(f))
    }

    /// Create an empty mash with the given default mechanism.
    pub fn with_default_value(default: DefaultValue) -> Self {
        Self {
            entries: IndexMap::new(),
            default,
        }
    }

    /// Build from an arbitrary value.
    ///
    /// A mapping (plain or normalizing) is imported entry by entry without
    /// its default. Any other value becomes the fixed default of an empty
    /// mash.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Map(map) => Self::from_mapping(map),
            Value::Mash(mash) => Self::from_mapping(mash),
            other => Self::with_default(other),
        }
    }

    pub fn default_value(&self) -> &DefaultValue {
        &self.default
    }

    /// Replace the default. Entries already stored are unaffected.
    pub fn set_default(&mut self, default: DefaultValue) {
        self.default = default;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reads and writes
    // ─────────────────────────────────────────────────────────────────────────

    /// Store `value` under the canonical form of `key`.
    ///
    /// Nested plain maps are replaced by `Mash`es, so identity of nested
    /// structures is not preserved. Returns the previous value, if any.
    pub fn set(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        let key = convert_key(key.into());
        let value = convert_value(value.into(), &self.default);
        self.entries.insert(key, value)
    }

    /// Read the value for `key`, resolving a miss through the default.
    ///
    /// A computed default receives the key as passed here.
    pub fn get(&self, key: impl Into<Key>) -> Value {
        let key = key.into();
        match self.entries.get(key.canonical().as_ref()) {
            Some(value) => value.clone(),
            None => self.default.resolve(self, &key),
        }
    }

    /// The stored value for `key`, without consulting the default.
    pub fn lookup(&self, key: impl Into<Key>) -> Option<&Value> {
        self.entries.get(&convert_key(key.into()))
    }

    /// Mutate the stored value for `key` in place, then normalize it again.
    ///
    /// Returns `None` without calling `f` when there is no entry.
    pub fn update_with<F, R>(&mut self, key: impl Into<Key>, f: F) -> Option<R>
    where
        F: FnOnce(&mut Value) -> R,
    {
        let slot = self.entries.get_mut(&convert_key(key.into()))?;
        let result = f(slot);
        let value = std::mem::take(slot);
        *slot = convert_value(value, &self.default);
        Some(result)
    }

    /// Fetch the stored value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`MashError::KeyNotFound`] when no entry exists. The default
    /// is not consulted.
    pub fn fetch(&self, key: impl Into<Key>) -> Result<Value> {
        let key = convert_key(key.into());
        match self.entries.get(&key) {
            Some(value) => Ok(value.clone()),
            None => {
                tracing::debug!(key = %key, "fetch miss without fallback");
                Err(MashError::KeyNotFound(key))
            }
        }
    }

    /// Fetch the stored value for `key`, or `fallback` when absent.
    pub fn fetch_or(&self, key: impl Into<Key>, fallback: impl Into<Value>) -> Value {
        match self.entries.get(&convert_key(key.into())) {
            Some(value) => value.clone(),
            None => fallback.into(),
        }
    }

    /// Fetch the stored value for `key`, or compute one from the canonical
    /// key when absent.
    pub fn fetch_or_else<F>(&self, key: impl Into<Key>, f: F) -> Value
    where
        F: FnOnce(&Key) -> Value,
    {
        let key = convert_key(key.into());
        match self.entries.get(&key) {
            Some(value) => value.clone(),
            None => f(&key),
        }
    }

    /// Read each key in order. Misses resolve through the default; this
    /// never fails.
    pub fn values_at<I, K>(&self, keys: I) -> Vec<Value>
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        keys.into_iter()
            .map(|key| self.get(convert_key(key.into())))
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Membership
    // ─────────────────────────────────────────────────────────────────────────

    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.entries.contains_key(&convert_key(key.into()))
    }

    /// Same as [`Mash::contains_key`].
    pub fn has_key(&self, key: impl Into<Key>) -> bool {
        self.contains_key(key)
    }

    /// Same as [`Mash::contains_key`].
    pub fn includes(&self, key: impl Into<Key>) -> bool {
        self.contains_key(key)
    }

    /// Same as [`Mash::contains_key`].
    pub fn is_member(&self, key: impl Into<Key>) -> bool {
        self.contains_key(key)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Bulk operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Write every pair of `other` through [`Mash::set`], in its order.
    ///
    /// Existing entries not named in `other` are kept.
    pub fn update<I, K, V>(&mut self, other: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Value>,
    {
        for (key, value) in other {
            self.set(key, value);
        }
        self
    }

    /// Same as [`Mash::update`].
    pub fn merge_in_place<I, K, V>(&mut self, other: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Value>,
    {
        self.update(other)
    }

    /// A copy of this mash with `other` merged in. `self` is unchanged.
    pub fn merge<I, K, V>(&self, other: I) -> Mash
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Value>,
    {
        let mut copy = self.clone();
        copy.update(other);
        copy
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Removal
    // ─────────────────────────────────────────────────────────────────────────

    /// Remove the entry for `key` and return its value.
    ///
    /// When there is no entry, returns what a read of the canonical key
    /// would resolve to.
    pub fn delete(&mut self, key: impl Into<Key>) -> Value {
        let key = convert_key(key.into());
        if let Some(value) = self.entries.shift_remove(&key) {
            return value;
        }
        let this: &Mash = self;
        this.default.resolve(this, &key)
    }

    /// Remove the entry for `key`, returning the stored value if any.
    pub fn remove(&mut self, key: impl Into<Key>) -> Option<Value> {
        self.entries.shift_remove(&convert_key(key.into()))
    }

    /// A copy of this mash without `keys`. `self` is unchanged.
    pub fn except<I, K>(&self, keys: I) -> Mash
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        let mut copy = self.clone();
        copy.except_in_place(keys);
        copy
    }

    /// Remove `keys` from this mash.
    pub fn except_in_place<I, K>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        for key in keys {
            self.remove(key);
        }
        self
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Keys are already stored as text; returns `self` unchanged.
    pub fn stringify_keys_in_place(&mut self) -> &mut Self {
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Projections
    // ─────────────────────────────────────────────────────────────────────────

    /// A plain map with every textual key turned into a symbol.
    ///
    /// One level only: nested `Mash` values are copied as they are. The
    /// default is carried over.
    pub fn to_symbol_keyed(&self) -> PlainMap {
        let mut map = PlainMap::with_default(self.default.clone());
        for (key, value) in &self.entries {
            map.insert(key.to_symbolic(), value.clone());
        }
        map
    }

    /// A plain map with the same keys, values and default.
    pub fn to_plain(&self) -> PlainMap {
        let mut map = PlainMap::with_default(self.default.clone());
        for (key, value) in &self.entries {
            map.insert(key.clone(), value.clone());
        }
        map
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Iteration
    // ─────────────────────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.entries.iter()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, Value> {
        self.entries.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, Key, Value> {
        self.entries.values()
    }
}

impl KeyedContainer for Mash {
    fn read(&self, key: &Key) -> Value {
        Mash::get(self, key)
    }

    fn lookup(&self, key: &Key) -> Option<&Value> {
        Mash::lookup(self, key)
    }

    fn write(&mut self, key: Key, value: Value) {
        self.set(key, value);
    }

    fn exists(&self, key: &Key) -> bool {
        self.contains_key(key)
    }

    fn erase(&mut self, key: &Key) -> Option<Value> {
        self.remove(key)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&Key, &Value)> + '_> {
        Box::new(self.entries.iter())
    }
}

/// Equality compares entries only; defaults are ignored.
impl PartialEq for Mash {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl fmt::Debug for Mash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl From<PlainMap> for Mash {
    fn from(map: PlainMap) -> Self {
        Mash::from_mapping(map)
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Mash {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Mash::from_mapping(iter)
    }
}

impl<K: Into<Key>, V: Into<Value>> Extend<(K, V)> for Mash {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.update(iter);
    }
}

impl IntoIterator for Mash {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Mash {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
