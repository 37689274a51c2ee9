//! Values and the plain (host) mapping type.
//!
//! A [`PlainMap`] stores keys and values exactly as given. It is what callers
//! hand to a [`Mash`], which converts it on the way in; see
//! [`crate::map`] for the conversion rules.

use std::fmt;

use indexmap::IndexMap;

use crate::container::KeyedContainer;
use crate::default::DefaultValue;
use crate::map::Mash;
use crate::types::{Key, Symbol};

/// A value held in a container.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Symbol(Symbol),
    /// A plain sequence. Map elements are converted when stored in a `Mash`.
    Array(Vec<Value>),
    /// A plain mapping. Converted to [`Value::Mash`] when stored in a `Mash`.
    Map(PlainMap),
    /// A normalizing map. Never re-wrapped.
    Mash(Mash),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Value::Symbol(sym) => Some(sym),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&PlainMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_mash(&self) -> Option<&Mash> {
        match self {
            Value::Mash(mash) => Some(mash),
            _ => None,
        }
    }

    pub fn as_mash_mut(&mut self) -> Option<&mut Mash> {
        match self {
            Value::Mash(mash) => Some(mash),
            _ => None,
        }
    }

    /// A short name for the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Symbol(_) => "symbol",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
            Value::Mash(_) => "mash",
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Integer(n.into())
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Symbol> for Value {
    fn from(sym: Symbol) -> Self {
        Value::Symbol(sym)
    }
}

impl From<PlainMap> for Value {
    fn from(map: PlainMap) -> Self {
        Value::Map(map)
    }
}

impl From<Mash> for Value {
    fn from(mash: Mash) -> Self {
        Value::Mash(mash)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        self.as_i64() == Some(*other)
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        self.as_i64() == Some(i64::from(*other))
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

/// The host mapping: insertion-ordered entries plus a default.
///
/// Keys and values are stored unchanged, so `:a` and `"a"` are different
/// entries here.
#[derive(Clone, Default)]
pub struct PlainMap {
    entries: IndexMap<Key, Value>,
    default: DefaultValue,
}

impl PlainMap {
    /// Create an empty map with no default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty map with the given default.
    pub fn with_default(default: DefaultValue) -> Self {
        Self {
            entries: IndexMap::new(),
            default,
        }
    }

    pub fn default_value(&self) -> &DefaultValue {
        &self.default
    }

    pub fn set_default(&mut self, default: DefaultValue) {
        self.default = default;
    }

    /// Insert an entry, returning the previous value for the key.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove an entry, keeping the order of the rest.
    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        self.entries.shift_remove(key)
    }

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

    /// Split into entries and default.
    pub fn into_parts(self) -> (IndexMap<Key, Value>, DefaultValue) {
        (self.entries, self.default)
    }
}

impl KeyedContainer for PlainMap {
    fn read(&self, key: &Key) -> Value {
        match self.entries.get(key) {
            Some(value) => value.clone(),
            None => self.default.resolve(self, key),
        }
    }

    fn lookup(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    fn write(&mut self, key: Key, value: Value) {
        self.entries.insert(key, value);
    }

    fn exists(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    fn erase(&mut self, key: &Key) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&Key, &Value)> + '_> {
        Box::new(self.entries.iter())
    }
}

/// Equality compares entries only; defaults are ignored.
impl PartialEq for PlainMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl fmt::Debug for PlainMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for PlainMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            default: DefaultValue::Absent,
        }
    }
}

impl IntoIterator for PlainMap {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a PlainMap {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
