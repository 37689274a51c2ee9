//! Strong type definitions for keys.
//!
//! A [`Symbol`] is a lightweight identifier kept distinct from free-form text
//! so callers can say `:name` and `"name"` and mean the same entry. A [`Key`]
//! is anything a container can be indexed by.

use std::borrow::Cow;
use std::fmt;

/// A symbolic identifier, interchangeable with its text for lookup.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The symbol's name, without the leading colon.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the symbol, returning its name.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A container key.
///
/// Only [`Key::Symbol`] has a canonical conversion: it becomes
/// [`Key::Text`] with the same name. Every other variant is its own
/// canonical form.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Text(String),
    Symbol(Symbol),
    Integer(i64),
    Bool(bool),
    Null,
}

impl Key {
    /// Shorthand for a symbolic key.
    pub fn symbol(name: impl Into<String>) -> Self {
        Key::Symbol(Symbol::new(name))
    }

    /// Shorthand for a textual key.
    pub fn text(text: impl Into<String>) -> Self {
        Key::Text(text.into())
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, Key::Symbol(_))
    }

    /// The textual content of a `Text` or `Symbol` key.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Text(s) => Some(s),
            Key::Symbol(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Convert into canonical form.
    pub fn into_canonical(self) -> Key {
        match self {
            Key::Symbol(sym) => Key::Text(sym.into_string()),
            other => other,
        }
    }

    /// Canonical form, borrowing when the key is already canonical.
    pub fn canonical(&self) -> Cow<'_, Key> {
        match self {
            Key::Symbol(sym) => Cow::Owned(Key::Text(sym.as_str().to_owned())),
            other => Cow::Borrowed(other),
        }
    }

    /// Symbolic form: `Text` becomes `Symbol`, everything else is unchanged.
    pub fn to_symbolic(&self) -> Key {
        match self {
            Key::Text(s) => Key::Symbol(Symbol::new(s.as_str())),
            other => other.clone(),
        }
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Text(s) => write!(f, "{:?}", s),
            Key::Symbol(sym) => write!(f, "{}", sym),
            Key::Integer(n) => write!(f, "{}", n),
            Key::Bool(b) => write!(f, "{}", b),
            Key::Null => f.write_str("nil"),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Text(s.to_owned())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Text(s)
    }
}

impl From<&String> for Key {
    fn from(s: &String) -> Self {
        Key::Text(s.clone())
    }
}

impl From<Symbol> for Key {
    fn from(sym: Symbol) -> Self {
        Key::Symbol(sym)
    }
}

impl From<&Symbol> for Key {
    fn from(sym: &Symbol) -> Self {
        Key::Symbol(sym.clone())
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Key::Integer(n)
    }
}

impl From<i32> for Key {
    fn from(n: i32) -> Self {
        Key::Integer(n.into())
    }
}

impl From<bool> for Key {
    fn from(b: bool) -> Self {
        Key::Bool(b)
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}
