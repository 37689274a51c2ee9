//! The default-value mechanism consulted when a lookup misses.

use std::fmt;
use std::sync::Arc;

use crate::container::KeyedContainer;
use crate::types::Key;
use crate::value::Value;

/// A callable computing the value for a missing key.
///
/// Receives the container that missed and the key exactly as the caller
/// passed it (before canonicalization). The result is returned, not stored.
pub type DefaultFn = Arc<dyn Fn(&dyn KeyedContainer, &Key) -> Value + Send + Sync>;

/// What a container returns on a miss.
#[derive(Clone, Default)]
pub enum DefaultValue {
    /// Misses read as [`Value::Null`].
    #[default]
    Absent,
    /// Misses read as a clone of this value.
    Fixed(Box<Value>),
    /// Misses read as the callable's result.
    Computed(DefaultFn),
}

impl DefaultValue {
    pub fn fixed(value: impl Into<Value>) -> Self {
        DefaultValue::Fixed(Box::new(value.into()))
    }

    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&dyn KeyedContainer, &Key) -> Value + Send + Sync + 'static,
    {
        DefaultValue::Computed(Arc::new(f))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, DefaultValue::Absent)
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, DefaultValue::Computed(_))
    }

    /// Produce the miss value for `key` in `container`.
    pub fn resolve(&self, container: &dyn KeyedContainer, key: &Key) -> Value {
        match self {
            DefaultValue::Absent => Value::Null,
            DefaultValue::Fixed(value) => value.as_ref().clone(),
            DefaultValue::Computed(f) => {
                tracing::trace!(key = %key, "computing default for missing key");
                f(container, key)
            }
        }
    }
}

impl fmt::Debug for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::Absent => f.write_str("Absent"),
            DefaultValue::Fixed(value) => f.debug_tuple("Fixed").field(value).finish(),
            DefaultValue::Computed(_) => f.write_str("Computed(<fn>)"),
        }
    }
}

impl PartialEq for DefaultValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (DefaultValue::Absent, DefaultValue::Absent) => true,
            (DefaultValue::Fixed(a), DefaultValue::Fixed(b)) => a == b,
            // Two computed defaults are equal only when they share the callable.
            (DefaultValue::Computed(a), DefaultValue::Computed(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            _ => false,
        }
    }
}
