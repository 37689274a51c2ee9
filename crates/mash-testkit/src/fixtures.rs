//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use mash_core::{plain, DefaultValue, Key, Mash, PlainMap, Value};

/// Request parameters as a form handler would see them, keyed by symbol at
/// the top and by text below.
pub fn request_params() -> PlainMap {
    plain! {
        Key::symbol("controller") => "posts",
        Key::symbol("action") => "update",
        Key::symbol("id") => 42,
        Key::symbol("post") => plain! {
            "title" => "Hello",
            "published" => true,
            "tags" => vec![
                plain! { "name" => "rust" },
                plain! { Key::symbol("name") => "maps" },
            ],
            "author" => plain! { "id" => 7, "name" => "ada" },
        },
        "page" => 2,
    }
}

/// A computed default that counts how often it runs.
#[derive(Debug, Clone, Default)]
pub struct CountingDefault {
    calls: Arc<AtomicUsize>,
}

impl CountingDefault {
    pub fn new() -> Self {
        Self::default()
    }

    /// A default that answers every miss with the missing key's text.
    pub fn default_value(&self) -> DefaultValue {
        let calls = Arc::clone(&self.calls);
        DefaultValue::computed(move |_, key| {
            calls.fetch_add(1, Ordering::SeqCst);
            key.as_str().map_or(Value::Null, Value::from)
        })
    }

    /// How many misses have been computed.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

/// Whether no symbol key and no plain map survive anywhere in `mash`.
pub fn is_normalized(mash: &Mash) -> bool {
    mash.iter()
        .all(|(key, value)| !key.is_symbol() && value_is_normalized(value))
}

fn value_is_normalized(value: &Value) -> bool {
    match value {
        Value::Map(_) => false,
        Value::Array(items) => items.iter().all(value_is_normalized),
        Value::Mash(mash) => is_normalized(mash),
        _ => true,
    }
}
