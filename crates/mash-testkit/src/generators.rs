//! Proptest generators for property-based testing.

use proptest::prelude::*;

use mash_core::{Key, Mash, PlainMap, Symbol, Value};

/// Generate an identifier-like name.
pub fn name() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,11}".prop_map(String::from)
}

/// Generate a Symbol.
pub fn symbol() -> impl Strategy<Value = Symbol> {
    name().prop_map(Symbol::new)
}

/// Generate a symbolic key.
pub fn symbol_key() -> impl Strategy<Value = Key> {
    symbol().prop_map(Key::Symbol)
}

/// Generate a textual key.
pub fn text_key() -> impl Strategy<Value = Key> {
    name().prop_map(Key::Text)
}

/// Generate any key, weighted towards text and symbols.
pub fn key() -> impl Strategy<Value = Key> {
    prop_oneof![
        4 => text_key(),
        4 => symbol_key(),
        1 => any::<i64>().prop_map(Key::Integer),
        1 => any::<bool>().prop_map(Key::Bool),
        1 => Just(Key::Null),
    ]
}

/// Generate a scalar value. Floats are finite so equality is reflexive.
pub fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Integer),
        (-1.0e6f64..1.0e6f64).prop_map(Value::Float),
        "[ -~]{0,16}".prop_map(Value::Text),
        symbol().prop_map(Value::Symbol),
    ]
}

/// Generate a value with nested arrays and plain maps.
pub fn value() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec((key(), inner), 0..4)
                .prop_map(|entries| Value::Map(entries.into_iter().collect())),
        ]
    })
}

/// Generate a plain map with nested structure.
pub fn plain_map() -> impl Strategy<Value = PlainMap> {
    prop::collection::vec((key(), value()), 0..8).prop_map(|entries| entries.into_iter().collect())
}

/// Generate a plain map keyed only by text.
pub fn text_keyed_map() -> impl Strategy<Value = PlainMap> {
    prop::collection::vec((text_key(), value()), 0..8)
        .prop_map(|entries| entries.into_iter().collect())
}

/// Generate a Mash imported from a plain map.
pub fn mash() -> impl Strategy<Value = Mash> {
    plain_map().prop_map(Mash::from_mapping)
}
