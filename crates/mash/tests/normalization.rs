//! End-to-end behaviour of the normalizing map.
//!
//! Every case here holds for any caller that treats a `Mash` as a generic
//! keyed-lookup object: symbol and text keys are interchangeable, nested
//! maps are converted on write, and only `fetch` fails on a miss.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use mash::{json, mash, plain, DefaultValue, Key, LoadConfig, Mash, MashError, PlainMap, Value};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[test]
fn symbol_write_reads_back_under_both_forms() {
    init_tracing();
    let mut m = Mash::new();
    m.set(Key::symbol("k"), "v");

    assert_eq!(m.get(Key::symbol("k")), "v");
    assert_eq!(m.get("k"), "v");
    assert!(m.contains_key(Key::symbol("k")));
    assert!(m.contains_key("k"));
}

#[test]
fn nested_map_satisfies_key_equivalence() {
    init_tracing();
    let mut m = Mash::new();
    m.set("a", plain! { "b" => 1 });

    let a = m.get("a");
    assert_eq!(a.as_mash().unwrap().get(Key::symbol("b")), 1);
}

#[test]
fn sequence_of_maps_becomes_sequence_of_mashes() {
    let mut m = Mash::new();
    m.set("a", vec![plain! { "b" => 1 }, plain! { "b" => 2 }]);

    let a = m.get("a");
    let items = a.as_array().unwrap();
    assert!(items.iter().all(|item| matches!(item, Value::Mash(_))));
}

#[test]
fn merge_does_not_touch_receiver() {
    let m = mash! { "a" => 1 };
    let m2 = m.merge(plain! { "x" => 1 });

    assert!(!m.contains_key("x"));
    assert!(m2.contains_key("x"));
}

#[test]
fn except_and_except_in_place() {
    let mut m = mash! { "a" => 1, "b" => 2 };

    let without = m.except(["a"]);
    assert!(m.contains_key("a"));
    assert!(!without.contains_key("a"));

    m.except_in_place(["a"]);
    assert!(!m.contains_key("a"));
}

#[test]
fn fetch_fails_only_without_fallback() {
    init_tracing();
    let m = Mash::with_default(0);

    assert!(matches!(m.fetch("k"), Err(MashError::KeyNotFound(_))));
    assert_eq!(m.fetch_or("k", "dflt"), "dflt");
    assert_eq!(m.values_at(["k"]), vec![Value::Integer(0)]);
}

#[test]
fn fetch_error_converts_into_facade_error() {
    fn lookup(m: &Mash) -> mash::Result<Value> {
        Ok(m.fetch("absent")?)
    }

    let err = lookup(&Mash::new()).unwrap_err();
    assert!(matches!(err, mash::Error::Mash(MashError::KeyNotFound(_))));
    assert_eq!(err.to_string(), "mash error: key not found: \"absent\"");
}

#[test]
fn nested_container_inherits_outer_default() {
    let mut outer = Mash::with_default(0);
    outer.set("n", plain! { "x" => 1 });

    let n = outer.get("n");
    assert_eq!(n.as_mash().unwrap().get("missing"), 0);
}

#[test]
fn computed_default_propagates_to_nested_map() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let mut inner = PlainMap::with_default(DefaultValue::computed(move |_, key| {
        counter.fetch_add(1, Ordering::SeqCst);
        Value::Text(format!("missing {}", key))
    }));
    inner.insert("x", 1);

    let mut outer = Mash::new();
    outer.set("n", inner);

    let n = outer.get("n");
    let n = n.as_mash().unwrap();
    assert_eq!(n.get(Key::symbol("y")), "missing :y");
    assert_eq!(n.get(Key::symbol("x")), 1);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn symbol_keyed_projection_roundtrips() {
    let source = plain! { "a" => 1, "b" => plain! { "c" => 2 } };
    let m = Mash::from_mapping(source);

    let symbolized = m.to_symbol_keyed();
    assert!(symbolized.keys().all(Key::is_symbol));

    let back = Mash::from_mapping(symbolized);
    assert_eq!(back, m);
}

#[test]
fn shared_behind_caller_lock() {
    let shared = Arc::new(Mutex::new(Mash::new()));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let shared = Arc::clone(&shared);
            std::thread::spawn(move || {
                let mut guard = shared.lock().unwrap();
                guard.set(Key::symbol(format!("k{}", i)), i);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let guard = shared.lock().unwrap();
    assert_eq!(guard.len(), 4);
    assert_eq!(guard.get("k3"), 3);
}

#[test]
fn json_params_addressed_by_symbol() {
    init_tracing();
    let config = LoadConfig::default().with_default("");
    let params = json::from_str_with(
        r#"{"post": {"title": "hi", "tags": [{"name": "rust"}]}, "page": 2}"#,
        &config,
    )
    .unwrap();

    assert_eq!(params.get(Key::symbol("page")), 2);

    let post = params.get(Key::symbol("post"));
    let post = post.as_mash().unwrap();
    assert_eq!(post.get(Key::symbol("title")), "hi");
    assert_eq!(post.get(Key::symbol("body")), "");

    let tags = post.get("tags");
    let first = tags.as_array().unwrap()[0].as_mash().unwrap();
    assert_eq!(first.get(Key::symbol("name")), "rust");
}

#[test]
fn json_dump_matches_input_shape() {
    let params = json::from_str(r#"{"a":{"b":[true,null]}}"#).unwrap();
    let text = json::to_string(&params).unwrap();
    assert_eq!(text, r#"{"a":{"b":[true,null]}}"#);
}
