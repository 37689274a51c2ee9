//! JSON loading and dumping.
//!
//! A document must be a JSON object. Every entry goes through
//! [`Mash::set`], so nested objects arrive as `Mash`es and the configured
//! default reaches every level.

use std::io::Read;

use mash_core::{Mash, Value};
use serde::Deserialize;

use crate::config::LoadConfig;
use crate::error::{Error, Result};

/// Parse a JSON object into a [`Mash`] with the default configuration.
pub fn from_str(text: &str) -> Result<Mash> {
    from_str_with(text, &LoadConfig::default())
}

/// Parse a JSON object into a [`Mash`].
///
/// # Errors
///
/// - [`Error::Json`] if the text is not valid JSON.
/// - [`Error::NotAnObject`] if the top level is not an object.
/// - [`Error::TooDeep`] if nesting exceeds `config.max_depth`.
pub fn from_str_with(text: &str, config: &LoadConfig) -> Result<Mash> {
    let doc: serde_json::Value = serde_json::from_str(text)?;
    load(doc, config)
}

/// Parse JSON bytes into a [`Mash`] with the default configuration.
pub fn from_slice(bytes: &[u8]) -> Result<Mash> {
    from_slice_with(bytes, &LoadConfig::default())
}

/// Parse JSON bytes into a [`Mash`].
pub fn from_slice_with(bytes: &[u8], config: &LoadConfig) -> Result<Mash> {
    let doc: serde_json::Value = serde_json::from_slice(bytes)?;
    load(doc, config)
}

/// Parse JSON from a reader into a [`Mash`] with the default configuration.
pub fn from_reader<R: Read>(reader: R) -> Result<Mash> {
    from_reader_with(reader, &LoadConfig::default())
}

/// Parse JSON from a reader into a [`Mash`].
pub fn from_reader_with<R: Read>(reader: R, config: &LoadConfig) -> Result<Mash> {
    let doc: serde_json::Value = serde_json::from_reader(reader)?;
    load(doc, config)
}

/// Serialize a [`Mash`] as compact JSON.
pub fn to_string(mash: &Mash) -> Result<String> {
    Ok(serde_json::to_string(mash)?)
}

/// Serialize a [`Mash`] as indented JSON.
pub fn to_string_pretty(mash: &Mash) -> Result<String> {
    Ok(serde_json::to_string_pretty(mash)?)
}

fn load(doc: serde_json::Value, config: &LoadConfig) -> Result<Mash> {
    if !doc.is_object() {
        let found = json_kind(&doc);
        tracing::debug!(found, "rejecting non-object document");
        return Err(Error::NotAnObject { found });
    }

    let depth = depth_of(&doc);
    if depth > config.max_depth {
        tracing::debug!(depth, limit = config.max_depth, "rejecting deeply nested document");
        return Err(Error::TooDeep {
            depth,
            limit: config.max_depth,
        });
    }

    match Value::deserialize(doc)? {
        Value::Map(map) => {
            let mut mash = Mash::with_default_value(config.default_value.clone());
            mash.update(map);
            Ok(mash)
        }
        other => Err(Error::NotAnObject {
            found: other.kind(),
        }),
    }
}

fn depth_of(doc: &serde_json::Value) -> usize {
    match doc {
        serde_json::Value::Array(items) => 1 + items.iter().map(depth_of).max().unwrap_or(0),
        serde_json::Value::Object(map) => 1 + map.values().map(depth_of).max().unwrap_or(0),
        _ => 0,
    }
}

fn json_kind(doc: &serde_json::Value) -> &'static str {
    match doc {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mash_core::Key;

    #[test]
    fn test_depth_of() {
        assert_eq!(depth_of(&serde_json::json!(1)), 0);
        assert_eq!(depth_of(&serde_json::json!({})), 1);
        assert_eq!(depth_of(&serde_json::json!({"a": [{"b": 1}]})), 3);
    }

    #[test]
    fn test_load_object() {
        let mash = from_str(r#"{"user": {"id": 7}}"#).unwrap();
        let user = mash.get(Key::symbol("user"));
        assert_eq!(user.as_mash().unwrap().get(Key::symbol("id")), 7);
    }

    #[test]
    fn test_rejects_non_object() {
        let err = from_str("[1]").unwrap_err();
        assert!(matches!(err, Error::NotAnObject { found: "array" }));
    }

    #[test]
    fn test_rejects_too_deep() {
        let config = LoadConfig::default().with_max_depth(2);
        let err = from_str_with(r#"{"a": {"b": {"c": 1}}}"#, &config).unwrap_err();
        assert!(matches!(err, Error::TooDeep { depth: 3, limit: 2 }));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(from_str("{"), Err(Error::Json(_))));
    }

    #[test]
    fn test_default_reaches_nested_levels() {
        let config = LoadConfig::default().with_default("n/a");
        let mash = from_str_with(r#"{"a": {"b": 1}}"#, &config).unwrap();

        assert_eq!(mash.get("missing"), "n/a");
        let a = mash.get("a");
        assert_eq!(a.as_mash().unwrap().get("missing"), "n/a");
    }

    #[test]
    fn test_from_slice_and_reader() {
        let a = from_slice(br#"{"k": "v"}"#).unwrap();
        let b = from_reader(&br#"{"k": "v"}"#[..]).unwrap();
        assert_eq!(a, b);
        assert!(matches!(from_slice(b"1"), Err(Error::NotAnObject { found: "number" })));
    }

    #[test]
    fn test_with_variants_apply_config() {
        let config = LoadConfig::default().with_default(0).with_max_depth(1);
        let a = from_slice_with(br#"{"k": "v"}"#, &config).unwrap();
        let b = from_reader_with(&br#"{"k": "v"}"#[..], &config).unwrap();
        assert_eq!(a.get("missing"), 0);
        assert_eq!(b.get("missing"), 0);

        let nested = br#"{"k": {"v": 1}}"#;
        assert!(matches!(
            from_slice_with(nested, &config),
            Err(Error::TooDeep { depth: 2, limit: 1 })
        ));
        assert!(matches!(
            from_reader_with(&nested[..], &config),
            Err(Error::TooDeep { depth: 2, limit: 1 })
        ));
    }

    #[test]
    fn test_default_config_accepts_deep_documents() {
        let depth = 100;
        let text = format!("{}1{}", r#"{"a":"#.repeat(depth), "}".repeat(depth));
        let mash = from_str(&text).unwrap();
        assert!(mash.get("a").as_mash().is_some());
        assert!(depth < LoadConfig::default().max_depth);
    }

    #[test]
    fn test_to_string() {
        let mash = from_str(r#"{"a":[1,{"b":null}]}"#).unwrap();
        assert_eq!(to_string(&mash).unwrap(), r#"{"a":[1,{"b":null}]}"#);
        assert!(to_string_pretty(&mash).unwrap().contains('\n'));
    }
}
