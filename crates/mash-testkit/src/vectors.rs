//! Golden test vectors for normalization.
//!
//! Each vector loads a JSON document, reads values by symbol paths, and
//! dumps the result. Any implementation of the loader must agree on every
//! lookup and on the dumped document.

use mash::{json, Key, LoadConfig, Mash, Value};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Fixed default installed on the loaded root, as JSON.
    pub default: Option<&'static str>,
    /// Input document.
    pub input: &'static str,
    /// Symbol paths to read, with the expected value as JSON.
    pub lookups: &'static [(&'static [&'static str], &'static str)],
    /// Expected dump of the loaded document.
    pub output: &'static str,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "flat params",
            default: None,
            input: r#"{"id": 1, "name": "ada"}"#,
            lookups: &[(&["id"], "1"), (&["name"], r#""ada""#), (&["missing"], "null")],
            output: r#"{"id": 1, "name": "ada"}"#,
        },
        GoldenVector {
            name: "nested objects",
            default: None,
            input: r#"{"post": {"author": {"name": "grace"}}}"#,
            lookups: &[
                (&["post", "author", "name"], r#""grace""#),
                (&["post", "author"], r#"{"name": "grace"}"#),
            ],
            output: r#"{"post": {"author": {"name": "grace"}}}"#,
        },
        GoldenVector {
            name: "objects inside arrays",
            default: None,
            input: r#"{"tags": [{"name": "a"}, {"name": "b"}], "ids": [1, 2]}"#,
            lookups: &[(&["ids"], "[1, 2]")],
            output: r#"{"tags": [{"name": "a"}, {"name": "b"}], "ids": [1, 2]}"#,
        },
        GoldenVector {
            name: "default reaches nested levels",
            default: Some("0"),
            input: r#"{"stats": {"views": 10}}"#,
            lookups: &[
                (&["stats", "views"], "10"),
                (&["stats", "likes"], "0"),
                (&["absent"], "0"),
            ],
            output: r#"{"stats": {"views": 10}}"#,
        },
        GoldenVector {
            name: "empty document",
            default: None,
            input: "{}",
            lookups: &[(&["anything"], "null")],
            output: "{}",
        },
    ]
}

/// Load the vector's input with its configured default.
pub fn load_vector(vector: &GoldenVector) -> Result<Mash, String> {
    let mut config = LoadConfig::default();
    if let Some(default) = vector.default {
        let value: Value = serde_json::from_str(default).map_err(|e| e.to_string())?;
        config = config.with_default(value);
    }
    json::from_str_with(vector.input, &config).map_err(|e| e.to_string())
}

/// Read `path` by symbol keys, descending through nested maps.
pub fn read_path(mash: &Mash, path: &[&str]) -> Result<Value, String> {
    let (last, parents) = path
        .split_last()
        .ok_or_else(|| "empty path".to_string())?;

    let mut current = mash.clone();
    for segment in parents {
        current = match current.get(Key::symbol(*segment)) {
            Value::Mash(nested) => nested,
            other => return Err(format!("{} is a {}, not a map", segment, other.kind())),
        };
    }
    Ok(current.get(Key::symbol(*last)))
}

/// Check one vector, returning a description of the first mismatch.
pub fn verify_vector(vector: &GoldenVector) -> Result<(), String> {
    let mash = load_vector(vector)?;

    for (path, expected) in vector.lookups {
        let actual = serde_json::to_value(read_path(&mash, path)?).map_err(|e| e.to_string())?;
        let expected: serde_json::Value =
            serde_json::from_str(expected).map_err(|e| e.to_string())?;
        if actual != expected {
            return Err(format!("{:?}: expected {}, got {}", path, expected, actual));
        }
    }

    let dumped: serde_json::Value = serde_json::to_value(&mash).map_err(|e| e.to_string())?;
    let expected: serde_json::Value =
        serde_json::from_str(vector.output).map_err(|e| e.to_string())?;
    if dumped != expected {
        return Err(format!("dump: expected {}, got {}", expected, dumped));
    }

    Ok(())
}

/// Verify every vector, returning `(name, mismatch)` for each failure.
pub fn verify_all_vectors() -> Vec<(&'static str, String)> {
    all_vectors()
        .iter()
        .filter_map(|vector| verify_vector(vector).err().map(|e| (vector.name, e)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_vectors_pass() {
        let failures = verify_all_vectors();
        assert!(failures.is_empty(), "failing vectors: {:?}", failures);
    }

    #[test]
    fn test_vector_names_unique() {
        let vectors = all_vectors();
        let mut names: Vec<_> = vectors.iter().map(|v| v.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), vectors.len());
    }

    #[test]
    fn test_read_path_through_scalar_fails() {
        let mash = mash::mash! { "a" => 1 };
        assert!(read_path(&mash, &["a", "b"]).is_err());
        assert!(read_path(&mash, &[]).is_err());
    }

    #[test]
    fn test_mismatch_is_reported() {
        let vector = GoldenVector {
            name: "wrong",
            default: None,
            input: r#"{"a": 1}"#,
            lookups: &[(&["a"], "2")],
            output: r#"{"a": 1}"#,
        };
        assert!(verify_vector(&vector).is_err());
    }
}
