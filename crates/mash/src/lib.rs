//! # Mash
//!
//! A map that lets callers write `params[:key]` or `params["key"]` and reach
//! the same entry, at every level of a nested document.
//!
//! ## Overview
//!
//! - **Key canonicalization**: symbol keys are stored as text.
//! - **Recursive normalization**: nested plain maps, including maps inside
//!   arrays, become `Mash`es when written.
//! - **Defaults**: a miss reads as nothing, a fixed value, or the result of
//!   a callable. Nested maps inherit the default.
//!
//! ## Usage
//!
//! ```rust
//! use mash::{json, Key};
//!
//! let params = json::from_str(r#"{"user": {"name": "ada"}}"#).unwrap();
//! let user = params.get(Key::symbol("user"));
//! assert_eq!(user.as_mash().unwrap().get("name"), "ada");
//! assert!(params.fetch(Key::symbol("missing")).is_err());
//! ```
//!
//! ## Re-exports
//!
//! - `mash::core` - Core primitives (Mash, Key, Value, ...)

pub mod config;
pub mod error;
pub mod json;

pub use mash_core as core;

pub use config::LoadConfig;
pub use error::{Error, Result};

pub use mash_core::{
    mash, plain, DefaultFn, DefaultValue, Key, KeyedContainer, Mash, MashError, PlainMap, Symbol,
    Value,
};
