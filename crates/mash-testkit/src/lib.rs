//! # Mash Testkit
//!
//! Testing utilities for Mash.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: JSON documents with expected symbol-path lookups and dumps
//! - **Generators**: Proptest strategies for keys, values and maps
//! - **Fixtures**: Sample request parameters and instrumented defaults
//!
//! ## Golden Vectors
//!
//! ```rust
//! use mash_testkit::vectors::verify_all_vectors;
//!
//! assert!(verify_all_vectors().is_empty());
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use mash_testkit::generators::plain_map;
//! use mash_testkit::fixtures::is_normalized;
//!
//! proptest! {
//!     #[test]
//!     fn import_normalizes(source in plain_map()) {
//!         prop_assert!(is_normalized(&mash_core::Mash::from_mapping(source)));
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{is_normalized, request_params, CountingDefault};
pub use generators::{key, plain_map, value};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
