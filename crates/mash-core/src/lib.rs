//! # Mash Core
//!
//! Pure primitives for Mash: a map whose entries can be addressed by symbol
//! or by text interchangeably, with the same rule applied to nested maps.
//!
//! This crate contains no I/O. It is pure computation over in-memory
//! structures.
//!
//! ## Key Types
//!
//! - [`Mash`] - The key-normalizing map
//! - [`Key`] / [`Symbol`] - What a container is indexed by
//! - [`Value`] - What a container holds
//! - [`PlainMap`] - The host mapping, stored verbatim
//! - [`DefaultValue`] - What a miss reads as
//! - [`KeyedContainer`] - The capability set shared by both maps
//!
//! ## Normalization
//!
//! Symbol keys are stored as text; nested plain maps become `Mash`es on
//! write. See the [`map`] module.

pub mod container;
pub mod default;
pub mod error;
mod macros;
pub mod map;
pub mod serialize;
pub mod types;
pub mod value;

pub use container::KeyedContainer;
pub use default::{DefaultFn, DefaultValue};
pub use error::{MashError, Result};
pub use map::Mash;
pub use types::{Key, Symbol};
pub use value::{PlainMap, Value};
