//! Loader configuration.

use mash_core::{DefaultValue, Value};

/// Configuration for loading documents into a [`Mash`](mash_core::Mash).
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// Deepest nesting of arrays and objects accepted. The top-level object
    /// counts as depth 1.
    pub max_depth: usize,
    /// Default installed on the loaded root. Nested maps inherit it.
    pub default_value: DefaultValue,
}

impl LoadConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_default_value(mut self, default_value: DefaultValue) -> Self {
        self.default_value = default_value;
        self
    }

    /// Shorthand for a fixed default.
    pub fn with_default(self, value: impl Into<Value>) -> Self {
        self.with_default_value(DefaultValue::fixed(value))
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            max_depth: 128,
            default_value: DefaultValue::Absent,
        }
    }
}
