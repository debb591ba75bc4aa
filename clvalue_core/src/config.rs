//! Codec configuration.

use serde::{Deserialize, Serialize};

/// Default bound on descriptor nesting.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Default bound on zero-width collection elements in one decoded value.
pub const DEFAULT_MAX_ZERO_WIDTH_ELEMENTS: usize = 4096;

/// Tunables for a [`Codec`](crate::Codec).
///
/// Loadable from a host's own configuration file; missing fields take
/// their defaults.
///
/// ```
/// use clvalue_core::CodecConfig;
///
/// let config: CodecConfig = serde_json::from_str(r#"{ "max_depth": 8 }"#).unwrap();
/// assert_eq!(config, CodecConfig::default().with_max_depth(8));
///
/// let config: CodecConfig = serde_json::from_str("{}").unwrap();
/// assert_eq!(config.max_depth, 32);
/// assert_eq!(config.max_zero_width_elements, 4096);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Maximum nesting depth of a descriptor.
    ///
    /// Simple descriptors have depth 0; each composite wrapper adds one.
    /// Decode input may come from the network, so this bounds recursion.
    pub max_depth: usize,

    /// Maximum number of `List` or `Map` elements, summed over one decoded
    /// value, whose type encodes to zero bytes (`Unit`, `ByteArray(0)`,
    /// tuples of those).
    ///
    /// Other element counts are bounded by the input length.
    pub max_zero_width_elements: usize,
}

impl CodecConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_zero_width_elements: DEFAULT_MAX_ZERO_WIDTH_ELEMENTS,
        }
    }

    /// Set the maximum descriptor nesting depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the bound on zero-width collection elements.
    #[must_use]
    pub const fn with_max_zero_width_elements(mut self, max: usize) -> Self {
        self.max_zero_width_elements = max;
        self
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::new()
    }
}
