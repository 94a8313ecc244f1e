//! Parser configuration.

use jsonlit_syntax::JsonOptions;

/// Deepest nesting of objects, arrays, constructors and chained
/// properties accepted before a parse is abandoned.
pub const MAX_DEPTH: usize = 46;

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Grammar profile.
    pub options: JsonOptions,
    /// Nesting limit, never above `MAX_DEPTH`.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            options: JsonOptions::Loose,
            max_depth: MAX_DEPTH,
        }
    }
}

impl ParserConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grammar profile.
    pub fn options(mut self, options: JsonOptions) -> Self {
        self.options = options;
        self
    }

    /// Shorthand for choosing strict or loose mode.
    pub fn strict(self, strict: bool) -> Self {
        self.options(if strict {
            JsonOptions::Strict
        } else {
            JsonOptions::Loose
        })
    }

    /// Lower the nesting limit. Values above `MAX_DEPTH` are clamped.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth.min(MAX_DEPTH);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ParserConfig::default();
        assert_eq!(config.options, JsonOptions::Loose);
        assert_eq!(config.max_depth, MAX_DEPTH);
    }

    #[test]
    fn test_builder() {
        let config = ParserConfig::new().strict(true).max_depth(8);
        assert!(config.options.is_strict());
        assert_eq!(config.max_depth, 8);
    }

    #[test]
    fn test_max_depth_is_clamped() {
        let config = ParserConfig::new().max_depth(10_000);
        assert_eq!(config.max_depth, MAX_DEPTH);
    }
}
