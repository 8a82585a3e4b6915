//! Limits applied while parsing.

/// Default cap on expression nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options accepted by [`crate::parse_with_options`].
///
/// ```rust
/// use filterlang::{ParseOptions, parse_with_options};
///
/// let options = ParseOptions::default().with_max_depth(8);
/// assert!(parse_with_options("((((((((((1))))))))))", &options).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum nesting of sub-expressions before the parse is abandoned.
    pub max_depth: usize,
    /// Maximum source length in bytes; `None` accepts any length.
    pub max_source_len: Option<usize>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_source_len: None,
        }
    }
}

impl ParseOptions {
    /// Replace the nesting limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Limit the accepted source length.
    #[must_use]
    pub const fn with_max_source_len(mut self, limit: usize) -> Self {
        self.max_source_len = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_permissive() {
        let options = ParseOptions::default();
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(options.max_source_len, None);
    }

    #[test]
    fn builders_override_fields() {
        let options = ParseOptions::default()
            .with_max_depth(4)
            .with_max_source_len(64);
        assert_eq!(
            options,
            ParseOptions {
                max_depth: 4,
                max_source_len: Some(64),
            }
        );
    }
}
