//! Per-document conversion context.

/// Immutable context for one document conversion.
///
/// `depth` is the number of directory levels between the destination document
/// and the project root; import-rewriting rules derive the relative path
/// prefix from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionContext {
    depth: usize,
}

impl ConversionContext {
    /// Creates a context for a destination at the given nesting depth.
    pub fn new(depth: usize) -> Self {
        Self { depth }
    }

    /// Returns the nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the directory-up prefix for this depth: `"../"` repeated
    /// `depth` times, empty at depth zero.
    pub fn relative_prefix(&self) -> String {
        "../".repeat(self.depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_is_empty_at_depth_zero() {
        assert_eq!(ConversionContext::new(0).relative_prefix(), "");
    }

    #[test]
    fn prefix_repeats_per_level() {
        assert_eq!(ConversionContext::new(1).relative_prefix(), "../");
        assert_eq!(ConversionContext::new(3).relative_prefix(), "../../../");
    }

    #[test]
    fn prefix_length_scales_with_depth() {
        for depth in 0..8 {
            let prefix = ConversionContext::new(depth).relative_prefix();
            assert_eq!(prefix.len(), depth * 3);
            assert!(prefix.chars().filter(|&c| c == '/').count() == depth);
        }
    }
}
