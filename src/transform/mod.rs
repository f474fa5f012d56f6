//! Transform primitives for ordered text rewriting.

pub mod text;

pub use text::TextTransform;

use crate::context::ConversionContext;
use crate::error::Result;

/// A text transformation applied to one document.
pub trait Transform: Send + Sync {
    /// Applies the transformation to the given source text.
    fn apply(&self, source: &str, ctx: &ConversionContext) -> Result<String>;

    /// Returns a description of the transformation.
    fn describe(&self) -> String;
}

/// An ordered pipeline of transformations.
///
/// Order is part of the contract: later transforms may rely on earlier ones
/// having already run, so the pipeline folds the document through its stages
/// in insertion order.
#[derive(Default)]
pub struct Pipeline {
    transforms: Vec<Box<dyn Transform>>,
}

impl Pipeline {
    /// Creates an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a regex pattern replacement.
    pub fn replace_pattern(mut self, pattern: &str, replacement: &str) -> Self {
        self.transforms
            .push(Box::new(TextTransform::replace(pattern, replacement)));
        self
    }

    /// Adds a literal string replacement.
    pub fn replace_literal(mut self, needle: &str, replacement: &str) -> Self {
        self.transforms
            .push(Box::new(TextTransform::replace_literal(
                needle,
                replacement,
            )));
        self
    }

    /// Adds a custom transformation stage.
    pub fn stage<T: Transform + 'static>(mut self, transform: T) -> Self {
        self.transforms.push(Box::new(transform));
        self
    }

    /// Folds the source text through all transforms in order.
    pub fn apply(&self, source: &str, ctx: &ConversionContext) -> Result<String> {
        let mut result = source.to_string();
        for transform in &self.transforms {
            result = transform.apply(&result, ctx)?;
        }
        Ok(result)
    }

    /// Returns descriptions of all transforms, in application order.
    pub fn describe(&self) -> Vec<String> {
        self.transforms.iter().map(|t| t.describe()).collect()
    }

    /// Returns the number of transforms.
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Returns true if there are no transforms.
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_applies_in_insertion_order() {
        let pipeline = Pipeline::new()
            .replace_literal("a", "b")
            .replace_literal("b", "c");

        let ctx = ConversionContext::new(0);
        assert_eq!(pipeline.apply("a", &ctx).unwrap(), "c");
    }

    #[test]
    fn empty_pipeline_is_identity() {
        let pipeline = Pipeline::new();
        let ctx = ConversionContext::new(2);
        assert_eq!(pipeline.apply("unchanged", &ctx).unwrap(), "unchanged");
        assert!(pipeline.is_empty());
    }
}
