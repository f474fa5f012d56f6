//! Text-based transformations using literal and regex replacement.

use super::Transform;
use crate::context::ConversionContext;
use crate::error::Result;
use regex::Regex;

/// Text-based transformation using string or regex replacement.
pub struct TextTransform {
    kind: TextTransformKind,
}

enum TextTransformKind {
    Replace { pattern: Regex, replacement: String },
    ReplaceLiteral { needle: String, replacement: String },
}

impl TextTransform {
    /// Creates a regex replacement transform.
    pub fn replace(pattern: &str, replacement: &str) -> Self {
        Self {
            kind: TextTransformKind::Replace {
                pattern: Regex::new(pattern).expect("invalid regex"),
                replacement: replacement.to_string(),
            },
        }
    }

    /// Creates a replacement transform from a pre-compiled regex.
    pub fn replace_regex(pattern: Regex, replacement: impl Into<String>) -> Self {
        Self {
            kind: TextTransformKind::Replace {
                pattern,
                replacement: replacement.into(),
            },
        }
    }

    /// Creates a literal string replacement transform.
    pub fn replace_literal(needle: &str, replacement: &str) -> Self {
        Self {
            kind: TextTransformKind::ReplaceLiteral {
                needle: needle.to_string(),
                replacement: replacement.to_string(),
            },
        }
    }
}

impl Transform for TextTransform {
    fn apply(&self, source: &str, _ctx: &ConversionContext) -> Result<String> {
        match &self.kind {
            TextTransformKind::Replace {
                pattern,
                replacement,
            } => Ok(pattern
                .replace_all(source, replacement.as_str())
                .into_owned()),
            TextTransformKind::ReplaceLiteral {
                needle,
                replacement,
            } => Ok(source.replace(needle, replacement)),
        }
    }

    fn describe(&self) -> String {
        match &self.kind {
            TextTransformKind::Replace {
                pattern,
                replacement,
            } => format!(
                "Replace pattern '{}' with '{}'",
                pattern.as_str(),
                replacement
            ),
            TextTransformKind::ReplaceLiteral {
                needle,
                replacement,
            } => format!("Replace literal '{}' with '{}'", needle, replacement),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_replacement_hits_every_occurrence() {
        let t = TextTransform::replace_literal("old", "new");
        let ctx = ConversionContext::new(0);
        assert_eq!(t.apply("old old old", &ctx).unwrap(), "new new new");
    }

    #[test]
    fn pattern_replacement_supports_capture_groups() {
        let t = TextTransform::replace(r"get\((\w+)\)", "query.$1");
        let ctx = ConversionContext::new(0);
        assert_eq!(t.apply("get(id)", &ctx).unwrap(), "query.id");
    }
}
