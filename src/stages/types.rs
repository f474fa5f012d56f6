//! Removal of static-typing constructs from the document text.

use crate::context::ConversionContext;
use crate::error::Result;
use crate::transform::{TextTransform, Transform};

/// Strips type annotations, interface and type-alias declarations, generic
/// parameter lists, and `as` casts.
///
/// Annotation removal must precede generic-list removal so annotation syntax
/// is never mis-stripped as a generic list. Interface bodies are matched up
/// to the first closing brace; nested braces are not handled. The minimal
/// generic-list pattern also swallows bare attribute-less template open tags
/// (`<div>`), a hazard carried over from the source dialect's converter.
pub struct TypeAnnotationStripper {
    rules: Vec<TextTransform>,
}

impl TypeAnnotationStripper {
    pub fn new() -> Self {
        let rules = vec![
            TextTransform::replace(r":\s*React\.FC\b", ""),
            TextTransform::replace(r":\s*React\.ReactNode\b", ""),
            TextTransform::replace(r":\s*(?:string|number|boolean|any|void)\b", ""),
            TextTransform::replace(r":\s*Date\b", ""),
            // Hook generics carry arbitrary type expressions, so they are
            // stripped before the minimal single-identifier rule below.
            TextTransform::replace(r"\b(useState|useRef|useEffect)<[^>]+>", "$1"),
            TextTransform::replace(r"\binterface\s+\w+\s*\{[^}]*\}", ""),
            TextTransform::replace(r"\btype\s+\w+\s*=\s*[^;]+;", ""),
            TextTransform::replace(r"<\w+>", ""),
            TextTransform::replace(r"\bas\s+\w+", ""),
        ];
        Self { rules }
    }
}

impl Default for TypeAnnotationStripper {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for TypeAnnotationStripper {
    fn apply(&self, source: &str, ctx: &ConversionContext) -> Result<String> {
        let mut result = source.to_string();
        for rule in &self.rules {
            result = rule.apply(&result, ctx)?;
        }
        Ok(result)
    }

    fn describe(&self) -> String {
        "Strip type annotations, interfaces, type aliases, generics and casts".to_string()
    }
}
