//! Substitution of semantic design-token class names with literal utility classes.

use crate::context::ConversionContext;
use crate::error::Result;
use crate::transform::Transform;

/// Fixed token table, applied in order.
///
/// Keys that share a prefix with another key (`text-primary` vs
/// `text-primary-foreground`, `text-destructive` vs
/// `text-destructive-foreground`) list the longer key first; a shorter key
/// replaced first would corrupt the substring the longer key matches.
pub const STYLE_TOKENS: [(&str, &str); 19] = [
    ("bg-card", "bg-white"),
    ("text-card-foreground", "text-gray-900"),
    ("border-border", "border-gray-200"),
    ("bg-background", "bg-gray-50"),
    ("text-foreground", "text-gray-900"),
    ("bg-muted", "bg-gray-100"),
    ("text-muted-foreground", "text-gray-600"),
    ("bg-primary", "bg-green-500"),
    ("text-primary-foreground", "text-white"),
    ("text-primary", "text-green-600"),
    ("border-input", "border-gray-300"),
    ("ring-ring", "ring-green-500"),
    ("bg-secondary", "bg-gray-100"),
    ("text-secondary-foreground", "text-gray-900"),
    ("bg-accent", "bg-green-50"),
    ("text-accent-foreground", "text-green-900"),
    ("bg-destructive", "bg-red-500"),
    ("text-destructive-foreground", "text-white"),
    ("text-destructive", "text-red-600"),
];

/// Replaces semantic design tokens with literal utility class names.
///
/// Plain substring replacement, not confined to class-attribute contexts.
pub struct StyleTokenMapper {
    table: &'static [(&'static str, &'static str)],
}

impl StyleTokenMapper {
    pub fn new() -> Self {
        Self {
            table: &STYLE_TOKENS,
        }
    }
}

impl Default for StyleTokenMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for StyleTokenMapper {
    fn apply(&self, source: &str, _ctx: &ConversionContext) -> Result<String> {
        let mut result = source.to_string();
        for (token, class) in self.table {
            result = result.replace(token, class);
        }
        Ok(result)
    }

    fn describe(&self) -> String {
        format!(
            "Map {} semantic design tokens to utility classes",
            self.table.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remap(input: &str) -> String {
        StyleTokenMapper::new()
            .apply(input, &ConversionContext::new(0))
            .unwrap()
    }

    #[test]
    fn maps_simple_tokens() {
        assert_eq!(
            remap(r#"className="bg-card border-border""#),
            r#"className="bg-white border-gray-200""#
        );
    }

    #[test]
    fn longer_key_wins_over_its_prefix() {
        assert_eq!(
            remap("text-primary text-primary-foreground"),
            "text-green-600 text-white"
        );
        assert_eq!(
            remap("text-destructive-foreground text-destructive"),
            "text-white text-red-600"
        );
        assert!(!remap("text-primary-foreground").contains("text-green-600-foreground"));
    }

    #[test]
    fn table_order_never_lets_an_earlier_key_shadow_a_later_one() {
        for (i, (earlier, _)) in STYLE_TOKENS.iter().enumerate() {
            for (later, _) in &STYLE_TOKENS[i + 1..] {
                assert!(
                    !later.contains(earlier),
                    "'{earlier}' would corrupt later key '{later}'"
                );
            }
        }
    }

    #[test]
    fn replacement_is_not_attribute_scoped() {
        // Substring behavior is part of the contract: tokens are replaced
        // anywhere they occur, not only inside class attributes.
        assert_eq!(remap("// uses bg-muted here"), "// uses bg-gray-100 here");
    }
}
