//! Renaming of the fixed UI component vocabulary in template markup.

use crate::context::ConversionContext;
use crate::error::Result;
use crate::transform::{TextTransform, Transform};
use regex::Regex;

/// One renameable UI component.
///
/// `closing_tag` is false for components only ever written self-closing
/// (Input), which therefore need no closing-tag rewrite.
pub struct UiComponent {
    pub name: &'static str,
    pub closing_tag: bool,
}

impl UiComponent {
    /// The visually-distinct variant name used in the target dialect.
    pub fn renamed(&self) -> String {
        format!("{}Green", self.name)
    }
}

/// The fixed component vocabulary shared by import rewriting and tag renaming.
pub const UI_COMPONENTS: [UiComponent; 5] = [
    UiComponent {
        name: "Button",
        closing_tag: true,
    },
    UiComponent {
        name: "Input",
        closing_tag: false,
    },
    UiComponent {
        name: "Card",
        closing_tag: true,
    },
    UiComponent {
        name: "Badge",
        closing_tag: true,
    },
    UiComponent {
        name: "Modal",
        closing_tag: true,
    },
];

/// Renames component tags in template markup to their Green variants.
///
/// Opening tags are matched as `<Name` followed by a word boundary so that
/// attributed and self-closing forms are caught while longer identifiers
/// sharing the prefix are not. Must run after import rewriting so the two
/// stages agree on the variant names without touching each other's matches.
pub struct ComponentRenameEngine {
    rules: Vec<TextTransform>,
}

impl ComponentRenameEngine {
    pub fn new() -> Self {
        let mut rules = Vec::new();
        for component in &UI_COMPONENTS {
            let renamed = component.renamed();
            let open = Regex::new(&format!(r"<{}\b", component.name)).expect("invalid regex");
            rules.push(TextTransform::replace_regex(open, format!("<{renamed}")));
            if component.closing_tag {
                rules.push(TextTransform::replace_literal(
                    &format!("</{}>", component.name),
                    &format!("</{renamed}>"),
                ));
            }
        }
        Self { rules }
    }
}

impl Default for ComponentRenameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for ComponentRenameEngine {
    fn apply(&self, source: &str, ctx: &ConversionContext) -> Result<String> {
        let mut result = source.to_string();
        for rule in &self.rules {
            result = rule.apply(&result, ctx)?;
        }
        Ok(result)
    }

    fn describe(&self) -> String {
        "Rename UI component tags to their Green variants".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rename(input: &str) -> String {
        ComponentRenameEngine::new()
            .apply(input, &ConversionContext::new(0))
            .unwrap()
    }

    #[test]
    fn renames_attributed_open_and_close_tags() {
        assert_eq!(
            rename(r#"<Button className="x">Go</Button>"#),
            r#"<ButtonGreen className="x">Go</ButtonGreen>"#
        );
    }

    #[test]
    fn renames_self_closing_input() {
        assert_eq!(
            rename(r#"<Input value={name} onChange={set} />"#),
            r#"<InputGreen value={name} onChange={set} />"#
        );
    }

    #[test]
    fn word_boundary_protects_longer_identifiers() {
        assert_eq!(rename("<ButtonGroup>"), "<ButtonGroup>");
        assert_eq!(rename("<Buttons />"), "<Buttons />");
    }

    #[test]
    fn renames_every_vocabulary_entry() {
        let input = "<Card><Badge>new</Badge><Modal open>x</Modal></Card>";
        assert_eq!(
            rename(input),
            "<CardGreen><BadgeGreen>new</BadgeGreen><ModalGreen open>x</ModalGreen></CardGreen>"
        );
    }
}
