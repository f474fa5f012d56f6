//! Entity escaping of apostrophe contractions in human-readable text.

use crate::context::ConversionContext;
use crate::error::Result;
use crate::transform::Transform;

/// Contraction vocabulary, both capitalizations, replaced literally.
const CONTRACTIONS: [&str; 16] = [
    "don't", "Don't", "you're", "You're", "we'll", "We'll", "it's", "It's", "you'll", "You'll",
    "haven't", "Haven't", "doesn't", "Doesn't", "let's", "Let's",
];

/// Replaces the apostrophe in a fixed contraction vocabulary with `&apos;`.
///
/// Matches are literal substrings, not word-bounded. Once escaped, the
/// apostrophe is gone and the word no longer matches, so a second pass over
/// this stage's own output changes nothing.
pub struct EntityEscaper {
    table: Vec<(String, String)>,
}

impl EntityEscaper {
    pub fn new() -> Self {
        let table = CONTRACTIONS
            .iter()
            .map(|word| (word.to_string(), word.replace('\'', "&apos;")))
            .collect();
        Self { table }
    }
}

impl Default for EntityEscaper {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for EntityEscaper {
    fn apply(&self, source: &str, _ctx: &ConversionContext) -> Result<String> {
        let mut result = source.to_string();
        for (word, escaped) in &self.table {
            result = result.replace(word, escaped);
        }
        Ok(result)
    }

    fn describe(&self) -> String {
        format!("Escape apostrophes in {} contractions", CONTRACTIONS.len())
    }
}
