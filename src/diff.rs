//! Rendering of dry-run change previews.

use crate::batch::{backup_path, FileChange};
use similar::{ChangeTag, TextDiff};
use std::fmt::Write;

/// Renders one destination change as a unified-diff preview.
///
/// A destination that does not yet exist is labelled `new file` and listed
/// in full; a pre-existing destination is labelled `overwrite`, names the
/// backup path its prior content would move to, and diffs it against the
/// freshly transformed text.
pub fn render_preview(change: &FileChange) -> String {
    let mut output = String::new();

    if change.original.is_empty() {
        writeln!(&mut output, "new file: {}", change.path.display()).unwrap();
        for line in change.transformed.lines() {
            writeln!(&mut output, "+{line}").unwrap();
        }
        return output;
    }

    writeln!(
        &mut output,
        "overwrite: {} (previous content to {})",
        change.path.display(),
        backup_path(&change.path).display()
    )
    .unwrap();

    let diff = TextDiff::from_lines(change.original.as_str(), change.transformed.as_str());
    for group in diff.grouped_ops(3) {
        for op in &group {
            for entry in diff.iter_changes(op) {
                let sign = match entry.tag() {
                    ChangeTag::Delete => '-',
                    ChangeTag::Insert => '+',
                    ChangeTag::Equal => ' ',
                };
                write!(&mut output, "{sign}{}", entry.value()).unwrap();
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn change(original: &str, transformed: &str) -> FileChange {
        FileChange {
            path: PathBuf::from("pages/admin/users.js"),
            original: original.to_string(),
            transformed: transformed.to_string(),
        }
    }

    #[test]
    fn new_destination_is_listed_in_full() {
        let preview = render_preview(&change("", "const a = 1;\nconst b = 2;\n"));
        assert!(preview.starts_with("new file: pages/admin/users.js"));
        assert!(preview.contains("+const a = 1;"));
        assert!(preview.contains("+const b = 2;"));
    }

    #[test]
    fn overwrite_diffs_against_existing_content_and_names_the_backup() {
        let preview = render_preview(&change("a\nold\nb\n", "a\nnew\nb\n"));
        assert!(preview.contains("overwrite: pages/admin/users.js"));
        assert!(preview.contains("pages/admin/users.js.backup"));
        assert!(preview.contains("-old"));
        assert!(preview.contains("+new"));
    }
}
