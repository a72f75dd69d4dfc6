//! Block tree → markdown source.
//!
//! The inverse of parsing for this crate's purposes: every block kept its
//! literal text, so serialization is a join of the surviving blocks with
//! blank lines between them.

use crate::node::{Document, Node};

/// Serialize a root node back to markdown text.
///
/// Each block's raw text is trimmed of surrounding whitespace (the script
/// aggregator stores its node with leading and trailing newlines) and
/// blocks are separated by a single blank line. Non-empty output ends with
/// a trailing newline.
#[must_use]
pub fn to_markdown(root: &Node) -> String {
    let blocks: Vec<&str> = root
        .children
        .iter()
        .filter_map(|child| child.raw.as_deref())
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .collect();

    let mut out = blocks.join("\n\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

impl Document {
    /// Serialize the document tree back to markdown text.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        to_markdown(&self.tree)
    }
}
