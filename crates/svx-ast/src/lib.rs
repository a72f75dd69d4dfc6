//! Block-level document tree for Svelte markdown preprocessing.
//!
//! This crate owns the data model the tag-rewriting pipeline operates on:
//!
//! - [`Node`] / [`NodeKind`]: a shallow tree of top-level markdown blocks.
//!   Only `Root`, `Frontmatter`, and `RawMarkup` carry meaning for the
//!   pipeline; every other block kind is opaque and passes through unchanged.
//! - [`Document`]: a parsed tree plus its per-run side channels — the
//!   [`ScriptRequirements`] accumulator that plugins write into, and the
//!   [`Diagnostic`] list for non-fatal tag rejections.
//! - [`Document::parse`] / [`Document::to_markdown`]: the front and back
//!   ends. Parsing slices top-level block spans out of the source with
//!   pulldown-cmark, so every block keeps its literal text.
//!
//! # Example
//!
//! ```
//! use svx_ast::{Document, NodeKind};
//!
//! let doc = Document::parse("---\ntitle: Home\n---\n\n<Gallery src=\"g.json\" />\n");
//! assert_eq!(doc.tree.children[0].kind, NodeKind::Frontmatter);
//! assert_eq!(doc.tree.children[1].kind, NodeKind::RawMarkup);
//! ```

mod diagnostic;
mod node;
mod parse;
mod requirements;
mod write;

pub use diagnostic::Diagnostic;
pub use node::{Document, Node, NodeKind};
pub use parse::parse_tree;
pub use requirements::{OrderedSet, ScriptRequirements};
pub use write::to_markdown;
