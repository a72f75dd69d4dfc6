//! Markdown source → shallow block tree.
//!
//! The pipeline never needs inline structure: tag plugins inspect whole
//! raw-markup blocks and everything else passes through verbatim. So the
//! parser only walks pulldown-cmark's top-level block events and slices
//! each block's literal text straight out of the source.

use pulldown_cmark::{Event, Options, Parser, Tag};

use crate::node::{Document, Node, NodeKind};

impl Document {
    /// Parse markdown source into a document.
    ///
    /// A leading `---` fenced metadata block becomes the sole
    /// [`NodeKind::Frontmatter`] child; HTML blocks (custom component tags,
    /// `<script>` blocks) become [`NodeKind::RawMarkup`]; all other
    /// top-level blocks keep their literal text under an opaque kind.
    #[must_use]
    pub fn parse(source: &str) -> Self {
        Self::new(parse_tree(source))
    }
}

/// Parse markdown source into a root node of top-level blocks.
#[must_use]
pub fn parse_tree(source: &str) -> Node {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_YAML_STYLE_METADATA_BLOCKS);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(source, options);

    let mut children = Vec::new();
    let mut depth = 0usize;
    let mut block_start = 0usize;
    let mut block_kind = NodeKind::Other;

    for (event, range) in parser.into_offset_iter() {
        match event {
            Event::Start(tag) => {
                if depth == 0 {
                    block_start = range.start;
                    block_kind = kind_of(&tag);
                }
                depth += 1;
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    let raw = source[block_start..range.end].trim_end();
                    children.push(Node::block(block_kind, raw));
                }
            }
            // Thematic breaks are leaf events without a Start/End pair.
            Event::Rule if depth == 0 => {
                children.push(Node::block(NodeKind::Rule, source[range].trim_end()));
            }
            _ => {}
        }
    }

    Node::root(children)
}

fn kind_of(tag: &Tag<'_>) -> NodeKind {
    match tag {
        Tag::MetadataBlock(_) => NodeKind::Frontmatter,
        Tag::HtmlBlock => NodeKind::RawMarkup,
        Tag::Paragraph => NodeKind::Paragraph,
        Tag::Heading { .. } => NodeKind::Heading,
        Tag::CodeBlock(_) => NodeKind::CodeFence,
        Tag::List(_) => NodeKind::List,
        Tag::BlockQuote(_) => NodeKind::BlockQuote,
        Tag::Table(_) => NodeKind::Table,
        _ => NodeKind::Other,
    }
}
