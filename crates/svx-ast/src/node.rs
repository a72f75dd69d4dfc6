//! Document tree nodes and the per-document processing state.

use std::path::PathBuf;

use crate::diagnostic::Diagnostic;
use crate::requirements::ScriptRequirements;

/// Kind of a top-level document block.
///
/// The pipeline only inspects `Root`, `Frontmatter`, and `RawMarkup`.
/// Every other kind is carried through untouched, raw text included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// The document root. Its children are the top-level blocks.
    Root,
    /// Leading metadata block fenced by `---` lines. At most one, and only
    /// valid as the first child of the root.
    Frontmatter,
    /// A raw markup block: custom component tags (`<Gallery ... />`) and
    /// `<script>` blocks both land here.
    RawMarkup,
    Paragraph,
    Heading,
    CodeFence,
    List,
    BlockQuote,
    Table,
    Rule,
    /// Any other block construct. Opaque passthrough.
    Other,
}

/// A node in the parsed document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Block kind discriminator.
    pub kind: NodeKind,
    /// Literal source text of the block. Present for every parsed block;
    /// absent on the root.
    pub raw: Option<String>,
    /// Child nodes, owned by this node. Empty means "no children".
    pub children: Vec<Node>,
}

impl Node {
    /// Create a root node with the given top-level blocks.
    #[must_use]
    pub fn root(children: Vec<Node>) -> Self {
        Self {
            kind: NodeKind::Root,
            raw: None,
            children,
        }
    }

    /// Create a frontmatter node from its literal fenced text.
    #[must_use]
    pub fn frontmatter(raw: impl Into<String>) -> Self {
        Self::block(NodeKind::Frontmatter, raw)
    }

    /// Create a raw markup node.
    #[must_use]
    pub fn raw_markup(raw: impl Into<String>) -> Self {
        Self::block(NodeKind::RawMarkup, raw)
    }

    /// Create a leaf block of the given kind.
    #[must_use]
    pub fn block(kind: NodeKind, raw: impl Into<String>) -> Self {
        Self {
            kind,
            raw: Some(raw.into()),
            children: Vec::new(),
        }
    }

    /// Literal text of this block, or `""` when absent.
    #[must_use]
    pub fn raw_text(&self) -> &str {
        self.raw.as_deref().unwrap_or_default()
    }
}

/// A document moving through the pipeline: the block tree plus the
/// side channels plugins communicate through.
///
/// The requirement registry is created lazily by the first
/// [`register_requirements`](Self::register_requirements) call and stays
/// `None` for documents where no plugin matched anything — readers treat
/// that as an empty registry, never as an error.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// The block tree. Mutated in place by each pipeline stage.
    pub tree: Node,
    /// Source file path, when the document came from disk.
    pub source_path: Option<PathBuf>,
    requirements: Option<ScriptRequirements>,
    diagnostics: Vec<Diagnostic>,
}

impl Default for Node {
    fn default() -> Self {
        Self::root(Vec::new())
    }
}

impl Document {
    /// Wrap an already-built tree in a fresh document.
    #[must_use]
    pub fn new(tree: Node) -> Self {
        Self {
            tree,
            source_path: None,
            requirements: None,
            diagnostics: Vec::new(),
        }
    }

    /// Attach the source file path (used in diagnostics and by the CLI).
    #[must_use]
    pub fn with_source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = Some(path.into());
        self
    }

    /// Register import and initializer statements for the script aggregator.
    ///
    /// Creates the registry on first use. Duplicate strings are absorbed
    /// silently; first-insertion order is preserved. Strings are compared
    /// for exact textual equality — no whitespace or semicolon
    /// normalization happens before dedup.
    pub fn register_requirements(&mut self, imports: Vec<String>, initializers: Vec<String>) {
        let requirements = self.requirements.get_or_insert_with(ScriptRequirements::default);
        requirements.add_imports(imports);
        requirements.add_initializers(initializers);
    }

    /// The requirement registry, if any plugin has registered something.
    #[must_use]
    pub fn requirements(&self) -> Option<&ScriptRequirements> {
        self.requirements.as_ref()
    }

    /// Record a non-fatal diagnostic and mirror it to the log.
    pub fn push_diagnostic(&mut self, plugin: &'static str, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(plugin, "{message}");
        self.diagnostics.push(Diagnostic { plugin, message });
    }

    /// Diagnostics collected so far, in emission order.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_has_no_raw() {
        let root = Node::root(vec![Node::raw_markup("<Image />")]);
        assert_eq!(root.kind, NodeKind::Root);
        assert!(root.raw.is_none());
        assert_eq!(root.children.len(), 1);
    }

    #[test]
    fn test_raw_text_defaults_to_empty() {
        assert_eq!(Node::root(Vec::new()).raw_text(), "");
        assert_eq!(Node::raw_markup("<Image />").raw_text(), "<Image />");
    }

    #[test]
    fn test_requirements_absent_until_first_register() {
        let mut doc = Document::new(Node::root(Vec::new()));
        assert!(doc.requirements().is_none());

        doc.register_requirements(vec!["import A from 'a'".to_owned()], Vec::new());
        let requirements = doc.requirements().expect("registry created");
        assert_eq!(requirements.imports(), ["import A from 'a'"]);
        assert!(requirements.initializers().is_empty());
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut doc = Document::new(Node::root(Vec::new()));
        for _ in 0..3 {
            doc.register_requirements(
                vec!["import A from 'a'".to_owned()],
                vec!["const {data} = $props()".to_owned()],
            );
        }
        let requirements = doc.requirements().expect("registry created");
        assert_eq!(requirements.imports().len(), 1);
        assert_eq!(requirements.initializers().len(), 1);
    }

    #[test]
    fn test_semicolon_variants_stay_distinct() {
        let mut doc = Document::new(Node::root(Vec::new()));
        doc.register_requirements(
            vec!["import A from 'a'".to_owned(), "import A from 'a';".to_owned()],
            Vec::new(),
        );
        assert_eq!(doc.requirements().expect("registry").imports().len(), 2);
    }

    #[test]
    fn test_push_diagnostic_collects_in_order() {
        let mut doc = Document::new(Node::root(Vec::new()));
        doc.push_diagnostic("gallery", "first");
        doc.push_diagnostic("image", "second");
        assert_eq!(doc.diagnostics().len(), 2);
        assert_eq!(doc.diagnostics()[0].plugin, "gallery");
        assert_eq!(doc.diagnostics()[1].message, "second");
    }
}
