//! Pure predicates and extractors over document nodes.
//!
//! Everything here is side-effect free; plugins compose these helpers into
//! their scan/rewrite loops.

use regex::Regex;
use svx_ast::{Node, NodeKind};

/// True iff the node is a raw-markup block containing an occurrence of the
/// given tag.
///
/// Matching is a literal `<TagName` substring test, covering both
/// self-closing (`<Tag />`) and opening (`<Tag>`) forms. It is
/// deliberately not anchored on a word boundary, so `<Gallery2` also
/// matches tag `Gallery` — a known imprecision kept for compatibility
/// with existing content. Swapping in a real tokenizer only needs to
/// touch this function.
#[must_use]
pub fn is_tag(node: &Node, tag_name: &str) -> bool {
    node.kind == NodeKind::RawMarkup && node.raw_text().contains(&format!("<{tag_name}"))
}

/// Extract an attribute value from a markup string.
///
/// Finds the first `name="value"` or `name='value'` occurrence; the value
/// is returned verbatim, with no unescaping. Returns `None` when the
/// attribute is absent or its value is empty.
#[must_use]
pub fn extract_attribute(markup: &str, attribute_name: &str) -> Option<String> {
    let pattern = format!("{}=[\"']([^\"']+)[\"']", regex::escape(attribute_name));
    let re = Regex::new(&pattern).expect("attribute pattern is valid");
    re.captures(markup)
        .map(|captures| captures[1].to_owned())
}

/// True iff at least one direct child of the node satisfies the predicate.
///
/// A node with no children yields `false`, not an error.
#[must_use]
pub fn any_child_matches(node: &Node, predicate: impl Fn(&Node) -> bool) -> bool {
    node.children.iter().any(predicate)
}

/// Index of the frontmatter node: `Some(0)` iff the first child exists and
/// is frontmatter, else `None`.
#[must_use]
pub fn frontmatter_index(tree: &Node) -> Option<usize> {
    match tree.children.first() {
        Some(first) if first.kind == NodeKind::Frontmatter => Some(0),
        _ => None,
    }
}

/// Index of the first direct child that is a raw-markup block containing
/// `<script`, or `None` when there is no script node.
#[must_use]
pub fn find_script_index(tree: &Node) -> Option<usize> {
    tree.children
        .iter()
        .position(|child| child.kind == NodeKind::RawMarkup && child.raw_text().contains("<script"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_is_tag_matches_self_closing_and_opening_forms() {
        assert!(is_tag(&Node::raw_markup("<Gallery src=\"x\" />"), "Gallery"));
        assert!(is_tag(&Node::raw_markup("<Gallery>\n</Gallery>"), "Gallery"));
        assert!(!is_tag(&Node::raw_markup("<MiniGallery />"), "Gallery"));
    }

    #[test]
    fn test_is_tag_ignores_non_markup_nodes() {
        let paragraph = Node::block(NodeKind::Paragraph, "<Gallery src=\"x\" />");
        assert!(!is_tag(&paragraph, "Gallery"));
    }

    #[test]
    fn test_is_tag_loose_prefix_match() {
        // Substring matching does not anchor on a word boundary.
        assert!(is_tag(&Node::raw_markup("<Gallery2 />"), "Gallery"));
    }

    #[test]
    fn test_extract_attribute_double_and_single_quotes() {
        assert_eq!(
            extract_attribute("<Gallery src=\"a.json\" />", "src"),
            Some("a.json".to_owned())
        );
        assert_eq!(
            extract_attribute("<Gallery src='a.json' />", "src"),
            Some("a.json".to_owned())
        );
    }

    #[test]
    fn test_extract_attribute_first_match_wins() {
        assert_eq!(
            extract_attribute("<X a=\"1\" a=\"2\" />", "a"),
            Some("1".to_owned())
        );
    }

    #[test]
    fn test_extract_attribute_absent_or_empty() {
        assert_eq!(extract_attribute("<Gallery />", "src"), None);
        assert_eq!(extract_attribute("<Gallery src=\"\" />", "src"), None);
    }

    #[test]
    fn test_any_child_matches_empty_children() {
        let root = Node::root(Vec::new());
        assert!(!any_child_matches(&root, |c| is_tag(c, "Image")));
    }

    #[test]
    fn test_any_child_matches_finds_match() {
        let root = Node::root(vec![
            Node::block(NodeKind::Paragraph, "text"),
            Node::raw_markup("<Image src=\"a.jpg\" />"),
        ]);
        assert!(any_child_matches(&root, |c| is_tag(c, "Image")));
    }

    #[test]
    fn test_frontmatter_index_only_at_position_zero() {
        let with = Node::root(vec![Node::frontmatter("---\nx: 1\n---")]);
        assert_eq!(frontmatter_index(&with), Some(0));

        let without = Node::root(vec![
            Node::block(NodeKind::Paragraph, "text"),
            Node::frontmatter("---\nx: 1\n---"),
        ]);
        assert_eq!(frontmatter_index(&without), None);
        assert_eq!(frontmatter_index(&Node::root(Vec::new())), None);
    }

    #[test]
    fn test_find_script_index_first_wins() {
        let root = Node::root(vec![
            Node::block(NodeKind::Paragraph, "text"),
            Node::raw_markup("<script lang=\"ts\">\n</script>"),
            Node::raw_markup("<script>\n</script>"),
        ]);
        assert_eq!(find_script_index(&root), Some(1));
    }

    #[test]
    fn test_find_script_index_none() {
        let root = Node::root(vec![Node::raw_markup("<Gallery src=\"x\" />")]);
        assert_eq!(find_script_index(&root), None);
        assert_eq!(find_script_index(&Node::root(Vec::new())), None);
    }
}
