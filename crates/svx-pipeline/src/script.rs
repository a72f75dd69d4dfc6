//! Script block parsing and assembly.

use std::sync::LazyLock;

use regex::Regex;
use svx_ast::Node;

/// Matches the body of a `<script ...>...</script>` block.
static SCRIPT_BODY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<script[^>]*>(.*?)</script>").unwrap());

/// Literal token identifying a props-initializer line.
pub(crate) const PROPS_INIT_TOKEN: &str = "$props()";

/// Classified content of an existing script block.
///
/// Ephemeral: recomputed from the node's raw text on every aggregator run,
/// never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptContent {
    /// Trimmed lines starting with `import `.
    pub imports: Vec<String>,
    /// Trimmed lines containing the props-initializer token.
    pub initializers: Vec<String>,
    /// Remaining source text with import/initializer lines removed and
    /// blank lines dropped; original line text and relative order kept.
    pub other_body: String,
}

impl ScriptContent {
    /// Parse a raw script block into classified content.
    ///
    /// Returns an empty `ScriptContent` when the text contains no
    /// well-formed script block.
    #[must_use]
    pub fn extract(raw: &str) -> Self {
        let Some(captures) = SCRIPT_BODY_RE.captures(raw) else {
            return Self::default();
        };

        let mut imports = Vec::new();
        let mut initializers = Vec::new();
        let mut other_lines = Vec::new();

        for line in captures[1].lines() {
            let trimmed = line.trim();
            if trimmed.starts_with("import ") {
                imports.push(trimmed.to_owned());
            } else if trimmed.contains(PROPS_INIT_TOKEN) {
                initializers.push(trimmed.to_owned());
            } else if !trimmed.is_empty() {
                other_lines.push(line);
            }
        }

        Self {
            imports,
            initializers,
            other_body: other_lines.join("\n"),
        }
    }
}

/// Build a script node from final import lines, initializer lines, and the
/// preserved other-body text.
///
/// Sections appear in fixed order — imports, initializers, other body —
/// with statement lines indented and semicolon-terminated. Empty sections
/// are omitted; non-empty sections are separated by one blank line. The
/// node's raw text carries a leading and trailing newline around the tag.
#[must_use]
pub(crate) fn build_script_node(
    imports: &[String],
    initializers: &[String],
    other_body: &str,
    lang: &str,
) -> Node {
    let import_section = statement_section(imports);
    let initializer_section = statement_section(initializers);

    let sections: Vec<&str> = [
        import_section.as_str(),
        initializer_section.as_str(),
        other_body.trim(),
    ]
    .into_iter()
    .filter(|section| !section.is_empty())
    .collect();

    let content = sections.join("\n\n");
    Node::raw_markup(format!("\n<script lang=\"{lang}\">\n{content}\n</script>\n"))
}

fn statement_section(statements: &[String]) -> String {
    statements
        .iter()
        .map(|statement| format!("\t{statement};"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_classifies_lines() {
        let raw = "\n<script lang=\"ts\">\n\timport A from 'a';\n\tconst {data} = $props();\n\n\tlet count = 0;\n\tfunction inc() { count += 1; }\n</script>\n";
        let content = ScriptContent::extract(raw);

        assert_eq!(content.imports, ["import A from 'a';"]);
        assert_eq!(content.initializers, ["const {data} = $props();"]);
        assert_eq!(content.other_body, "\tlet count = 0;\n\tfunction inc() { count += 1; }");
    }

    #[test]
    fn test_extract_keeps_other_body_line_text_and_order() {
        let raw = "<script>\n  first();\n\n  second();\n</script>";
        let content = ScriptContent::extract(raw);
        assert_eq!(content.other_body, "  first();\n  second();");
    }

    #[test]
    fn test_extract_without_script_block_is_empty() {
        assert_eq!(ScriptContent::extract("<Gallery src=\"x\" />"), ScriptContent::default());
    }

    #[test]
    fn test_extract_attribute_bearing_script_tag() {
        let raw = "<script lang=\"ts\" context=\"module\">\nimport A from 'a'\n</script>";
        let content = ScriptContent::extract(raw);
        assert_eq!(content.imports, ["import A from 'a'"]);
    }

    #[test]
    fn test_build_all_sections_in_order() {
        let node = build_script_node(
            &["import A from 'a'".to_owned()],
            &["const {data} = $props()".to_owned()],
            "let x = 1;",
            "ts",
        );
        assert_eq!(
            node.raw_text(),
            "\n<script lang=\"ts\">\n\timport A from 'a';\n\n\tconst {data} = $props();\n\nlet x = 1;\n</script>\n"
        );
    }

    #[test]
    fn test_build_omits_empty_sections() {
        let node = build_script_node(&["import A from 'a'".to_owned()], &[], "", "ts");
        assert_eq!(
            node.raw_text(),
            "\n<script lang=\"ts\">\n\timport A from 'a';\n</script>\n"
        );
    }

    #[test]
    fn test_build_honors_configured_lang() {
        let node = build_script_node(&["import A from 'a'".to_owned()], &[], "", "js");
        assert!(node.raw_text().contains("<script lang=\"js\">"));
    }
}
