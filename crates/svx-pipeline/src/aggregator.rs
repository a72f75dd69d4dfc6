//! Terminal pipeline pass: merge registered script requirements into the
//! document's single script node.

use svx_ast::{Document, OrderedSet};

use crate::pipeline::PipelineConfig;
use crate::script::{ScriptContent, build_script_node};
use crate::tags::{find_script_index, frontmatter_index};

/// Merge the document's registered requirements with any pre-existing
/// script content and write back one normalized script node.
///
/// A strict no-op when nothing was registered — a pre-existing script
/// block is left byte-for-byte untouched in that case. Otherwise the
/// final block always presents imports before initializers before other
/// code, whether it replaces an existing node or is inserted fresh
/// (directly after the frontmatter when present, else first).
pub fn aggregate_script(doc: &mut Document, config: &PipelineConfig) {
    let Some(requirements) = doc.requirements() else {
        return;
    };
    if requirements.is_empty() {
        return;
    }

    // The tree mutation below needs the borrow back.
    let registered_imports = requirements.imports().to_vec();
    let registered_initializers = requirements.initializers().to_vec();

    match find_script_index(&doc.tree) {
        Some(index) => {
            let existing = ScriptContent::extract(doc.tree.children[index].raw_text());
            let imports = merge(existing.imports, registered_imports);
            let initializers = merge(existing.initializers, registered_initializers);
            doc.tree.children[index] = build_script_node(
                &imports,
                &initializers,
                &existing.other_body,
                &config.script_lang,
            );
            tracing::debug!(index, "replaced existing script node");
        }
        None => {
            let node = build_script_node(
                &registered_imports,
                &registered_initializers,
                "",
                &config.script_lang,
            );
            let insert_index = frontmatter_index(&doc.tree).map_or(0, |i| i + 1);
            doc.tree.children.insert(insert_index, node);
            tracing::debug!(insert_index, "inserted new script node");
        }
    }
}

/// Union existing statements with registry additions: existing first, then
/// registry-only entries, deduplicated by exact string equality in
/// first-seen order.
fn merge(existing: Vec<String>, registered: Vec<String>) -> Vec<String> {
    let mut merged = OrderedSet::new();
    merged.extend(existing);
    merged.extend(registered);
    merged.as_slice().to_vec()
}
