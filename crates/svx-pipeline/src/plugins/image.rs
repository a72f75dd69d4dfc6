//! `<Image>` tag plugin.

use svx_ast::Document;

use crate::pipeline::{PipelineConfig, TagPlugin};
use crate::tags::{any_child_matches, is_tag};

/// Pure detection: registers the image wrapper import when the document
/// contains at least one `<Image>` tag. Never rewrites or removes nodes.
pub struct ImagePlugin;

impl TagPlugin for ImagePlugin {
    fn name(&self) -> &'static str {
        "image"
    }

    fn run(&self, doc: &mut Document, config: &PipelineConfig) {
        if any_child_matches(&doc.tree, |child| is_tag(child, "Image")) {
            doc.register_requirements(
                vec![format!("import Image from \"{}\"", config.image_component)],
                Vec::new(),
            );
        }
    }
}
