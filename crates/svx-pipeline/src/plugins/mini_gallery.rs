//! `<MiniGallery>` tag plugin.

use svx_ast::Document;

use crate::pipeline::{PipelineConfig, TagPlugin};
use crate::tags::{any_child_matches, is_tag};

/// Pure detection: registers the mini-gallery component import when the
/// document contains at least one `<MiniGallery>` tag.
pub struct MiniGalleryPlugin;

impl TagPlugin for MiniGalleryPlugin {
    fn name(&self) -> &'static str {
        "mini_gallery"
    }

    fn run(&self, doc: &mut Document, config: &PipelineConfig) {
        if any_child_matches(&doc.tree, |child| is_tag(child, "MiniGallery")) {
            doc.register_requirements(
                vec![format!(
                    "import MiniGallery from \"{}\"",
                    config.mini_gallery_component
                )],
                Vec::new(),
            );
        }
    }
}
