//! Pipeline configuration and the ordered plugin runner.

use std::path::PathBuf;

use svx_ast::Document;

use crate::aggregator::aggregate_script;
use crate::plugins::{GalleryPlugin, GoogleReviewsPlugin, ImagePlugin, MiniGalleryPlugin};

/// Configuration shared by all pipeline stages.
///
/// Defaults reproduce the hosting site's layout; every value can be
/// overridden via the builder methods (or `svexpand.toml` through the CLI).
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directory gallery `src` paths are resolved against.
    pub project_root: PathBuf,
    /// Required prefix of a gallery tag's `src` attribute, in the source tree.
    pub gallery_source_prefix: String,
    /// Runtime-alias prefix substituted into generated gallery data imports.
    pub gallery_alias_prefix: String,
    /// Import specifier of the gallery rendering component.
    pub gallery_component: String,
    /// Import specifier of the Google reviews component.
    pub google_reviews_component: String,
    /// Import specifier of the image wrapper component.
    pub image_component: String,
    /// Import specifier of the mini-gallery component.
    pub mini_gallery_component: String,
    /// `lang` attribute of generated script blocks.
    pub script_lang: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            gallery_source_prefix: "src/content/galleries/".to_owned(),
            gallery_alias_prefix: "$lib/../content/galleries/".to_owned(),
            gallery_component: "$lib/components/gallery/gallery.svelte".to_owned(),
            google_reviews_component: "$lib/components/google-reviews.svelte".to_owned(),
            image_component: "$lib/svx-wrappers/image.svelte".to_owned(),
            mini_gallery_component: "$lib/components/gallery/mini-gallery.svelte".to_owned(),
            script_lang: "ts".to_owned(),
        }
    }
}

impl PipelineConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directory gallery `src` paths are resolved against.
    #[must_use]
    pub fn with_project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = root.into();
        self
    }

    /// Set the required gallery `src` prefix.
    #[must_use]
    pub fn with_gallery_source_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.gallery_source_prefix = prefix.into();
        self
    }

    /// Set the runtime-alias prefix for gallery data imports.
    #[must_use]
    pub fn with_gallery_alias_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.gallery_alias_prefix = prefix.into();
        self
    }

    /// Set the `lang` attribute of generated script blocks.
    #[must_use]
    pub fn with_script_lang(mut self, lang: impl Into<String>) -> Self {
        self.script_lang = lang.into();
        self
    }
}

/// A document transform that scans the root's direct children for one
/// custom tag, rewriting or removing matches and registering the script
/// requirements its rewrites need.
///
/// Plugins must not depend on each other's registrations or on their own
/// position in the pipeline; the shared requirement registry on the
/// document is their only communication channel.
pub trait TagPlugin {
    /// Plugin name, used in diagnostics and logging.
    fn name(&self) -> &'static str;

    /// Scan and rewrite the document in place.
    fn run(&self, doc: &mut Document, config: &PipelineConfig);
}

/// An ordered sequence of tag plugins followed by the script aggregator.
///
/// The aggregator is not a [`TagPlugin`]: [`run`](Self::run) invokes it
/// after the plugin list unconditionally, so it cannot be scheduled
/// anywhere else.
///
/// # Example
///
/// ```
/// use svx_ast::Document;
/// use svx_pipeline::{Pipeline, PipelineConfig};
///
/// let pipeline = Pipeline::standard(PipelineConfig::default());
/// let mut doc = Document::parse("# No custom tags here\n");
/// pipeline.run(&mut doc);
/// assert!(doc.requirements().is_none());
/// ```
pub struct Pipeline {
    config: PipelineConfig,
    plugins: Vec<Box<dyn TagPlugin>>,
}

impl Pipeline {
    /// Create a pipeline with no plugins registered.
    #[must_use]
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            plugins: Vec::new(),
        }
    }

    /// Create a pipeline with the full standard plugin set.
    #[must_use]
    pub fn standard(config: PipelineConfig) -> Self {
        Self::new(config)
            .with_plugin(GalleryPlugin)
            .with_plugin(GoogleReviewsPlugin)
            .with_plugin(ImagePlugin)
            .with_plugin(MiniGalleryPlugin)
    }

    /// Register a tag plugin. Plugins run in registration order.
    #[must_use]
    pub fn with_plugin<P: TagPlugin + 'static>(mut self, plugin: P) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// The pipeline's configuration.
    #[must_use]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run every plugin in order, then the script aggregator.
    ///
    /// Each stage runs to completion before the next begins. Malformed
    /// tags never abort the run; they surface as document diagnostics.
    pub fn run(&self, doc: &mut Document) {
        for plugin in &self.plugins {
            tracing::debug!(plugin = plugin.name(), "running tag plugin");
            plugin.run(doc, &self.config);
        }
        aggregate_script(doc, &self.config);
    }
}
