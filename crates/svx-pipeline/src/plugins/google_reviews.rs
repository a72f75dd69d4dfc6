//! `<GoogleReviews>` tag plugin.

use svx_ast::Document;

use crate::pipeline::{PipelineConfig, TagPlugin};
use crate::tags::{extract_attribute, is_tag};

/// Rewrites `<GoogleReviews />` tags to their canonical prop-bearing form.
///
/// Every match is accepted; there is no removal path. An optional `title`
/// attribute is carried over verbatim. The component import and the props
/// initializer are registered once per document, however many tags match.
pub struct GoogleReviewsPlugin;

impl TagPlugin for GoogleReviewsPlugin {
    fn name(&self) -> &'static str {
        "google_reviews"
    }

    fn run(&self, doc: &mut Document, config: &PipelineConfig) {
        let mut found = false;

        for child in &mut doc.tree.children {
            if !is_tag(child, "GoogleReviews") {
                continue;
            }
            found = true;

            let title_prop = extract_attribute(child.raw_text(), "title")
                .map(|title| format!(" title=\"{title}\""))
                .unwrap_or_default();

            child.raw = Some(format!(
                "<GoogleReviews data={{data.googleReviews}} showOverallRating={{true}} maxReviews={{3}} className=\"max-w-6xl mx-auto\"{title_prop} />"
            ));
        }

        if found {
            doc.register_requirements(
                vec![format!(
                    "import GoogleReviews from \"{}\"",
                    config.google_reviews_component
                )],
                vec!["const {data} = $props()".to_owned()],
            );
        }
    }
}
