//! Tag-rewriting plugin pipeline for Svelte markdown documents.
//!
//! A [`Pipeline`] runs a sequence of mutually-unaware [`TagPlugin`]s over a
//! parsed [`Document`](svx_ast::Document). Each plugin scans the root's
//! direct children for one custom component tag, rewrites or removes
//! matching blocks, and registers the import/initializer statements its
//! rewrite needs. After every plugin has run, the script aggregator merges
//! those requirements — together with whatever a pre-existing `<script>`
//! block already contained — into a single normalized script node.
//!
//! # Architecture
//!
//! - [`tags`]: pure predicates and extractors over individual nodes
//! - [`TagPlugin`]: the plugin contract; implementations in [`plugins`]
//! - [`aggregate_script`]: the terminal pass. Not a plugin: [`Pipeline::run`]
//!   always invokes it after the plugin list, so "aggregator runs last"
//!   holds structurally rather than by registration discipline.
//!
//! # Example
//!
//! ```
//! use svx_ast::Document;
//! use svx_pipeline::{Pipeline, PipelineConfig};
//!
//! let pipeline = Pipeline::standard(PipelineConfig::default());
//! let mut doc = Document::parse("<GoogleReviews title=\"Reviews\" />\n");
//! pipeline.run(&mut doc);
//!
//! let out = doc.to_markdown();
//! assert!(out.contains("<script lang=\"ts\">"));
//! assert!(out.contains("import GoogleReviews"));
//! ```

mod aggregator;
mod pipeline;
pub mod plugins;
mod script;
pub mod tags;

pub use aggregator::aggregate_script;
pub use pipeline::{Pipeline, PipelineConfig, TagPlugin};
pub use script::ScriptContent;
