//! `<Gallery>` tag plugin.

use std::fs;
use std::mem;

use svx_ast::Document;

use crate::pipeline::{PipelineConfig, TagPlugin};
use crate::tags::{extract_attribute, is_tag};

/// Rewrites `<Gallery src="..." />` tags into component references backed
/// by imported gallery data.
///
/// A tag survives only if its `src` attribute is present, matches the
/// configured `src/content/galleries/*.json` shape, and points at an
/// existing file containing valid JSON. Tags failing any check are removed
/// from the tree with a diagnostic; the rest of the document is unaffected.
pub struct GalleryPlugin;

impl TagPlugin for GalleryPlugin {
    fn name(&self) -> &'static str {
        "gallery"
    }

    fn run(&self, doc: &mut Document, config: &PipelineConfig) {
        let mut imports = Vec::new();
        let mut kept = Vec::with_capacity(doc.tree.children.len());

        for mut child in mem::take(&mut doc.tree.children) {
            if !is_tag(&child, "Gallery") {
                kept.push(child);
                continue;
            }

            let raw = child.raw_text().to_owned();

            let Some(src) = extract_attribute(&raw, "src") else {
                doc.push_diagnostic(
                    self.name(),
                    format!("Gallery tag missing src attribute, removing tag: {raw}"),
                );
                continue;
            };

            if !src.starts_with(&config.gallery_source_prefix) || !src.ends_with(".json") {
                doc.push_diagnostic(
                    self.name(),
                    format!(
                        "Gallery tag has invalid src attribute (expected format: {}*.json), removing tag: {raw}",
                        config.gallery_source_prefix
                    ),
                );
                continue;
            }

            let path = config.project_root.join(&src);
            if !path.exists() {
                doc.push_diagnostic(
                    self.name(),
                    format!("Gallery tag references non-existent file: {src}, removing tag: {raw}"),
                );
                continue;
            }

            let parsed = fs::read_to_string(&path)
                .map_err(|err| err.to_string())
                .and_then(|content| {
                    serde_json::from_str::<serde_json::Value>(&content)
                        .map(|_| ())
                        .map_err(|err| err.to_string())
                });
            if let Err(err) = parsed {
                doc.push_diagnostic(
                    self.name(),
                    format!(
                        "Gallery tag references invalid JSON file: {src}, error: {err}, removing tag: {raw}"
                    ),
                );
                continue;
            }

            let import_path = format!(
                "{}{}",
                config.gallery_alias_prefix,
                src.strip_prefix(&config.gallery_source_prefix).unwrap_or(&src)
            );
            let file_stem = src
                .rsplit('/')
                .next()
                .unwrap_or(&src)
                .trim_end_matches(".json");
            let var_name = camel_case(file_stem);

            imports.push(format!("import {var_name}Data from '{import_path}'"));
            imports.push(format!("import Gallery from '{}'", config.gallery_component));

            child.raw = Some(format!("<Gallery gallery={{{var_name}Data}} />"));
            kept.push(child);
        }

        doc.tree.children = kept;

        if !imports.is_empty() {
            doc.register_requirements(imports, Vec::new());
        }
    }
}

/// Convert a kebab-case file stem to a camelCase identifier.
///
/// Only a hyphen followed by a lowercase ASCII letter collapses
/// (`corporate-events` → `corporateEvents`); any other hyphen is kept.
fn camel_case(stem: &str) -> String {
    let mut out = String::with_capacity(stem.len());
    let mut chars = stem.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '-'
            && let Some(&next) = chars.peek()
            && next.is_ascii_lowercase()
        {
            chars.next();
            out.push(next.to_ascii_uppercase());
            continue;
        }
        out.push(c);
    }

    out
}
