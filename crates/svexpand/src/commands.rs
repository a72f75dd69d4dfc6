//! CLI command implementations.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use svx_ast::Document;
use svx_config::Config;
use svx_pipeline::{Pipeline, PipelineConfig};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the `process` command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Files, directories, or glob patterns to process.
    #[arg(default_value = ".")]
    paths: Vec<String>,

    /// Rewrite files in place instead of printing to stdout.
    #[arg(long, conflicts_with = "out_dir")]
    write: bool,

    /// Write transformed files into this directory (flat, by file name).
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Directory gallery `src` paths are resolved against.
    #[arg(long, default_value = ".")]
    project_root: PathBuf,
}

impl ProcessArgs {
    pub fn execute(self, config_path: Option<&Path>, output: &Output) -> Result<(), CliError> {
        let Self {
            paths,
            write,
            out_dir,
            project_root,
        } = self;

        let config = Config::load(config_path)?;
        let pipeline = Pipeline::standard(pipeline_config(&config, project_root));

        if let Some(out_dir) = &out_dir {
            fs::create_dir_all(out_dir)?;
        }

        let files = collect_files(&paths)?;
        tracing::debug!(count = files.len(), "collected input files");
        let mut diagnostic_count = 0usize;

        for file in &files {
            let doc = run_pipeline_on(&pipeline, file)?;
            diagnostic_count += report_diagnostics(&doc, file, output);
            let transformed = doc.to_markdown();

            if write {
                fs::write(file, &transformed)?;
                output.info(&format!("Processed {}", file.display()));
            } else if let Some(out_dir) = &out_dir {
                let target = out_dir.join(file.file_name().unwrap_or(file.as_os_str()));
                fs::write(&target, &transformed)?;
                output.info(&format!("Wrote {}", target.display()));
            } else {
                std::io::stdout().write_all(transformed.as_bytes())?;
            }
        }

        if write || out_dir.is_some() {
            output.success(&format!(
                "{} file(s) processed, {diagnostic_count} diagnostic(s)",
                files.len()
            ));
        }
        Ok(())
    }
}

/// Arguments for the `check` command.
#[derive(Args)]
pub struct CheckArgs {
    /// Files, directories, or glob patterns to check.
    #[arg(default_value = ".")]
    paths: Vec<String>,

    /// Directory gallery `src` paths are resolved against.
    #[arg(long, default_value = ".")]
    project_root: PathBuf,
}

impl CheckArgs {
    pub fn execute(self, config_path: Option<&Path>, output: &Output) -> Result<(), CliError> {
        let config = Config::load(config_path)?;
        let pipeline = Pipeline::standard(pipeline_config(&config, self.project_root));

        let files = collect_files(&self.paths)?;
        let mut diagnostic_count = 0usize;

        for file in &files {
            let doc = run_pipeline_on(&pipeline, file)?;
            diagnostic_count += report_diagnostics(&doc, file, output);
        }

        if diagnostic_count > 0 {
            return Err(CliError::Validation(format!(
                "{diagnostic_count} tag diagnostic(s) in {} file(s)",
                files.len()
            )));
        }
        output.success(&format!("{} file(s) checked, no diagnostics", files.len()));
        Ok(())
    }
}

fn pipeline_config(config: &Config, project_root: PathBuf) -> PipelineConfig {
    PipelineConfig {
        project_root,
        gallery_source_prefix: config.galleries.source_prefix.clone(),
        gallery_alias_prefix: config.galleries.alias_prefix.clone(),
        gallery_component: config.components.gallery.clone(),
        google_reviews_component: config.components.google_reviews.clone(),
        image_component: config.components.image.clone(),
        mini_gallery_component: config.components.mini_gallery.clone(),
        script_lang: config.script.lang.clone(),
    }
}

fn run_pipeline_on(pipeline: &Pipeline, file: &Path) -> Result<Document, CliError> {
    let source = fs::read_to_string(file)?;
    let mut doc = Document::parse(&source).with_source_path(file);
    pipeline.run(&mut doc);
    Ok(doc)
}

fn report_diagnostics(doc: &Document, file: &Path, output: &Output) -> usize {
    for diagnostic in doc.diagnostics() {
        output.warning(&format!("{}: {diagnostic}", file.display()));
    }
    doc.diagnostics().len()
}

/// Expand CLI path arguments into a sorted, deduplicated file list.
///
/// Directories expand to their `.svx` and `.md` files recursively; glob
/// patterns are passed through; plain paths must exist.
fn collect_files(paths: &[String]) -> Result<Vec<PathBuf>, CliError> {
    let mut files = Vec::new();

    for path in paths {
        let as_path = Path::new(path);
        if as_path.is_dir() {
            for extension in ["svx", "md"] {
                let pattern = format!("{}/**/*.{extension}", path.trim_end_matches('/'));
                for entry in glob::glob(&pattern)? {
                    files.push(entry?);
                }
            }
        } else if path.contains(['*', '?', '[']) {
            for entry in glob::glob(path)? {
                files.push(entry?);
            }
        } else if as_path.is_file() {
            files.push(as_path.to_path_buf());
        } else {
            return Err(CliError::Validation(format!("no such file: {path}")));
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_files_from_directory() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("nested")).unwrap();
        fs::write(tmp.path().join("a.svx"), "a").unwrap();
        fs::write(tmp.path().join("nested/b.md"), "b").unwrap();
        fs::write(tmp.path().join("ignored.txt"), "c").unwrap();

        let files = collect_files(&[tmp.path().to_string_lossy().into_owned()]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|f| f.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.svx", "b.md"]);
    }

    #[test]
    fn test_collect_files_missing_path_errors() {
        let result = collect_files(&["/nonexistent/file.svx".to_owned()]);
        assert!(matches!(result, Err(CliError::Validation(_))));
    }

    #[test]
    fn test_collect_files_deduplicates() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("a.svx");
        fs::write(&file, "a").unwrap();
        let arg = file.to_string_lossy().into_owned();

        let files = collect_files(&[arg.clone(), arg]).unwrap();
        assert_eq!(files.len(), 1);
    }
}
