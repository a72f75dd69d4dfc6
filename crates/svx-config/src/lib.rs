//! Configuration management for svexpand.
//!
//! Parses `svexpand.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. Every section is
//! optional; defaults reproduce the hosting site's layout:
//!
//! ```toml
//! [galleries]
//! source_prefix = "src/content/galleries/"
//! alias_prefix = "$lib/../content/galleries/"
//!
//! [components]
//! gallery = "$lib/components/gallery/gallery.svelte"
//! google_reviews = "$lib/components/google-reviews.svelte"
//! image = "$lib/svx-wrappers/image.svelte"
//! mini_gallery = "$lib/components/gallery/mini-gallery.svelte"
//!
//! [script]
//! lang = "ts"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "svexpand.toml";

/// Configuration error type.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Gallery path mapping.
    pub galleries: GalleriesConfig,
    /// Component import specifiers.
    pub components: ComponentsConfig,
    /// Generated script block settings.
    pub script: ScriptConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Gallery path mapping configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GalleriesConfig {
    /// Required prefix of a gallery tag's `src` attribute.
    pub source_prefix: String,
    /// Runtime-alias prefix substituted into generated data imports.
    pub alias_prefix: String,
}

impl Default for GalleriesConfig {
    fn default() -> Self {
        Self {
            source_prefix: "src/content/galleries/".to_owned(),
            alias_prefix: "$lib/../content/galleries/".to_owned(),
        }
    }
}

/// Component import specifiers.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ComponentsConfig {
    /// Gallery rendering component.
    pub gallery: String,
    /// Google reviews component.
    pub google_reviews: String,
    /// Image wrapper component.
    pub image: String,
    /// Mini-gallery component.
    pub mini_gallery: String,
}

impl Default for ComponentsConfig {
    fn default() -> Self {
        Self {
            gallery: "$lib/components/gallery/gallery.svelte".to_owned(),
            google_reviews: "$lib/components/google-reviews.svelte".to_owned(),
            image: "$lib/svx-wrappers/image.svelte".to_owned(),
            mini_gallery: "$lib/components/gallery/mini-gallery.svelte".to_owned(),
        }
    }
}

/// Generated script block settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ScriptConfig {
    /// `lang` attribute of generated script blocks.
    pub lang: String,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            lang: "ts".to_owned(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// With an explicit path the file must exist; otherwise the config is
    /// discovered by walking up from the current directory, falling back
    /// to defaults when no `svexpand.toml` is found.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Load and parse a specific config file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Search for `svexpand.toml` in the current directory and its parents.
    #[must_use]
    pub fn discover() -> Option<PathBuf> {
        let start = std::env::current_dir().ok()?;
        Self::discover_from(&start)
    }

    /// Search for `svexpand.toml` starting at the given directory.
    #[must_use]
    pub fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut dir = Some(start);
        while let Some(current) = dir {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            dir = current.parent();
        }
        None
    }

    /// Validate field contents.
    ///
    /// Returns `ConfigError::Validation` if a required field is empty or
    /// the gallery source prefix is not a directory prefix.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.galleries.source_prefix, "galleries.source_prefix")?;
        require_non_empty(&self.galleries.alias_prefix, "galleries.alias_prefix")?;
        require_non_empty(&self.components.gallery, "components.gallery")?;
        require_non_empty(&self.components.google_reviews, "components.google_reviews")?;
        require_non_empty(&self.components.image, "components.image")?;
        require_non_empty(&self.components.mini_gallery, "components.mini_gallery")?;
        require_non_empty(&self.script.lang, "script.lang")?;

        if !self.galleries.source_prefix.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "galleries.source_prefix must end with '/': {}",
                self.galleries.source_prefix
            )));
        }
        Ok(())
    }
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.galleries.source_prefix, "src/content/galleries/");
        assert_eq!(config.galleries.alias_prefix, "$lib/../content/galleries/");
        assert_eq!(config.script.lang, "ts");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_overrides_defaults() {
        let config: Config = toml::from_str("[script]\nlang = \"js\"\n").unwrap();
        assert_eq!(config.script.lang, "js");
        assert_eq!(config.galleries.source_prefix, "src/content/galleries/");
    }

    #[test]
    fn test_explicit_missing_path_errors() {
        let result = Config::load(Some(Path::new("/nonexistent/svexpand.toml")));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_from_file_records_path() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[galleries]\nsource_prefix = \"content/g/\"\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.galleries.source_prefix, "content/g/");
        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_discover_walks_parents() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a/b/c");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILENAME), "").unwrap();

        let found = Config::discover_from(&nested).unwrap();
        assert_eq!(found, tmp.path().join(CONFIG_FILENAME));
    }

    #[test]
    fn test_validation_rejects_empty_field() {
        let config: Config = toml::from_str("[script]\nlang = \"\"\n").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_validation_rejects_prefix_without_slash() {
        let config: Config =
            toml::from_str("[galleries]\nsource_prefix = \"src/content/galleries\"\n").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "not [valid toml").unwrap();
        assert!(matches!(
            Config::load_from_file(&path),
            Err(ConfigError::Parse(_))
        ));
    }
}
