//! Site configuration.
//!
//! Parses `mdsite.toml` with serde. Every path is relative to the project
//! root unless absolute. A missing file means defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::site::SiteError;

/// Configuration filename looked up in the project root.
pub const CONFIG_FILENAME: &str = "mdsite.toml";

/// Site layout configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Static assets mirrored into the output directory.
    pub static_dir: PathBuf,
    /// Markdown sources.
    pub content_dir: PathBuf,
    /// Output directory (removed and recreated on every build).
    pub public_dir: PathBuf,
    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders.
    pub template: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("static"),
            content_dir: PathBuf::from("content"),
            public_dir: PathBuf::from("public"),
            template: PathBuf::from("template.html"),
        }
    }
}

/// Overrides applied on top of the loaded configuration.
///
/// Only `Some` values replace config values.
#[derive(Debug, Default)]
pub struct Overrides {
    pub static_dir: Option<PathBuf>,
    pub content_dir: Option<PathBuf>,
    pub public_dir: Option<PathBuf>,
    pub template: Option<PathBuf>,
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, SiteError> {
        Ok(toml::from_str(content)?)
    }

    /// Load config from a TOML file, or return defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self, SiteError> {
        match fs::read_to_string(path) {
            Ok(content) => {
                tracing::debug!(path = %path.display(), "Loaded config");
                Self::from_toml(&content)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(SiteError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Replace values with any overrides that are set.
    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(dir) = overrides.static_dir {
            self.static_dir = dir;
        }
        if let Some(dir) = overrides.content_dir {
            self.content_dir = dir;
        }
        if let Some(dir) = overrides.public_dir {
            self.public_dir = dir;
        }
        if let Some(path) = overrides.template {
            self.template = path;
        }
        self
    }

    /// Resolve relative paths against `root`.
    pub fn resolve(mut self, root: &Path) -> Self {
        for path in [
            &mut self.static_dir,
            &mut self.content_dir,
            &mut self.public_dir,
            &mut self.template,
        ] {
            if path.is_relative() {
                *path = root.join(&*path);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.public_dir, PathBuf::from("public"));
        assert_eq!(config.template, PathBuf::from("template.html"));
    }

    #[test]
    fn test_partial_toml() {
        let config = Config::from_toml("public_dir = \"docs\"\n").unwrap();
        assert_eq!(config.public_dir, PathBuf::from("docs"));
        assert_eq!(config.content_dir, PathBuf::from("content"));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            Config::from_toml("public_dir = ["),
            Err(SiteError::Config(_))
        ));
    }

    #[test]
    fn test_missing_file_is_default() {
        let config = Config::load(Path::new("/nonexistent/mdsite.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_overrides_and_resolve() {
        let config = Config::default()
            .apply(Overrides {
                public_dir: Some(PathBuf::from("/tmp/out")),
                ..Overrides::default()
            })
            .resolve(Path::new("/site"));
        assert_eq!(config.public_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.static_dir, PathBuf::from("/site/static"));
        assert_eq!(config.template, PathBuf::from("/site/template.html"));
    }
}
