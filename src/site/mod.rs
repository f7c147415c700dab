//! Static site generation.
//!
//! Mirrors a static asset directory into the output directory, then renders
//! every Markdown page of the content directory through an HTML template.

mod assets;
mod page;

pub use assets::copy_directory;
pub use page::{apply_template, generate_page, generate_pages_recursive, render_page};

use std::path::PathBuf;

use crate::config::Config;

/// Error during site generation.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Filesystem error on a specific path.
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    /// A page failed to convert.
    #[error("failed to convert {}: {source}", .path.display())]
    Page {
        path: PathBuf,
        #[source]
        source: crate::Error,
    },
}

impl SiteError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}

/// Summary of a finished build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Number of static files copied.
    pub assets_copied: usize,
    /// Generated pages, in generation order.
    pub pages: Vec<PathBuf>,
}

/// Build the whole site described by `config`.
pub fn build(config: &Config) -> Result<BuildReport, SiteError> {
    tracing::info!(
        static_dir = %config.static_dir.display(),
        public_dir = %config.public_dir.display(),
        "Starting site build"
    );

    let assets_copied = copy_directory(&config.static_dir, &config.public_dir)?;
    let pages =
        generate_pages_recursive(&config.content_dir, &config.template, &config.public_dir)?;

    tracing::info!(assets = assets_copied, pages = pages.len(), "Site build complete");
    Ok(BuildReport {
        assets_copied,
        pages,
    })
}
