//! Page assembly: Markdown file + template → HTML file.

use std::fs;
use std::path::{Path, PathBuf};

use super::SiteError;
use super::assets::sorted_entries;

const TITLE_PLACEHOLDER: &str = "{{ Title }}";
const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Substitute every title and content placeholder in `template`.
pub fn apply_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
}

/// Render a Markdown document into a full page using `template`.
pub fn render_page(markdown: &str, template: &str) -> crate::Result<String> {
    let content = crate::to_html(markdown)?;
    let title = crate::extract_title(markdown)?;
    Ok(apply_template(template, &title, &content))
}

/// Generate one HTML page from a Markdown file.
///
/// Missing parent directories of `dest` are created.
pub fn generate_page(from: &Path, template_path: &Path, dest: &Path) -> Result<(), SiteError> {
    tracing::info!(
        from = %from.display(),
        to = %dest.display(),
        template = %template_path.display(),
        "Generating page"
    );

    let markdown = fs::read_to_string(from).map_err(SiteError::io(from))?;
    let template = fs::read_to_string(template_path).map_err(SiteError::io(template_path))?;

    let html = render_page(&markdown, &template).map_err(|source| SiteError::Page {
        path: from.to_path_buf(),
        source,
    })?;

    if let Some(dir) = dest.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        if !dir.exists() {
            tracing::debug!(path = %dir.display(), "Creating directory");
            fs::create_dir_all(dir).map_err(SiteError::io(dir))?;
        }
    }

    fs::write(dest, html).map_err(SiteError::io(dest))
}

/// Generate a page for every `.md` file under `content_dir`.
///
/// `a/b.md` becomes `dest_dir/a/b.html`; other files are ignored. Returns
/// the written paths in generation order.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
) -> Result<Vec<PathBuf>, SiteError> {
    let mut written = Vec::new();
    generate_into(content_dir, template_path, dest_dir, &mut written)?;
    Ok(written)
}

fn generate_into(
    dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    written: &mut Vec<PathBuf>,
) -> Result<(), SiteError> {
    for src_path in sorted_entries(dir)? {
        let Some(name) = src_path.file_name() else {
            continue;
        };
        let dest_path = dest_dir.join(name);

        if src_path.is_file() {
            if src_path.extension().is_some_and(|ext| ext == "md") {
                let dest_path = dest_path.with_extension("html");
                generate_page(&src_path, template_path, &dest_path)?;
                written.push(dest_path);
            }
        } else {
            generate_into(&src_path, template_path, &dest_path, written)?;
        }
    }
    Ok(())
}
