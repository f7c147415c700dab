//! Static asset mirroring.

use std::fs;
use std::path::Path;

use super::SiteError;

/// Replace `dst` with a recursive copy of `src`.
///
/// An existing `dst` is removed first. Returns the number of files copied.
pub fn copy_directory(src: &Path, dst: &Path) -> Result<usize, SiteError> {
    if dst.exists() {
        tracing::warn!(path = %dst.display(), "Removing existing output directory");
        fs::remove_dir_all(dst).map_err(SiteError::io(dst))?;
    }

    tracing::debug!(path = %dst.display(), "Creating directory");
    fs::create_dir_all(dst).map_err(SiteError::io(dst))?;

    let copied = copy_recursive(src, dst)?;
    tracing::info!(
        src = %src.display(),
        dst = %dst.display(),
        files = copied,
        "Copied static assets"
    );
    Ok(copied)
}

fn copy_recursive(src: &Path, dst: &Path) -> Result<usize, SiteError> {
    let mut copied = 0;

    for src_path in sorted_entries(src)? {
        let Some(name) = src_path.file_name() else {
            continue;
        };
        let dst_path = dst.join(name);

        if src_path.is_file() {
            tracing::debug!(from = %src_path.display(), to = %dst_path.display(), "Copying file");
            fs::copy(&src_path, &dst_path).map_err(SiteError::io(&src_path))?;
            copied += 1;
        } else {
            tracing::debug!(path = %dst_path.display(), "Creating directory");
            fs::create_dir(&dst_path).map_err(SiteError::io(&dst_path))?;
            copied += copy_recursive(&src_path, &dst_path)?;
        }
    }

    Ok(copied)
}

/// Directory entries sorted by path, for deterministic output.
pub(super) fn sorted_entries(dir: &Path) -> Result<Vec<std::path::PathBuf>, SiteError> {
    let mut entries = fs::read_dir(dir)
        .map_err(SiteError::io(dir))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(SiteError::io(dir))?;
    entries.sort();
    Ok(entries)
}
