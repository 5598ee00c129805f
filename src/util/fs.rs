//! Filesystem utilities.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use walkdir::WalkDir;

/// Recursively copy the contents of `src` into `dst`.
///
/// Existing files at matching relative paths are overwritten; anything else
/// already in `dst` is left alone. Symlinks are followed, so a dangling link
/// is an error. Returns the number of files copied.
pub fn copy_dir_all(src: &Path, dst: &Path) -> Result<usize> {
    ensure_dir(dst)?;

    let mut copied = 0;
    for entry in WalkDir::new(src)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry =
            entry.with_context(|| format!("failed to walk directory: {}", src.display()))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .with_context(|| format!("{} is outside {}", entry.path().display(), src.display()))?;
        let dst_path = dst.join(relative);

        if entry.file_type().is_dir() {
            ensure_dir(&dst_path)?;
        } else {
            fs::copy(entry.path(), &dst_path).with_context(|| {
                format!(
                    "failed to copy {} to {}",
                    entry.path().display(),
                    dst_path.display()
                )
            })?;
            tracing::debug!("copied {}", dst_path.display());
            copied += 1;
        }
    }

    Ok(copied)
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

/// Read a file to string, with nice error messages.
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read file: {}", path.display()))
}

/// Write a string to a file, creating parent directories if needed.
pub fn write_string(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, contents).with_context(|| format!("failed to write file: {}", path.display()))
}

/// Immediate children of `dir`, sorted by file name.
///
/// Directory iteration order is platform dependent; sorting keeps every
/// generated tree reproducible.
pub fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    for entry in
        fs::read_dir(dir).with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry =
            entry.with_context(|| format!("failed to read directory: {}", dir.display()))?;
        entries.push(entry.path());
    }

    entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(entries)
}

/// `name` (a component of `path`) as UTF-8. SDK names end up in output
/// paths and stub text, so they are never lossily converted.
pub fn utf8_name<'a>(name: &'a OsStr, path: &Path) -> Result<&'a str> {
    name.to_str()
        .ok_or_else(|| anyhow!("file name is not valid UTF-8: {}", path.display()))
}
