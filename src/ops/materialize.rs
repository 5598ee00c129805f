//! Copying headers and frameworks into an SDK bundle.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use crate::core::SdkLayout;
use crate::util::fs::{copy_dir_all, sorted_entries, utf8_name};

/// A framework copied into the bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameworkCopy {
    /// Framework name, without the `.framework` suffix
    pub name: String,

    /// Number of header files copied
    pub files: usize,
}

/// Copy a header tree into `System/usr/include`.
///
/// Returns `None` when `src` is not a directory.
pub fn copy_headers(src: &Path, layout: &SdkLayout) -> Result<Option<usize>> {
    if !src.is_dir() {
        tracing::debug!("no headers at {}", src.display());
        return Ok(None);
    }

    let files = copy_dir_all(src, &layout.include_dir())?;
    Ok(Some(files))
}

/// Frameworks found directly under `src`, in name order.
///
/// Only directories count; other entries are skipped.
pub fn discover_frameworks(src: &Path) -> Result<Vec<(String, PathBuf)>> {
    if !src.is_dir() {
        tracing::debug!("no frameworks at {}", src.display());
        return Ok(Vec::new());
    }

    let mut frameworks = Vec::new();
    for path in sorted_entries(src)? {
        if !path.is_dir() {
            tracing::debug!("skipping non-directory {}", path.display());
            continue;
        }
        if let Some(name) = path.file_name() {
            let name = utf8_name(name, &path)?.to_string();
            frameworks.push((name, path));
        }
    }
    Ok(frameworks)
}

/// Copy one framework's sources into `<name>.framework/Headers`.
pub fn copy_framework(name: &str, src: &Path, layout: &SdkLayout) -> Result<FrameworkCopy> {
    let files = copy_dir_all(src, &layout.framework_headers_dir(name))?;
    Ok(FrameworkCopy {
        name: name.to_string(),
        files,
    })
}
