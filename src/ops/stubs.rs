//! Stub library generation from symbol lists.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use crate::core::{SdkConfig, SdkLayout, SymbolList};
use crate::render::render_tbd;
use crate::util::fs::{sorted_entries, write_string};

/// A stub written into `System/usr/lib`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StubLibrary {
    /// Library name (symbol file stem)
    pub library: String,

    /// Number of exported symbols
    pub symbols: usize,

    /// Path of the written `.tbd`
    pub path: PathBuf,
}

/// Symbol files directly under `src`, in name order.
///
/// Only regular files (or links to them) are symbol lists; subdirectories
/// and other entries are skipped.
pub fn discover_symbol_files(src: &Path) -> Result<Vec<PathBuf>> {
    if !src.is_dir() {
        tracing::debug!("no symbol lists at {}", src.display());
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for path in sorted_entries(src)? {
        if path.is_file() {
            files.push(path);
        } else {
            tracing::debug!("skipping non-file {}", path.display());
        }
    }
    Ok(files)
}

/// Render and write the stub for one symbol list.
pub fn write_stub(
    config: &SdkConfig,
    list: &SymbolList,
    layout: &SdkLayout,
) -> Result<StubLibrary> {
    let path = layout.stub_path(&list.library);
    write_string(&path, &render_tbd(config, list))?;
    tracing::debug!("wrote {} ({} symbols)", path.display(), list.len());

    Ok(StubLibrary {
        library: list.library.clone(),
        symbols: list.len(),
        path,
    })
}

/// Read one symbol file and write its stub.
pub fn generate_stub(
    config: &SdkConfig,
    symbol_file: &Path,
    layout: &SdkLayout,
) -> Result<StubLibrary> {
    let list = SymbolList::from_file(symbol_file)?;
    write_stub(config, &list, layout)
}
