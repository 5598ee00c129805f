//! Exported symbol lists read from plain-text files.

use std::path::Path;

use anyhow::{anyhow, Result};

use crate::util::fs::{read_to_string, utf8_name};

/// The exported symbols of one library, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolList {
    /// Library name, e.g. `libSystem`
    pub library: String,

    /// Symbol names, trimmed; duplicates and order are kept as written
    pub symbols: Vec<String>,
}

impl SymbolList {
    /// Parse one symbol per line, dropping blank and whitespace-only lines.
    ///
    /// A lone `\r` and the Unicode line and paragraph separators also end a
    /// line.
    pub fn parse(library: impl Into<String>, text: &str) -> Self {
        let symbols = text
            .split(is_line_break)
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        SymbolList {
            library: library.into(),
            symbols,
        }
    }

    /// Read a symbol file; the library is named after the file stem.
    pub fn from_file(path: &Path) -> Result<Self> {
        let library = library_name(path)?;
        let text = read_to_string(path)?;
        Ok(Self::parse(library, &text))
    }

    /// Install name recorded in the stub.
    pub fn install_name(&self) -> String {
        format!("/usr/lib/{}.dylib", self.library)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Library name for a symbol file: its file name without the last extension.
pub fn library_name(path: &Path) -> Result<String> {
    let stem = path
        .file_stem()
        .ok_or_else(|| anyhow!("cannot derive a library name from {}", path.display()))?;
    Ok(utf8_name(stem, path)?.to_string())
}
