//! Output tree layout of an SDK bundle.

use std::path::{Path, PathBuf};

/// Name of the rendered SDK descriptor at the bundle root.
pub const SETTINGS_FILE: &str = "SDKSettings.plist";

/// Paths inside an SDK bundle rooted at `root`.
///
/// ```text
/// <root>/
///   SDKSettings.plist
///   System/Library/Frameworks/<name>.framework/Headers/
///   System/usr/include/
///   System/usr/lib/<lib>.tbd
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkLayout {
    root: PathBuf,
}

impl SdkLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        SdkLayout { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn frameworks_dir(&self) -> PathBuf {
        self.root.join("System").join("Library").join("Frameworks")
    }

    pub fn include_dir(&self) -> PathBuf {
        self.root.join("System").join("usr").join("include")
    }

    pub fn lib_dir(&self) -> PathBuf {
        self.root.join("System").join("usr").join("lib")
    }

    pub fn settings_path(&self) -> PathBuf {
        self.root.join(SETTINGS_FILE)
    }

    /// `<root>/System/Library/Frameworks/<name>.framework/Headers`
    pub fn framework_headers_dir(&self, name: &str) -> PathBuf {
        self.frameworks_dir()
            .join(format!("{}.framework", name))
            .join("Headers")
    }

    /// `<root>/System/usr/lib/<library>.tbd`
    pub fn stub_path(&self, library: &str) -> PathBuf {
        self.lib_dir().join(format!("{}.tbd", library))
    }

    /// The directories every SDK bundle has, parents first.
    pub fn scaffold_dirs(&self) -> [PathBuf; 4] {
        [
            self.root.clone(),
            self.frameworks_dir(),
            self.include_dir(),
            self.lib_dir(),
        ]
    }
}
