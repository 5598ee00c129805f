//! Directory scaffolding for a new SDK bundle.

use anyhow::Result;

use crate::core::SdkLayout;
use crate::util::fs::ensure_dir;

/// Create the fixed bundle directories under the layout root.
///
/// Existing directories are left as they are, so repeated runs succeed.
pub fn scaffold(layout: &SdkLayout) -> Result<()> {
    for dir in layout.scaffold_dirs() {
        ensure_dir(&dir)?;
        tracing::debug!("ensured {}", dir.display());
    }
    Ok(())
}
