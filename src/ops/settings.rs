//! Writing `SDKSettings.plist`.

use std::path::PathBuf;

use anyhow::Result;

use crate::core::{SdkConfig, SdkLayout};
use crate::render::render_settings;
use crate::util::fs::write_string;

/// Render and write the SDK descriptor, replacing any previous one.
pub fn write_settings(config: &SdkConfig, layout: &SdkLayout) -> Result<PathBuf> {
    let path = layout.settings_path();
    write_string(&path, &render_settings(config)?)?;
    tracing::debug!("wrote {}", path.display());
    Ok(path)
}
