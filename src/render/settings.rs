//! `SDKSettings.plist` rendering.

use anyhow::{Context, Result};
use plist::{Dictionary, Value};

use crate::core::SdkConfig;

/// Build the settings dictionary in its canonical key order.
pub fn settings_dictionary(config: &SdkConfig) -> Dictionary {
    let mut dict = Dictionary::new();
    dict.insert(
        "CanonicalName".to_string(),
        Value::String(config.canonical_name()),
    );
    dict.insert("Version".to_string(), Value::String(config.version.clone()));
    dict.insert(
        "DefaultArchitecture".to_string(),
        Value::String(config.architecture.clone()),
    );
    dict.insert(
        "SupportedArchitectures".to_string(),
        Value::Array(vec![Value::String(config.architecture.clone())]),
    );
    dict.insert(
        "PlatformName".to_string(),
        Value::String(config.platform_name.clone()),
    );
    dict
}

/// Render `SDKSettings.plist` as an XML property list.
pub fn render_settings(config: &SdkConfig) -> Result<String> {
    let mut buf = Vec::new();
    plist::to_writer_xml(&mut buf, &Value::Dictionary(settings_dictionary(config)))
        .context("failed to serialize SDKSettings.plist")?;

    let mut text = String::from_utf8(buf).context("SDKSettings.plist is not valid UTF-8")?;
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}
