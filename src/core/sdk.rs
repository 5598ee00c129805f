//! SDK identity and target settings.
//!
//! Every value that ends up in `SDKSettings.plist` or in a `.tbd` stub lives
//! here, so a run can be retargeted without touching the generator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default SDK name (the bundle directory is `<name>.sdk`).
pub const DEFAULT_SDK_NAME: &str = "PocketDarwin01";

/// Default SDK version string.
pub const DEFAULT_VERSION: &str = "0.1";

/// Default architecture.
pub const DEFAULT_ARCH: &str = "arm64";

/// Default target triple.
pub const DEFAULT_TARGET: &str = "arm64-apple-darwin";

/// Default platform label.
pub const DEFAULT_PLATFORM: &str = "PocketDarwin";

/// Errors from an invalid SDK configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("`{field}` must not be empty")]
    Empty { field: &'static str },

    #[error("`{field}` must not contain whitespace: `{value}`")]
    Whitespace { field: &'static str, value: String },

    #[error("SDK name `{0}` must not contain a path separator")]
    PathSeparator(String),
}

/// SDK metadata and target settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdkConfig {
    /// Human-facing SDK name, e.g. `PocketDarwin01`
    pub sdk_name: String,

    /// Explicit canonical name; derived from `sdk_name` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_name: Option<String>,

    /// SDK version string
    pub version: String,

    /// The single architecture this SDK supports
    pub architecture: String,

    /// Toolchain target triple written into stubs
    pub target_triple: String,

    /// Platform label
    pub platform_name: String,
}

impl Default for SdkConfig {
    fn default() -> Self {
        SdkConfig {
            sdk_name: DEFAULT_SDK_NAME.to_string(),
            canonical_name: None,
            version: DEFAULT_VERSION.to_string(),
            architecture: DEFAULT_ARCH.to_string(),
            target_triple: DEFAULT_TARGET.to_string(),
            platform_name: DEFAULT_PLATFORM.to_string(),
        }
    }
}

impl SdkConfig {
    /// The lowercase identifier recorded as `CanonicalName`.
    pub fn canonical_name(&self) -> String {
        match &self.canonical_name {
            Some(name) => name.clone(),
            None => self.sdk_name.to_lowercase(),
        }
    }

    /// Directory name of the SDK bundle (`<sdk_name>.sdk`).
    pub fn bundle_name(&self) -> String {
        format!("{}.sdk", self.sdk_name)
    }

    /// Check that every field is usable in paths and rendered documents.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields: [(&'static str, &str); 5] = [
            ("sdk_name", self.sdk_name.as_str()),
            ("version", self.version.as_str()),
            ("architecture", self.architecture.as_str()),
            ("target_triple", self.target_triple.as_str()),
            ("platform_name", self.platform_name.as_str()),
        ];

        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty { field });
            }
        }

        if let Some(canonical) = &self.canonical_name {
            if canonical.trim().is_empty() {
                return Err(ConfigError::Empty {
                    field: "canonical_name",
                });
            }
        }

        // Both appear inside `[ ... ]` flow sequences in the stub format.
        for (field, value) in [
            ("architecture", &self.architecture),
            ("target_triple", &self.target_triple),
        ] {
            if value.chars().any(char::is_whitespace) {
                return Err(ConfigError::Whitespace {
                    field,
                    value: value.clone(),
                });
            }
        }

        if self.sdk_name.contains('/') || self.sdk_name.contains('\\') {
            return Err(ConfigError::PathSeparator(self.sdk_name.clone()));
        }

        Ok(())
    }
}
