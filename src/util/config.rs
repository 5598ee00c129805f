//! Configuration file support for mksdk.
//!
//! mksdk reads two configuration file locations:
//! - Global: `~/.mksdk/config.toml` - User-wide defaults
//! - Project: `./mksdk.toml` - Per-directory overrides
//!
//! Project config takes precedence over global config, and command-line
//! flags take precedence over both.
//!
//! ```toml
//! [sdk]
//! sdk_name = "PocketDarwin01"
//! architecture = "arm64"
//! target_triple = "arm64-apple-darwin"
//!
//! [paths]
//! source = "sdk_sources"
//! output = "out/PocketDarwin01.sdk"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::SdkConfig;

/// Name of the project configuration file.
pub const PROJECT_CONFIG_FILE: &str = "mksdk.toml";

/// Default directory holding `headers/`, `frameworks/` and `symbols/`.
pub const DEFAULT_SOURCE_DIR: &str = "sdk_sources";

/// mksdk configuration as written on disk. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// SDK metadata overrides
    pub sdk: SdkSection,

    /// Input/output locations
    pub paths: PathsSection,
}

/// `[sdk]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SdkSection {
    pub sdk_name: Option<String>,
    pub canonical_name: Option<String>,
    pub version: Option<String>,
    pub architecture: Option<String>,
    pub target_triple: Option<String>,
    pub platform_name: Option<String>,
}

/// `[paths]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsSection {
    /// Source root with `headers/`, `frameworks/` and `symbols/`
    pub source: Option<PathBuf>,

    /// SDK bundle output directory
    pub output: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("ignoring config {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        let Config { sdk, paths } = other;

        merge_opt(&mut self.sdk.sdk_name, sdk.sdk_name);
        merge_opt(&mut self.sdk.canonical_name, sdk.canonical_name);
        merge_opt(&mut self.sdk.version, sdk.version);
        merge_opt(&mut self.sdk.architecture, sdk.architecture);
        merge_opt(&mut self.sdk.target_triple, sdk.target_triple);
        merge_opt(&mut self.sdk.platform_name, sdk.platform_name);

        merge_opt(&mut self.paths.source, paths.source);
        merge_opt(&mut self.paths.output, paths.output);
    }

    /// Resolve the SDK settings, filling gaps with the built-in defaults.
    pub fn sdk_config(&self) -> SdkConfig {
        let defaults = SdkConfig::default();
        let sdk = self.sdk.clone();

        SdkConfig {
            sdk_name: sdk.sdk_name.unwrap_or(defaults.sdk_name),
            canonical_name: sdk.canonical_name.or(defaults.canonical_name),
            version: sdk.version.unwrap_or(defaults.version),
            architecture: sdk.architecture.unwrap_or(defaults.architecture),
            target_triple: sdk.target_triple.unwrap_or(defaults.target_triple),
            platform_name: sdk.platform_name.unwrap_or(defaults.platform_name),
        }
    }

    /// Source root, defaulting to `sdk_sources`.
    pub fn source_root(&self) -> PathBuf {
        self.paths
            .source
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_DIR))
    }

    /// Output root, defaulting to `<sdk_name>.sdk`.
    pub fn output_root(&self, sdk: &SdkConfig) -> PathBuf {
        self.paths
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(sdk.bundle_name()))
    }
}

fn merge_opt<T>(slot: &mut Option<T>, other: Option<T>) {
    if other.is_some() {
        *slot = other;
    }
}

/// Get the global mksdk config directory (~/.mksdk).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".mksdk"))
}

/// Get the global config path (~/.mksdk/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Load merged configuration.
///
/// Order of precedence (highest to lowest):
/// 1. `explicit` (a `--config` file; must exist and parse)
/// 2. Project config (`<cwd>/mksdk.toml`), only read when no explicit file is given
/// 3. Global config (`~/.mksdk/config.toml`)
/// 4. Defaults
pub fn load_config(global: Option<&Path>, cwd: &Path, explicit: Option<&Path>) -> Result<Config> {
    let mut config = Config::default();

    if let Some(global) = global {
        config.merge(Config::load_or_default(global));
    }

    match explicit {
        Some(path) => config.merge(Config::load(path)?),
        None => config.merge(Config::load_or_default(&cwd.join(PROJECT_CONFIG_FILE))),
    }

    Ok(config)
}
