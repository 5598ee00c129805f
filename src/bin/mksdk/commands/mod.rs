//! Command implementations

pub mod completions;
pub mod create;
pub mod settings;
pub mod stub;

use anyhow::{Context, Result};

use crate::cli::SdkArgs;
use mksdk::util::config::{global_config_path, load_config, Config};

/// Load configuration files and apply command-line overrides on top.
pub fn resolve_config(args: &SdkArgs) -> Result<Config> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let global = global_config_path();

    let mut config = load_config(global.as_deref(), &cwd, args.config.as_deref())?;
    config.merge(args.overrides());
    Ok(config)
}
