//! `mksdk create` command

use anyhow::Result;

use crate::cli::CreateArgs;
use crate::commands::resolve_config;
use mksdk::ops::mksdk_create::{create_sdk, CreateOptions};
use mksdk::util::config::Config;
use mksdk::util::shell::Shell;

/// Resolve paths and SDK settings: flags, then config files, then defaults.
pub fn create_options(args: &CreateArgs, config: &Config) -> CreateOptions {
    let sdk = config.sdk_config();
    let source_root = args.source.clone().unwrap_or_else(|| config.source_root());
    let output_root = args
        .output
        .clone()
        .unwrap_or_else(|| config.output_root(&sdk));

    CreateOptions {
        source_root,
        output_root,
        sdk,
    }
}

pub fn execute(args: CreateArgs, shell: &Shell) -> Result<()> {
    let config = resolve_config(&args.sdk)?;
    let opts = create_options(&args, &config);

    tracing::debug!(
        "source {}, output {}",
        opts.source_root.display(),
        opts.output_root.display()
    );

    create_sdk(&opts, shell)?;
    Ok(())
}
