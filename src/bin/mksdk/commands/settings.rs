//! `mksdk settings` command

use anyhow::Result;

use crate::cli::SettingsArgs;
use crate::commands::resolve_config;
use mksdk::render::render_settings;

pub fn execute(args: SettingsArgs) -> Result<()> {
    let config = resolve_config(&args.sdk)?;
    let sdk = config.sdk_config();
    sdk.validate()?;

    print!("{}", render_settings(&sdk)?);
    Ok(())
}
