//! `mksdk stub` command

use anyhow::Result;

use crate::cli::StubArgs;
use crate::commands::resolve_config;
use mksdk::core::SymbolList;
use mksdk::render::render_tbd;

pub fn execute(args: StubArgs) -> Result<()> {
    let config = resolve_config(&args.sdk)?;
    let sdk = config.sdk_config();
    sdk.validate()?;

    let list = SymbolList::from_file(&args.file)?;
    tracing::debug!("{}: {} symbols", list.library, list.len());

    print!("{}", render_tbd(&sdk, &list));
    Ok(())
}
