//! Text-based stub (`.tbd`) rendering.
//!
//! Stubs use TAPI's TBD v4 layout: one target, one install name and a single
//! export block scoped to the configured architecture.

use crate::core::{SdkConfig, SymbolList};

/// TBD schema version written into every stub.
pub const TBD_VERSION: u32 = 4;

/// Render the `.tbd` document for one library.
pub fn render_tbd(config: &SdkConfig, list: &SymbolList) -> String {
    let mut out = format!(
        r#"--- !tapi-tbd
tbd-version:     {version}
targets:         [ {target} ]
install-name:    {install_name}
exports:
  - archs:       [ {arch} ]
    symbols:
"#,
        version = TBD_VERSION,
        target = config.target_triple,
        install_name = list.install_name(),
        arch = config.architecture,
    );

    for symbol in &list.symbols {
        out.push_str("      - ");
        out.push_str(symbol);
        out.push('\n');
    }
    out.push_str("...\n");

    out
}
