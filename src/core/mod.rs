//! Core data structures for mksdk.
//!
//! - SDK metadata and target settings
//! - The on-disk layout of an SDK bundle
//! - Exported symbol lists

pub mod layout;
pub mod sdk;
pub mod symbols;

pub use layout::SdkLayout;
pub use sdk::{ConfigError, SdkConfig};
pub use symbols::SymbolList;
