//! mksdk - assemble a Darwin-style platform SDK tree
//!
//! This crate provides the library behind the `mksdk` binary: the bundle
//! layout, symbol list parsing, `SDKSettings.plist` and `.tbd` rendering,
//! and the operations that copy sources into an SDK bundle.

pub mod core;
pub mod ops;
pub mod render;
pub mod util;

pub use crate::core::{SdkConfig, SdkLayout, SymbolList};
pub use crate::ops::{create_sdk, CreateOptions, CreateSummary};
