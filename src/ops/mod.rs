//! High-level operations.
//!
//! This module contains the implementation of mksdk commands.

pub mod materialize;
pub mod mksdk_create;
pub mod scaffold;
pub mod settings;
pub mod stubs;

pub use materialize::{copy_framework, copy_headers, discover_frameworks, FrameworkCopy};
pub use mksdk_create::{create_sdk, CreateOptions, CreateSummary};
pub use scaffold::scaffold;
pub use settings::write_settings;
pub use stubs::{discover_symbol_files, generate_stub, write_stub, StubLibrary};
