//! Text renderers for the documents an SDK bundle carries.
//!
//! Renderers are pure: they turn configuration and symbol lists into the
//! exact bytes written to disk, which keeps output deterministic.

pub mod settings;
pub mod tbd;

pub use settings::render_settings;
pub use tbd::render_tbd;
