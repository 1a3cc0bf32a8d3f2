//! geobound-rs
//! ===========
//!
//! Umbrella crate for the workspace. It re-exports [`geobound_core`] so the
//! demos under `demos/` can be run with `cargo run --example <name>`.
//!
//! For programmatic access, depend on `geobound-core` directly.

pub use geobound_core::*;
