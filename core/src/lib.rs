//! # Estuary Core
//!
//! Core crate for the Estuary engine: CPU-side mesh data, procedural shape
//! builders, the shared mesh registry, and math utilities.

pub mod math;
pub mod mesh;

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the core subsystem.
pub fn init() {
    log::info!("Estuary Core v{} initialized", VERSION);
}
