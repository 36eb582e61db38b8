//! # Estuary Graphics
//!
//! Deferred rendering core for the Estuary engine.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`RenderpassPlan`] - Validated multi-attachment, multi-subpass topology
//! - [`CommandRecorder`] - Trait for command recording backends
//! - [`stage`] - Per-feature renderers (shadows, geometry, lighting, filters)
//! - [`RenderOrchestrator`] - Sequences the stages through one frame
//!
//! ## Example
//!
//! ```ignore
//! use estuary_graphics::{DummyRecorder, RenderOrchestrator, RenderpassPlan};
//!
//! let plan = RenderpassPlan::deferred()?;
//! let mut orchestrator = RenderOrchestrator::new(plan, &registry, Default::default())?;
//! orchestrator.render(&mut recorder, &frame);
//! ```

pub mod backend;
pub mod error;
pub mod orchestrator;
pub mod renderpass;
pub mod scene;
pub mod stage;
pub mod types;

// Re-export main types for convenience
pub use backend::{CommandRecorder, DummyRecorder, RecordedCommand};
pub use error::{FrameError, PlanError};
pub use orchestrator::{PostProcessConfig, RenderOrchestrator};
pub use renderpass::{AttachmentDescriptor, RenderpassPlan, SubpassDescriptor};
pub use scene::{Camera, FrameContext, RenderObject, Scene, WorldEnvironment};
pub use types::{ClearValue, TextureFormat, TextureLayout, TextureUsage, Viewport};

/// Graphics library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the graphics subsystem.
///
/// This should be called before using any graphics functionality.
pub fn init() {
    log::info!("Estuary Graphics v{} initialized", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_deferred_plan_builds() {
        let plan = RenderpassPlan::deferred().unwrap();
        assert_eq!(plan.subpass_count(), 4);
    }
}
