//! Per-feature render stages.
//!
//! Each pipeline feature (shadows, skybox, terrain, water, entities, the
//! deferred composition, the post-process filters, and the overlays) is one
//! stage type. Stages own their geometry, resolved through the shared mesh
//! registry, and record draw commands when executed; the orchestrator
//! decides when (and in which subpass) each stage runs.
//!
//! A stage handles its own failures internally; `execute` has no error
//! path back to the orchestrator.

pub mod deferred;
pub mod entities;
pub mod filters;
pub mod overlay;
pub mod shadows;
pub mod skybox;
pub mod terrain;
pub mod water;

pub use deferred::DeferredStage;
pub use entities::EntityStage;
pub use filters::{FxaaStage, GrainStage, LensFlareStage, TiltShiftStage};
pub use overlay::{FontStage, GuiStage};
pub use shadows::ShadowStage;
pub use skybox::SkyboxStage;
pub use terrain::TerrainStage;
pub use water::WaterStage;

use crate::backend::CommandRecorder;
use crate::scene::FrameContext;

/// A renderer for one pipeline feature.
pub trait RenderStage {
    /// Stage name, used for debug markers and logging.
    fn name(&self) -> &'static str;

    /// Record this stage's commands for the current frame.
    fn execute(&mut self, recorder: &mut dyn CommandRecorder, frame: &FrameContext<'_>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use estuary_core::mesh::MeshRegistry;

    #[test]
    fn test_stage_names() {
        let registry = MeshRegistry::new();
        assert_eq!(ShadowStage::new().name(), "shadows");
        assert_eq!(SkyboxStage::new(&registry).name(), "skybox");
        assert_eq!(TerrainStage::new(&registry).name(), "terrain");
        assert_eq!(WaterStage::new(&registry).name(), "water");
        assert_eq!(EntityStage::new().name(), "entities");
        assert_eq!(DeferredStage::new().name(), "deferred");
        assert_eq!(FxaaStage::new().name(), "fxaa");
        assert_eq!(LensFlareStage::new().name(), "lensflare");
        assert_eq!(TiltShiftStage::new().name(), "tiltshift");
        assert_eq!(GrainStage::new().name(), "grain");
        assert_eq!(GuiStage::new(&registry).name(), "gui");
        assert_eq!(FontStage::new(&registry).name(), "fonts");
    }
}
