//! Skybox stage.

use std::sync::Arc;

use estuary_core::mesh::shapes::SphereParams;
use estuary_core::mesh::{MeshData, MeshRegistry};

use crate::backend::CommandRecorder;
use crate::scene::FrameContext;

use super::RenderStage;

/// Draws the sky dome first in the geometry subpass.
///
/// Also restores the surface viewport after the shadow stage's
/// shadow-map-sized viewport.
#[derive(Debug)]
pub struct SkyboxStage {
    dome: Arc<MeshData>,
}

impl SkyboxStage {
    /// Create a skybox stage; the dome mesh comes from the registry.
    pub fn new(registry: &MeshRegistry) -> Self {
        Self {
            dome: SphereParams::new(1.0, 24, 12).create(registry),
        }
    }

    /// The dome mesh.
    pub fn dome(&self) -> &Arc<MeshData> {
        &self.dome
    }
}

impl RenderStage for SkyboxStage {
    fn name(&self) -> &'static str {
        "skybox"
    }

    fn execute(&mut self, recorder: &mut dyn CommandRecorder, frame: &FrameContext<'_>) {
        recorder.set_viewport(frame.viewport);
        recorder.draw_indexed(self.dome.index_count());
    }
}
