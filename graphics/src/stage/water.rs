//! Water surface stage.

use std::sync::Arc;

use estuary_core::mesh::shapes::QuadParams;
use estuary_core::mesh::{MeshData, MeshRegistry};

use crate::backend::CommandRecorder;
use crate::scene::FrameContext;

use super::RenderStage;

/// Draws the water plane in the geometry subpass.
#[derive(Debug)]
pub struct WaterStage {
    surface: Arc<MeshData>,
}

impl WaterStage {
    /// Create a water stage; the surface mesh comes from the registry.
    pub fn new(registry: &MeshRegistry) -> Self {
        Self {
            surface: QuadParams::new(512.0, 512.0).create(registry),
        }
    }

    /// The water surface mesh.
    pub fn surface(&self) -> &Arc<MeshData> {
        &self.surface
    }
}

impl RenderStage for WaterStage {
    fn name(&self) -> &'static str {
        "water"
    }

    fn execute(&mut self, recorder: &mut dyn CommandRecorder, _frame: &FrameContext<'_>) {
        recorder.draw_indexed(self.surface.index_count());
    }
}
