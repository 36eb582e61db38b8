//! Terrain stage.

use std::sync::Arc;

use estuary_core::mesh::shapes::QuadParams;
use estuary_core::mesh::{MeshData, MeshRegistry};

use crate::backend::CommandRecorder;
use crate::scene::FrameContext;

use super::RenderStage;

/// Draws the terrain patch in the geometry subpass.
#[derive(Debug)]
pub struct TerrainStage {
    patch: Arc<MeshData>,
}

impl TerrainStage {
    /// Create a terrain stage; the patch mesh comes from the registry.
    pub fn new(registry: &MeshRegistry) -> Self {
        Self {
            patch: QuadParams::new(128.0, 128.0).create(registry),
        }
    }

    /// The terrain patch mesh.
    pub fn patch(&self) -> &Arc<MeshData> {
        &self.patch
    }
}

impl RenderStage for TerrainStage {
    fn name(&self) -> &'static str {
        "terrain"
    }

    fn execute(&mut self, recorder: &mut dyn CommandRecorder, _frame: &FrameContext<'_>) {
        recorder.draw_indexed(self.patch.index_count());
    }
}
