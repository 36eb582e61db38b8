//! GUI and text overlay stages.

use std::sync::Arc;

use estuary_core::mesh::shapes::QuadParams;
use estuary_core::mesh::{MeshData, MeshRegistry};

use crate::backend::CommandRecorder;
use crate::scene::FrameContext;

use super::RenderStage;

/// Draws GUI elements at the end of the final subpass.
///
/// GUI and font stages render instanced unit quads; both resolve the same
/// quad through the registry and therefore share one mesh instance.
#[derive(Debug)]
pub struct GuiStage {
    quad: Arc<MeshData>,
}

impl GuiStage {
    /// Create a GUI stage; the unit quad comes from the registry.
    pub fn new(registry: &MeshRegistry) -> Self {
        Self {
            quad: QuadParams::new(0.5, 0.5).create(registry),
        }
    }

    /// The unit quad mesh.
    pub fn quad(&self) -> &Arc<MeshData> {
        &self.quad
    }
}

impl RenderStage for GuiStage {
    fn name(&self) -> &'static str {
        "gui"
    }

    fn execute(&mut self, recorder: &mut dyn CommandRecorder, _frame: &FrameContext<'_>) {
        recorder.draw_indexed(self.quad.index_count());
    }
}

/// Draws text glyphs last, above the GUI.
#[derive(Debug)]
pub struct FontStage {
    quad: Arc<MeshData>,
}

impl FontStage {
    /// Create a font stage; the unit quad comes from the registry.
    pub fn new(registry: &MeshRegistry) -> Self {
        Self {
            quad: QuadParams::new(0.5, 0.5).create(registry),
        }
    }

    /// The unit quad mesh.
    pub fn quad(&self) -> &Arc<MeshData> {
        &self.quad
    }
}

impl RenderStage for FontStage {
    fn name(&self) -> &'static str {
        "fonts"
    }

    fn execute(&mut self, recorder: &mut dyn CommandRecorder, _frame: &FrameContext<'_>) {
        recorder.draw_indexed(self.quad.index_count());
    }
}
