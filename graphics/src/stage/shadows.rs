//! Shadow map stage.

use crate::backend::CommandRecorder;
use crate::scene::FrameContext;
use crate::types::Viewport;

use super::RenderStage;

/// Renders shadow casters into the shadow-map attachment (subpass 0).
#[derive(Debug)]
pub struct ShadowStage {
    resolution: u32,
}

impl ShadowStage {
    /// Create a shadow stage with the default map resolution.
    pub fn new() -> Self {
        Self { resolution: 4096 }
    }

    /// Set the shadow-map resolution.
    #[must_use]
    pub fn with_resolution(mut self, resolution: u32) -> Self {
        self.resolution = resolution;
        self
    }

    /// The shadow-map resolution.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }
}

impl Default for ShadowStage {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderStage for ShadowStage {
    fn name(&self) -> &'static str {
        "shadows"
    }

    fn execute(&mut self, recorder: &mut dyn CommandRecorder, frame: &FrameContext<'_>) {
        recorder.set_viewport(Viewport::from_dimensions(self.resolution, self.resolution));

        for object in &frame.scene.objects {
            if object.mesh.is_empty() {
                continue;
            }
            recorder.draw_indexed(object.mesh.index_count());
        }
    }
}
