//! Entity stage.

use crate::backend::CommandRecorder;
use crate::scene::FrameContext;

use super::RenderStage;

/// Draws the scene's entities into the G-buffer (geometry subpass).
///
/// Draw order within the stage is the scene's object order; opaque
/// sorting is the caller's responsibility when composing the scene.
#[derive(Debug, Default)]
pub struct EntityStage;

impl EntityStage {
    /// Create an entity stage.
    pub fn new() -> Self {
        Self
    }
}

impl RenderStage for EntityStage {
    fn name(&self) -> &'static str {
        "entities"
    }

    fn execute(&mut self, recorder: &mut dyn CommandRecorder, frame: &FrameContext<'_>) {
        for object in &frame.scene.objects {
            if object.mesh.is_empty() {
                continue;
            }
            recorder.draw_indexed(object.mesh.index_count());
        }
    }
}
