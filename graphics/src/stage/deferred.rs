//! Deferred lighting composition stage.

use crate::backend::CommandRecorder;
use crate::scene::FrameContext;

use super::RenderStage;

/// Fullscreen lighting pass consuming the G-buffer written by the geometry
/// subpass.
#[derive(Debug)]
pub struct DeferredStage {
    /// Ambient light factor applied in the composition shader.
    pub ambient: f32,
}

impl DeferredStage {
    /// Create the deferred composition stage.
    pub fn new() -> Self {
        Self { ambient: 0.03 }
    }
}

impl Default for DeferredStage {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderStage for DeferredStage {
    fn name(&self) -> &'static str {
        "deferred"
    }

    fn execute(&mut self, recorder: &mut dyn CommandRecorder, frame: &FrameContext<'_>) {
        recorder.set_viewport(frame.viewport);
        // Fullscreen triangle; the shader reads the G-buffer attachments.
        recorder.draw(0..3);
    }
}
