//! Post-processing filter stages.
//!
//! Each filter is a fullscreen pass in the final subpass. Filters keep
//! their shader parameters as plain fields; the tilt-shift and grain
//! filters stay in the pipeline even when the orchestrator's configuration
//! disables their execution.

use estuary_core::math::Vec3;

use crate::backend::CommandRecorder;
use crate::scene::FrameContext;

use super::RenderStage;

/// Fast approximate anti-aliasing.
#[derive(Debug)]
pub struct FxaaStage {
    /// Maximum span of the edge search, in texels.
    pub span_max: f32,
}

impl FxaaStage {
    /// Create the FXAA filter.
    pub fn new() -> Self {
        Self { span_max: 8.0 }
    }
}

impl Default for FxaaStage {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderStage for FxaaStage {
    fn name(&self) -> &'static str {
        "fxaa"
    }

    fn execute(&mut self, recorder: &mut dyn CommandRecorder, _frame: &FrameContext<'_>) {
        recorder.draw(0..3);
    }
}

/// Lens flare driven by the world's sun.
///
/// The orchestrator feeds the current sun direction and height in before
/// each execution; the flare fades out as the sun drops below the horizon.
#[derive(Debug)]
pub struct LensFlareStage {
    sun_direction: Vec3,
    sun_height: f32,
}

impl LensFlareStage {
    /// Create the lens flare filter.
    pub fn new() -> Self {
        Self {
            sun_direction: Vec3::zeros(),
            sun_height: 0.0,
        }
    }

    /// Set the sun direction and height for the coming frame.
    pub fn set_sun(&mut self, direction: Vec3, height: f32) {
        self.sun_direction = direction;
        self.sun_height = height;
    }

    /// The sun direction the filter will use.
    pub fn sun_direction(&self) -> Vec3 {
        self.sun_direction
    }

    /// The sun height the filter will use.
    pub fn sun_height(&self) -> f32 {
        self.sun_height
    }
}

impl Default for LensFlareStage {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderStage for LensFlareStage {
    fn name(&self) -> &'static str {
        "lensflare"
    }

    fn execute(&mut self, recorder: &mut dyn CommandRecorder, _frame: &FrameContext<'_>) {
        recorder.draw(0..3);
    }
}

/// Tilt-shift depth-of-field approximation.
#[derive(Debug)]
pub struct TiltShiftStage {
    /// Blur strength.
    pub blur_amount: f32,
    /// Vertical centre of the focus band.
    pub centre: f32,
}

impl TiltShiftStage {
    /// Create the tilt-shift filter.
    pub fn new() -> Self {
        Self {
            blur_amount: 1.0,
            centre: 1.1,
        }
    }
}

impl Default for TiltShiftStage {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderStage for TiltShiftStage {
    fn name(&self) -> &'static str {
        "tiltshift"
    }

    fn execute(&mut self, recorder: &mut dyn CommandRecorder, _frame: &FrameContext<'_>) {
        recorder.draw(0..3);
    }
}

/// Film grain.
#[derive(Debug)]
pub struct GrainStage {
    /// Grain strength.
    pub strength: f32,
}

impl GrainStage {
    /// Create the grain filter.
    pub fn new() -> Self {
        Self { strength: 2.3 }
    }
}

impl Default for GrainStage {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderStage for GrainStage {
    fn name(&self) -> &'static str {
        "grain"
    }

    fn execute(&mut self, recorder: &mut dyn CommandRecorder, _frame: &FrameContext<'_>) {
        recorder.draw(0..3);
    }
}
