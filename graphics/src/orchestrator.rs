//! Frame orchestration.
//!
//! The [`RenderOrchestrator`] drives one frame of rendering by sequencing
//! the fixed pipeline stages against the subpasses of its
//! [`RenderpassPlan`]:
//!
//! | Subpass | Stages |
//! |---------|--------|
//! | 0 | shadows |
//! | 1 | skybox, terrain, water, entities |
//! | 2 | deferred lighting composition |
//! | 3 | fxaa, lensflare, (tiltshift), (grain), gui, fonts |
//!
//! Recording is synchronous and single-threaded: subpass N is fully
//! recorded before subpass N+1 begins, and once recording starts the frame
//! runs to submission. The only abandon point is the frame-start check.

use estuary_core::mesh::MeshRegistry;

use crate::backend::CommandRecorder;
use crate::error::PlanError;
use crate::renderpass::RenderpassPlan;
use crate::scene::FrameContext;
use crate::stage::{
    DeferredStage, EntityStage, FontStage, FxaaStage, GrainStage, GuiStage, LensFlareStage,
    RenderStage, ShadowStage, SkyboxStage, TerrainStage, TiltShiftStage, WaterStage,
};

/// Enablement flags for the optional post-process filters.
///
/// Disabled filters stay constructed and owned by the orchestrator, so the
/// pipeline topology never changes. Only their execution is skipped, and
/// they can be re-enabled between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostProcessConfig {
    /// Run the tilt-shift filter.
    pub tiltshift: bool,
    /// Run the film grain filter.
    pub grain: bool,
}

impl Default for PostProcessConfig {
    fn default() -> Self {
        Self {
            tiltshift: false,
            grain: false,
        }
    }
}

/// Owns one renderer per pipeline feature and sequences them through the
/// subpasses of the renderpass plan, in a fixed order.
///
/// Ownership is exclusive: the orchestrator is the sole owner of its
/// stages, and they are released exactly once when it drops.
#[derive(Debug)]
pub struct RenderOrchestrator {
    plan: RenderpassPlan,
    config: PostProcessConfig,

    shadows: ShadowStage,

    skybox: SkyboxStage,
    terrain: TerrainStage,
    water: WaterStage,
    entities: EntityStage,

    deferred: DeferredStage,

    fxaa: FxaaStage,
    lensflare: LensFlareStage,
    tiltshift: TiltShiftStage,
    grain: GrainStage,
    gui: GuiStage,
    fonts: FontStage,

    frame_count: u64,
}

/// Number of subpasses the fixed pipeline drives.
const PIPELINE_SUBPASSES: usize = 4;

impl RenderOrchestrator {
    /// Create an orchestrator over a validated plan.
    ///
    /// The plan must declare exactly the four subpasses the fixed pipeline
    /// drives; anything else is a configuration error, fatal at startup.
    /// Stage geometry is resolved through `registry`, so orchestrators
    /// sharing a registry share mesh instances.
    pub fn new(
        plan: RenderpassPlan,
        registry: &MeshRegistry,
        config: PostProcessConfig,
    ) -> Result<Self, PlanError> {
        if plan.subpass_count() != PIPELINE_SUBPASSES {
            return Err(PlanError::SubpassCountMismatch {
                expected: PIPELINE_SUBPASSES,
                found: plan.subpass_count(),
            });
        }

        Ok(Self {
            plan,
            config,
            shadows: ShadowStage::new(),
            skybox: SkyboxStage::new(registry),
            terrain: TerrainStage::new(registry),
            water: WaterStage::new(registry),
            entities: EntityStage::new(),
            deferred: DeferredStage::new(),
            fxaa: FxaaStage::new(),
            lensflare: LensFlareStage::new(),
            tiltshift: TiltShiftStage::new(),
            grain: GrainStage::new(),
            gui: GuiStage::new(registry),
            fonts: FontStage::new(registry),
            frame_count: 0,
        })
    }

    /// The renderpass plan this orchestrator renders against.
    pub fn plan(&self) -> &RenderpassPlan {
        &self.plan
    }

    /// The shadow stage, for tuning the shadow-map resolution.
    pub fn shadows_mut(&mut self) -> &mut ShadowStage {
        &mut self.shadows
    }

    /// The lens flare stage (read access to its sun state).
    pub fn lensflare(&self) -> &LensFlareStage {
        &self.lensflare
    }

    /// The current post-process configuration.
    pub fn config(&self) -> PostProcessConfig {
        self.config
    }

    /// Change the post-process configuration for subsequent frames.
    pub fn set_config(&mut self, config: PostProcessConfig) {
        self.config = config;
    }

    /// Number of frames that reached submission.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Record and submit one frame.
    ///
    /// If the frame cannot start because the surface is transiently
    /// unavailable, the frame is skipped cleanly: nothing is recorded, no
    /// subpass advances, and no orchestrator state changes. The caller's
    /// frame loop retries naturally on the next frame.
    pub fn render(&mut self, recorder: &mut dyn CommandRecorder, frame: &FrameContext<'_>) {
        if let Err(error) = recorder.begin_render_pass(&self.plan) {
            log::trace!("frame skipped: {error}");
            return;
        }

        // Subpass 0: shadow map.
        run_stage(&mut self.shadows, recorder, frame);
        recorder.next_subpass();

        // Subpass 1: geometry into the G-buffer.
        run_stage(&mut self.skybox, recorder, frame);
        run_stage(&mut self.terrain, recorder, frame);
        run_stage(&mut self.water, recorder, frame);
        run_stage(&mut self.entities, recorder, frame);
        recorder.next_subpass();

        // Subpass 2: lighting composition.
        run_stage(&mut self.deferred, recorder, frame);
        recorder.next_subpass();

        // Subpass 3: post-processing and overlays.
        run_stage(&mut self.fxaa, recorder, frame);
        let environment = &frame.scene.environment;
        self.lensflare
            .set_sun(environment.sun_direction, environment.sun_height);
        run_stage(&mut self.lensflare, recorder, frame);
        if self.config.tiltshift {
            run_stage(&mut self.tiltshift, recorder, frame);
        }
        if self.config.grain {
            run_stage(&mut self.grain, recorder, frame);
        }
        run_stage(&mut self.gui, recorder, frame);
        run_stage(&mut self.fonts, recorder, frame);

        recorder.end_render_pass();

        self.frame_count = self.frame_count.wrapping_add(1);
        log::trace!("rendered frame {}", self.frame_count);
    }
}

fn run_stage(
    stage: &mut dyn RenderStage,
    recorder: &mut dyn CommandRecorder,
    frame: &FrameContext<'_>,
) {
    recorder.insert_debug_marker(stage.name());
    stage.execute(recorder, frame);
}
