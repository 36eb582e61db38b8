//! Command recording backend abstraction.
//!
//! The orchestrator records one frame through a [`CommandRecorder`]. Real
//! device backends (swapchain acquisition, GPU submission) live outside
//! this crate; [`DummyRecorder`] provides a no-op implementation that
//! journals every command for tests and development.

pub mod dummy;

pub use dummy::DummyRecorder;

use std::ops::Range;

use crate::error::FrameError;
use crate::renderpass::RenderpassPlan;
use crate::types::Viewport;

/// Records the commands of a single frame.
///
/// Recording follows a strict shape: one `begin_render_pass`, then draws
/// interleaved with `next_subpass` advances (one per subpass transition in
/// the plan), then one `end_render_pass` which submits everything recorded
/// as a single unit.
pub trait CommandRecorder {
    /// Start recording a renderpass for the given plan.
    ///
    /// Fails with a [`FrameError`] when the surface is transiently
    /// unavailable (e.g. during a resize). Nothing is recorded on failure.
    fn begin_render_pass(&mut self, plan: &RenderpassPlan) -> Result<(), FrameError>;

    /// Advance to the next subpass.
    fn next_subpass(&mut self);

    /// Finish the renderpass and submit all recorded commands.
    fn end_render_pass(&mut self);

    /// Set the viewport for subsequent draws.
    fn set_viewport(&mut self, viewport: Viewport);

    /// Draw a non-indexed vertex range.
    fn draw(&mut self, vertices: Range<u32>);

    /// Draw indexed geometry.
    fn draw_indexed(&mut self, index_count: u32);

    /// Insert a debug marker into the command stream.
    fn insert_debug_marker(&mut self, label: &str);
}

/// A single recorded command, for inspection by tests and tooling.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCommand {
    /// A renderpass began with this many subpasses.
    BeginRenderPass {
        /// Subpass count of the plan recording started with.
        subpass_count: usize,
    },
    /// The recorder advanced to the next subpass.
    NextSubpass,
    /// The renderpass ended and was submitted.
    EndRenderPass,
    /// The viewport changed.
    SetViewport(Viewport),
    /// A non-indexed draw.
    Draw {
        /// The drawn vertex range.
        vertices: Range<u32>,
    },
    /// An indexed draw.
    DrawIndexed {
        /// Number of indices drawn.
        index_count: u32,
    },
    /// A debug marker.
    DebugMarker(String),
}
