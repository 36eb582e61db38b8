//! Dummy command recorder for testing and development.
//!
//! This recorder doesn't perform GPU operations but journals every command,
//! so tests can assert on exactly what a frame recorded. It can also
//! simulate the transient begin-failure of a real surface.

use std::ops::Range;

use crate::error::FrameError;
use crate::renderpass::RenderpassPlan;
use crate::types::Viewport;

use super::{CommandRecorder, RecordedCommand};

/// Dummy command recorder.
#[derive(Debug, Default)]
pub struct DummyRecorder {
    commands: Vec<RecordedCommand>,
    fail_next_begin: Option<FrameError>,
    subpass_index: u32,
    recording: bool,
}

impl DummyRecorder {
    /// Create a new dummy recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `begin_render_pass` fail with the given error,
    /// simulating a transiently unavailable surface.
    pub fn fail_next_begin(&mut self, error: FrameError) {
        self.fail_next_begin = Some(error);
    }

    /// The journal of every command recorded so far.
    pub fn commands(&self) -> &[RecordedCommand] {
        &self.commands
    }

    /// The debug-marker labels recorded so far, in order.
    pub fn markers(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                RecordedCommand::DebugMarker(label) => Some(label.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The current subpass index (0 until the first advance).
    pub fn subpass_index(&self) -> u32 {
        self.subpass_index
    }

    /// Whether a renderpass is currently being recorded.
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Clear the journal and reset the recorder state.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.subpass_index = 0;
        self.recording = false;
    }
}

impl CommandRecorder for DummyRecorder {
    fn begin_render_pass(&mut self, plan: &RenderpassPlan) -> Result<(), FrameError> {
        if let Some(error) = self.fail_next_begin.take() {
            log::trace!("DummyRecorder: begin_render_pass failed: {error}");
            return Err(error);
        }

        log::trace!(
            "DummyRecorder: begin_render_pass ({} subpasses)",
            plan.subpass_count()
        );
        self.recording = true;
        self.subpass_index = 0;
        self.commands.push(RecordedCommand::BeginRenderPass {
            subpass_count: plan.subpass_count(),
        });
        Ok(())
    }

    fn next_subpass(&mut self) {
        self.subpass_index += 1;
        log::trace!("DummyRecorder: next_subpass -> {}", self.subpass_index);
        self.commands.push(RecordedCommand::NextSubpass);
    }

    fn end_render_pass(&mut self) {
        log::trace!("DummyRecorder: end_render_pass");
        self.recording = false;
        self.commands.push(RecordedCommand::EndRenderPass);
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.commands.push(RecordedCommand::SetViewport(viewport));
    }

    fn draw(&mut self, vertices: Range<u32>) {
        self.commands.push(RecordedCommand::Draw { vertices });
    }

    fn draw_indexed(&mut self, index_count: u32) {
        self.commands
            .push(RecordedCommand::DrawIndexed { index_count });
    }

    fn insert_debug_marker(&mut self, label: &str) {
        self.commands
            .push(RecordedCommand::DebugMarker(label.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_journal_records_in_order() {
        let plan = RenderpassPlan::deferred().unwrap();
        let mut recorder = DummyRecorder::new();

        recorder.begin_render_pass(&plan).unwrap();
        recorder.draw(0..3);
        recorder.next_subpass();
        recorder.end_render_pass();

        assert_eq!(
            recorder.commands(),
            &[
                RecordedCommand::BeginRenderPass { subpass_count: 4 },
                RecordedCommand::Draw { vertices: 0..3 },
                RecordedCommand::NextSubpass,
                RecordedCommand::EndRenderPass,
            ]
        );
        assert_eq!(recorder.subpass_index(), 1);
    }

    #[test]
    fn test_failed_begin_records_nothing() {
        let plan = RenderpassPlan::deferred().unwrap();
        let mut recorder = DummyRecorder::new();
        recorder.fail_next_begin(FrameError::SurfaceOutdated);

        assert_eq!(
            recorder.begin_render_pass(&plan),
            Err(FrameError::SurfaceOutdated)
        );
        assert!(recorder.commands().is_empty());
        assert!(!recorder.is_recording());

        // The failure is one-shot: the next begin succeeds.
        recorder.begin_render_pass(&plan).unwrap();
        assert!(recorder.is_recording());
    }
}
