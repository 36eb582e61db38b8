//! Graphics error types.

use thiserror::Error;

/// Configuration errors in a renderpass plan.
///
/// These are detected when the plan is constructed and are fatal to
/// startup; a plan that validated once can never fail at runtime.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// An attachment index was declared more than once.
    #[error("attachment index {index} declared more than once")]
    DuplicateAttachment {
        /// The clashing attachment index.
        index: u32,
    },
    /// A subpass references an attachment that was never declared.
    #[error("subpass {subpass} references undeclared attachment {attachment}")]
    UnknownAttachment {
        /// The referencing subpass index.
        subpass: u32,
        /// The missing attachment index.
        attachment: u32,
    },
    /// Subpass indices must count up from zero without gaps.
    #[error("subpass indices must be sequential from zero: expected {expected}, found {found}")]
    NonSequentialSubpass {
        /// The index the plan expected next.
        expected: u32,
        /// The index actually declared.
        found: u32,
    },
    /// A plan with no subpasses renders nothing.
    #[error("renderpass plan declares no subpasses")]
    NoSubpasses,
    /// The plan's subpass count does not match the pipeline consuming it.
    #[error("pipeline expects {expected} subpasses, plan declares {found}")]
    SubpassCountMismatch {
        /// Subpasses the pipeline drives.
        expected: usize,
        /// Subpasses the plan declares.
        found: usize,
    },
}

/// Transient per-frame errors from the command recording backend.
///
/// These indicate the surface is momentarily unusable (e.g. mid-resize).
/// The orchestrator swallows them and skips the frame; the caller's frame
/// loop naturally retries.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// The surface is outdated and needs to be reconfigured.
    #[error("surface outdated, needs reconfiguration")]
    SurfaceOutdated,
    /// The surface was lost and needs to be recreated.
    #[error("surface lost, needs recreation")]
    SurfaceLost,
}
