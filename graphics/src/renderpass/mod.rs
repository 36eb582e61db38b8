//! Renderpass planning.
//!
//! A [`RenderpassPlan`] is the static topology of the frame: an ordered
//! list of framebuffer attachments and the subpasses that write them.
//! The plan is validated once at construction and read-only afterwards,
//! so every frame can share it without synchronization.
//!
//! # Example
//!
//! ```ignore
//! let plan = RenderpassPlan::new(
//!     vec![
//!         AttachmentDescriptor::depth(0, TextureFormat::Depth32Float),
//!         AttachmentDescriptor::new(1, TextureFormat::Rgba8Unorm),
//!     ],
//!     vec![SubpassDescriptor::new(0, [1]).with_depth()],
//! )?;
//! ```

mod attachment;
mod subpass;

pub use attachment::AttachmentDescriptor;
pub use subpass::SubpassDescriptor;

use std::collections::HashSet;

use crate::error::PlanError;
use crate::types::{ClearValue, TextureFormat, TextureLayout, TextureUsage};

/// The validated attachment/subpass topology of one renderpass.
///
/// Construction checks the wiring (unique attachment indices, known
/// references, sequential subpasses); a constructed plan can never fail at
/// runtime. The subpass count and attachment wiring are fixed for the
/// lifetime of the orchestrator using the plan.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderpassPlan {
    attachments: Vec<AttachmentDescriptor>,
    subpasses: Vec<SubpassDescriptor>,
}

impl RenderpassPlan {
    /// Build a plan from attachment and subpass descriptors.
    ///
    /// Fails with a [`PlanError`] if any subpass references an undeclared
    /// attachment, an attachment index is declared twice, or the subpass
    /// indices are not sequential from zero. Configuration errors are fatal
    /// to startup and surface immediately.
    pub fn new(
        attachments: Vec<AttachmentDescriptor>,
        subpasses: Vec<SubpassDescriptor>,
    ) -> Result<Self, PlanError> {
        if subpasses.is_empty() {
            return Err(PlanError::NoSubpasses);
        }

        let mut declared = HashSet::new();
        for attachment in &attachments {
            if !declared.insert(attachment.index()) {
                return Err(PlanError::DuplicateAttachment {
                    index: attachment.index(),
                });
            }
        }

        for (position, subpass) in subpasses.iter().enumerate() {
            let expected = position as u32;
            if subpass.index() != expected {
                return Err(PlanError::NonSequentialSubpass {
                    expected,
                    found: subpass.index(),
                });
            }
            for &attachment in subpass.attachments() {
                if !declared.contains(&attachment) {
                    return Err(PlanError::UnknownAttachment {
                        subpass: subpass.index(),
                        attachment,
                    });
                }
            }
        }

        log::debug!(
            "renderpass plan validated: {} attachments, {} subpasses",
            attachments.len(),
            subpasses.len()
        );

        Ok(Self {
            attachments,
            subpasses,
        })
    }

    /// The engine's default deferred topology.
    ///
    /// Four subpasses over a six-attachment framebuffer:
    ///
    /// | Subpass | Writes | Purpose |
    /// |---------|--------|---------|
    /// | 0 | shadows | shadow map |
    /// | 1 | colours, normals, materials (+depth) | geometry G-buffer |
    /// | 2 | swapchain | deferred lighting composition |
    /// | 3 | swapchain | post-processing and overlays |
    pub fn deferred() -> Result<Self, PlanError> {
        Self::new(
            vec![
                AttachmentDescriptor::depth(0, TextureFormat::Depth32Float),
                AttachmentDescriptor::new(1, TextureFormat::Bgra8Unorm)
                    .with_layout(TextureLayout::PresentSrc)
                    .with_clear_value(ClearValue::color(0.0, 0.0, 0.0, 1.0)),
                // G-buffer: colours, normals, materials, shadow factor.
                AttachmentDescriptor::new(2, TextureFormat::Rgba8Unorm)
                    .with_usage(TextureUsage::COLOR_ATTACHMENT | TextureUsage::SAMPLED),
                AttachmentDescriptor::new(3, TextureFormat::Rg16Unorm)
                    .with_usage(TextureUsage::COLOR_ATTACHMENT | TextureUsage::SAMPLED),
                AttachmentDescriptor::new(4, TextureFormat::Rgba8Unorm)
                    .with_usage(TextureUsage::COLOR_ATTACHMENT | TextureUsage::SAMPLED),
                AttachmentDescriptor::new(5, TextureFormat::R16Unorm)
                    .with_usage(TextureUsage::COLOR_ATTACHMENT | TextureUsage::SAMPLED),
            ],
            vec![
                SubpassDescriptor::new(0, [5]),
                SubpassDescriptor::new(1, [2, 3, 4]).with_depth(),
                SubpassDescriptor::new(2, [1]),
                SubpassDescriptor::new(3, [1]),
            ],
        )
    }

    /// Get the number of attachments.
    pub fn attachment_count(&self) -> usize {
        self.attachments.len()
    }

    /// Get the number of subpasses.
    pub fn subpass_count(&self) -> usize {
        self.subpasses.len()
    }

    /// Get all attachment descriptors.
    pub fn attachments(&self) -> &[AttachmentDescriptor] {
        &self.attachments
    }

    /// Get all subpass descriptors, in execution order.
    pub fn subpasses(&self) -> &[SubpassDescriptor] {
        &self.subpasses
    }

    /// Look up an attachment by its declared index.
    pub fn attachment(&self, index: u32) -> Option<&AttachmentDescriptor> {
        self.attachments.iter().find(|a| a.index() == index)
    }

    /// Look up a subpass by index.
    pub fn subpass(&self, index: u32) -> Option<&SubpassDescriptor> {
        self.subpasses.get(index as usize)
    }
}
