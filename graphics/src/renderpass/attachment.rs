//! Framebuffer attachment descriptors.

use crate::types::{ClearValue, TextureFormat, TextureLayout, TextureUsage};

/// Declares a single framebuffer image: format, layout, usage, and clear
/// value.
///
/// Attachments are identified by their index, which must be unique within a
/// [`RenderpassPlan`](super::RenderpassPlan) and match the shader-visible
/// attachment bindings. Descriptors are immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachmentDescriptor {
    index: u32,
    format: TextureFormat,
    layout: TextureLayout,
    usage: TextureUsage,
    clear_value: ClearValue,
}

impl AttachmentDescriptor {
    /// Create a color attachment descriptor with the given index and format.
    ///
    /// Defaults to the color-attachment layout and usage with a
    /// transparent-black clear; use the `with_*` methods to override.
    pub fn new(index: u32, format: TextureFormat) -> Self {
        Self {
            index,
            format,
            layout: TextureLayout::ColorAttachment,
            usage: TextureUsage::COLOR_ATTACHMENT,
            clear_value: ClearValue::transparent_black(),
        }
    }

    /// Create a depth attachment descriptor with the given index and format.
    pub fn depth(index: u32, format: TextureFormat) -> Self {
        Self {
            index,
            format,
            layout: TextureLayout::DepthStencilAttachment,
            usage: TextureUsage::DEPTH_STENCIL_ATTACHMENT,
            clear_value: ClearValue::depth(1.0),
        }
    }

    /// Set the image layout.
    #[must_use]
    pub fn with_layout(mut self, layout: TextureLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the usage flags.
    #[must_use]
    pub fn with_usage(mut self, usage: TextureUsage) -> Self {
        self.usage = usage;
        self
    }

    /// Set the clear value.
    #[must_use]
    pub fn with_clear_value(mut self, clear_value: ClearValue) -> Self {
        self.clear_value = clear_value;
        self
    }

    /// Get the attachment index.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Get the texture format.
    pub fn format(&self) -> TextureFormat {
        self.format
    }

    /// Get the image layout.
    pub fn layout(&self) -> TextureLayout {
        self.layout
    }

    /// Get the usage flags.
    pub fn usage(&self) -> TextureUsage {
        self.usage
    }

    /// Get the clear value.
    pub fn clear_value(&self) -> ClearValue {
        self.clear_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_attachment_defaults() {
        let attachment = AttachmentDescriptor::new(2, TextureFormat::Rgba8Unorm);
        assert_eq!(attachment.index(), 2);
        assert_eq!(attachment.layout(), TextureLayout::ColorAttachment);
        assert!(attachment.usage().contains(TextureUsage::COLOR_ATTACHMENT));
        assert_eq!(attachment.clear_value(), ClearValue::transparent_black());
    }

    #[test]
    fn test_depth_attachment_defaults() {
        let attachment = AttachmentDescriptor::depth(0, TextureFormat::Depth32Float);
        assert!(attachment.format().is_depth());
        assert_eq!(attachment.layout(), TextureLayout::DepthStencilAttachment);
        assert_eq!(attachment.clear_value(), ClearValue::Depth(1.0));
    }

    #[test]
    fn test_builder_overrides() {
        let attachment = AttachmentDescriptor::new(1, TextureFormat::Bgra8Unorm)
            .with_layout(TextureLayout::PresentSrc)
            .with_usage(TextureUsage::COLOR_ATTACHMENT | TextureUsage::SAMPLED)
            .with_clear_value(ClearValue::color(0.0, 0.0, 0.0, 1.0));

        assert_eq!(attachment.layout(), TextureLayout::PresentSrc);
        assert!(attachment.usage().contains(TextureUsage::SAMPLED));
    }
}
