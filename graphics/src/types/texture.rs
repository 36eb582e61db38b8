//! Texture formats, layouts, and usage flags.

use bitflags::bitflags;

/// Texture format enumeration.
///
/// Covers the formats used by the deferred pipeline's framebuffer:
/// colours, packed normals, material properties, shadow factors, depth,
/// and the swapchain surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    /// 8-bit RGBA, unsigned normalized.
    Rgba8Unorm,
    /// 8-bit BGRA, unsigned normalized (common swapchain format).
    Bgra8Unorm,
    /// 16-bit RG, unsigned normalized (packed normals).
    Rg16Unorm,
    /// 16-bit R, unsigned normalized (shadow factor).
    R16Unorm,
    /// 16-bit float RGBA (HDR intermediate).
    Rgba16Float,
    /// 32-bit float depth.
    Depth32Float,
    /// 24-bit depth with 8-bit stencil.
    Depth24PlusStencil8,
}

impl TextureFormat {
    /// Whether this is a depth (or depth/stencil) format.
    pub fn is_depth(&self) -> bool {
        matches!(self, Self::Depth32Float | Self::Depth24PlusStencil8)
    }

    /// Bytes per pixel.
    pub fn bytes_per_pixel(&self) -> u32 {
        match self {
            Self::Rgba8Unorm
            | Self::Bgra8Unorm
            | Self::Rg16Unorm
            | Self::Depth32Float
            | Self::Depth24PlusStencil8 => 4,
            Self::R16Unorm => 2,
            Self::Rgba16Float => 8,
        }
    }
}

/// Image layout states an attachment can be in.
///
/// Abstracted from the underlying API's layout vocabulary; the excluded
/// device layer maps these onto real image layouts and barriers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextureLayout {
    /// Initial state, contents undefined.
    #[default]
    Undefined,
    /// Optimal for color attachment writes.
    ColorAttachment,
    /// Optimal for depth/stencil attachment writes.
    DepthStencilAttachment,
    /// Optimal for shader sampling.
    ShaderReadOnly,
    /// Optimal for presentation to the swapchain.
    PresentSrc,
    /// General layout (least optimal but most flexible).
    General,
}

bitflags! {
    /// Usage flags declared for an attachment image.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TextureUsage: u32 {
        /// Source of transfer operations.
        const TRANSFER_SRC = 1 << 0;
        /// Destination of transfer operations.
        const TRANSFER_DST = 1 << 1;
        /// Sampled in shaders.
        const SAMPLED = 1 << 2;
        /// Written as a color attachment.
        const COLOR_ATTACHMENT = 1 << 3;
        /// Written as a depth/stencil attachment.
        const DEPTH_STENCIL_ATTACHMENT = 1 << 4;
        /// Read as an input attachment within the renderpass.
        const INPUT_ATTACHMENT = 1 << 5;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_depth() {
        assert!(TextureFormat::Depth32Float.is_depth());
        assert!(TextureFormat::Depth24PlusStencil8.is_depth());
        assert!(!TextureFormat::Rgba8Unorm.is_depth());
    }

    #[test]
    fn test_bytes_per_pixel() {
        assert_eq!(TextureFormat::R16Unorm.bytes_per_pixel(), 2);
        assert_eq!(TextureFormat::Rg16Unorm.bytes_per_pixel(), 4);
        assert_eq!(TextureFormat::Rgba16Float.bytes_per_pixel(), 8);
    }

    #[test]
    fn test_usage_flags() {
        let usage = TextureUsage::COLOR_ATTACHMENT | TextureUsage::SAMPLED;
        assert!(usage.contains(TextureUsage::SAMPLED));
        assert!(!usage.contains(TextureUsage::DEPTH_STENCIL_ATTACHMENT));
    }
}
