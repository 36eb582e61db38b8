//! CPU-side mesh data structures.

use bytemuck::{Pod, Zeroable};
use static_assertions::const_assert_eq;

/// The engine's default vertex: position, texture coordinate, normal.
///
/// `#[repr(C)]` keeps the memory layout stable for GPU buffer uploads.
/// Field order matches the shader-visible attribute order.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position in model space.
    pub position: [f32; 3],
    /// Texture coordinate.
    pub uv: [f32; 2],
    /// Unit normal.
    pub normal: [f32; 3],
}

// 8 floats, tightly packed.
const_assert_eq!(std::mem::size_of::<Vertex>(), 32);

impl Vertex {
    /// Create a new vertex.
    pub fn new(position: [f32; 3], uv: [f32; 2], normal: [f32; 3]) -> Self {
        Self {
            position,
            uv,
            normal,
        }
    }
}

/// A CPU-side mesh holding vertex and index data.
///
/// This is the GPU-agnostic representation of a mesh, produced by the
/// procedural builders in [`shapes`](super::shapes) and uploaded to the GPU
/// by the excluded device layer.
///
/// An empty mesh (no vertices, no indices) is a valid "not yet built"
/// state, not an error; degenerate shape parameters produce one.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    label: Option<String>,
}

impl MeshData {
    /// Create a new empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh from vertex and index buffers.
    pub fn from_parts(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self {
            vertices,
            indices,
            label: None,
        }
    }

    /// Set a debug label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the vertices.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Get the indices.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Get the number of vertices.
    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Get the number of indices.
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Get the number of triangles.
    pub fn triangle_count(&self) -> u32 {
        self.index_count() / 3
    }

    /// Whether this mesh holds no geometry at all.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.indices.is_empty()
    }

    /// Get vertex data as bytes for GPU upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Get index data as bytes for GPU upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Get the debug label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}
