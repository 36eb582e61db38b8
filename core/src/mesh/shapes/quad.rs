//! Flat quad builder.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::mesh::data::{MeshData, Vertex};
use crate::mesh::metadata::ShapeMetadata;
use crate::mesh::registry::MeshRegistry;

/// Parameters of a quad mesh on the XY plane, centered at the origin.
///
/// UVs run from (0, 0) at the top-left to (1, 1) at the bottom-right; the
/// normal faces +Z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuadParams {
    /// Half the width along the X axis.
    pub half_width: f32,
    /// Half the height along the Y axis.
    pub half_height: f32,
}

impl QuadParams {
    /// Create a new quad parameter set.
    pub fn new(half_width: f32, half_height: f32) -> Self {
        Self {
            half_width,
            half_height,
        }
    }

    /// The tagged parameter set for persistence and caching.
    pub fn metadata(&self) -> ShapeMetadata {
        ShapeMetadata::Quad(*self)
    }

    pub(crate) fn cache_words(&self) -> Vec<u32> {
        vec![self.half_width.to_bits(), self.half_height.to_bits()]
    }

    /// Fetch this quad through the registry, building it on first use.
    pub fn create(&self, registry: &MeshRegistry) -> Arc<MeshData> {
        registry.get_or_create(&self.metadata(), || self.generate())
    }

    /// Generate the quad geometry: 4 vertices, 6 indices.
    pub fn generate(&self) -> MeshData {
        let w = self.half_width;
        let h = self.half_height;
        let normal = [0.0, 0.0, 1.0];

        let vertices = vec![
            Vertex::new([-w, -h, 0.0], [0.0, 1.0], normal),
            Vertex::new([w, -h, 0.0], [1.0, 1.0], normal),
            Vertex::new([w, h, 0.0], [1.0, 0.0], normal),
            Vertex::new([-w, h, 0.0], [0.0, 0.0], normal),
        ];
        let indices = vec![0, 1, 2, 2, 3, 0];

        MeshData::from_parts(vertices, indices).with_label("quad")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_counts() {
        let mesh = QuadParams::new(0.5, 0.5).generate();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.index_count(), 6);
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn test_quad_extents() {
        let mesh = QuadParams::new(2.0, 1.0).generate();
        for vertex in mesh.vertices() {
            assert!(vertex.position[0].abs() == 2.0);
            assert!(vertex.position[1].abs() == 1.0);
            assert_eq!(vertex.position[2], 0.0);
        }
    }
}
