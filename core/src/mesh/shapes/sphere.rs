//! Parametric UV sphere builder.

use std::f32::consts::PI;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::mesh::data::{MeshData, Vertex};
use crate::mesh::metadata::ShapeMetadata;
use crate::mesh::registry::MeshRegistry;

/// Parameters of a UV sphere mesh.
///
/// `segments` counts longitudinal steps around the equator, `rings` counts
/// latitudinal steps from pole to pole. Both must be at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SphereParams {
    /// Sphere radius.
    pub radius: f32,
    /// Number of longitudinal segments.
    pub segments: u32,
    /// Number of latitudinal rings.
    pub rings: u32,
}

impl SphereParams {
    /// Create a new sphere parameter set.
    pub fn new(radius: f32, segments: u32, rings: u32) -> Self {
        Self {
            radius,
            segments,
            rings,
        }
    }

    /// The tagged parameter set for persistence and caching.
    pub fn metadata(&self) -> ShapeMetadata {
        ShapeMetadata::Sphere(*self)
    }

    pub(crate) fn cache_words(&self) -> Vec<u32> {
        vec![self.radius.to_bits(), self.segments, self.rings]
    }

    /// Fetch this sphere through the registry, building it on first use.
    pub fn create(&self, registry: &MeshRegistry) -> Arc<MeshData> {
        registry.get_or_create(&self.metadata(), || self.generate())
    }

    /// Generate the sphere geometry.
    ///
    /// Produces `(rings + 1) * (segments + 1)` vertices and
    /// `rings * segments * 6` indices. A zero radius has no surface and
    /// yields an empty mesh.
    pub fn generate(&self) -> MeshData {
        if self.radius == 0.0 {
            return MeshData::new().with_label("sphere");
        }

        let mut vertices = Vec::with_capacity(((self.rings + 1) * (self.segments + 1)) as usize);
        let mut indices = Vec::with_capacity((self.rings * self.segments * 6) as usize);

        for ring in 0..=self.rings {
            let theta = ring as f32 * PI / self.rings as f32;
            let sin_theta = theta.sin();
            let cos_theta = theta.cos();

            for segment in 0..=self.segments {
                let phi = segment as f32 * 2.0 * PI / self.segments as f32;

                let x = sin_theta * phi.cos();
                let y = cos_theta;
                let z = sin_theta * phi.sin();

                vertices.push(Vertex {
                    position: [x * self.radius, y * self.radius, z * self.radius],
                    uv: [
                        segment as f32 / self.segments as f32,
                        ring as f32 / self.rings as f32,
                    ],
                    normal: [x, y, z],
                });
            }
        }

        for ring in 0..self.rings {
            for segment in 0..self.segments {
                let current = ring * (self.segments + 1) + segment;
                let next = current + self.segments + 1;

                indices.push(current);
                indices.push(next);
                indices.push(current + 1);

                indices.push(current + 1);
                indices.push(next);
                indices.push(next + 1);
            }
        }

        MeshData::from_parts(vertices, indices).with_label("sphere")
    }
}
