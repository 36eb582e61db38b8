//! Parametric cylinder (and cone frustum) builder.

use std::f32::consts::PI;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::mesh::data::{MeshData, Vertex};
use crate::mesh::metadata::ShapeMetadata;
use crate::mesh::registry::MeshRegistry;

/// Parameters of a cylinder mesh.
///
/// The side surface is a grid of `slices` angle steps by `stacks` height
/// steps, with the radius interpolated from `radius_base` at the bottom to
/// `radius_top` at the top (a cone frustum when they differ). No cap
/// geometry is generated. `slices` and `stacks` must be at least 1.
///
/// A cylinder with both radii zero has no surface; generation is skipped
/// and the mesh stays empty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CylinderParams {
    /// Radius at the bottom ring.
    pub radius_base: f32,
    /// Radius at the top ring.
    pub radius_top: f32,
    /// Total height; the mesh is centered on y = 0.
    pub height: f32,
    /// Number of angle steps around the axis.
    pub slices: u32,
    /// Number of height steps along the axis.
    pub stacks: u32,
}

impl CylinderParams {
    /// Create a new cylinder parameter set.
    pub fn new(radius_base: f32, radius_top: f32, height: f32, slices: u32, stacks: u32) -> Self {
        Self {
            radius_base,
            radius_top,
            height,
            slices,
            stacks,
        }
    }

    /// The tagged parameter set for persistence and caching.
    pub fn metadata(&self) -> ShapeMetadata {
        ShapeMetadata::Cylinder(*self)
    }

    pub(crate) fn cache_words(&self) -> Vec<u32> {
        vec![
            self.radius_base.to_bits(),
            self.radius_top.to_bits(),
            self.height.to_bits(),
            self.slices,
            self.stacks,
        ]
    }

    /// Fetch this cylinder through the registry, building it on first use.
    pub fn create(&self, registry: &MeshRegistry) -> Arc<MeshData> {
        registry.get_or_create(&self.metadata(), || self.generate())
    }

    /// Generate the cylinder geometry.
    ///
    /// Produces `(slices + 1) * (stacks + 1)` vertices and
    /// `slices * stacks * 6` indices. The first and last slice sit at angle
    /// zero so the seam closes exactly. UVs run from (1, 1) at the seam
    /// bottom to (0, 0) at the seam top; normals are the unit radial
    /// direction.
    pub fn generate(&self) -> MeshData {
        if self.radius_base == 0.0 && self.radius_top == 0.0 {
            return MeshData::new().with_label("cylinder");
        }

        let mut vertices = Vec::with_capacity(((self.slices + 1) * (self.stacks + 1)) as usize);
        let mut indices = Vec::with_capacity((self.slices * self.stacks * 6) as usize);

        for i in 0..=self.slices {
            let i_div_slices = i as f32 / self.slices as f32;
            let alpha = if i == 0 || i == self.slices {
                0.0
            } else {
                i_div_slices * 2.0 * PI
            };
            let x_dir = alpha.cos();
            let z_dir = alpha.sin();

            for j in 0..=self.stacks {
                let j_div_stacks = j as f32 / self.stacks as f32;
                let radius = self.radius_base * (1.0 - j_div_stacks) + self.radius_top * j_div_stacks;

                vertices.push(Vertex {
                    position: [
                        x_dir * radius,
                        j_div_stacks * self.height - self.height / 2.0,
                        z_dir * radius,
                    ],
                    uv: [1.0 - i_div_slices, 1.0 - j_div_stacks],
                    normal: [x_dir, 0.0, z_dir],
                });
            }
        }

        for i in 0..self.slices {
            for j in 0..self.stacks {
                let first = j + (self.stacks + 1) * i;
                let second = j + (self.stacks + 1) * (i + 1);

                indices.push(first + 1);
                indices.push(second + 1);
                indices.push(first);
                indices.push(second + 1);
                indices.push(second);
                indices.push(first);
            }
        }

        MeshData::from_parts(vertices, indices).with_label("cylinder")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1.0, 1.0, 2.0, 8, 2)]
    #[case(1.0, 0.0, 3.0, 16, 4)]
    #[case(0.5, 2.0, 1.0, 3, 1)]
    fn test_vertex_and_index_counts(
        #[case] radius_base: f32,
        #[case] radius_top: f32,
        #[case] height: f32,
        #[case] slices: u32,
        #[case] stacks: u32,
    ) {
        let mesh = CylinderParams::new(radius_base, radius_top, height, slices, stacks).generate();
        assert_eq!(mesh.vertex_count(), (slices + 1) * (stacks + 1));
        assert_eq!(mesh.index_count(), slices * stacks * 6);
    }

    #[test]
    fn test_zero_radii_yields_empty_mesh() {
        let mesh = CylinderParams::new(0.0, 0.0, 2.0, 16, 4).generate();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.index_count(), 0);
    }

    #[test]
    fn test_uv_corners() {
        let params = CylinderParams::new(1.0, 1.0, 2.0, 8, 2);
        let mesh = params.generate();

        // (i=0, j=0) is the first vertex; (i=slices, j=stacks) is the last.
        let first = mesh.vertices().first().unwrap();
        let last = mesh.vertices().last().unwrap();
        assert_eq!(first.uv, [1.0, 1.0]);
        assert_eq!(last.uv, [0.0, 0.0]);
    }

    #[test]
    fn test_seam_closes_exactly() {
        let params = CylinderParams::new(1.0, 1.0, 2.0, 8, 2);
        let mesh = params.generate();
        let stride = (params.stacks + 1) as usize;

        // Both seam rings (i=0 and i=slices) sit at angle zero: the radial
        // direction is exactly (1, 0).
        let first_ring = &mesh.vertices()[0];
        let last_ring = &mesh.vertices()[params.slices as usize * stride];
        assert_eq!(first_ring.normal, [1.0, 0.0, 0.0]);
        assert_eq!(last_ring.normal, [1.0, 0.0, 0.0]);
        assert_eq!(first_ring.position[0], 1.0);
        assert_eq!(last_ring.position[2], 0.0);
    }

    #[test]
    fn test_quad_winding() {
        let params = CylinderParams::new(1.0, 1.0, 2.0, 4, 3);
        let mesh = params.generate();
        let stacks = params.stacks;

        // First quad (i=0, j=0): first = 0, second = stacks + 1.
        let expected = [1, stacks + 2, 0, stacks + 2, stacks + 1, 0];
        assert_eq!(&mesh.indices()[..6], &expected);
    }

    #[test]
    fn test_height_is_centered() {
        let mesh = CylinderParams::new(1.0, 1.0, 4.0, 4, 2).generate();
        let ys: Vec<f32> = mesh.vertices().iter().map(|v| v.position[1]).collect();
        let min = ys.iter().cloned().fold(f32::INFINITY, f32::min);
        let max = ys.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        assert_eq!(min, -2.0);
        assert_eq!(max, 2.0);
    }

    #[test]
    fn test_radius_interpolation() {
        let params = CylinderParams::new(2.0, 0.0, 1.0, 4, 2);
        let mesh = params.generate();

        // Along the seam column: bottom ring radius 2, midway 1, top 0.
        let column = &mesh.vertices()[..3];
        assert_eq!(column[0].position[0], 2.0);
        assert_eq!(column[1].position[0], 1.0);
        assert_eq!(column[2].position[0], 0.0);
    }
}
