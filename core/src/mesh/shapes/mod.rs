//! Parametric shape builders.
//!
//! Each builder is a plain parameter struct with three entry points:
//!
//! - `generate()` - build the geometry unconditionally
//! - `create(&registry)` - resolve through the shared [`MeshRegistry`] cache
//! - `metadata()` - the tagged parameter set for persistence and caching
//!
//! [`create_from_metadata`] is the metadata-driven counterpart of the
//! parameterized constructors.

pub mod cylinder;
pub mod quad;
pub mod sphere;

pub use cylinder::CylinderParams;
pub use quad::QuadParams;
pub use sphere::SphereParams;

use std::sync::Arc;

use super::data::MeshData;
use super::metadata::ShapeMetadata;
use super::registry::MeshRegistry;

/// Build (or fetch from cache) the mesh described by a metadata value.
pub fn create_from_metadata(registry: &MeshRegistry, metadata: &ShapeMetadata) -> Arc<MeshData> {
    match metadata {
        ShapeMetadata::Cylinder(params) => params.create(registry),
        ShapeMetadata::Sphere(params) => params.create(registry),
        ShapeMetadata::Quad(params) => params.create(registry),
    }
}
