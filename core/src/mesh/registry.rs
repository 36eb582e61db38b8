//! Content-addressed mesh registry.
//!
//! Generated geometry is cached by the parameters that define it: two
//! requests with identical parameters resolve to the same shared
//! [`MeshData`] instance instead of regenerating it. The registry is passed
//! to builders explicitly rather than living in global state.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use super::data::MeshData;
use super::metadata::{MeshKey, ShapeMetadata};

/// Shared cache of procedurally generated meshes, keyed by shape parameters.
///
/// The lookup-and-insert in [`get_or_create`](Self::get_or_create) happens
/// under a single lock, so concurrent requests for the same parameter set
/// cannot race into building duplicate instances.
#[derive(Debug, Default)]
pub struct MeshRegistry {
    meshes: Mutex<HashMap<MeshKey, Arc<MeshData>>>,
}

impl MeshRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of cached meshes.
    pub fn len(&self) -> usize {
        self.meshes.lock().len()
    }

    /// Whether the registry holds no meshes.
    pub fn is_empty(&self) -> bool {
        self.meshes.lock().is_empty()
    }

    /// Look up the cached mesh for a parameter set, if one exists.
    pub fn find(&self, metadata: &ShapeMetadata) -> Option<Arc<MeshData>> {
        self.meshes.lock().get(&metadata.cache_key()).cloned()
    }

    /// Fetch the mesh for a parameter set, building it on first request.
    ///
    /// Returns the same `Arc` for every call with an equal parameter set.
    pub fn get_or_create<F>(&self, metadata: &ShapeMetadata, build: F) -> Arc<MeshData>
    where
        F: FnOnce() -> MeshData,
    {
        let mut meshes = self.meshes.lock();
        meshes
            .entry(metadata.cache_key())
            .or_insert_with(|| {
                let mesh = build();
                log::trace!(
                    "mesh registry: built {} ({} vertices, {} indices)",
                    metadata.type_name(),
                    mesh.vertex_count(),
                    mesh.index_count()
                );
                Arc::new(mesh)
            })
            .clone()
    }
}
