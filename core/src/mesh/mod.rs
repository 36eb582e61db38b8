//! Mesh data, procedural shape builders, and the shared mesh registry.
//!
//! This module provides:
//! - [`Vertex`] / [`MeshData`] - CPU-side geometry buffers
//! - [`shapes`] - parametric builders (cylinder, sphere, quad)
//! - [`ShapeMetadata`] - parameter round-tripping for persistence and tooling
//! - [`MeshRegistry`] - content-addressed cache of built geometry

pub mod data;
pub mod metadata;
pub mod registry;
pub mod shapes;

pub use data::{MeshData, Vertex};
pub use metadata::{MetadataError, MeshKey, ShapeMetadata};
pub use registry::MeshRegistry;
