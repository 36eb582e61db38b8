//! Shape parameter metadata.
//!
//! Procedural meshes are defined entirely by their shape parameters, so the
//! parameters double as the mesh's persistent description and its cache
//! identity. [`ShapeMetadata`] is the tagged union of all shape parameter
//! sets; it round-trips through RON as a key-value tree whose keys are the
//! parameter names (`radiusBase`, `radiusTop`, ...) under a shape type tag.
//!
//! Metadata is for persistence and tooling only; rendering never reads it.

use serde::{Deserialize, Serialize};

use super::shapes::{CylinderParams, QuadParams, SphereParams};

/// Tagged shape parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ShapeMetadata {
    /// Cylinder shape parameters.
    Cylinder(CylinderParams),
    /// Sphere shape parameters.
    Sphere(SphereParams),
    /// Quad shape parameters.
    Quad(QuadParams),
}

impl ShapeMetadata {
    /// Get the shape type tag.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Cylinder(_) => "Cylinder",
            Self::Sphere(_) => "Sphere",
            Self::Quad(_) => "Quad",
        }
    }

    /// Serialize to a RON string.
    pub fn to_ron(&self) -> Result<String, MetadataError> {
        ron::ser::to_string(self).map_err(|e| MetadataError::Serialize(e.to_string()))
    }

    /// Parse from a RON string.
    pub fn from_ron(text: &str) -> Result<Self, MetadataError> {
        ron::de::from_str(text).map_err(|e| MetadataError::Parse(e.to_string()))
    }

    /// Content-address of this parameter set, used by the mesh registry.
    pub fn cache_key(&self) -> MeshKey {
        let words = match self {
            Self::Cylinder(p) => p.cache_words(),
            Self::Sphere(p) => p.cache_words(),
            Self::Quad(p) => p.cache_words(),
        };
        MeshKey {
            kind: self.type_name(),
            words,
        }
    }
}

/// Content-address of a shape's defining parameters.
///
/// Float parameters are keyed by their exact bit patterns, so two parameter
/// sets address the same geometry iff every parameter is bit-identical.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MeshKey {
    kind: &'static str,
    words: Vec<u32>,
}

/// Errors from metadata round-tripping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataError {
    /// Serialization to the tree format failed.
    Serialize(String),
    /// The tree could not be parsed as shape metadata.
    Parse(String),
}

impl std::fmt::Display for MetadataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialize(msg) => write!(f, "metadata serialization failed: {msg}"),
            Self::Parse(msg) => write!(f, "metadata parse failed: {msg}"),
        }
    }
}

impl std::error::Error for MetadataError {}
