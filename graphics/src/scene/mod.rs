//! Scene composition and per-frame context.

use std::sync::Arc;

use estuary_core::math::{look_at_rh, perspective_rh, Mat4, Vec3};
use estuary_core::mesh::MeshData;

use crate::types::Viewport;

/// The active viewpoint for a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
    /// World-to-view matrix.
    pub view: Mat4,
    /// View-to-clip matrix ([0, 1] depth range).
    pub projection: Mat4,
}

impl Camera {
    /// Create a camera at `position` looking at `target`.
    pub fn look_at(position: Vec3, target: Vec3, aspect: f32) -> Self {
        Self {
            position,
            view: look_at_rh(position, target, Vec3::new(0.0, 1.0, 0.0)),
            projection: perspective_rh(std::f32::consts::FRAC_PI_3, aspect, 0.1, 1000.0),
        }
    }

    /// Combined view-projection matrix.
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::look_at(Vec3::new(0.0, 2.0, 6.0), Vec3::zeros(), 16.0 / 9.0)
    }
}

/// Ambient world state consumed by post-process stages.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldEnvironment {
    /// Direction towards the sun, in world space.
    pub sun_direction: Vec3,
    /// Sun height above the horizon, in [-1, 1].
    pub sun_height: f32,
}

impl Default for WorldEnvironment {
    fn default() -> Self {
        Self {
            sun_direction: Vec3::new(0.3, 0.8, 0.5),
            sun_height: 0.8,
        }
    }
}

/// A renderable object: a mesh with a world transform.
#[derive(Debug, Clone)]
pub struct RenderObject {
    /// The shared mesh geometry.
    pub mesh: Arc<MeshData>,
    /// Model-to-world transform.
    pub transform: Mat4,
}

impl RenderObject {
    /// Create an object at the identity transform.
    pub fn new(mesh: Arc<MeshData>) -> Self {
        Self {
            mesh,
            transform: Mat4::identity(),
        }
    }

    /// Set the world transform.
    #[must_use]
    pub fn with_transform(mut self, transform: Mat4) -> Self {
        self.transform = transform;
        self
    }
}

/// The renderable content of a frame.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// The active camera.
    pub camera: Camera,
    /// Ambient world state.
    pub environment: WorldEnvironment,
    /// Entities drawn by the geometry and shadow stages.
    pub objects: Vec<RenderObject>,
}

impl Scene {
    /// Create an empty scene with default camera and environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object to the scene, returning its slot.
    pub fn add_object(&mut self, object: RenderObject) -> usize {
        let id = self.objects.len();
        self.objects.push(object);
        id
    }
}

/// Everything a frame needs beyond the orchestrator's own state.
#[derive(Debug, Clone)]
pub struct FrameContext<'a> {
    /// The scene to render.
    pub scene: &'a Scene,
    /// The target surface viewport.
    pub viewport: Viewport,
}

impl<'a> FrameContext<'a> {
    /// Create a frame context.
    pub fn new(scene: &'a Scene, viewport: Viewport) -> Self {
        Self { scene, viewport }
    }
}
