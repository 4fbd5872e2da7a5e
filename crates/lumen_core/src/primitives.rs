//! Analytic primitives: spheres, planes and standalone triangles.
//!
//! These are passive data. Intersection lives in the renderer.

use lumen_math::Vec3;

/// Which triangle faces are eligible for intersection.
///
/// The front face is the side the triangle normal points to, so a ray
/// travelling against the normal (`dot(normal, direction) < 0`) hits the
/// front face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CullMode {
    /// Both faces can be hit.
    #[default]
    None,
    /// Rays hitting the back face are rejected.
    BackFace,
    /// Rays hitting the front face are rejected.
    FrontFace,
}

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub origin: Vec3,
    pub radius: f32,
    pub material_index: usize,
}

impl Sphere {
    pub fn new(origin: Vec3, radius: f32, material_index: usize) -> Self {
        Self {
            origin,
            radius,
            material_index,
        }
    }
}

/// An infinite plane through `origin` with a unit `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub origin: Vec3,
    pub normal: Vec3,
    pub material_index: usize,
}

impl Plane {
    /// Create a plane; the normal is normalized.
    pub fn new(origin: Vec3, normal: Vec3, material_index: usize) -> Self {
        Self {
            origin,
            normal: normal.normalize_or_zero(),
            material_index,
        }
    }
}

/// A single triangle with a precomputed face normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
    /// Unit face normal; zero for degenerate triangles
    pub normal: Vec3,
    pub cull_mode: CullMode,
    pub material_index: usize,
}

impl Triangle {
    /// Create a triangle; the normal follows the winding order
    /// `cross(v1 - v0, v2 - v0)`.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, cull_mode: CullMode, material_index: usize) -> Self {
        Self {
            v0,
            v1,
            v2,
            normal: face_normal(v0, v1, v2),
            cull_mode,
            material_index,
        }
    }

    /// Create a triangle with a caller-supplied normal.
    pub fn with_normal(
        v0: Vec3,
        v1: Vec3,
        v2: Vec3,
        normal: Vec3,
        cull_mode: CullMode,
        material_index: usize,
    ) -> Self {
        Self {
            v0,
            v1,
            v2,
            normal: normal.normalize_or_zero(),
            cull_mode,
            material_index,
        }
    }

    /// Vertices in winding order.
    pub fn vertices(&self) -> [Vec3; 3] {
        [self.v0, self.v1, self.v2]
    }
}

/// Flat face normal of a triangle in declared vertex order.
///
/// Degenerate triangles yield `Vec3::ZERO`, which intersection treats as
/// a guaranteed miss.
pub fn face_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Vec3 {
    (v1 - v0).cross(v2 - v0).normalize_or_zero()
}
