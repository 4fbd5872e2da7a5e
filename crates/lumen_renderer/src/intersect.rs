//! Ray-primitive intersection.
//!
//! Every primitive answers two questions: the closest-hit test, which only
//! updates a [`HitRecord`] when it finds a strictly closer valid hit, and the
//! occlusion test, which returns as soon as any valid hit exists. Both share
//! one geometric routine per primitive. Degenerate input (zero-length
//! direction, non-positive radius, rays parallel to a surface) is a miss and
//! never produces a non-finite `t`.

use crate::HitRecord;
use lumen_core::{CullMode, Plane, Sphere, Triangle, TriangleMesh};
use lumen_math::{Interval, Ray, Vec3};

/// `|dot(direction, normal)|` below this is treated as parallel to a plane.
const PARALLEL_EPSILON: f32 = 1e-8;

/// Objects that can be tested against rays.
pub trait Intersect {
    /// Closest-hit test.
    ///
    /// Returns true and overwrites `rec` only if a valid hit with
    /// `t < rec.t` is found.
    fn hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool;

    /// Occlusion test: true if any valid hit exists in the ray's range.
    fn occludes(&self, ray: &Ray) -> bool;
}

impl Intersect for Sphere {
    fn hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool {
        match sphere_t(self, ray) {
            Some(t) if t < rec.t => {
                let point = ray.at(t);
                let normal = (point - self.origin) / self.radius;
                rec.record(t, point, normal, self.material_index);
                true
            }
            _ => false,
        }
    }

    fn occludes(&self, ray: &Ray) -> bool {
        sphere_t(self, ray).is_some()
    }
}

impl Intersect for Plane {
    fn hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool {
        match plane_t(self, ray) {
            Some(t) if t < rec.t => {
                rec.record(t, ray.at(t), self.normal, self.material_index);
                true
            }
            _ => false,
        }
    }

    fn occludes(&self, ray: &Ray) -> bool {
        plane_t(self, ray).is_some()
    }
}

impl Intersect for Triangle {
    fn hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool {
        match triangle_t(self, ray) {
            Some((t, point)) if t < rec.t => {
                rec.record(t, point, self.normal, self.material_index);
                true
            }
            _ => false,
        }
    }

    fn occludes(&self, ray: &Ray) -> bool {
        triangle_t(self, ray).is_some()
    }
}

impl Intersect for TriangleMesh {
    fn hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool {
        hit_mesh(self, ray, Some(rec)).hit
    }

    fn occludes(&self, ray: &Ray) -> bool {
        hit_mesh(self, ray, None).hit
    }
}

/// Outcome of a mesh query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeshHit {
    /// Whether a (closer) hit was found
    pub hit: bool,
    /// Number of triangles the query had to test
    pub triangles_tested: usize,
}

/// Test a ray against a mesh: world AABB slab test first, then every triangle.
///
/// With `Some(rec)` this is a closest-hit query that stamps the mesh's
/// material on the record. With `None` it is an occlusion query that stops at
/// the first triangle hit.
pub fn hit_mesh(mesh: &TriangleMesh, ray: &Ray, mut rec: Option<&mut HitRecord>) -> MeshHit {
    let mut result = MeshHit::default();

    let max = rec.as_ref().map_or(ray.max, |r| r.t.min(ray.max));
    if mesh.triangle_count() == 0 || !mesh.world_bounds().hit(ray, Interval::new(ray.min, max)) {
        return result;
    }

    for triangle in mesh.world_triangles() {
        result.triangles_tested += 1;

        let Some((t, point)) = triangle_t(&triangle, ray) else {
            continue;
        };

        match rec.as_deref_mut() {
            None => {
                result.hit = true;
                return result;
            }
            Some(rec) if t < rec.t => {
                rec.record(t, point, triangle.normal, mesh.material_index);
                result.hit = true;
            }
            Some(_) => {}
        }
    }

    result
}

/// Nearest root of the ray-sphere quadratic, if it lies in the ray's range.
///
/// Only the smaller root is considered, so a ray starting inside the sphere
/// does not hit it.
fn sphere_t(sphere: &Sphere, ray: &Ray) -> Option<f32> {
    if sphere.radius.is_nan() || sphere.radius <= 0.0 {
        return None;
    }

    let oc = ray.origin - sphere.origin;
    let a = ray.direction.length_squared();
    if a <= f32::MIN_POSITIVE {
        return None;
    }
    let b = 2.0 * ray.direction.dot(oc);
    let c = oc.length_squared() - sphere.radius * sphere.radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant <= 0.0 {
        return None;
    }

    let t = (-b - discriminant.sqrt()) / (2.0 * a);
    ray.accepts(t).then_some(t)
}

fn plane_t(plane: &Plane, ray: &Ray) -> Option<f32> {
    let denom = ray.direction.dot(plane.normal);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }

    let t = (plane.origin - ray.origin).dot(plane.normal) / denom;
    (t.is_finite() && ray.accepts(t)).then_some(t)
}

/// Cull test, supporting-plane intersection, then the three edge tests.
fn triangle_t(triangle: &Triangle, ray: &Ray) -> Option<(f32, Vec3)> {
    let n = triangle.normal;
    let n_dot_d = n.dot(ray.direction);

    match triangle.cull_mode {
        CullMode::BackFace if n_dot_d > 0.0 => return None,
        CullMode::FrontFace if n_dot_d < 0.0 => return None,
        _ => {}
    }
    // In-plane rays and degenerate (zero-normal) triangles
    if n_dot_d == 0.0 {
        return None;
    }

    let t = (triangle.v0 - ray.origin).dot(n) / n_dot_d;
    if !t.is_finite() || !ray.interval().contains(t) {
        return None;
    }

    let point = ray.at(t);
    let edges = [
        (triangle.v0, triangle.v1),
        (triangle.v1, triangle.v2),
        (triangle.v2, triangle.v0),
    ];
    for (start, end) in edges {
        if (end - start).cross(point - start).dot(n) < 0.0 {
            return None;
        }
    }

    Some((t, point))
}
