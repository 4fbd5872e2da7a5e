//! HitRecord for ray-primitive intersection.

use lumen_math::Vec3;

/// Record of the closest ray-surface intersection found so far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Parameter t where the intersection occurs (`+inf` until a hit)
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Unit surface normal at the intersection
    pub normal: Vec3,
    /// Index into the scene's material list
    pub material_index: usize,
    /// Whether any intersection has been recorded
    pub did_hit: bool,
}

impl Default for HitRecord {
    fn default() -> Self {
        Self {
            t: f32::INFINITY,
            point: Vec3::ZERO,
            normal: Vec3::ZERO,
            material_index: 0,
            did_hit: false,
        }
    }
}

impl HitRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a hit, overwriting whatever was recorded before.
    #[inline]
    pub(crate) fn record(&mut self, t: f32, point: Vec3, normal: Vec3, material_index: usize) {
        self.t = t;
        self.point = point;
        self.normal = normal;
        self.material_index = material_index;
        self.did_hit = true;
    }
}
