use crate::{Interval, Vec3};

/// A ray in 3D space with origin, direction, and a valid parametric range.
///
/// Intersection tests only accept hits with `min < t < max`. The direction
/// is expected to be unit length when the ray is tested against geometry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    pub min: f32,
    pub max: f32,
}

impl Ray {
    /// Smallest accepted `t` for rays built with [`Ray::new`].
    pub const DEFAULT_MIN: f32 = 0.0001;

    /// Create a new ray with the default `[DEFAULT_MIN, f32::MAX]` range.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
            min: Self::DEFAULT_MIN,
            max: f32::MAX,
        }
    }

    /// Create a ray restricted to the parametric range `(min, max)`.
    pub fn with_bounds(origin: Vec3, direction: Vec3, min: f32, max: f32) -> Self {
        Self {
            origin,
            direction,
            min,
            max,
        }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// The valid parametric range as an [`Interval`].
    #[inline]
    pub fn interval(&self) -> Interval {
        Interval::new(self.min, self.max)
    }

    /// Returns true if `t` lies strictly inside `(min, max)`.
    #[inline]
    pub fn accepts(&self, t: f32) -> bool {
        self.interval().surrounds(t)
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_creation() {
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let direction = Vec3::new(0.0, 1.0, 0.0);
        let ray = Ray::new(origin, direction);

        assert_eq!(ray.origin, origin);
        assert_eq!(ray.direction, direction);
        assert_eq!(ray.min, Ray::DEFAULT_MIN);
        assert_eq!(ray.max, f32::MAX);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        assert_eq!(ray.at(0.0), Vec3::ZERO);
        assert_eq!(ray.at(1.0), Vec3::X);
        assert_eq!(ray.at(2.0), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ray_accepts_is_exclusive() {
        let ray = Ray::with_bounds(Vec3::ZERO, Vec3::Z, 1.0, 5.0);

        assert!(!ray.accepts(1.0));
        assert!(!ray.accepts(5.0));
        assert!(ray.accepts(3.0));
        assert!(!ray.accepts(f32::NAN));
    }
}
