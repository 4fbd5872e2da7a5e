//! Pinhole camera.

use lumen_math::{Mat4, Vec3};

/// Pinhole camera with an orthonormal basis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub origin: Vec3,
    /// Full vertical field of view in degrees
    pub fov_angle: f32,
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 90.0)
    }
}

impl Camera {
    /// Create a camera looking down +Z with +Y up.
    pub fn new(origin: Vec3, fov_angle: f32) -> Self {
        Self {
            origin,
            fov_angle,
            forward: Vec3::Z,
            right: Vec3::X,
            up: Vec3::Y,
        }
    }

    /// Point the camera along `forward` (builder style).
    pub fn with_forward(mut self, forward: Vec3) -> Self {
        self.look_along(forward);
        self
    }

    /// Rebuild the basis around a new viewing direction, keeping +Y as the
    /// world up hint.
    ///
    /// Looking straight up or down falls back to +X as the right vector.
    pub fn look_along(&mut self, forward: Vec3) {
        let Some(forward) = forward.try_normalize() else {
            return;
        };

        self.forward = forward;
        self.right = Vec3::Y.cross(forward).try_normalize().unwrap_or(Vec3::X);
        self.up = forward.cross(self.right).normalize();
    }

    /// Matrix taking camera-space points and directions to world space.
    pub fn camera_to_world(&self) -> Mat4 {
        Mat4::from_cols(
            self.right.extend(0.0),
            self.up.extend(0.0),
            self.forward.extend(0.0),
            self.origin.extend(1.0),
        )
    }
}
