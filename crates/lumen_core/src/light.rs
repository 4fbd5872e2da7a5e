//! Point and directional lights.

use lumen_math::{Color, Vec3};

/// A light source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// Omnidirectional light with inverse-square falloff.
    Point {
        origin: Vec3,
        intensity: f32,
        color: Color,
    },
    /// Light at infinity. `direction` points from the surface toward the light.
    Directional {
        direction: Vec3,
        intensity: f32,
        color: Color,
    },
}

impl Light {
    pub fn point(origin: Vec3, intensity: f32, color: Color) -> Self {
        Light::Point {
            origin,
            intensity,
            color,
        }
    }

    pub fn directional(direction: Vec3, intensity: f32, color: Color) -> Self {
        Light::Directional {
            direction: direction.normalize_or_zero(),
            intensity,
            color,
        }
    }

    /// Unnormalized vector from `target` toward the light.
    pub fn direction_to(&self, target: Vec3) -> Vec3 {
        match *self {
            Light::Point { origin, .. } => origin - target,
            Light::Directional { direction, .. } => direction,
        }
    }

    /// Incident radiance at `target`.
    pub fn radiance(&self, target: Vec3) -> Color {
        match *self {
            Light::Point {
                origin,
                intensity,
                color,
            } => color * (intensity / (origin - target).length_squared()),
            Light::Directional {
                intensity, color, ..
            } => color * intensity,
        }
    }

    /// Whether shadow rays toward this light are bounded by a finite distance.
    pub fn is_positional(&self) -> bool {
        matches!(self, Light::Point { .. })
    }
}
