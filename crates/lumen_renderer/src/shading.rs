//! Material evaluation at a hit point.

use crate::brdf;
use crate::HitRecord;
use lumen_core::material::DIELECTRIC_F0;
use lumen_core::Material;
use lumen_math::{Color, Vec3};

/// Surfaces that can report reflected color for one light.
pub trait Shade {
    /// Reflected color at `hit` for a unit `light_dir` (surface to light) and
    /// a unit `view_dir` (surface to viewer).
    fn shade(&self, hit: &HitRecord, light_dir: Vec3, view_dir: Vec3) -> Color;
}

impl Shade for Material {
    fn shade(&self, hit: &HitRecord, light_dir: Vec3, view_dir: Vec3) -> Color {
        let n = hit.normal;

        match *self {
            Material::SolidColor { color } => color,

            Material::Lambert {
                color,
                diffuse_reflectance,
            } => brdf::lambert(diffuse_reflectance, color),

            Material::LambertPhong {
                color,
                diffuse_reflectance,
                specular_reflectance,
                phong_exponent,
            } => {
                brdf::lambert(diffuse_reflectance, color)
                    + brdf::phong(specular_reflectance, phong_exponent, -light_dir, view_dir, n)
            }

            Material::CookTorrance {
                albedo,
                metalness,
                roughness,
            } => {
                let (v, l) = (view_dir, light_dir);
                let h = (v + l).normalize_or_zero();

                let f0 = if metalness > 0.0 {
                    albedo
                } else {
                    Color::splat(DIELECTRIC_F0)
                };

                let f = brdf::fresnel_schlick(h, v, f0);
                let d = brdf::normal_distribution_ggx(n, h, roughness);
                let g = brdf::geometry_smith(n, v, l, roughness);

                let denom = 4.0 * v.dot(n) * l.dot(n);
                let specular = if denom > 0.0 {
                    f * (d * g / denom)
                } else {
                    Color::ZERO
                };

                let kd = (Color::ONE - f) * (1.0 - metalness);
                brdf::lambert_rgb(kd, albedo) + specular
            }
        }
    }
}
