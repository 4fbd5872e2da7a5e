//! Surface materials.
//!
//! Materials are plain parameter sets. The scene owns them in an arena and
//! geometry refers to them by index; shading is evaluated by the renderer.

use lumen_math::{colors, Color};

/// Base reflectivity used for all dielectrics in the Cook-Torrance model.
pub const DIELECTRIC_F0: f32 = 0.04;

/// A surface reflectance model and its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Unlit constant color.
    SolidColor { color: Color },

    /// Perfectly diffuse surface.
    Lambert {
        color: Color,
        /// Diffuse reflection coefficient (kd)
        diffuse_reflectance: f32,
    },

    /// Lambert diffuse plus a white Phong highlight.
    LambertPhong {
        color: Color,
        diffuse_reflectance: f32,
        specular_reflectance: f32,
        phong_exponent: f32,
    },

    /// Microfacet model: GGX distribution, Smith geometry, Schlick Fresnel.
    CookTorrance {
        albedo: Color,
        /// 0 = dielectric, 1 = metal
        metalness: f32,
        /// 0 = smooth, 1 = rough
        roughness: f32,
    },
}

impl Material {
    pub fn solid_color(color: Color) -> Self {
        Material::SolidColor { color }
    }

    pub fn lambert(color: Color, diffuse_reflectance: f32) -> Self {
        Material::Lambert {
            color,
            diffuse_reflectance,
        }
    }

    pub fn lambert_phong(
        color: Color,
        diffuse_reflectance: f32,
        specular_reflectance: f32,
        phong_exponent: f32,
    ) -> Self {
        Material::LambertPhong {
            color,
            diffuse_reflectance,
            specular_reflectance,
            phong_exponent,
        }
    }

    /// Metalness and roughness are clamped to [0, 1].
    pub fn cook_torrance(albedo: Color, metalness: f32, roughness: f32) -> Self {
        Material::CookTorrance {
            albedo,
            metalness: metalness.clamp(0.0, 1.0),
            roughness: roughness.clamp(0.0, 1.0),
        }
    }
}

impl Default for Material {
    /// Red solid color, the fallback material of every new scene.
    fn default() -> Self {
        Material::solid_color(colors::RED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_solid_red() {
        assert_eq!(Material::default(), Material::SolidColor { color: colors::RED });
    }

    #[test]
    fn test_cook_torrance_clamps_parameters() {
        let mat = Material::cook_torrance(colors::WHITE, 2.0, -0.5);
        match mat {
            Material::CookTorrance {
                metalness,
                roughness,
                ..
            } => {
                assert_eq!(metalness, 1.0);
                assert_eq!(roughness, 0.0);
            }
            other => panic!("unexpected material {other:?}"),
        }
    }
}
