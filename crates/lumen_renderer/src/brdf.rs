//! Reflectance functions.
//!
//! Pure functions of unit vectors and material parameters. Directions `v`
//! and `l` point away from the surface unless noted otherwise.

use lumen_math::{Color, Vec3};
use std::f32::consts::PI;

/// Lambertian diffuse term with a scalar reflectance.
#[inline]
pub fn lambert(kd: f32, cd: Color) -> Color {
    cd * kd / PI
}

/// Lambertian diffuse term with a per-channel reflectance.
#[inline]
pub fn lambert_rgb(kd: Color, cd: Color) -> Color {
    cd * kd / PI
}

/// Phong specular lobe, returned as white scaled by the lobe value.
///
/// `l` is the incoming light direction (travelling toward the surface).
pub fn phong(ks: f32, exponent: f32, l: Vec3, v: Vec3, n: Vec3) -> Color {
    let r = l - 2.0 * n.dot(l) * n;
    let cos = r.dot(v);
    if cos > 0.0 {
        Color::splat(ks * cos.powf(exponent))
    } else {
        Color::ZERO
    }
}

/// Schlick's Fresnel approximation.
#[inline]
pub fn fresnel_schlick(h: Vec3, v: Vec3, f0: Color) -> Color {
    f0 + (Color::ONE - f0) * (1.0 - h.dot(v)).powi(5)
}

/// Trowbridge-Reitz (GGX) normal distribution with `alpha = roughness^2`.
pub fn normal_distribution_ggx(n: Vec3, h: Vec3, roughness: f32) -> f32 {
    let alpha = roughness * roughness;
    let alpha2 = alpha * alpha;
    let n_dot_h = n.dot(h);

    let denom = n_dot_h * n_dot_h * (alpha2 - 1.0) + 1.0;
    alpha2 / (PI * denom * denom)
}

/// Schlick-GGX masking term for a single direction.
#[inline]
pub fn geometry_schlick_ggx(n: Vec3, dir: Vec3, k: f32) -> f32 {
    let n_dot_dir = n.dot(dir);
    n_dot_dir / (n_dot_dir * (1.0 - k) + k)
}

/// Smith shadowing-masking: product of the view and light Schlick-GGX terms.
pub fn geometry_smith(n: Vec3, v: Vec3, l: Vec3, roughness: f32) -> f32 {
    let alpha = roughness * roughness;
    let k = (alpha + 1.0) * (alpha + 1.0) / 8.0;

    geometry_schlick_ggx(n, v, k) * geometry_schlick_ggx(n, l, k)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Color, b: Color) -> bool {
        (a - b).abs().max_element() < 1e-5
    }

    #[test]
    fn test_lambert() {
        let c = lambert(1.0, Color::new(1.0, 0.5, 0.0));
        assert!(approx(c, Color::new(1.0 / PI, 0.5 / PI, 0.0)));

        let rgb = lambert_rgb(Color::new(1.0, 0.5, 0.25), Color::ONE);
        assert!(approx(rgb, Color::new(1.0, 0.5, 0.25) / PI));
    }

    #[test]
    fn test_fresnel_normal_incidence() {
        let f0 = Color::new(0.04, 0.5, 0.9);
        assert!(approx(fresnel_schlick(Vec3::Z, Vec3::Z, f0), f0));
    }

    #[test]
    fn test_fresnel_grazing_is_white() {
        let f0 = Color::splat(0.04);
        assert!(approx(fresnel_schlick(Vec3::Z, Vec3::X, f0), Color::ONE));
    }

    #[test]
    fn test_phong_mirror_direction() {
        // Light coming straight down reflects straight up
        let n = Vec3::Y;
        let l = -Vec3::Y;
        assert!(approx(phong(0.5, 10.0, l, Vec3::Y, n), Color::splat(0.5)));

        // Viewing from below the reflection gives nothing
        assert_eq!(phong(0.5, 10.0, l, -Vec3::Y, n), Color::ZERO);
    }

    #[test]
    fn test_phong_falls_off_with_exponent() {
        let n = Vec3::Y;
        let l = Vec3::new(1.0, -1.0, 0.0).normalize();
        let v = Vec3::new(0.6, 1.0, 0.0).normalize();

        let soft = phong(1.0, 2.0, l, v, n).x;
        let sharp = phong(1.0, 50.0, l, v, n).x;
        assert!(soft > sharp);
        assert!(sharp > 0.0);
    }

    #[test]
    fn test_ggx_peaks_at_normal() {
        let n = Vec3::Y;
        let tilted = Vec3::new(0.3, 1.0, 0.0).normalize();

        let peak = normal_distribution_ggx(n, n, 0.5);
        assert!(peak > normal_distribution_ggx(n, tilted, 0.5));

        // alpha^2 / (pi * alpha^4) at n == h
        let alpha = 0.25_f32;
        assert!((peak - 1.0 / (PI * alpha * alpha)).abs() < 1e-3);
    }

    #[test]
    fn test_geometry_terms() {
        let n = Vec3::Y;
        assert!((geometry_schlick_ggx(n, n, 0.3) - 1.0).abs() < 1e-6);
        assert!((geometry_smith(n, n, n, 0.7) - 1.0).abs() < 1e-6);

        let grazing = Vec3::new(1.0, 0.1, 0.0).normalize();
        let g = geometry_smith(n, n, grazing, 0.7);
        assert!(g > 0.0 && g < 1.0);
    }
}
