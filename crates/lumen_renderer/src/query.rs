//! Scene-wide ray queries.

use crate::{HitRecord, Intersect};
use lumen_core::Scene;
use lumen_math::Ray;

/// Closest-hit and occlusion queries over a whole scene.
pub trait SceneQuery {
    /// Nearest intersection over every primitive. `did_hit` is false on a miss.
    fn closest_hit(&self, ray: &Ray) -> HitRecord;

    /// True as soon as any primitive intersects the ray.
    fn does_hit(&self, ray: &Ray) -> bool;
}

impl SceneQuery for Scene {
    fn closest_hit(&self, ray: &Ray) -> HitRecord {
        let mut rec = HitRecord::new();

        for plane in self.planes() {
            plane.hit(ray, &mut rec);
        }
        for sphere in self.spheres() {
            sphere.hit(ray, &mut rec);
        }
        for mesh in self.meshes() {
            mesh.hit(ray, &mut rec);
        }
        for triangle in self.triangles() {
            triangle.hit(ray, &mut rec);
        }

        rec
    }

    fn does_hit(&self, ray: &Ray) -> bool {
        self.planes().iter().any(|p| p.occludes(ray))
            || self.spheres().iter().any(|s| s.occludes(ray))
            || self.meshes().iter().any(|m| m.occludes(ray))
            || self.triangles().iter().any(|t| t.occludes(ray))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::{CullMode, Material};
    use lumen_math::{colors, Vec3};

    fn ray_down_z() -> Ray {
        Ray::new(Vec3::ZERO, Vec3::Z)
    }

    #[test]
    fn test_empty_scene_misses() {
        let scene = Scene::new("empty");
        let rec = scene.closest_hit(&ray_down_z());

        assert!(!rec.did_hit);
        assert_eq!(rec.t, f32::INFINITY);
        assert!(!scene.does_hit(&ray_down_z()));
    }

    #[test]
    fn test_closest_hit_is_order_independent() {
        let build = |reverse: bool| {
            let mut scene = Scene::new("order");
            let near = scene.add_material(Material::solid_color(colors::GREEN));
            let far = scene.add_material(Material::solid_color(colors::BLUE));

            let mut spheres = vec![
                (Vec3::new(0.0, 0.0, 10.0), 1.0, near),
                (Vec3::new(0.0, 0.0, 20.0), 1.0, far),
            ];
            if reverse {
                spheres.reverse();
            }
            for (origin, radius, material) in spheres {
                scene.add_sphere(origin, radius, material).unwrap();
            }
            // Triangle between the two spheres
            scene
                .add_triangle(
                    [
                        Vec3::new(-5.0, -5.0, 15.0),
                        Vec3::new(5.0, -5.0, 15.0),
                        Vec3::new(0.0, 5.0, 15.0),
                    ],
                    CullMode::None,
                    far,
                )
                .unwrap();
            (scene, near)
        };

        let (forward, near) = build(false);
        let (backward, _) = build(true);

        let a = forward.closest_hit(&ray_down_z());
        let b = backward.closest_hit(&ray_down_z());

        assert!(a.did_hit && b.did_hit);
        assert!((a.t - 9.0).abs() < 1e-4);
        assert_eq!(a.material_index, near);
        assert_eq!(a, b);
    }

    #[test]
    fn test_triangle_closer_than_plane() {
        let mut scene = Scene::new("mixed");
        scene.add_plane(Vec3::new(0.0, 0.0, 30.0), -Vec3::Z, 0).unwrap();
        let tri_mat = scene.add_material(Material::lambert(colors::WHITE, 1.0));
        scene
            .add_triangle(
                [
                    Vec3::new(-1.0, -1.0, 5.0),
                    Vec3::new(0.0, 1.0, 5.0),
                    Vec3::new(1.0, -1.0, 5.0),
                ],
                CullMode::None,
                tri_mat,
            )
            .unwrap();

        let rec = scene.closest_hit(&ray_down_z());
        assert!((rec.t - 5.0).abs() < 1e-5);
        assert_eq!(rec.material_index, tri_mat);
    }

    #[test]
    fn test_does_hit_respects_ray_range() {
        let mut scene = Scene::new("shadow");
        scene.add_sphere(Vec3::new(0.0, 0.0, 10.0), 1.0, 0).unwrap();

        assert!(scene.does_hit(&ray_down_z()));
        let short = Ray::with_bounds(Vec3::ZERO, Vec3::Z, 1e-5, 8.0);
        assert!(!scene.does_hit(&short));
    }
}
