//! The scene arena.
//!
//! A `Scene` exclusively owns every primitive, light and material. Geometry
//! refers to its material by index into the scene's material list, so a
//! material can never outlive or dangle relative to the geometry using it.

use lumen_math::{Color, Vec3};

use crate::error::{SceneError, SceneResult};
use crate::light::Light;
use crate::material::Material;
use crate::mesh::TriangleMesh;
use crate::primitives::{CullMode, Plane, Sphere, Triangle};

/// A complete renderable scene.
#[derive(Clone, Debug)]
pub struct Scene {
    /// Scene name (for logging)
    pub name: String,

    spheres: Vec<Sphere>,
    planes: Vec<Plane>,
    triangles: Vec<Triangle>,
    meshes: Vec<TriangleMesh>,
    lights: Vec<Light>,
    materials: Vec<Material>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new("")
    }
}

impl Scene {
    /// Index of the fallback material present in every scene.
    pub const DEFAULT_MATERIAL: usize = 0;

    /// Create an empty scene holding only the default red material.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            spheres: Vec::new(),
            planes: Vec::new(),
            triangles: Vec::new(),
            meshes: Vec::new(),
            lights: Vec::new(),
            materials: vec![Material::default()],
        }
    }

    /// Add a material to the scene and return its index.
    pub fn add_material(&mut self, material: Material) -> usize {
        self.materials.push(material);
        self.materials.len() - 1
    }

    /// Add a sphere and return its index.
    pub fn add_sphere(&mut self, origin: Vec3, radius: f32, material_index: usize) -> SceneResult<usize> {
        self.check_material(material_index)?;
        if radius.is_nan() || radius <= 0.0 {
            return Err(SceneError::InvalidRadius(radius));
        }

        self.spheres.push(Sphere::new(origin, radius, material_index));
        Ok(self.spheres.len() - 1)
    }

    /// Add a plane and return its index.
    pub fn add_plane(&mut self, origin: Vec3, normal: Vec3, material_index: usize) -> SceneResult<usize> {
        self.check_material(material_index)?;

        self.planes.push(Plane::new(origin, normal, material_index));
        Ok(self.planes.len() - 1)
    }

    /// Add a standalone triangle and return its index.
    pub fn add_triangle(
        &mut self,
        vertices: [Vec3; 3],
        cull_mode: CullMode,
        material_index: usize,
    ) -> SceneResult<usize> {
        self.check_material(material_index)?;

        let [v0, v1, v2] = vertices;
        self.triangles
            .push(Triangle::new(v0, v1, v2, cull_mode, material_index));
        Ok(self.triangles.len() - 1)
    }

    /// Add a triangle mesh and return its index.
    pub fn add_triangle_mesh(&mut self, mesh: TriangleMesh) -> SceneResult<usize> {
        self.check_material(mesh.material_index)?;

        log::info!(
            "Added mesh to '{}': {} vertices, {} triangles",
            self.name,
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        self.meshes.push(mesh);
        Ok(self.meshes.len() - 1)
    }

    /// Add a point light and return its index.
    pub fn add_point_light(&mut self, origin: Vec3, intensity: f32, color: Color) -> usize {
        self.lights.push(Light::point(origin, intensity, color));
        self.lights.len() - 1
    }

    /// Add a directional light and return its index.
    ///
    /// `direction` points from the scene toward the light.
    pub fn add_directional_light(&mut self, direction: Vec3, intensity: f32, color: Color) -> usize {
        self.lights
            .push(Light::directional(direction, intensity, color));
        self.lights.len() - 1
    }

    /// Mutable access to a mesh, for transform updates between frames.
    pub fn mesh_mut(&mut self, index: usize) -> SceneResult<&mut TriangleMesh> {
        self.meshes
            .get_mut(index)
            .ok_or(SceneError::UnknownMesh(index))
    }

    /// Mutable access to every mesh.
    pub fn meshes_mut(&mut self) -> &mut [TriangleMesh] {
        &mut self.meshes
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn meshes(&self) -> &[TriangleMesh] {
        &self.meshes
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Get a material by index, falling back to the default material.
    ///
    /// Indices are validated when geometry is added, so the fallback is
    /// only reachable through a hand-built hit record.
    pub fn material(&self, index: usize) -> &Material {
        self.materials
            .get(index)
            .unwrap_or(&self.materials[Self::DEFAULT_MATERIAL])
    }

    /// Total number of primitives, counting every mesh triangle.
    pub fn primitive_count(&self) -> usize {
        self.spheres.len()
            + self.planes.len()
            + self.triangles.len()
            + self.meshes.iter().map(|m| m.triangle_count()).sum::<usize>()
    }

    fn check_material(&self, index: usize) -> SceneResult<()> {
        if index < self.materials.len() {
            Ok(())
        } else {
            Err(SceneError::UnknownMaterial {
                index,
                count: self.materials.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_math::colors;

    #[test]
    fn test_scene_starts_with_default_material() {
        let scene = Scene::new("test");

        assert_eq!(scene.materials().len(), 1);
        assert_eq!(scene.material(Scene::DEFAULT_MATERIAL), &Material::default());
    }

    #[test]
    fn test_add_geometry_returns_indices() {
        let mut scene = Scene::new("test");
        let blue = scene.add_material(Material::solid_color(colors::BLUE));
        assert_eq!(blue, 1);

        assert_eq!(scene.add_sphere(Vec3::ZERO, 1.0, blue).unwrap(), 0);
        assert_eq!(scene.add_sphere(Vec3::X, 1.0, 0).unwrap(), 1);
        assert_eq!(scene.add_plane(Vec3::ZERO, Vec3::Y, blue).unwrap(), 0);
        assert_eq!(
            scene
                .add_triangle([Vec3::ZERO, Vec3::X, Vec3::Y], CullMode::None, blue)
                .unwrap(),
            0
        );
        assert_eq!(scene.add_point_light(Vec3::Y, 1.0, colors::WHITE), 0);
        assert_eq!(scene.add_directional_light(Vec3::Y, 1.0, colors::WHITE), 1);

        assert_eq!(scene.spheres().len(), 2);
        assert_eq!(scene.primitive_count(), 4);
    }

    #[test]
    fn test_unknown_material_is_rejected() {
        let mut scene = Scene::new("test");
        let err = scene.add_sphere(Vec3::ZERO, 1.0, 7).unwrap_err();
        assert_eq!(err, SceneError::UnknownMaterial { index: 7, count: 1 });
        assert!(scene.spheres().is_empty());
    }

    #[test]
    fn test_invalid_radius_is_rejected() {
        let mut scene = Scene::new("test");
        assert_eq!(
            scene.add_sphere(Vec3::ZERO, 0.0, 0).unwrap_err(),
            SceneError::InvalidRadius(0.0)
        );
        assert!(scene.add_sphere(Vec3::ZERO, -2.0, 0).is_err());
        assert!(scene.add_sphere(Vec3::ZERO, f32::NAN, 0).is_err());
    }

    #[test]
    fn test_mesh_mut_updates_transform() {
        let mut scene = Scene::new("test");
        let mesh = TriangleMesh::new(
            vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            vec![0, 1, 2],
            CullMode::None,
            0,
        )
        .unwrap();
        let id = scene.add_triangle_mesh(mesh).unwrap();

        scene.mesh_mut(id).unwrap().set_translation(Vec3::Z);
        assert_eq!(scene.meshes()[id].transformed_positions()[0], Vec3::Z);
        assert_eq!(scene.primitive_count(), 1);

        assert!(matches!(scene.mesh_mut(3), Err(SceneError::UnknownMesh(3))));
    }
}
