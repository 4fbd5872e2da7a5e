//! Built-in demo scenes.

use std::f32::consts::{FRAC_PI_2, TAU};
use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use lumen_core::{load_obj, CullMode, Material, Scene, Triangle, TriangleMesh};
use lumen_math::{colors, Color, Vec3};
use lumen_renderer::Camera;

/// Which demo scene to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneKind {
    /// Two solid-color spheres in a solid-color box
    Spheres,
    /// Six solid-color spheres lit by one point light
    Lit,
    /// Cook-Torrance metals and plastics
    Materials,
    /// Lambert-Phong spheres with increasing exponents
    Phong,
    /// A rotating two-triangle mesh
    Mesh,
    /// Materials plus three triangles, one per cull mode
    Reference,
    /// An OBJ mesh in the lit box
    Bunny,
}

impl SceneKind {
    fn name(self) -> &'static str {
        match self {
            SceneKind::Spheres => "spheres",
            SceneKind::Lit => "lit",
            SceneKind::Materials => "materials",
            SceneKind::Phong => "phong",
            SceneKind::Mesh => "mesh",
            SceneKind::Reference => "reference",
            SceneKind::Bunny => "bunny",
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scene together with its camera and per-frame animation.
pub struct DemoScene {
    pub kind: SceneKind,
    pub scene: Scene,
    pub camera: Camera,
}

impl DemoScene {
    /// Update mesh transforms for the frame at `time` seconds.
    pub fn animate(&mut self, time: f32) -> Result<()> {
        match self.kind {
            SceneKind::Mesh => {
                self.scene.mesh_mut(0)?.set_rotation_y(FRAC_PI_2 * time);
            }
            SceneKind::Reference => {
                let yaw = (time.cos() + 1.0) / 2.0 * TAU;
                for mesh in self.scene.meshes_mut() {
                    mesh.set_rotation_y(yaw);
                }
            }
            _ => {}
        }
        Ok(())
    }
}

/// Build a demo scene. `obj` is required by [`SceneKind::Bunny`] and added
/// as an extra white mesh to every other scene.
pub fn build(kind: SceneKind, obj: Option<&Path>) -> Result<DemoScene> {
    let mut scene = Scene::new(kind.name());
    let box_camera = Camera::new(Vec3::new(0.0, 3.0, -9.0), 45.0);

    let camera = match kind {
        SceneKind::Spheres => {
            spheres(&mut scene)?;
            Camera::default()
        }
        SceneKind::Lit => {
            lit_spheres(&mut scene)?;
            box_camera
        }
        SceneKind::Materials => {
            let gray_blue = scene.add_material(gray_blue());
            add_box(&mut scene, gray_blue)?;
            material_spheres(&mut scene)?;
            add_three_lights(&mut scene);
            box_camera
        }
        SceneKind::Phong => {
            let gray_blue = scene.add_material(gray_blue());
            add_box(&mut scene, gray_blue)?;
            phong_spheres(&mut scene)?;
            add_three_lights(&mut scene);
            box_camera
        }
        SceneKind::Mesh => {
            mesh_scene(&mut scene)?;
            box_camera
        }
        SceneKind::Reference => {
            reference_scene(&mut scene)?;
            box_camera
        }
        SceneKind::Bunny => {
            let path = obj.context("the bunny scene needs --obj <path>")?;
            bunny_scene(&mut scene, path)?;
            box_camera
        }
    };

    if let Some(path) = obj.filter(|_| kind != SceneKind::Bunny) {
        let white = scene.add_material(Material::lambert(colors::WHITE, 1.0));
        let mesh = load_obj(path, CullMode::BackFace, white)
            .with_context(|| format!("Failed to load {}", path.display()))?;
        scene.add_triangle_mesh(mesh)?;
    }

    log::info!(
        "Built scene '{}': {} primitives, {} lights, {} materials",
        scene.name,
        scene.primitive_count(),
        scene.lights().len(),
        scene.materials().len()
    );

    Ok(DemoScene {
        kind,
        scene,
        camera,
    })
}

fn gray_blue() -> Material {
    Material::lambert(Color::new(0.49, 0.57, 0.57), 1.0)
}

/// Five inward-facing walls: left, right, bottom, top, back.
fn add_box(scene: &mut Scene, material: usize) -> Result<()> {
    scene.add_plane(Vec3::new(-5.0, 0.0, 0.0), Vec3::X, material)?;
    scene.add_plane(Vec3::new(5.0, 0.0, 0.0), -Vec3::X, material)?;
    scene.add_plane(Vec3::ZERO, Vec3::Y, material)?;
    scene.add_plane(Vec3::new(0.0, 10.0, 0.0), -Vec3::Y, material)?;
    scene.add_plane(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z, material)?;
    Ok(())
}

fn add_three_lights(scene: &mut Scene) {
    // back, front left, front right
    scene.add_point_light(Vec3::new(0.0, 5.0, 5.0), 50.0, Color::new(1.0, 0.61, 0.45));
    scene.add_point_light(Vec3::new(-2.5, 5.0, -5.0), 70.0, Color::new(1.0, 0.8, 0.45));
    scene.add_point_light(Vec3::new(2.5, 2.5, -5.0), 50.0, Color::new(0.34, 0.47, 0.68));
}

/// Two rows of three spheres, indexed left to right, bottom row first.
fn add_sphere_grid(scene: &mut Scene, materials: [usize; 6]) -> Result<()> {
    let centers = [
        Vec3::new(-1.75, 1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(1.75, 1.0, 0.0),
        Vec3::new(-1.75, 3.0, 0.0),
        Vec3::new(0.0, 3.0, 0.0),
        Vec3::new(1.75, 3.0, 0.0),
    ];
    for (center, material) in centers.into_iter().zip(materials) {
        scene.add_sphere(center, 0.75, material)?;
    }
    Ok(())
}

fn spheres(scene: &mut Scene) -> Result<()> {
    let red = Scene::DEFAULT_MATERIAL;
    let blue = scene.add_material(Material::solid_color(colors::BLUE));
    let yellow = scene.add_material(Material::solid_color(colors::YELLOW));
    let green = scene.add_material(Material::solid_color(colors::GREEN));
    let magenta = scene.add_material(Material::solid_color(colors::MAGENTA));

    scene.add_sphere(Vec3::new(-25.0, 0.0, 100.0), 50.0, red)?;
    scene.add_sphere(Vec3::new(25.0, 0.0, 100.0), 50.0, blue)?;

    scene.add_plane(Vec3::new(-75.0, 0.0, 0.0), Vec3::X, green)?;
    scene.add_plane(Vec3::new(75.0, 0.0, 0.0), -Vec3::X, green)?;
    scene.add_plane(Vec3::new(0.0, -75.0, 0.0), Vec3::Y, yellow)?;
    scene.add_plane(Vec3::new(0.0, 75.0, 0.0), -Vec3::Y, yellow)?;
    scene.add_plane(Vec3::new(0.0, 0.0, 125.0), -Vec3::Z, magenta)?;

    // From behind the camera
    scene.add_directional_light(-Vec3::Z, 1.0, colors::WHITE);
    Ok(())
}

fn lit_spheres(scene: &mut Scene) -> Result<()> {
    let red = Scene::DEFAULT_MATERIAL;
    let blue = scene.add_material(Material::solid_color(colors::BLUE));
    let yellow = scene.add_material(Material::solid_color(colors::YELLOW));
    let green = scene.add_material(Material::solid_color(colors::GREEN));
    let magenta = scene.add_material(Material::solid_color(colors::MAGENTA));

    add_sphere_grid(scene, [red, blue, red, blue, red, blue])?;

    scene.add_plane(Vec3::new(-5.0, 0.0, 0.0), Vec3::X, green)?;
    scene.add_plane(Vec3::new(5.0, 0.0, 0.0), -Vec3::X, green)?;
    scene.add_plane(Vec3::ZERO, Vec3::Y, yellow)?;
    scene.add_plane(Vec3::new(0.0, 10.0, 0.0), -Vec3::Y, yellow)?;
    scene.add_plane(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z, magenta)?;

    scene.add_point_light(Vec3::new(0.0, 5.0, -5.0), 70.0, colors::WHITE);
    Ok(())
}

/// Metals on the bottom row, plastics on top; roughness decreases to the right.
fn material_spheres(scene: &mut Scene) -> Result<()> {
    let silver = Color::new(0.972, 0.960, 0.915);
    let gray = Color::new(0.75, 0.75, 0.75);

    let mut materials = [0; 6];
    for (i, roughness) in [1.0, 0.6, 0.1].into_iter().enumerate() {
        materials[i] = scene.add_material(Material::cook_torrance(silver, 1.0, roughness));
        materials[i + 3] = scene.add_material(Material::cook_torrance(gray, 0.0, roughness));
    }

    add_sphere_grid(scene, materials)
}

fn phong_spheres(scene: &mut Scene) -> Result<()> {
    let mut materials = [0; 6];
    for (i, exponent) in [3.0, 15.0, 50.0].into_iter().enumerate() {
        materials[i] = scene.add_material(Material::lambert_phong(colors::BLUE, 0.5, 0.5, exponent));
        materials[i + 3] = scene.add_material(Material::lambert_phong(colors::RED, 0.7, 0.3, exponent));
    }

    add_sphere_grid(scene, materials)
}

fn mesh_scene(scene: &mut Scene) -> Result<()> {
    let gray_blue = scene.add_material(gray_blue());
    let white = scene.add_material(Material::lambert(colors::WHITE, 1.0));
    add_box(scene, gray_blue)?;

    let positions = vec![
        Vec3::new(-0.75, -1.0, 0.0),
        Vec3::new(-0.75, 1.0, 0.0),
        Vec3::new(0.75, 1.0, 1.0),
        Vec3::new(0.75, -1.0, 0.0),
    ];
    let mut mesh = TriangleMesh::new(positions, vec![0, 1, 2, 0, 2, 3], CullMode::None, white)?;
    mesh.set_translation(Vec3::new(0.0, 1.5, 0.0));
    mesh.set_rotation_y(45f32.to_radians());
    scene.add_triangle_mesh(mesh)?;

    add_three_lights(scene);
    Ok(())
}

fn reference_scene(scene: &mut Scene) -> Result<()> {
    let white = scene.add_material(Material::lambert(colors::WHITE, 1.0));
    let gray_blue = scene.add_material(gray_blue());
    add_box(scene, gray_blue)?;
    material_spheres(scene)?;

    // Clockwise when seen from the camera
    let base = Triangle::new(
        Vec3::new(-0.75, 1.5, 0.0),
        Vec3::new(0.75, 0.0, 0.0),
        Vec3::new(-0.75, 0.0, 0.0),
        CullMode::None,
        white,
    );
    let placements = [
        (CullMode::BackFace, -1.75),
        (CullMode::FrontFace, 0.0),
        (CullMode::None, 1.75),
    ];
    for (cull_mode, x) in placements {
        let mut mesh = TriangleMesh::empty(cull_mode, white);
        mesh.append_triangle(&base)?;
        mesh.set_translation(Vec3::new(x, 4.5, 0.0));
        scene.add_triangle_mesh(mesh)?;
    }

    add_three_lights(scene);
    Ok(())
}

fn bunny_scene(scene: &mut Scene, path: &Path) -> Result<()> {
    let gray_blue = scene.add_material(gray_blue());
    let white = scene.add_material(Material::lambert(colors::WHITE, 1.0));
    add_box(scene, gray_blue)?;

    let mut mesh = load_obj(path, CullMode::BackFace, white)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    mesh.set_scale(Vec3::splat(2.0));
    scene.add_triangle_mesh(mesh)?;

    add_three_lights(scene);
    Ok(())
}
