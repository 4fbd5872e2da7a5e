//! Lumen Core - scene description for the Lumen ray tracer.
//!
//! This crate provides:
//!
//! - **Primitives**: `Sphere`, `Plane`, `Triangle`, `TriangleMesh`
//! - **Lighting and shading data**: `Light`, `Material`
//! - **Scene**: the arena that owns everything and hands out indices
//! - **OBJ loading**: triangle meshes from Wavefront OBJ files
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::{Material, Scene};
//! use lumen_math::{colors, Vec3};
//!
//! let mut scene = Scene::new("spheres");
//! let blue = scene.add_material(Material::solid_color(colors::BLUE));
//! scene.add_sphere(Vec3::new(0.0, 0.0, 100.0), 50.0, blue)?;
//! scene.add_point_light(Vec3::new(0.0, 5.0, -5.0), 70.0, colors::WHITE);
//! ```

pub mod error;
pub mod light;
pub mod material;
pub mod mesh;
pub mod obj;
pub mod primitives;
pub mod scene;

// Re-export commonly used types
pub use error::{LoadError, LoadResult, MeshError, SceneError, SceneResult};
pub use light::Light;
pub use material::Material;
pub use mesh::{Transform, TriangleMesh};
pub use obj::load_obj;
pub use primitives::{CullMode, Plane, Sphere, Triangle};
pub use scene::Scene;
