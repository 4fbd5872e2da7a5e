//! Lumen Renderer - CPU direct-lighting ray tracer.
//!
//! One primary ray per pixel, one shadow ray per (pixel, light) pair, and a
//! microfacet BRDF at the nearest hit. Pixels are rendered in parallel with
//! rayon.

pub mod brdf;
mod camera;
mod hit;
mod intersect;
mod query;
mod renderer;
mod shading;

pub use camera::Camera;
pub use hit::HitRecord;
pub use intersect::{hit_mesh, Intersect, MeshHit};
pub use query::SceneQuery;
pub use renderer::{
    color_to_rgba, render, render_pixel, ImageBuffer, LightingMode, RenderConfig, ViewFrame,
};
pub use shading::Shade;

/// Re-export Vec3 and common math types from lumen_math
pub use lumen_math::{Color, Ray, Vec3};
