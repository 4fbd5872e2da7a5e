//! Direct-lighting renderer.
//!
//! Implements Whitted-style direct illumination with:
//! - One primary ray per pixel through the pixel centre
//! - One shadow ray per light
//! - Selectable lighting modes for inspecting individual terms
//! - Parallel dispatch over pixels with rayon

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use crate::{Camera, HitRecord, SceneQuery, Shade};
use clap::ValueEnum;
use lumen_core::{Light, Scene};
use lumen_math::{Color, Mat4, Ray, Vec3};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Which term of the lighting equation ends up in the image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LightingMode {
    /// White scaled by the cosine between light direction and normal
    #[value(name = "observed_area", alias = "observed-area")]
    ObservedArea,
    /// Incident light radiance
    Radiance,
    /// Material response only
    Brdf,
    /// radiance * brdf * observed area
    #[default]
    Combined,
}

impl LightingMode {
    /// All modes in cycling order.
    pub const ALL: [LightingMode; 4] = [
        LightingMode::ObservedArea,
        LightingMode::Radiance,
        LightingMode::Brdf,
        LightingMode::Combined,
    ];

    /// The mode after this one, wrapping around.
    pub fn next(self) -> Self {
        match self {
            LightingMode::ObservedArea => LightingMode::Radiance,
            LightingMode::Radiance => LightingMode::Brdf,
            LightingMode::Brdf => LightingMode::Combined,
            LightingMode::Combined => LightingMode::ObservedArea,
        }
    }

    fn name(self) -> &'static str {
        match self {
            LightingMode::ObservedArea => "observed_area",
            LightingMode::Radiance => "radiance",
            LightingMode::Brdf => "brdf",
            LightingMode::Combined => "combined",
        }
    }
}

impl fmt::Display for LightingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LightingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == wanted)
            .ok_or_else(|| format!("unknown lighting mode '{s}'"))
    }
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub lighting_mode: LightingMode,
    /// Skip a light's contribution when a shadow ray is blocked
    pub shadows_enabled: bool,
    /// Render pixels on the rayon pool instead of the calling thread
    pub parallel: bool,
    /// Offset along the normal for shadow ray origins
    pub shadow_bias: f32,
    /// Minimum accepted `t` for shadow rays
    pub shadow_min: f32,
    /// Color of pixels whose primary ray misses everything
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            lighting_mode: LightingMode::Combined,
            shadows_enabled: true,
            parallel: true,
            shadow_bias: 1e-4,
            shadow_min: 1e-5,
            background: Color::ZERO,
        }
    }
}

impl RenderConfig {
    pub fn with_lighting_mode(mut self, mode: LightingMode) -> Self {
        self.lighting_mode = mode;
        self
    }

    pub fn with_shadows(mut self, enabled: bool) -> Self {
        self.shadows_enabled = enabled;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Switch to the next lighting mode and return it.
    pub fn cycle_lighting_mode(&mut self) -> LightingMode {
        self.lighting_mode = self.lighting_mode.next();
        log::debug!("Lighting mode: {}", self.lighting_mode);
        self.lighting_mode
    }
}

/// Per-frame camera data shared by every pixel.
#[derive(Debug, Clone, Copy)]
pub struct ViewFrame {
    pub camera_to_world: Mat4,
    pub origin: Vec3,
    /// tan(fov / 2)
    pub fov_scale: f32,
    /// width / height
    pub aspect: f32,
    pub width: u32,
    pub height: u32,
}

impl ViewFrame {
    pub fn new(camera: &Camera, width: u32, height: u32) -> Self {
        Self {
            camera_to_world: camera.camera_to_world(),
            origin: camera.origin,
            fov_scale: (camera.fov_angle.to_radians() * 0.5).tan(),
            aspect: width as f32 / height.max(1) as f32,
            width,
            height,
        }
    }

    /// Primary ray through the centre of pixel `index` (row-major).
    pub fn primary_ray(&self, index: usize) -> Ray {
        let width = self.width.max(1) as usize;
        let px = (index % width) as f32;
        let py = (index / width) as f32;

        let ndc_x = (px + 0.5) / self.width as f32;
        let ndc_y = (py + 0.5) / self.height as f32;

        let cx = (2.0 * ndc_x - 1.0) * self.fov_scale * self.aspect;
        let cy = (1.0 - 2.0 * ndc_y) * self.fov_scale;

        let direction = self
            .camera_to_world
            .transform_vector3(Vec3::new(cx, cy, 1.0).normalize());
        Ray::new(self.origin, direction)
    }
}

/// Compute the final color of one pixel.
pub fn render_pixel(scene: &Scene, frame: &ViewFrame, index: usize, config: &RenderConfig) -> Color {
    let ray = frame.primary_ray(index);
    let rec = scene.closest_hit(&ray);
    if !rec.did_hit {
        return config.background;
    }

    let material = scene.material(rec.material_index);
    let view_dir = -ray.direction;
    let mut color = Color::ZERO;

    for light in scene.lights() {
        let to_light = light.direction_to(rec.point);
        let distance = to_light.length();
        let Some(light_dir) = to_light.try_normalize() else {
            continue;
        };

        if config.shadows_enabled && in_shadow(scene, light, &rec, light_dir, distance, config) {
            continue;
        }

        let observed_area = light_dir.dot(rec.normal).max(0.0);
        let radiance = light.radiance(rec.point);
        let brdf = material.shade(&rec, light_dir, view_dir);

        color += match config.lighting_mode {
            LightingMode::ObservedArea => Color::ONE * observed_area,
            LightingMode::Radiance => radiance,
            LightingMode::Brdf => brdf,
            LightingMode::Combined => radiance * brdf * observed_area,
        };
    }

    color.min(Color::ONE)
}

fn in_shadow(
    scene: &Scene,
    light: &Light,
    rec: &HitRecord,
    light_dir: Vec3,
    distance: f32,
    config: &RenderConfig,
) -> bool {
    let max = if light.is_positional() { distance } else { f32::MAX };
    let shadow_ray = Ray::with_bounds(
        rec.point + rec.normal * config.shadow_bias,
        light_dir,
        config.shadow_min,
        max,
    );
    scene.does_hit(&shadow_ray)
}

/// Render the whole frame into `image`.
///
/// Each pixel is computed independently and written only to its own slot.
pub fn render(scene: &Scene, camera: &Camera, config: &RenderConfig, image: &mut ImageBuffer) {
    if scene.lights().is_empty() {
        log::warn!("Scene '{}' has no lights; every hit will be black", scene.name);
    }

    let start = Instant::now();
    let frame = ViewFrame::new(camera, image.width, image.height);
    let shade = |(index, pixel): (usize, &mut Color)| {
        *pixel = render_pixel(scene, &frame, index, config);
    };

    if config.parallel {
        image.pixels.par_iter_mut().enumerate().for_each(shade);
    } else {
        image.pixels.iter_mut().enumerate().for_each(shade);
    }

    log::info!(
        "Rendered {}x{} ({} mode) in {:.2?}",
        image.width,
        image.height,
        config.lighting_mode,
        start.elapsed()
    );
}

/// Convert a color to 8-bit RGBA. Channels are truncated, no gamma.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let c = (color.clamp(Color::ZERO, Color::ONE) * 255.0).to_array();
    [c[0] as u8, c[1] as u8, c[2] as u8, 255]
}

/// Row-major frame of linear colors.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; pixel_count(width, height)],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[pixel_index(self.width, x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[pixel_index(self.width, x, y)] = color;
    }

    /// RGBA bytes, four per pixel.
    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|&c| color_to_rgba(c)).collect()
    }

    /// One `0x00RRGGBB` word per pixel.
    pub fn to_packed(&self) -> Vec<u32> {
        self.pixels
            .iter()
            .map(|&c| {
                let [r, g, b, _] = color_to_rgba(c);
                (r as u32) << 16 | (g as u32) << 8 | b as u32
            })
            .collect()
    }
}

/// Number of pixels in a `width` x `height` frame; widened before multiplying.
fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

fn pixel_index(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}
