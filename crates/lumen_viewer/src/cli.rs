//! Command-line arguments.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use lumen_renderer::{LightingMode, RenderConfig};

use crate::scenes::SceneKind;

/// Seconds between animated frames.
pub const FRAME_STEP: f32 = 1.0 / 30.0;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "lumen_viewer")]
#[command(about = "Render a Lumen demo scene to PNG")]
pub struct Args {
    /// Demo scene to render
    #[arg(long, value_enum, default_value = "reference")]
    pub scene: SceneKind,

    /// Image width in pixels
    #[arg(long, default_value = "640", value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "480", value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// PNG file to write
    #[arg(short, long, default_value = "render.png")]
    pub output: PathBuf,

    /// Lighting term to display (overrides the config file)
    #[arg(long, value_enum)]
    pub mode: Option<LightingMode>,

    /// Ignore occlusion between surfaces and lights
    #[arg(long)]
    pub no_shadows: bool,

    /// OBJ mesh for the bunny scene (added to other scenes)
    #[arg(long)]
    pub obj: Option<PathBuf>,

    /// Render N frames, animating meshes in between
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub frames: u32,

    /// JSON render configuration; flags override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// The JSON config (if any) with command-line overrides applied.
    pub fn render_config(&self) -> Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("Invalid render config {}", path.display()))?
            }
            None => RenderConfig::default(),
        };

        if let Some(mode) = self.mode {
            config.lighting_mode = mode;
        }
        if self.no_shadows {
            config.shadows_enabled = false;
        }
        Ok(config)
    }
}

/// Output path for `frame`; numbered only when rendering more than one frame.
pub fn frame_path(output: &Path, frame: u32, frames: u32) -> PathBuf {
    if frames <= 1 {
        return output.to_path_buf();
    }

    let stem = output
        .file_stem()
        .map_or_else(|| "frame".into(), |s| s.to_string_lossy());
    let ext = output
        .extension()
        .map_or_else(|| "png".into(), |s| s.to_string_lossy());
    output.with_file_name(format!("{stem}_{frame:04}.{ext}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("lumen_viewer").chain(args.iter().copied()))
    }

    #[test]
    fn test_command_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]).unwrap();

        assert_eq!(args.scene, SceneKind::Reference);
        assert_eq!((args.width, args.height), (640, 480));
        assert_eq!(args.output, PathBuf::from("render.png"));
        assert_eq!(args.mode, None);
        assert!(!args.no_shadows);
        assert_eq!(args.obj, None);
        assert_eq!(args.frames, 1);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_parse_all_flags() {
        let args = parse(&[
            "--scene", "bunny", "--width", "320", "--height", "200", "--output", "out.png",
            "--mode", "radiance", "--no-shadows", "--obj", "bunny.obj", "--frames", "4",
        ])
        .unwrap();

        assert_eq!(args.scene, SceneKind::Bunny);
        assert_eq!((args.width, args.height), (320, 200));
        assert_eq!(args.output, PathBuf::from("out.png"));
        assert_eq!(args.mode, Some(LightingMode::Radiance));
        assert!(args.no_shadows);
        assert_eq!(args.obj, Some(PathBuf::from("bunny.obj")));
        assert_eq!(args.frames, 4);
    }

    #[test]
    fn test_lighting_mode_spellings() {
        let args = parse(&["--mode", "observed_area"]).unwrap();
        assert_eq!(args.mode, Some(LightingMode::ObservedArea));

        let args = parse(&["--mode", "observed-area"]).unwrap();
        assert_eq!(args.mode, Some(LightingMode::ObservedArea));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse(&["--width"]).is_err());
        assert!(parse(&["--width", "0"]).is_err());
        assert!(parse(&["--height", "tall"]).is_err());
        assert!(parse(&["--frames", "0"]).is_err());
        assert!(parse(&["--mode", "phong"]).is_err());
        assert!(parse(&["--scene", "nowhere"]).is_err());
        assert!(parse(&["--fast"]).is_err());
    }

    #[test]
    fn test_flags_override_config_file() {
        let path = std::env::temp_dir().join(format!("lumen_config_{}.json", std::process::id()));
        fs::write(&path, r#"{ "lighting_mode": "brdf", "parallel": false }"#).unwrap();

        let args = parse(&["--config", path.to_str().unwrap(), "--no-shadows"]).unwrap();
        let config = args.render_config();
        fs::remove_file(&path).ok();

        let config = config.unwrap();
        assert_eq!(config.lighting_mode, LightingMode::Brdf);
        assert!(!config.parallel);
        assert!(!config.shadows_enabled);
    }

    #[test]
    fn test_missing_config_file() {
        let args = parse(&["--config", "/definitely/not/here.json"]).unwrap();
        assert!(args.render_config().is_err());
    }

    #[test]
    fn test_frame_path() {
        let out = Path::new("renders/shot.png");
        assert_eq!(frame_path(out, 0, 1), PathBuf::from("renders/shot.png"));
        assert_eq!(frame_path(out, 7, 10), PathBuf::from("renders/shot_0007.png"));
    }
}
