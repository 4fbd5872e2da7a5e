//! Lumen viewer: renders a demo scene to PNG.

mod cli;
mod scenes;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use lumen_renderer::{render, ImageBuffer};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = cli::Args::parse();

    log::info!("Starting Lumen Viewer");

    let config = args.render_config()?;
    let mut demo = scenes::build(args.scene, args.obj.as_deref())?;
    let mut image = ImageBuffer::new(args.width, args.height);

    for frame in 0..args.frames {
        demo.animate(frame as f32 * cli::FRAME_STEP)?;
        render(&demo.scene, &demo.camera, &config, &mut image);
        save_png(&image, &cli::frame_path(&args.output, frame, args.frames))?;
    }

    Ok(())
}

fn save_png(image: &ImageBuffer, path: &Path) -> Result<()> {
    let rgba = image::RgbaImage::from_raw(image.width, image.height, image.to_rgba())
        .context("Pixel buffer does not match the image size")?;
    rgba.save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log::info!("Saved {}", path.display());
    Ok(())
}
