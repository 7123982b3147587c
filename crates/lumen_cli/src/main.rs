use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use lumen_core::{load_scene, presets, save_ppm, write_ppm, SceneDescription};
use lumen_renderer::{render_scene, scene_rng};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let mut scene = select_scene(&args)?;
    apply_overrides(&mut scene, &args);
    scene
        .validate()
        .with_context(|| format!("scene '{}' cannot be rendered", scene.name))?;

    info!(
        "Scene '{}': {} primitives, {}x{}",
        scene.name,
        scene.primitive_count(),
        scene.render.width,
        scene.render.height
    );

    let mut rng = scene_rng(&scene.render);
    let image = render_scene(&scene, &mut rng);
    let pixels = image.to_rgb8();

    match &args.output {
        Some(path) => save_ppm(path, image.width, image.height, pixels)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            info!("Writing image to standard output");
            let mut writer = BufWriter::new(io::stdout().lock());
            write_ppm(&mut writer, image.width, image.height, pixels)
                .context("failed to write image to standard output")?;
        }
    }

    Ok(())
}

fn select_scene(args: &Args) -> Result<SceneDescription> {
    match &args.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("failed to load scene {}", path.display())),
        None => presets::by_name(&args.preset)
            .with_context(|| format!("available presets: {}", presets::NAMES.join(", "))),
    }
}

/// Apply command line overrides on top of the scene's render settings.
fn apply_overrides(scene: &mut SceneDescription, args: &Args) {
    let render = &mut scene.render;
    if let Some(width) = args.width {
        render.width = width;
    }
    if let Some(height) = args.height {
        render.height = height;
    }
    if let Some(samples) = args.samples {
        render.samples_per_pixel = samples;
    }
    if let Some(max_depth) = args.max_depth {
        render.max_depth = max_depth;
    }
    if let Some(seed) = args.seed {
        render.seed = Some(seed);
    }

    let resized = args.width.is_some() || args.height.is_some();
    if !resized || render.height == 0 {
        return;
    }
    if let Some(aspect) = scene.camera.aspect_ratio {
        let image_aspect = render.width as f64 / render.height as f64;
        if (aspect - image_aspect).abs() > 1e-6 {
            warn!(
                "Scene fixes aspect ratio {:.3} but the image is {}x{}; pixels will not be square",
                aspect, render.width, render.height
            );
        }
    }
}
