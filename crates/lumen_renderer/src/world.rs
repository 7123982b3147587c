//! Turning a [`SceneDescription`] into renderable objects.

use crate::{render, Camera, HittableList, ImageBuffer, Material, RenderConfig, Sphere};
use log::debug;
use lumen_core::{PrimitiveDescription, RenderSettings, SceneDescription};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Build the intersectable world, keeping primitive order.
pub fn build_world(scene: &SceneDescription) -> HittableList {
    let mut world = HittableList::new();

    for primitive in &scene.primitives {
        match *primitive {
            PrimitiveDescription::Sphere {
                center,
                radius,
                ref material,
            } => {
                world.add(Box::new(Sphere::new(center, radius, Material::from(material))));
            }
        }
    }

    debug!("Built world with {} objects", world.len());
    world
}

/// Build the camera for the scene's resolution.
pub fn build_camera(scene: &SceneDescription) -> Camera {
    Camera::new(&scene.camera, scene.aspect_ratio())
}

/// Random source for a render: seeded when the settings fix a seed, otherwise from entropy.
pub fn scene_rng(settings: &RenderSettings) -> ChaCha20Rng {
    match settings.seed {
        Some(seed) => {
            debug!("Seeding renderer with {}", seed);
            ChaCha20Rng::seed_from_u64(seed)
        }
        None => ChaCha20Rng::from_entropy(),
    }
}

/// Render a validated scene with its own render settings.
pub fn render_scene(scene: &SceneDescription, rng: &mut dyn RngCore) -> ImageBuffer {
    let world = build_world(scene);
    let camera = build_camera(scene);
    let config = RenderConfig::from(&scene.render);
    render(&camera, &world, &config, rng)
}
