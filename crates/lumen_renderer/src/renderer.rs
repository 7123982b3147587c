//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing with configurable depth
//! - Sky gradient background
//! - Anti-aliasing via multi-sampling
//! - Gamma correction

use std::time::Instant;

use crate::sampling::gen_f64;
use crate::{Camera, Hittable};
use log::{debug, info};
use lumen_core::RenderSettings;
use lumen_math::{unit_vector, Color, Interval, Ray};
use rand::RngCore;

/// Hits closer than this are ignored so a scattered ray does not re-hit its own surface.
pub const T_MIN: f64 = 0.001;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum number of scatter events per camera ray
    pub max_depth: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 200,
            height: 100,
            samples_per_pixel: 100,
            max_depth: 50,
        }
    }
}

impl From<&RenderSettings> for RenderConfig {
    fn from(settings: &RenderSettings) -> Self {
        Self {
            width: settings.width,
            height: settings.height,
            samples_per_pixel: settings.samples_per_pixel,
            max_depth: settings.max_depth,
        }
    }
}

/// Compute the color seen by a ray.
///
/// A ray that still hits something after `depth` scatter events contributes black.
/// A ray that escapes always sees the sky, whatever the remaining depth.
pub fn ray_color(ray: &Ray, world: &dyn Hittable, depth: u32, rng: &mut dyn RngCore) -> Color {
    let Some(rec) = world.hit(ray, Interval::new(T_MIN, f64::MAX)) else {
        return sky_gradient(ray);
    };

    if depth == 0 {
        return Color::ZERO;
    }

    match rec.material.scatter(ray, &rec, rng) {
        Some(result) => result.attenuation * ray_color(&result.scattered, world, depth - 1, rng),
        // Ray was absorbed
        None => Color::ZERO,
    }
}

/// White at the bottom of the sky blending to light blue at the top.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = unit_vector(ray.direction());
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white * (1.0 - a) + blue * a
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f64) -> f64 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

pub fn gamma_correct(color: Color) -> Color {
    Color::new(
        linear_to_gamma(color.x),
        linear_to_gamma(color.y),
        linear_to_gamma(color.z),
    )
}

/// Convert a gamma-corrected color to 8-bit RGB.
///
/// Channels are clamped to [0, 1] and scaled by 255.99 so 1.0 maps to 255.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let to_byte = |c: f64| (255.99 * Interval::UNIT.clamp(c)) as u8;
    [to_byte(color.x), to_byte(color.y), to_byte(color.z)]
}

/// Render a single pixel with multi-sampling.
///
/// Row 0 is the top of the image. Returns the average linear color.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;
    let row = (config.height - 1 - y) as f64;

    for _ in 0..config.samples_per_pixel {
        let s = (x as f64 + gen_f64(rng)) / config.width as f64;
        let t = (row + gen_f64(rng)) / config.height as f64;
        let ray = camera.get_ray(s, t, rng);
        pixel_color += ray_color(&ray, world, config.max_depth, rng);
    }

    // Average the samples
    pixel_color / config.samples_per_pixel as f64
}

/// Simple image buffer for storing render output.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    /// Row-major from the top-left, gamma-corrected
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Convert to 8-bit RGB triples in pixel order (for saving).
    pub fn to_rgb8(&self) -> Vec<[u8; 3]> {
        self.pixels.iter().map(|&color| color_to_rgb8(color)).collect()
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Render the entire scene to an image buffer.
///
/// Pixels are visited row by row from the top, so a seeded `rng` reproduces the
/// same image exactly.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> ImageBuffer {
    info!(
        "Rendering {}x{} at {} spp, max depth {}",
        config.width, config.height, config.samples_per_pixel, config.max_depth
    );
    let start = Instant::now();
    let mut image = ImageBuffer::new(config.width, config.height);

    for y in 0..config.height {
        debug!("Scanline {}/{}", y + 1, config.height);
        for x in 0..config.width {
            let color = render_pixel(camera, world, x, y, config, rng);
            image.set(x, y, gamma_correct(color));
        }
    }

    info!("Rendered in {:.2?}", start.elapsed());
    image
}
