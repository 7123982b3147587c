//! Lumen Renderer - CPU Path Tracing
//!
//! A small Monte Carlo path tracer over spheres with matte, metal and glass
//! surfaces. Randomness is always drawn from a caller-supplied generator, so a
//! seeded generator reproduces an image exactly.

mod camera;
mod hittable;
mod material;
mod renderer;
pub mod sampling;
mod sphere;
mod world;

pub use camera::Camera;
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{schlick, Material, ScatterResult};
pub use renderer::{
    color_to_rgb8, gamma_correct, linear_to_gamma, ray_color, render, render_pixel, sky_gradient,
    ImageBuffer, RenderConfig, T_MIN,
};
pub use sphere::Sphere;
pub use world::{build_camera, build_world, render_scene, scene_rng};

/// Re-export common math types from lumen_math
pub use lumen_math::{Color, Interval, Point3, Ray, Vec3};
