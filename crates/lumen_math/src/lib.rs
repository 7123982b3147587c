// Re-export glam for convenience
pub use glam::*;

/// Three-component `f64` vector used for points, directions and colors alike.
pub type Vec3 = glam::DVec3;

/// A position in world space.
pub type Point3 = Vec3;

/// Linear RGB color, channels nominally in [0, 1].
pub type Color = Vec3;

// Lumen math types
mod interval;
mod ray;
pub mod vector;

pub use interval::Interval;
pub use ray::Ray;
pub use vector::{near_zero, reflect, refract, try_unit_vector, unit_vector};
