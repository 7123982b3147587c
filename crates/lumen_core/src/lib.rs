//! Lumen Core - scene descriptions and image output.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `PrimitiveDescription`,
//!   `MaterialDescription`, `CameraSettings`, `RenderSettings`
//! - **Scene loading**: JSON parsing with validation, plus built-in presets
//! - **PPM output**: the plain-text `P3` image format
//!
//! # Example
//!
//! ```no_run
//! use lumen_core::{load_scene, presets};
//!
//! let scene = load_scene("scene.json").unwrap_or_else(|_| presets::hollow_glass());
//! println!("{} primitives at {}x{}",
//!     scene.primitive_count(),
//!     scene.render.width,
//!     scene.render.height);
//! ```

pub mod error;
pub mod loader;
pub mod ppm;
pub mod presets;
pub mod scene;

// Re-export commonly used types
pub use error::{SceneError, SceneResult};
pub use loader::{load_scene, load_scene_from_str, scene_to_json};
pub use ppm::{save_ppm, write_ppm};
pub use scene::{
    CameraSettings, MaterialDescription, PrimitiveDescription, RenderSettings, SceneDescription,
};
