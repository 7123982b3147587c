//! Errors raised while loading, validating or writing scenes.

use thiserror::Error;

/// Errors that can occur before rendering starts or after it finishes.
///
/// The renderer itself never fails; everything here is a boundary problem.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Primitive {index}: sphere radius must be non-zero and finite, got {radius}")]
    InvalidRadius { index: usize, radius: f64 },

    #[error("Primitive {index}: refractive index must be positive, got {value}")]
    InvalidRefractiveIndex { index: usize, value: f64 },

    #[error("Primitive {index}: albedo components must lie in [0, 1]")]
    InvalidAlbedo { index: usize },

    #[error("Vertical field of view must be in (0, 180) degrees, got {0}")]
    InvalidFov(f64),

    #[error("Aspect ratio must be positive, got {0}")]
    InvalidAspectRatio(f64),

    #[error("Image resolution must be non-zero, got {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Samples per pixel must be at least 1")]
    NoSamples,

    #[error("Degenerate camera: {0}")]
    DegenerateCamera(&'static str),

    #[error("Unknown preset scene: {0}")]
    UnknownPreset(String),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;
