//! Scene description types for Lumen.
//!
//! These are plain data: what the scene contains and how to look at it.
//! The renderer turns them into intersectable geometry and a camera.

use lumen_math::{try_unit_vector, Color, Interval, Point3, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};

/// Surface description attached to a primitive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MaterialDescription {
    /// Matte surface reflecting `albedo` of the incoming light.
    Lambertian { albedo: Color },

    /// Mirror-like surface. `fuzz` is clamped to [0, 1] by the renderer.
    Metal {
        albedo: Color,
        #[serde(default)]
        fuzz: f64,
    },

    /// Clear refractive surface such as glass (1.5) or water (1.33).
    Dielectric { refractive_index: f64 },
}

impl MaterialDescription {
    fn validate(&self, index: usize) -> SceneResult<()> {
        match *self {
            MaterialDescription::Lambertian { albedo }
            | MaterialDescription::Metal { albedo, .. } => {
                let unit = Interval::UNIT;
                if unit.contains(albedo.x) && unit.contains(albedo.y) && unit.contains(albedo.z) {
                    Ok(())
                } else {
                    Err(SceneError::InvalidAlbedo { index })
                }
            }
            MaterialDescription::Dielectric { refractive_index } => {
                if refractive_index > 0.0 && refractive_index.is_finite() {
                    Ok(())
                } else {
                    Err(SceneError::InvalidRefractiveIndex {
                        index,
                        value: refractive_index,
                    })
                }
            }
        }
    }
}

/// A shape in the scene together with its material.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PrimitiveDescription {
    /// Sphere of signed radius. A negative radius turns the surface normal inward,
    /// which nested inside a positive dielectric sphere makes a hollow shell.
    Sphere {
        center: Point3,
        radius: f64,
        material: MaterialDescription,
    },
}

impl PrimitiveDescription {
    /// Material of this primitive.
    pub fn material(&self) -> &MaterialDescription {
        match self {
            PrimitiveDescription::Sphere { material, .. } => material,
        }
    }

    fn validate(&self, index: usize) -> SceneResult<()> {
        match *self {
            PrimitiveDescription::Sphere { radius, material, .. } => {
                if radius == 0.0 || !radius.is_finite() {
                    return Err(SceneError::InvalidRadius { index, radius });
                }
                material.validate(index)
            }
        }
    }
}

/// Camera placement and lens.
///
/// Depth of field is enabled when `aperture` is positive. The focus distance then
/// defaults to the distance between `look_from` and `look_at`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Camera position
    pub look_from: Point3,
    /// Point the camera faces
    pub look_at: Point3,
    /// World "up" used to orient the film plane
    pub vup: Vec3,
    /// Vertical field of view in degrees
    pub vfov: f64,
    /// Width over height. Falls back to the image resolution when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aperture: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_distance: Option<f64>,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            look_from: Point3::ZERO,
            look_at: Point3::new(0.0, 0.0, -1.0),
            vup: Vec3::Y,
            vfov: 90.0,
            aspect_ratio: None,
            aperture: None,
            focus_distance: None,
        }
    }
}

impl CameraSettings {
    /// Set camera position.
    pub fn with_position(mut self, look_from: Point3, look_at: Point3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set vertical field of view in degrees.
    pub fn with_fov(mut self, vfov: f64) -> Self {
        self.vfov = vfov;
        self
    }

    /// Fix the aspect ratio instead of deriving it from the resolution.
    pub fn with_aspect_ratio(mut self, aspect_ratio: f64) -> Self {
        self.aspect_ratio = Some(aspect_ratio);
        self
    }

    /// Set lens settings for depth of field.
    pub fn with_lens(mut self, aperture: f64, focus_distance: f64) -> Self {
        self.aperture = Some(aperture);
        self.focus_distance = Some(focus_distance);
        self
    }

    /// Aspect ratio to use for an image of the given size.
    pub fn aspect_ratio_for(&self, width: u32, height: u32) -> f64 {
        self.aspect_ratio.unwrap_or(width as f64 / height as f64)
    }

    pub fn has_depth_of_field(&self) -> bool {
        self.aperture.is_some_and(|aperture| aperture > 0.0)
    }

    /// Distance to the plane of perfect focus. Always 1 without depth of field.
    pub fn resolved_focus_distance(&self) -> f64 {
        if self.has_depth_of_field() {
            self.focus_distance.unwrap_or_else(|| (self.look_from - self.look_at).length())
        } else {
            1.0
        }
    }

    pub fn validate(&self) -> SceneResult<()> {
        if !(self.vfov > 0.0 && self.vfov < 180.0) {
            return Err(SceneError::InvalidFov(self.vfov));
        }
        if let Some(aspect) = self.aspect_ratio {
            if !(aspect > 0.0 && aspect.is_finite()) {
                return Err(SceneError::InvalidAspectRatio(aspect));
            }
        }

        let w = try_unit_vector(self.look_from - self.look_at)
            .ok_or(SceneError::DegenerateCamera("look_from and look_at coincide"))?;
        try_unit_vector(self.vup.cross(w))
            .ok_or(SceneError::DegenerateCamera("vup is parallel to the view direction"))?;

        if self.aperture.is_some_and(|aperture| aperture < 0.0) {
            return Err(SceneError::DegenerateCamera("aperture must not be negative"));
        }
        if self.has_depth_of_field() && !(self.resolved_focus_distance() > 0.0) {
            return Err(SceneError::DegenerateCamera("focus distance must be positive"));
        }
        Ok(())
    }
}

/// Image size and sampling quality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum number of scatter events followed per camera ray
    pub max_depth: u32,
    /// Fixed seed for reproducible output; entropy-seeded when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 200,
            height: 100,
            samples_per_pixel: 100,
            max_depth: 50,
            seed: None,
        }
    }
}

impl RenderSettings {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set quality settings.
    pub fn with_quality(mut self, samples_per_pixel: u32, max_depth: u32) -> Self {
        self.samples_per_pixel = samples_per_pixel;
        self.max_depth = max_depth;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> SceneResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SceneError::InvalidResolution {
                width: self.width,
                height: self.height,
            });
        }
        if self.samples_per_pixel == 0 {
            return Err(SceneError::NoSamples);
        }
        Ok(())
    }
}

/// A complete scene: camera, image settings and an ordered list of primitives.
///
/// Primitive order only matters when two primitives report the same hit distance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Scene name (usually from filename)
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub camera: CameraSettings,

    #[serde(default)]
    pub render: RenderSettings,

    #[serde(default)]
    pub primitives: Vec<PrimitiveDescription>,
}

impl SceneDescription {
    /// Create an empty scene.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_camera(mut self, camera: CameraSettings) -> Self {
        self.camera = camera;
        self
    }

    pub fn with_render(mut self, render: RenderSettings) -> Self {
        self.render = render;
        self
    }

    /// Add a sphere to the scene and return its index.
    pub fn add_sphere(
        &mut self,
        center: Point3,
        radius: f64,
        material: MaterialDescription,
    ) -> usize {
        let index = self.primitives.len();
        self.primitives.push(PrimitiveDescription::Sphere {
            center,
            radius,
            material,
        });
        index
    }

    /// Get primitive count.
    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    /// Aspect ratio the camera should use for this scene's resolution.
    pub fn aspect_ratio(&self) -> f64 {
        self.camera.aspect_ratio_for(self.render.width, self.render.height)
    }

    /// Check every invariant the renderer relies on.
    pub fn validate(&self) -> SceneResult<()> {
        self.render.validate()?;
        self.camera.validate()?;
        for (index, primitive) in self.primitives.iter().enumerate() {
            primitive.validate(index)?;
        }
        log::debug!("Scene '{}' passed validation", self.name);
        Ok(())
    }
}
