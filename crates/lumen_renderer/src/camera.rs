//! Camera for ray generation.
//!
//! The film is a rectangle in front of the camera described by its lower-left
//! corner and two spans. Film coordinates `(s, t)` run from (0, 0) at the
//! lower-left to (1, 1) at the upper-right.

use crate::sampling::random_in_unit_disk;
use lumen_core::CameraSettings;
use lumen_math::{unit_vector, Point3, Ray, Vec3};
use rand::RngCore;

/// Camera for generating rays into the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    origin: Point3,
    lower_left_corner: Point3,
    horizontal: Vec3,
    vertical: Vec3,

    // Basis used to offset ray origins across the lens
    u: Vec3,
    v: Vec3,
    w: Vec3,
    lens_radius: f64,
}

impl Camera {
    /// Build a camera from placement settings.
    ///
    /// `settings` must have passed validation; a degenerate basis gives NaN rays.
    pub fn new(settings: &CameraSettings, aspect_ratio: f64) -> Self {
        let theta = settings.vfov.to_radians();
        let half_height = (theta / 2.0).tan();
        let half_width = aspect_ratio * half_height;
        let focus_dist = settings.resolved_focus_distance();

        // Calculate camera basis vectors
        let w = unit_vector(settings.look_from - settings.look_at);
        let u = unit_vector(settings.vup.cross(w));
        let v = w.cross(u);

        let origin = settings.look_from;
        let lower_left_corner = origin
            - half_width * focus_dist * u
            - half_height * focus_dist * v
            - focus_dist * w;

        let lens_radius = if settings.has_depth_of_field() {
            settings.aperture.unwrap_or(0.0) / 2.0
        } else {
            0.0
        };

        Self {
            origin,
            lower_left_corner,
            horizontal: 2.0 * half_width * focus_dist * u,
            vertical: 2.0 * half_height * focus_dist * v,
            u,
            v,
            w,
            lens_radius,
        }
    }

    /// Ray through film coordinates `(s, t)`.
    ///
    /// With a lens the origin is jittered across the aperture while every ray
    /// for the same `(s, t)` still passes through the same point on the focus plane.
    /// A pinhole camera draws nothing from `rng`.
    pub fn get_ray(&self, s: f64, t: f64, rng: &mut dyn RngCore) -> Ray {
        let offset = if self.lens_radius > 0.0 {
            let rd = self.lens_radius * random_in_unit_disk(rng);
            self.u * rd.x + self.v * rd.y
        } else {
            Vec3::ZERO
        };

        let origin = self.origin + offset;
        let direction = self.lower_left_corner + s * self.horizontal + t * self.vertical - origin;
        Ray::new(origin, direction)
    }

    pub fn origin(&self) -> Point3 {
        self.origin
    }

    pub fn lower_left_corner(&self) -> Point3 {
        self.lower_left_corner
    }

    pub fn horizontal(&self) -> Vec3 {
        self.horizontal
    }

    pub fn vertical(&self) -> Vec3 {
        self.vertical
    }

    /// Viewing direction (unit length).
    pub fn forward(&self) -> Vec3 {
        -self.w
    }

    pub fn lens_radius(&self) -> f64 {
        self.lens_radius
    }
}
