//! Built-in scenes.

use lumen_math::{Color, Point3, Vec3};

use crate::error::{SceneError, SceneResult};
use crate::scene::{CameraSettings, MaterialDescription, RenderSettings, SceneDescription};

/// Names accepted by [`by_name`].
pub const NAMES: [&str; 3] = ["two_spheres", "hollow_glass", "depth_of_field"];

/// Look up a preset scene by name.
pub fn by_name(name: &str) -> SceneResult<SceneDescription> {
    match name {
        "two_spheres" => Ok(two_spheres()),
        "hollow_glass" => Ok(hollow_glass()),
        "depth_of_field" => Ok(depth_of_field()),
        other => Err(SceneError::UnknownPreset(other.to_string())),
    }
}

/// A grey matte sphere resting on a large matte ground sphere.
pub fn two_spheres() -> SceneDescription {
    let grey = MaterialDescription::Lambertian {
        albedo: Color::new(0.5, 0.5, 0.5),
    };

    let mut scene = SceneDescription::new("two_spheres")
        .with_camera(CameraSettings::default().with_aspect_ratio(2.0))
        .with_render(RenderSettings::default());
    scene.add_sphere(Point3::new(0.0, 0.0, -1.0), 0.5, grey);
    scene.add_sphere(Point3::new(0.0, -100.5, -1.0), 100.0, grey);
    scene
}

/// Hollow glass, blue matte and gold metal spheres on a yellow-green ground.
///
/// The default camera here reproduces the fixed frame with lower-left corner
/// (-2, -1, -1), horizontal span 4 and vertical span 2.
pub fn hollow_glass() -> SceneDescription {
    let mut scene = SceneDescription::new("hollow_glass")
        .with_camera(CameraSettings::default().with_aspect_ratio(2.0))
        .with_render(RenderSettings::default());
    add_hollow_glass_spheres(&mut scene);
    scene
}

/// The [`hollow_glass`] spheres seen from above and to the right through a wide
/// aperture focused on the middle sphere.
pub fn depth_of_field() -> SceneDescription {
    let look_from = Point3::new(3.0, 3.0, 2.0);
    let look_at = Point3::new(0.0, 0.0, -1.0);
    let focus_distance = (look_from - look_at).length();

    let camera = CameraSettings::default()
        .with_position(look_from, look_at, Vec3::Y)
        .with_fov(20.0)
        .with_aspect_ratio(2.0)
        .with_lens(2.0, focus_distance);

    let mut scene = SceneDescription::new("depth_of_field")
        .with_camera(camera)
        .with_render(RenderSettings::default());
    add_hollow_glass_spheres(&mut scene);
    scene
}

fn add_hollow_glass_spheres(scene: &mut SceneDescription) {
    let glass = MaterialDescription::Dielectric {
        refractive_index: 1.5,
    };

    // Ground
    scene.add_sphere(
        Point3::new(0.0, -100.5, -1.0),
        100.0,
        MaterialDescription::Lambertian {
            albedo: Color::new(0.8, 0.8, 0.0),
        },
    );
    // Outer glass surface and the inward-facing bubble inside it
    scene.add_sphere(Point3::new(-1.0, 0.0, -1.0), 0.5, glass);
    scene.add_sphere(Point3::new(-1.0, 0.0, -1.0), -0.45, glass);
    scene.add_sphere(
        Point3::new(0.0, 0.0, -1.0),
        0.5,
        MaterialDescription::Lambertian {
            albedo: Color::new(0.1, 0.2, 0.5),
        },
    );
    scene.add_sphere(
        Point3::new(1.0, 0.0, -1.0),
        0.5,
        MaterialDescription::Metal {
            albedo: Color::new(0.8, 0.6, 0.2),
            fuzz: 0.0,
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::PrimitiveDescription;

    #[test]
    fn test_all_presets_validate() {
        for name in NAMES {
            let scene = by_name(name).unwrap();
            assert_eq!(scene.name, name);
            assert!(scene.validate().is_ok(), "preset {name} failed validation");
        }
    }

    #[test]
    fn test_unknown_preset() {
        assert!(matches!(
            by_name("teapot"),
            Err(SceneError::UnknownPreset(name)) if name == "teapot"
        ));
    }

    #[test]
    fn test_hollow_glass_has_inverted_shell() {
        let scene = hollow_glass();
        assert_eq!(scene.primitive_count(), 5);

        let negative = scene
            .primitives
            .iter()
            .filter(|p| matches!(p, PrimitiveDescription::Sphere { radius, .. } if *radius < 0.0))
            .count();
        assert_eq!(negative, 1);
    }

    #[test]
    fn test_depth_of_field_focuses_on_target() {
        let camera = depth_of_field().camera;
        assert!(camera.has_depth_of_field());
        assert!((camera.resolved_focus_distance() - 27.0_f64.sqrt()).abs() < 1e-12);
    }
}
