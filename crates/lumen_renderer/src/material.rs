//! Surface scattering.
//!
//! The material set is closed, so it is an enum matched in [`Material::scatter`]
//! rather than a trait object per surface.

use crate::hittable::HitRecord;
use crate::sampling::{gen_f64, random_in_unit_sphere};
use lumen_core::MaterialDescription;
use lumen_math::{near_zero, reflect, refract, unit_vector, Color, Ray};
use rand::RngCore;

/// Result of scattering a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterResult {
    /// Fraction of light carried back along the scattered ray, per channel
    pub attenuation: Color,
    /// The scattered ray, starting at the hit point
    pub scattered: Ray,
}

/// How light interacts with a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Diffuse surface.
    Lambertian { albedo: Color },

    /// Specular surface. `fuzz` of 0 is a perfect mirror, 1 is very rough.
    /// Build through [`Material::metal`] to keep it in [0, 1].
    Metal { albedo: Color, fuzz: f64 },

    /// Transparent surface that both reflects and refracts.
    /// 1.0 = air, 1.5 = glass, 2.4 = diamond.
    Dielectric { refractive_index: f64 },
}

impl Material {
    pub fn lambertian(albedo: Color) -> Self {
        Material::Lambertian { albedo }
    }

    /// Create a metal, clamping `fuzz` to [0, 1].
    pub fn metal(albedo: Color, fuzz: f64) -> Self {
        Material::Metal {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }

    pub fn dielectric(refractive_index: f64) -> Self {
        Material::Dielectric { refractive_index }
    }

    /// Scatter an incoming ray.
    ///
    /// Returns `None` if the ray is absorbed.
    pub fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        match *self {
            Material::Lambertian { albedo } => Some(scatter_lambertian(albedo, rec, rng)),
            Material::Metal { albedo, fuzz } => scatter_metal(albedo, fuzz, ray_in, rec, rng),
            Material::Dielectric { refractive_index } => {
                Some(scatter_dielectric(refractive_index, ray_in, rec, rng))
            }
        }
    }
}

impl From<&MaterialDescription> for Material {
    fn from(desc: &MaterialDescription) -> Self {
        match *desc {
            MaterialDescription::Lambertian { albedo } => Material::lambertian(albedo),
            MaterialDescription::Metal { albedo, fuzz } => Material::metal(albedo, fuzz),
            MaterialDescription::Dielectric { refractive_index } => {
                Material::dielectric(refractive_index)
            }
        }
    }
}

/// Schlick's approximation for reflectance.
#[inline]
pub fn schlick(cosine: f64, refractive_index: f64) -> f64 {
    let r0 = ((1.0 - refractive_index) / (1.0 + refractive_index)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

fn scatter_lambertian(albedo: Color, rec: &HitRecord, rng: &mut dyn RngCore) -> ScatterResult {
    let mut direction = rec.normal + random_in_unit_sphere(rng);

    // Catch degenerate scatter direction
    if near_zero(direction) {
        direction = rec.normal;
    }

    ScatterResult {
        attenuation: albedo,
        scattered: Ray::new(rec.p, direction),
    }
}

fn scatter_metal(
    albedo: Color,
    fuzz: f64,
    ray_in: &Ray,
    rec: &HitRecord,
    rng: &mut dyn RngCore,
) -> Option<ScatterResult> {
    let reflected = reflect(unit_vector(ray_in.direction()), rec.normal);
    let direction = reflected + fuzz * random_in_unit_sphere(rng);

    // Fuzz can push the ray below the surface, in which case it is absorbed
    if direction.dot(rec.normal) > 0.0 {
        Some(ScatterResult {
            attenuation: albedo,
            scattered: Ray::new(rec.p, direction),
        })
    } else {
        None
    }
}

fn scatter_dielectric(
    refractive_index: f64,
    ray_in: &Ray,
    rec: &HitRecord,
    rng: &mut dyn RngCore,
) -> ScatterResult {
    let direction = ray_in.direction();
    let d_dot_n = direction.dot(rec.normal);

    // A ray travelling along the normal is leaving the medium
    let (outward_normal, ratio, cosine) = if d_dot_n > 0.0 {
        (
            -rec.normal,
            refractive_index,
            refractive_index * d_dot_n / direction.length(),
        )
    } else {
        (rec.normal, 1.0 / refractive_index, -d_dot_n / direction.length())
    };

    let refracted = refract(direction, outward_normal, ratio);
    let reflect_prob = match refracted {
        Some(_) => schlick(cosine, refractive_index),
        None => 1.0,
    };

    // One draw per event, even under total internal reflection
    let choose_reflection = gen_f64(rng) < reflect_prob;
    let scattered_direction = match refracted {
        Some(refracted) if !choose_reflection => refracted,
        _ => reflect(direction, rec.normal),
    };

    ScatterResult {
        attenuation: Color::ONE,
        scattered: Ray::new(rec.p, scattered_direction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_math::{Point3, Vec3};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn record(material: &Material, normal: Vec3) -> HitRecord<'_> {
        HitRecord {
            t: 1.0,
            p: Point3::new(0.0, 0.0, -1.0),
            normal,
            material,
        }
    }

    #[test]
    fn test_lambertian_scatter() {
        let albedo = Color::new(0.8, 0.3, 0.3);
        let material = Material::lambertian(albedo);
        let rec = record(&material, Vec3::Z);
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let result = material.scatter(&ray, &rec, &mut rng).unwrap();
            assert_eq!(result.attenuation, albedo);
            assert_eq!(result.scattered.origin(), rec.p);
            // Target lies inside the unit sphere resting on the surface
            assert!((result.scattered.direction() - rec.normal).length() < 1.0 + 1e-12);
        }
    }

    #[test]
    fn test_metal_fuzz_is_clamped() {
        assert_eq!(
            Material::metal(Color::ONE, 3.0),
            Material::Metal { albedo: Color::ONE, fuzz: 1.0 }
        );
        assert_eq!(
            Material::metal(Color::ONE, -0.5),
            Material::Metal { albedo: Color::ONE, fuzz: 0.0 }
        );
    }

    #[test]
    fn test_perfect_mirror_head_on() {
        let albedo = Color::new(0.8, 0.6, 0.2);
        let material = Material::metal(albedo, 0.0);
        let rec = record(&material, Vec3::Z);
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -3.0));
        let mut rng = StdRng::seed_from_u64(1);

        let result = material.scatter(&ray, &rec, &mut rng).unwrap();
        assert_eq!(result.attenuation, albedo);
        assert_eq!(result.scattered.direction(), Vec3::Z);
    }

    #[test]
    fn test_rough_metal_absorbs_some_grazing_rays() {
        let material = Material::metal(Color::splat(0.9), 1.0);
        let rec = record(&material, Vec3::Z);
        let ray = Ray::new(Point3::ZERO, Vec3::new(1.0, 0.0, -0.1));
        let mut rng = StdRng::seed_from_u64(7);

        let mut absorbed = 0;
        let mut scattered = 0;
        for _ in 0..1000 {
            match material.scatter(&ray, &rec, &mut rng) {
                Some(result) => {
                    assert!(result.scattered.direction().dot(rec.normal) > 0.0);
                    scattered += 1;
                }
                None => absorbed += 1,
            }
        }
        assert!(absorbed > 0);
        assert!(scattered > 0);
    }

    #[test]
    fn test_total_internal_reflection() {
        let material = Material::dielectric(1.5);
        let rec = record(&material, Vec3::Z);
        // Leaving the glass at a grazing angle
        let ray = Ray::new(Point3::ZERO, Vec3::new(1.0, 0.0, 0.2));
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..100 {
            let result = material.scatter(&ray, &rec, &mut rng).unwrap();
            assert_eq!(result.attenuation, Color::ONE);
            assert!((result.scattered.direction() - Vec3::new(1.0, 0.0, -0.2)).length() < 1e-12);
        }
    }

    #[test]
    fn test_dielectric_head_on_mostly_refracts() {
        let material = Material::dielectric(1.5);
        let rec = record(&material, Vec3::Z);
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let mut rng = StdRng::seed_from_u64(11);

        let mut refracted = 0;
        let mut reflected = 0;
        for _ in 0..2000 {
            let result = material.scatter(&ray, &rec, &mut rng).unwrap();
            assert_eq!(result.attenuation, Color::ONE);
            let direction = result.scattered.direction();
            if (direction - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-12 {
                refracted += 1;
            } else {
                assert!((direction - Vec3::Z).length() < 1e-12);
                reflected += 1;
            }
        }
        // Normal incidence reflectance is 4%
        assert!(reflected > 20 && reflected < 160, "reflected {reflected}");
        assert!(refracted > reflected);
    }

    /// Fraction of `trials` scatters that stay on the incoming side of the surface.
    fn reflected_share(direction: Vec3, normal: Vec3, trials: usize, seed: u64) -> f64 {
        let material = Material::dielectric(1.5);
        let rec = record(&material, normal);
        let ray = Ray::new(Point3::ZERO, direction);
        let incoming_side = -direction.dot(normal).signum();
        let mut rng = StdRng::seed_from_u64(seed);

        let reflected = (0..trials)
            .filter(|_| {
                let result = material.scatter(&ray, &rec, &mut rng).unwrap();
                result.scattered.direction().dot(normal).signum() == incoming_side
            })
            .count();
        reflected as f64 / trials as f64
    }

    #[test]
    fn test_dielectric_leaving_glass_refracts_by_snell() {
        let material = Material::dielectric(1.5);
        let rec = record(&material, Vec3::Z);
        let direction = Vec3::new(0.2, 0.0, 1.0);
        let ray = Ray::new(Point3::ZERO, direction);
        let mut rng = StdRng::seed_from_u64(21);

        // sin(out) = 1.5 * sin(in), bending away from the normal
        let sin_out = 1.5 * 0.2 / direction.length();
        let expected = Vec3::new(sin_out, 0.0, (1.0 - sin_out * sin_out).sqrt());

        let mut refracted = 0;
        for _ in 0..500 {
            let scattered = material.scatter(&ray, &rec, &mut rng).unwrap().scattered.direction();
            if scattered.dot(rec.normal) > 0.0 {
                assert!((scattered - expected).length() < 1e-12, "{scattered}");
                refracted += 1;
            } else {
                assert!((scattered - Vec3::new(0.2, 0.0, -1.0)).length() < 1e-12);
            }
        }
        assert!(refracted > 400);
    }

    #[test]
    fn test_dielectric_leaving_glass_reflectance() {
        const TRIALS: usize = 20_000;
        let direction = Vec3::new(0.2, 0.0, 1.0);

        // Leaving the medium the cosine is scaled by the refractive index
        let expected = schlick(1.5 * direction.dot(Vec3::Z) / direction.length(), 1.5);
        assert!((expected - 0.0178).abs() < 1e-3);

        let leaving = reflected_share(direction, Vec3::Z, TRIALS, 5);
        assert!((leaving - expected).abs() < 0.005, "leaving share {leaving}");

        // The same angle entering the glass reflects about 4%
        let entering = reflected_share(Vec3::new(0.2, 0.0, -1.0), Vec3::Z, TRIALS, 6);
        let expected_entering = schlick(1.0 / direction.length(), 1.5);
        assert!((entering - expected_entering).abs() < 0.007, "entering share {entering}");
        assert!(entering - leaving > 0.01);
    }

    #[test]
    fn test_schlick() {
        // Normal incidence gives r0
        assert!((schlick(1.0, 1.5) - 0.04).abs() < 1e-12);
        // Grazing incidence reflects everything
        assert!((schlick(0.0, 1.5) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_description() {
        let metal = MaterialDescription::Metal {
            albedo: Color::splat(0.5),
            fuzz: 4.0,
        };
        assert_eq!(Material::from(&metal), Material::metal(Color::splat(0.5), 1.0));

        let glass = MaterialDescription::Dielectric {
            refractive_index: 1.5,
        };
        assert_eq!(Material::from(&glass), Material::dielectric(1.5));
    }
}
