//! Hittable trait and HitRecord for ray-object intersection.

use crate::Material;
use lumen_math::{Interval, Point3, Ray, Vec3};

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// Point of intersection
    pub p: Point3,
    /// Unit surface normal as defined by the geometry.
    ///
    /// It is not flipped to face the ray, so materials can tell whether the ray
    /// is entering or leaving a surface.
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: &'a Material,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Nearest intersection with parameter strictly inside `ray_t`, if any.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;
}

/// A list of hittable objects.
///
/// Reports the closest hit among its members. Ties keep the earlier object.
#[derive(Default)]
pub struct HittableList {
    objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self { objects: Vec::new() }
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Clear all objects.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Hittable for HittableList {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest = None;
        let mut closest_so_far = ray_t.max;

        for object in &self.objects {
            if let Some(rec) = object.hit(ray, ray_t.with_max(closest_so_far)) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sphere;
    use lumen_math::Color;

    fn sphere(z: f64, radius: f64, albedo: f64) -> Box<dyn Hittable> {
        Box::new(Sphere::new(
            Point3::new(0.0, 0.0, z),
            radius,
            Material::lambertian(Color::splat(albedo)),
        ))
    }

    fn forward() -> Ray {
        Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn test_empty_list_misses() {
        let world = HittableList::new();
        assert!(world.is_empty());
        assert!(world.hit(&forward(), Interval::new(0.001, f64::MAX)).is_none());
    }

    #[test]
    fn test_nearest_hit_wins_in_any_order() {
        let mut near_first = HittableList::new();
        near_first.add(sphere(-2.0, 0.5, 0.1));
        near_first.add(sphere(-5.0, 0.5, 0.9));

        let mut far_first = HittableList::new();
        far_first.add(sphere(-5.0, 0.5, 0.9));
        far_first.add(sphere(-2.0, 0.5, 0.1));

        for world in [&near_first, &far_first] {
            let rec = world.hit(&forward(), Interval::new(0.001, f64::MAX)).unwrap();
            assert!((rec.t - 1.5).abs() < 1e-12);
            assert_eq!(*rec.material, Material::lambertian(Color::splat(0.1)));
        }
    }

    #[test]
    fn test_interval_limits_hits() {
        let mut world = HittableList::new();
        world.add(sphere(-2.0, 0.5, 0.5));
        assert_eq!(world.len(), 1);

        // Both roots (1.5 and 2.5) lie beyond the search range
        assert!(world.hit(&forward(), Interval::new(0.001, 1.0)).is_none());
        // Only the far side is inside the range
        let rec = world.hit(&forward(), Interval::new(2.0, f64::MAX)).unwrap();
        assert!((rec.t - 2.5).abs() < 1e-12);

        world.clear();
        assert!(world.is_empty());
    }
}
