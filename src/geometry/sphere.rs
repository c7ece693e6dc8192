use std::fmt;

use crate::hittable::{HitRecord, Hittable};
use crate::math::{Point3, Vec3};
use crate::ray::Ray;

/// Sphere with a fixed center and radius. Moving a sphere means building a new one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    origin: Point3,
    radius: f64,
}

impl Sphere {
    pub fn new(origin: Point3, radius: f64) -> Sphere {
        Sphere { origin, radius }
    }

    pub fn origin(&self) -> Point3 {
        self.origin
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn radius_squared(&self) -> f64 {
        self.radius * self.radius
    }

    /// Outward normal at `p`, unit length when `p` lies on the surface. Not validated.
    pub fn normal(&self, p: Point3) -> Vec3 {
        (p - self.origin) / self.radius
    }

    pub fn moved(&self, offset: Vec3) -> Sphere {
        Sphere::new(self.origin + offset, self.radius)
    }
}

impl Hittable for Sphere {
    // tangent rays (discriminant == 0) count as misses, and the near root is taken
    // without checking whether it lies behind the ray origin.
    fn hit(&self, r: &Ray) -> Option<HitRecord> {
        let direction = r.direction();
        let oc: Vec3 = r.origin() - self.origin;
        let a = direction.dot(direction);
        let b = 2.0 * direction.dot(oc);
        let c = oc.dot(oc) - self.radius_squared();
        let discriminant = b * b - 4.0 * a * c;
        if discriminant <= 0.0 {
            return None;
        }
        let time = (-b - discriminant.sqrt()) / (2.0 * a);
        let point = r.point_at_parameter(time);
        Some(HitRecord::new(point, self.normal(point)))
    }
}

impl fmt::Display for Sphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sphere: ({}, {})", self.origin, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_aimed_at_center_hits_surface() {
        let center = Point3::new(1.0, 2.0, 3.0);
        let sphere = Sphere::new(center, 4.0);
        for start in [
            Point3::new(1.0, 2.0, -20.0),
            Point3::new(30.0, -7.0, 11.0),
            Point3::new(-5.0, 40.0, 3.0),
        ] {
            let ray = Ray::new(start, center);
            let hit = ray.intersect(&sphere).expect("ray aimed at center must hit");
            assert!((hit.point.distance(center) - 4.0).abs() < 1e-9);
            assert!((hit.normal.len() - 1.0).abs() < 1e-9);
            // outward: pointing back toward the ray origin, away from the center
            assert!((hit.point + hit.normal).distance(center) > 4.0);
            assert!(hit.normal.dot(start - center) > 0.0);
        }
    }

    #[test]
    fn test_near_root_is_returned() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, 50.0), 10.0);
        let ray = Ray::new(Point3::new(0.0, 0.0, -100.0), Point3::ZERO);
        let hit = ray.intersect(&sphere).unwrap();
        assert!((hit.point.z() - 40.0).abs() < 1e-9);
        assert!((hit.normal.z() + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_miss() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, 50.0), 10.0);
        let ray = Ray::new(Point3::new(0.0, 20.0, -100.0), Point3::new(0.0, 20.0, 0.0));
        assert!(ray.intersect(&sphere).is_none());
    }

    #[test]
    fn test_tangent_is_a_miss() {
        // grazes the sphere at (0, 10, 50); the discriminant is exactly zero
        let sphere = Sphere::new(Point3::new(0.0, 0.0, 50.0), 10.0);
        let ray = Ray::new(Point3::new(0.0, 10.0, -100.0), Point3::new(0.0, 10.0, 0.0));
        assert!(ray.intersect(&sphere).is_none());
    }

    #[test]
    fn test_sphere_behind_origin_is_not_filtered() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, -50.0), 10.0);
        let ray = Ray::new(Point3::ZERO, Point3::new(0.0, 0.0, 1.0));
        let hit = ray.intersect(&sphere).unwrap();
        assert!((hit.point.z() + 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_moved_keeps_radius() {
        let sphere = Sphere::new(Point3::new(1.0, 1.0, 1.0), 3.0);
        let moved = sphere.moved(Vec3::new(1.0, -1.0, 0.0));
        assert_eq!(moved.origin(), Point3::new(2.0, 0.0, 1.0));
        assert_eq!(moved.radius(), 3.0);
        assert_eq!(sphere.origin(), Point3::new(1.0, 1.0, 1.0));
    }
}
