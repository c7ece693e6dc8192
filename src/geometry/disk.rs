use std::fmt;

use crate::hittable::{hit_plane, HitRecord, Hittable};
use crate::math::{Point3, Vec3};
use crate::ray::Ray;

/// Flat ellipse around `origin` with per-axis radii.
///
/// The axis with the smallest radius component is the flat one; the default
/// constructor makes a round disk that is flat in z.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Disk {
    origin: Point3,
    radius: Vec3,
}

impl Disk {
    pub fn new(origin: Point3, radius: Vec3) -> Disk {
        Disk { origin, radius }
    }

    pub fn round(origin: Point3, radius: f64) -> Disk {
        Disk::new(origin, Vec3::new(radius, radius, 0.0))
    }

    pub fn origin(&self) -> Point3 {
        self.origin
    }

    pub fn radius(&self) -> Vec3 {
        self.radius
    }

    // index of the flat axis, ties resolved toward z, then y
    fn flat_axis(&self) -> usize {
        let r = self.radius.as_array().map(f64::abs);
        let mut axis = 2;
        for i in [1, 0] {
            if r[i] < r[axis] {
                axis = i;
            }
        }
        axis
    }

    /// Constant unit normal along the flat axis, independent of `_p`.
    pub fn normal(&self, _p: Point3) -> Vec3 {
        match self.flat_axis() {
            0 => Vec3::X,
            1 => Vec3::Y,
            _ => Vec3::Z,
        }
    }
}

impl Hittable for Disk {
    // plane test through the center, then an ellipse test in the two in-plane axes.
    fn hit(&self, r: &Ray) -> Option<HitRecord> {
        let hit = hit_plane(r, self.origin, self.normal(r.origin()))?;
        let flat = self.flat_axis();
        let offset = (hit.point - self.origin).as_array();
        let radius = self.radius.as_array();
        let mut sum = 0.0;
        for axis in (0..3).filter(|&a| a != flat) {
            if radius[axis] == 0.0 {
                return None;
            }
            sum += (offset[axis] / radius[axis]).powi(2);
        }
        if sum > 1.0 {
            None
        } else {
            Some(hit)
        }
    }
}

impl fmt::Display for Disk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "disk: ({}, {})", self.origin, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_axis_normal() {
        let p = Point3::ZERO;
        assert_eq!(Disk::round(p, 5.0).normal(p), Vec3::Z);
        assert_eq!(Disk::new(p, Vec3::new(0.0, 2.0, 3.0)).normal(p), Vec3::X);
        assert_eq!(Disk::new(p, Vec3::new(4.0, -0.5, 3.0)).normal(p), Vec3::Y);
        // no flat axis at all: z wins the tie
        assert_eq!(Disk::new(p, Vec3::from(1.0)).normal(p), Vec3::Z);
    }

    #[test]
    fn test_hit_inside_and_outside() {
        let disk = Disk::round(Point3::new(0.0, 0.0, 10.0), 5.0);
        let inside = Ray::new(Point3::new(3.0, 3.0, 0.0), Point3::new(3.0, 3.0, 1.0));
        let hit = inside.intersect(&disk).unwrap();
        assert!(hit.point.distance(Point3::new(3.0, 3.0, 10.0)) < 1e-9);
        assert_eq!(hit.normal, Vec3::Z);

        let outside = Ray::new(Point3::new(4.0, 4.0, 0.0), Point3::new(4.0, 4.0, 1.0));
        assert!(outside.intersect(&disk).is_none());
    }
}
