use std::fmt;

use crate::hittable::{HitRecord, Hittable};
use crate::math::{Point2, Point3, Vec3};

/// A directed segment from `p0` to `p1`.
///
/// The direction `p1 - p0` is computed once and is not normalized, so the ray
/// parameter `t = 1` lands on `p1`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    p0: Point3,
    p1: Point3,
    direction: Vec3,
}

impl Ray {
    pub fn new(p0: Point3, p1: Point3) -> Self {
        Ray {
            p0,
            p1,
            direction: p1 - p0,
        }
    }

    /// Ray from `view_point` toward the screen position `(x, y, 0)`.
    pub fn through_screen(view_point: Point3, screen_position: Point2) -> Self {
        Ray::new(
            view_point,
            Point3::new(screen_position.x(), screen_position.y(), 0.0),
        )
    }

    pub fn origin(&self) -> Point3 {
        self.p0
    }

    pub fn end(&self) -> Point3 {
        self.p1
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn point_at_parameter(&self, t: f64) -> Point3 {
        self.p0 + t * self.direction
    }

    /// Intersection point and surface normal there, if `object` is hit.
    pub fn intersect<H: Hittable + ?Sized>(&self, object: &H) -> Option<HitRecord> {
        object.hit(self)
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.p0, self.p1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_is_cached_difference() {
        let ray = Ray::new(Point3::new(1.0, 2.0, 3.0), Point3::new(4.0, 6.0, 3.0));
        assert_eq!(ray.direction(), Vec3::new(3.0, 4.0, 0.0));
        assert_eq!(ray.point_at_parameter(1.0), ray.end());
        assert_eq!(ray.point_at_parameter(0.0), ray.origin());
    }

    #[test]
    fn test_through_screen() {
        let ray = Ray::through_screen(Point3::new(0.0, 0.0, -640.0), Point2::new(10.0, 20.0));
        assert_eq!(ray.end(), Point3::new(10.0, 20.0, 0.0));
        assert_eq!(ray.direction(), Vec3::new(10.0, 20.0, 640.0));
    }
}
