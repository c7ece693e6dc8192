use std::fmt;

use crate::hittable::{hit_plane, HitRecord, Hittable};
use crate::math::{Point3, Vec3};
use crate::ray::Ray;

/// Infinite plane through `origin`.
///
/// The normal is stored as given; callers are expected to pass a unit vector.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Plane {
    origin: Point3,
    normal: Vec3,
}

impl Plane {
    pub fn new(origin: Point3, normal: Vec3) -> Plane {
        Plane { origin, normal }
    }

    pub fn origin(&self) -> Point3 {
        self.origin
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Hittable for Plane {
    fn hit(&self, r: &Ray) -> Option<HitRecord> {
        hit_plane(r, self.origin, self.normal)
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "plane: ({}, {})", self.origin, self.normal)
    }
}
