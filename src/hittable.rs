use crate::math::{Point3, Vec3};
use crate::ray::Ray;

/// Denominators at or below this are treated as "no intersection" by the plane style tests.
pub const PLANE_EPSILON: f64 = 1e-6;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitRecord {
    pub point: Point3,
    pub normal: Vec3,
}

impl HitRecord {
    pub fn new(point: Point3, normal: Vec3) -> Self {
        HitRecord { point, normal }
    }
}

impl From<HitRecord> for (Point3, Vec3) {
    fn from(hit: HitRecord) -> Self {
        (hit.point, hit.normal)
    }
}

pub trait Hittable {
    fn hit(&self, r: &Ray) -> Option<HitRecord>;
}

/// Ray against the infinite plane through `point` with normal `normal`.
///
/// Only rays whose direction has a positive component along `normal` (above the fixed
/// epsilon) can hit, so parallel rays and rays travelling against the normal both miss.
/// A plane behind the ray origin (t < 0) misses.
pub(crate) fn hit_plane(r: &Ray, point: Point3, normal: Vec3) -> Option<HitRecord> {
    let denominator = r.direction().dot(normal);
    if denominator <= PLANE_EPSILON {
        return None;
    }
    let t = (point - r.origin()).dot(normal) / denominator;
    if t < 0.0 {
        return None;
    }
    Some(HitRecord::new(r.point_at_parameter(t), normal))
}
