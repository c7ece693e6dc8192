mod cube;
mod disk;
mod plane;
mod sphere;

pub use cube::Cube;
pub use disk::Disk;
pub use plane::Plane;
pub use sphere::Sphere;

use std::fmt;

use crate::hittable::{HitRecord, Hittable};
use crate::math::{Point3, Vec3};
use crate::ray::Ray;

/// Any of the analytic shapes, for callers that need a heterogeneous list.
///
/// Scene shading works on the concrete types directly; this enum only dispatches.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
    Cube(Cube),
    Disk(Disk),
}

impl From<Sphere> for Primitive {
    fn from(data: Sphere) -> Self {
        Primitive::Sphere(data)
    }
}

impl From<Plane> for Primitive {
    fn from(data: Plane) -> Self {
        Primitive::Plane(data)
    }
}

impl From<Cube> for Primitive {
    fn from(data: Cube) -> Self {
        Primitive::Cube(data)
    }
}

impl From<Disk> for Primitive {
    fn from(data: Disk) -> Self {
        Primitive::Disk(data)
    }
}

impl Primitive {
    pub fn origin(&self) -> Point3 {
        match self {
            Primitive::Sphere(inner) => inner.origin(),
            Primitive::Plane(inner) => inner.origin(),
            Primitive::Cube(inner) => inner.origin(),
            Primitive::Disk(inner) => inner.origin(),
        }
    }

    pub fn normal(&self, p: Point3) -> Vec3 {
        match self {
            Primitive::Sphere(inner) => inner.normal(p),
            Primitive::Plane(inner) => inner.normal(),
            Primitive::Cube(inner) => inner.normal(p),
            Primitive::Disk(inner) => inner.normal(p),
        }
    }
}

impl Hittable for Primitive {
    fn hit(&self, r: &Ray) -> Option<HitRecord> {
        match self {
            Primitive::Sphere(inner) => inner.hit(r),
            Primitive::Plane(inner) => inner.hit(r),
            Primitive::Cube(inner) => inner.hit(r),
            Primitive::Disk(inner) => inner.hit(r),
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Sphere(inner) => inner.fmt(f),
            Primitive::Plane(inner) => inner.fmt(f),
            Primitive::Cube(inner) => inner.fmt(f),
            Primitive::Disk(inner) => inner.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_matches_concrete_types() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, 50.0), 10.0);
        let plane = Plane::new(Point3::new(0.0, 0.0, 100.0), Vec3::Z);
        let ray = Ray::new(Point3::new(0.0, 0.0, -100.0), Point3::ZERO);

        let list: Vec<Primitive> = vec![sphere.into(), plane.into()];
        assert_eq!(ray.intersect(&list[0]), ray.intersect(&sphere));
        assert_eq!(ray.intersect(&list[1]), ray.intersect(&plane));
        assert_eq!(list[1].normal(Point3::ZERO), Vec3::Z);
        assert_eq!(format!("{}", list[0]), "sphere: ([0, 0, 50], 10)");
    }
}
