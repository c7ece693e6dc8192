use std::fmt;

use crate::hittable::{hit_plane, HitRecord, Hittable};
use crate::math::{Point3, Vec3};
use crate::ray::Ray;

/// Axis aligned box given by its center and its width (x), height (y) and depth (z).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cube {
    origin: Point3,
    size: [f64; 3],
}

impl Cube {
    pub fn new(origin: Point3, width: f64, height: f64, depth: f64) -> Cube {
        Cube {
            origin,
            size: [width, height, depth],
        }
    }

    /// Same width, height and depth.
    pub fn uniform(origin: Point3, whd: f64) -> Cube {
        Cube::new(origin, whd, whd, whd)
    }

    pub fn origin(&self) -> Point3 {
        self.origin
    }

    pub fn width(&self) -> f64 {
        self.size[0]
    }

    pub fn height(&self) -> f64 {
        self.size[1]
    }

    pub fn depth(&self) -> f64 {
        self.size[2]
    }

    /// The eight corners, bottom ring first, then the top ring in the same order:
    ///
    /// 0 (-,-,-), 1 (+,-,-), 2 (+,-,+), 3 (-,-,+),
    /// 4 (-,+,-), 5 (+,+,-), 6 (+,+,+), 7 (-,+,+)
    pub fn corners(&self) -> [Point3; 8] {
        let [r0, r1, r2] = self.size.map(|s| s / 2.0);
        [
            self.origin + Vec3::new(-r0, -r1, -r2),
            self.origin + Vec3::new(r0, -r1, -r2),
            self.origin + Vec3::new(r0, -r1, r2),
            self.origin + Vec3::new(-r0, -r1, r2),
            self.origin + Vec3::new(-r0, r1, -r2),
            self.origin + Vec3::new(r0, r1, -r2),
            self.origin + Vec3::new(r0, r1, r2),
            self.origin + Vec3::new(-r0, r1, r2),
        ]
    }

    /// Approximate outward normal near `p`, by corner voting.
    ///
    /// The four corners closest to `p` are averaged (as directions from the center), the
    /// average is normalized and then truncated with [`Vec3::intify`]. Close to a face
    /// center this gives the face normal. Near edges, or when the four nearest corners are
    /// ambiguous, the result can be a diagonal or the zero vector. This is a known
    /// approximation, not an analytic box normal.
    pub fn normal(&self, p: Point3) -> Vec3 {
        let corners = self.corners();
        let mut picked: Vec<usize> = Vec::with_capacity(4);
        let mut sum = Vec3::ZERO;
        for _ in 0..4 {
            let idx = index_closest_except(&corners, p, &picked);
            picked.push(idx);
            sum = sum + (corners[idx] - self.origin);
        }
        (sum / 4.0).normalize().intify()
    }
}

/// Index of the corner closest to `p`, skipping `except`.
///
/// Scans in corner order and keeps the first strict improvement, so ties go to the
/// lowest index.
fn index_closest_except(points: &[Point3], p: Point3, except: &[usize]) -> usize {
    let mut best: Option<(usize, f64)> = None;
    for (i, point) in points.iter().enumerate() {
        if except.contains(&i) {
            continue;
        }
        let d = point.distance_squared(p);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i).unwrap_or(0)
}

impl Hittable for Cube {
    // one-face approximation: the heuristic normal is taken at the ray origin, not at the
    // hit, and only the plane through the center with that normal is tested.
    fn hit(&self, r: &Ray) -> Option<HitRecord> {
        let normal = self.normal(r.origin());
        hit_plane(r, self.origin, normal)
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cube: ({}, {}, {}, {})",
            self.origin, self.size[0], self.size[1], self.size[2]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_order() {
        let cube = Cube::new(Point3::new(0.5, 0.5, 0.5), 1.0, 1.0, 1.0);
        let corners = cube.corners();
        assert_eq!(corners[0], Point3::new(0.0, 0.0, 0.0));
        assert_eq!(corners[1], Point3::new(1.0, 0.0, 0.0));
        assert_eq!(corners[2], Point3::new(1.0, 0.0, 1.0));
        assert_eq!(corners[3], Point3::new(0.0, 0.0, 1.0));
        assert_eq!(corners[4], Point3::new(0.0, 1.0, 0.0));
        assert_eq!(corners[5], Point3::new(1.0, 1.0, 0.0));
        assert_eq!(corners[6], Point3::new(1.0, 1.0, 1.0));
        assert_eq!(corners[7], Point3::new(0.0, 1.0, 1.0));
    }

    #[test]
    fn test_face_normals() {
        let cube = Cube::uniform(Point3::ZERO, 2.0);
        assert_eq!(cube.normal(Point3::new(1.0, 0.1, -0.2)), Vec3::X);
        assert_eq!(cube.normal(Point3::new(-1.0, 0.3, 0.2)), -Vec3::X);
        assert_eq!(cube.normal(Point3::new(0.2, 1.0, 0.1)), Vec3::Y);
        assert_eq!(cube.normal(Point3::new(-0.1, 0.2, -1.0)), -Vec3::Z);
        assert_eq!(cube.normal(Point3::new(0.0, 0.0, 5.0)), Vec3::Z);
    }

    #[test]
    fn test_center_ties_pick_lowest_indices() {
        // every corner is equally far away, so corners 0..=3 (the bottom ring) win
        let cube = Cube::uniform(Point3::ZERO, 2.0);
        assert_eq!(cube.normal(Point3::ZERO), -Vec3::Y);
    }

    #[test]
    fn test_near_edge_is_approximate() {
        // close to the edge shared by the +x and +y faces: three corners of one face and
        // one of the other are averaged, and truncation collapses the result
        let cube = Cube::uniform(Point3::ZERO, 2.0);
        let n = cube.normal(Point3::new(1.0, 0.99, 0.9));
        assert_ne!(n, Vec3::X);
        assert_ne!(n, Vec3::Y);
        assert_eq!(n, Vec3::ZERO);
    }

    #[test]
    fn test_ray_from_center_hits_at_origin() {
        let cube = Cube::uniform(Point3::ZERO, 2.0);
        let ray = Ray::new(Point3::ZERO, Point3::new(0.0, -5.0, 0.0));
        let hit = ray.intersect(&cube).unwrap();
        assert_eq!(hit.point, Point3::ZERO);
        assert_eq!(hit.normal, -Vec3::Y);
    }

    #[test]
    fn test_ray_from_outside_misses() {
        // the face implied by the ray origin faces the ray, so the one-plane test rejects it
        let cube = Cube::uniform(Point3::new(0.0, 0.0, 50.0), 20.0);
        let ray = Ray::new(Point3::new(0.0, 0.0, -100.0), Point3::ZERO);
        assert!(ray.intersect(&cube).is_none());
    }
}
