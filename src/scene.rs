use std::collections::BTreeMap;
use std::fmt;

use ordered_float::OrderedFloat;

use crate::geometry::{Plane, Sphere};
use crate::hittable::HitRecord;
use crate::math::color::{BLUEISH, DARKGRAY, RED, WHITE};
use crate::math::{Point2, Point3, Vec3, RGB};
use crate::ray::Ray;

/// What produced the color of a pixel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SurfaceKind {
    Sphere,
    Plane,
    Background,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Shade {
    pub color: RGB,
    pub kind: SurfaceKind,
}

/// Immutable scene: one light, planes, spheres and a background color.
///
/// The light is a sphere whose radius is only informational; shading uses its center.
/// The "moved" operations never touch `self`, they return a new scene.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    light: Sphere,
    planes: Vec<Plane>,
    spheres: Vec<Sphere>,
    background: RGB,
}

impl Scene {
    pub fn new(light: Sphere, planes: Vec<Plane>, spheres: Vec<Sphere>, background: RGB) -> Self {
        Scene {
            light,
            planes,
            spheres,
            background,
        }
    }

    /// Three spheres in a row in front of a back wall, lit from the top left corner.
    pub fn demo(width: usize, height: usize) -> Self {
        let (w, h) = (width as f64, height as f64);
        let light = Sphere::new(Point3::new(0.0, 0.0, 50.0), 1.0);
        let plane = Plane::new(
            Point3::new(0.0, 0.0, 100.0),
            Vec3::new(0.0, 0.0, 0.5).normalize(),
        );
        let spheres = [0.4, 0.5, 0.6]
            .iter()
            .map(|fx| Sphere::new(Point3::new(w * fx, h * 0.5, 50.0), 50.0))
            .collect();
        Scene::new(light, vec![plane], spheres, DARKGRAY)
    }

    pub fn light(&self) -> &Sphere {
        &self.light
    }

    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn background(&self) -> RGB {
        self.background
    }

    // diffuse term: cosine between the direction to the light and the surface normal.
    // not clamped, so surfaces facing away from the light get a negative value.
    fn diffuse(&self, hit: &HitRecord) -> f64 {
        let light_direction = self.light.origin() - hit.point;
        light_direction.normalize().dot(hit.normal.normalize())
    }

    /// Color of pixel `(x, y)` seen from `from`, with the kind of surface that was hit.
    ///
    /// Hits are keyed by their distance from `from`; the nearest one wins and is clamped
    /// to 0..=255. Two hits at exactly the same distance keep the one inserted last
    /// (planes are inserted after spheres). Without any hit the background is returned
    /// as is, unclamped.
    pub fn trace(&self, from: Point3, x: usize, y: usize) -> Shade {
        let ray = Ray::through_screen(from, Point2::from((x, y)));

        let mut depth_color: BTreeMap<OrderedFloat<f64>, Shade> = BTreeMap::new();

        for sphere in self.spheres.iter() {
            if let Some(hit) = ray.intersect(sphere) {
                let dt = self.diffuse(&hit);
                let color = (RED + WHITE * dt) * 0.5;
                depth_color.insert(
                    OrderedFloat(from.distance(hit.point)),
                    Shade {
                        color,
                        kind: SurfaceKind::Sphere,
                    },
                );
            }
        }

        for plane in self.planes.iter() {
            if let Some(hit) = ray.intersect(plane) {
                let dt = self.diffuse(&hit);
                let color = ((BLUEISH + WHITE * dt) * 0.5) * 0.5 + self.background * 0.5;
                depth_color.insert(
                    OrderedFloat(from.distance(hit.point)),
                    Shade {
                        color,
                        kind: SurfaceKind::Plane,
                    },
                );
            }
        }

        match depth_color.into_iter().next() {
            Some((_, nearest)) => Shade {
                color: nearest.color.clamp255(),
                ..nearest
            },
            None => Shade {
                color: self.background,
                kind: SurfaceKind::Background,
            },
        }
    }

    pub fn color(&self, from: Point3, x: usize, y: usize) -> RGB {
        self.trace(from, x, y).color
    }

    /// New scene with sphere `index` moved by `offset`.
    ///
    /// Everything else is copied unchanged. An empty sphere list or an index out of range
    /// gives an unchanged copy.
    pub fn sphere_move(&self, index: usize, offset: Vec3) -> Scene {
        let spheres = self
            .spheres
            .iter()
            .enumerate()
            .map(|(i, sphere)| {
                if i == index {
                    sphere.moved(offset)
                } else {
                    *sphere
                }
            })
            .collect();
        Scene::new(self.light, self.planes.clone(), spheres, self.background)
    }

    /// New scene with only the light moved by `offset`.
    pub fn light_move(&self, offset: Vec3) -> Scene {
        Scene::new(
            self.light.moved(offset),
            self.planes.clone(),
            self.spheres.clone(),
            self.background,
        )
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "background color: {}", self.background)?;
        writeln!(f, "light: {}", self.light)?;
        for sphere in self.spheres.iter() {
            writeln!(f, "{}", sphere)?;
        }
        for plane in self.planes.iter() {
            writeln!(f, "{}", plane)?;
        }
        Ok(())
    }
}
