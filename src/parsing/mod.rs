pub mod config;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::geometry::{Plane, Sphere};
use crate::math::{Point3, Vec3, RGB};
use crate::scene::Scene;

pub type Vec3Data = [f64; 3];
pub type Point3Data = [f64; 3];

#[derive(Deserialize, Copy, Clone, Debug)]
pub struct SphereData {
    pub origin: Point3Data,
    pub radius: f64,
}

impl SphereData {
    pub fn transform(self) -> Result<Sphere> {
        if !(self.radius >= 0.0) {
            bail!("sphere radius must be non-negative, got {}", self.radius);
        }
        Ok(Sphere::new(Point3::from(self.origin), self.radius))
    }
}

#[derive(Deserialize, Copy, Clone, Debug)]
pub struct PlaneData {
    pub origin: Point3Data,
    pub normal: Vec3Data,
}

impl PlaneData {
    // the plane constructor stores its normal as given, so unit length is enforced here
    pub fn transform(self) -> Result<Plane> {
        let normal = Vec3::from(self.normal);
        if !(normal.len_squared() > 0.0) {
            bail!("plane normal must be non-zero, got {}", normal);
        }
        Ok(Plane::new(Point3::from(self.origin), normal.normalize()))
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct SceneData {
    pub background: Vec3Data,
    pub light: SphereData,
    #[serde(default)]
    pub planes: Vec<PlaneData>,
    #[serde(default)]
    pub spheres: Vec<SphereData>,
}

impl SceneData {
    pub fn transform(self) -> Result<Scene> {
        let light = self.light.transform().context("invalid light")?;
        let planes = self
            .planes
            .into_iter()
            .enumerate()
            .map(|(i, p)| p.transform().with_context(|| format!("invalid plane {}", i)))
            .collect::<Result<Vec<_>>>()?;
        let spheres = self
            .spheres
            .into_iter()
            .enumerate()
            .map(|(i, s)| s.transform().with_context(|| format!("invalid sphere {}", i)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Scene::new(light, planes, spheres, RGB::from(self.background)))
    }
}

pub fn parse_scene(input: &str) -> Result<Scene> {
    let data: SceneData = toml::from_str(input).context("invalid scene description")?;
    data.transform()
}

pub fn load_scene<P: AsRef<Path>>(filepath: P) -> Result<Scene> {
    let filepath = filepath.as_ref();
    info!("loading scene file {}", filepath.display());
    let mut input = String::new();
    let read_count = File::open(filepath)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("couldn't read scene file {}", filepath.display()))?;
    info!("done: {} bytes", read_count);
    parse_scene(&input).with_context(|| format!("while parsing {}", filepath.display()))
}
