mod controls;
mod naive;
mod ppm;
#[cfg(feature = "preview")]
mod preview;
mod vec2d;

pub use controls::{Action, SceneState};
pub use naive::NaiveRenderer;
pub use ppm::write_ppm;
#[cfg(feature = "preview")]
pub use preview::PreviewRenderer;
pub use vec2d::Vec2D;

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::info;

use crate::math::{rgb_to_u32, Point3, RGB};
use crate::parsing::config::{Config, RenderSettings};
use crate::profile::Profile;
use crate::scene::Scene;

pub trait Renderer {
    fn render(&self, scene: Scene, config: &Config) -> Result<()>;
}

/// Fills `film` with one color per pixel, seen from `eye`.
///
/// Every scanline is an independent rayon task that owns its row of the film and only
/// reads the scene.
pub fn render_frame(scene: &Scene, eye: Point3, film: &mut Vec2D<RGB>) -> Profile {
    let width = film.width;
    if width == 0 {
        return Profile::default();
    }
    film.buffer
        .par_chunks_mut(width)
        .enumerate()
        .map(|(y, row)| {
            let mut profile = Profile::default();
            for (x, pixel_ref) in row.iter_mut().enumerate() {
                let shade = scene.trace(eye, x, y);
                profile.record(shade.kind);
                *pixel_ref = shade.color;
            }
            profile
        })
        .reduce(Profile::default, |a, b| a.combine(b))
}

/// Packs the film into `buffer` as `0xAARRGGBB` pixels for a window surface.
pub fn update_window_buffer(buffer: &mut [u32], film: &Vec2D<RGB>) {
    debug_assert_eq!(buffer.len(), film.total_pixels());
    buffer
        .par_iter_mut()
        .zip(film.buffer.par_iter())
        .for_each(|(packed, color)| *packed = rgb_to_u32(*color));
}

/// Writes `<output_dir>/<filename>.ppm`, and `.png` as well when enabled.
pub fn output_film(render_settings: &RenderSettings, film: &Vec2D<RGB>) -> Result<()> {
    let dir = PathBuf::from(&render_settings.output_dir);
    fs::create_dir_all(&dir)
        .with_context(|| format!("couldn't create output directory {}", dir.display()))?;

    let ppm_filename = dir.join(format!("{}.ppm", render_settings.filename));
    info!("saving ppm image to {}", ppm_filename.display());
    let file = File::create(&ppm_filename)
        .with_context(|| format!("couldn't create {}", ppm_filename.display()))?;
    let mut writer = BufWriter::new(file);
    write_ppm(&mut writer, film)
        .with_context(|| format!("failed to write {}", ppm_filename.display()))?;

    if render_settings.png {
        let png_filename = dir.join(format!("{}.png", render_settings.filename));
        info!("saving png image to {}", png_filename.display());
        let mut img: image::RgbImage =
            image::ImageBuffer::new(film.width as u32, film.height as u32);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            let c = film.at(x as usize, y as usize).clamp255();
            *pixel = image::Rgb([c.r() as u8, c.g() as u8, c.b() as u8]);
        }
        img.save(&png_filename)
            .with_context(|| format!("failed to write {}", png_filename.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_frame_matches_per_pixel_color() {
        let (width, height) = (48, 27);
        let scene = Scene::demo(width, height);
        let eye = Point3::new(0.0, 0.0, -2.0 * width as f64);
        let mut film = Vec2D::new(width, height, RGB::ZERO);
        let profile = render_frame(&scene, eye, &mut film);

        assert_eq!(profile.camera_rays, width * height);
        assert_eq!(
            profile.sphere_hits + profile.plane_hits + profile.background_hits,
            width * height
        );
        for (x, y) in [(0, 0), (24, 13), (47, 26), (10, 20)] {
            assert_eq!(film.at(x, y), scene.color(eye, x, y));
        }
    }

    #[test]
    fn test_empty_scene_is_background_everywhere() {
        let background = RGB::new(1.0, 2.0, 3.0);
        let scene = Scene::new(
            crate::geometry::Sphere::new(Point3::ZERO, 1.0),
            Vec::new(),
            Vec::new(),
            background,
        );
        let mut film = Vec2D::new(8, 4, RGB::ZERO);
        let profile = render_frame(&scene, Point3::new(0.0, 0.0, -16.0), &mut film);
        assert!(film.buffer.iter().all(|c| *c == background));
        assert_eq!(profile.background_hits, 32);
    }

    #[test]
    fn test_update_window_buffer() {
        let mut film = Vec2D::new(2, 1, RGB::ZERO);
        film.write_at(1, 0, RGB::new(255.0, 0.0, 0.0));
        let mut buffer = vec![0u32; 2];
        update_window_buffer(&mut buffer, &film);
        assert_eq!(buffer, vec![0xFF000000, 0xFFFF0000]);
    }
}
