use super::{output_film, render_frame, Renderer, Vec2D};

use crate::math::RGB;
use crate::parsing::config::{Config, Resolution};
use crate::scene::Scene;

use std::time::Instant;

use anyhow::Result;
use tracing::info;

/// Renders a single frame and writes it to disk.
#[derive(Default)]
pub struct NaiveRenderer {}

impl NaiveRenderer {
    pub fn new() -> NaiveRenderer {
        NaiveRenderer {}
    }
}

impl Renderer for NaiveRenderer {
    fn render(&self, scene: Scene, config: &Config) -> Result<()> {
        let render_settings = &config.render_settings;
        let Resolution { width, height } = render_settings.resolution;
        info!("starting render with film resolution {}x{}", width, height);
        info!("eye at {}", render_settings.eye);

        let mut film = Vec2D::new(width, height, RGB::ZERO);
        let now = Instant::now();
        let profile = render_frame(&scene, render_settings.eye, &mut film);
        let elapsed = (now.elapsed().as_millis() as f32) / 1000.0;

        info!("took {}s", elapsed);
        profile.pretty_print(elapsed, rayon::current_num_threads());
        output_film(render_settings, &film)
    }
}
