use super::{render_frame, update_window_buffer, Action, Renderer, SceneState, Vec2D};

use crate::math::{Vec3, RGB};
use crate::parsing::config::{Config, RendererType, Resolution};
use crate::scene::Scene;

use std::time::Instant;

use anyhow::{anyhow, Result};
use minifb::{Key, KeyRepeat, Scale, Window, WindowOptions};
use tracing::{debug, info};

const STEP: f64 = 1.0;

/// Live window that re-renders the scene whenever a key edits it.
#[derive(Default)]
pub struct PreviewRenderer {}

impl PreviewRenderer {
    pub fn new() -> Self {
        PreviewRenderer {}
    }
}

fn action_for_key(key: Key) -> Option<Action> {
    match key {
        Key::Escape | Key::Q => Some(Action::Quit),
        Key::Tab | Key::Space => Some(Action::NextSphere),
        // screen y grows downwards
        Key::Up | Key::W => Some(Action::MoveSphere(Vec3::new(0.0, -STEP, 0.0))),
        Key::Down | Key::S => Some(Action::MoveSphere(Vec3::new(0.0, STEP, 0.0))),
        Key::Left | Key::A => Some(Action::MoveSphere(Vec3::new(-STEP, 0.0, 0.0))),
        Key::Right | Key::D => Some(Action::MoveSphere(Vec3::new(STEP, 0.0, 0.0))),
        Key::PageUp => Some(Action::MoveSphere(Vec3::new(0.0, 0.0, STEP))),
        Key::PageDown => Some(Action::MoveSphere(Vec3::new(0.0, 0.0, -STEP))),
        Key::I => Some(Action::MoveLight(Vec3::new(0.0, -STEP, 0.0))),
        Key::K => Some(Action::MoveLight(Vec3::new(0.0, STEP, 0.0))),
        Key::J => Some(Action::MoveLight(Vec3::new(-STEP, 0.0, 0.0))),
        Key::L => Some(Action::MoveLight(Vec3::new(STEP, 0.0, 0.0))),
        _ => None,
    }
}

impl Renderer for PreviewRenderer {
    fn render(&self, scene: Scene, config: &Config) -> Result<()> {
        let fps = match config.renderer {
            RendererType::Preview { fps } => fps.unwrap_or(60),
            RendererType::Naive => 60,
        };
        let render_settings = &config.render_settings;
        let eye = render_settings.eye;
        let Resolution { width, height } = render_settings.resolution;

        let mut window = Window::new(
            "Sphere Mover",
            width,
            height,
            WindowOptions {
                scale: Scale::X1,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| anyhow!("couldn't open preview window: {}", e))?;
        window.set_target_fps(fps);
        info!("preview window {}x{} at up to {} fps", width, height, fps);

        let mut state = SceneState::new(scene);
        let mut film = Vec2D::new(width, height, RGB::ZERO);
        let mut buffer = vec![0u32; width * height];
        let mut dirty = true;
        let mut frames = 0usize;
        let start = Instant::now();

        while window.is_open() {
            for key in window.get_keys_pressed(KeyRepeat::Yes) {
                if let Some(action) = action_for_key(key) {
                    if !state.apply(action) {
                        info!("quitting preview after {} frames", frames);
                        return Ok(());
                    }
                    debug!("{:?}, selected sphere {}", action, state.selected);
                    dirty = true;
                }
            }

            if dirty {
                let now = Instant::now();
                let profile = render_frame(&state.scene, eye, &mut film);
                update_window_buffer(&mut buffer, &film);
                frames += 1;
                dirty = false;
                debug!(
                    "frame {} took {}ms, {} sphere hits",
                    frames,
                    now.elapsed().as_millis(),
                    profile.sphere_hits
                );
            }

            window
                .update_with_buffer(&buffer, width, height)
                .map_err(|e| anyhow!("couldn't update preview window: {}", e))?;
        }
        info!(
            "preview closed, {} frames in {}s",
            frames,
            start.elapsed().as_secs_f32()
        );
        Ok(())
    }
}
