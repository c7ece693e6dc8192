use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::math::Point3;

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum RendererType {
    Naive,
    Preview { fps: Option<usize> },
}

#[derive(Deserialize, Clone, Debug)]
pub struct TOMLRenderSettings {
    pub filename: Option<String>,
    pub output_dir: Option<String>,
    pub resolution: Resolution,
    pub threads: Option<u16>,
    pub eye: Option<[f64; 3]>,
    pub png: Option<bool>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    pub filename: String,
    pub output_dir: String,
    pub resolution: Resolution,
    pub threads: u16,
    pub eye: Point3,
    pub png: bool,
}

impl From<TOMLRenderSettings> for RenderSettings {
    fn from(data: TOMLRenderSettings) -> Self {
        // the eye sits on the z axis, two screen widths in front of the image plane
        let eye = data
            .eye
            .map(Point3::from)
            .unwrap_or_else(|| Point3::new(0.0, 0.0, -2.0 * data.resolution.width as f64));
        RenderSettings {
            filename: data.filename.unwrap_or_else(|| String::from("beauty")),
            output_dir: data.output_dir.unwrap_or_else(|| String::from("output")),
            resolution: data.resolution,
            threads: data.threads.unwrap_or(num_cpus::get() as u16),
            eye,
            png: data.png.unwrap_or(false),
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct TOMLConfig {
    pub scene_file: Option<String>,
    pub renderer: RendererType,
    pub render_settings: TOMLRenderSettings,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub scene_file: Option<String>,
    pub renderer: RendererType,
    pub render_settings: RenderSettings,
}

impl From<TOMLConfig> for Config {
    fn from(data: TOMLConfig) -> Self {
        Config {
            scene_file: data.scene_file,
            renderer: data.renderer,
            render_settings: data.render_settings.into(),
        }
    }
}

pub fn parse_config(input: &str) -> Result<Config> {
    let settings: TOMLConfig = toml::from_str(input).context("invalid config")?;
    Ok(settings.into())
}

pub fn get_settings<P: AsRef<Path>>(filepath: P) -> Result<Config> {
    let filepath = filepath.as_ref();
    let mut input = String::new();
    File::open(filepath)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("couldn't read config file {}", filepath.display()))?;
    parse_config(&input).with_context(|| format!("while parsing {}", filepath.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsing_config() {
        let config = get_settings("data/config.toml").expect("couldn't read data/config.toml");
        assert_eq!(
            config.render_settings.resolution,
            Resolution {
                width: 495,
                height: 270
            }
        );
        assert!(config.render_settings.threads > 0);
    }

    #[test]
    fn test_defaults() {
        let config = parse_config(
            r#"
            renderer = { type = "Naive" }

            [render_settings]
            resolution = { width = 320, height = 200 }
            "#,
        )
        .unwrap();
        assert_eq!(config.scene_file, None);
        assert_eq!(config.renderer, RendererType::Naive);
        let settings = config.render_settings;
        assert_eq!(settings.filename, "beauty");
        assert_eq!(settings.output_dir, "output");
        assert_eq!(settings.eye, Point3::new(0.0, 0.0, -640.0));
        assert_eq!(settings.threads as usize, num_cpus::get());
        assert!(!settings.png);
    }

    #[test]
    fn test_preview_renderer() {
        let config = parse_config(
            r#"
            scene_file = "data/scenes/three_spheres.toml"
            renderer = { type = "Preview", fps = 30 }

            [render_settings]
            resolution = { width = 64, height = 32 }
            eye = [1.0, 2.0, -3.0]
            threads = 2
            "#,
        )
        .unwrap();
        assert_eq!(config.renderer, RendererType::Preview { fps: Some(30) });
        assert_eq!(config.render_settings.eye, Point3::new(1.0, 2.0, -3.0));
        assert_eq!(config.render_settings.threads, 2);
    }

    #[test]
    fn test_missing_resolution_is_an_error() {
        assert!(parse_config("renderer = { type = \"Naive\" }\n[render_settings]\n").is_err());
    }
}
