extern crate sphere_mover as root;

use root::parsing::config::*;
use root::parsing::load_scene;
#[cfg(feature = "preview")]
use root::renderer::PreviewRenderer;
use root::renderer::{NaiveRenderer, Renderer};
use root::scene::Scene;

use structopt::StructOpt;
use tracing::{error, info, Level};

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long)]
    pub scene_file: Option<String>,
    #[structopt(long, default_value = "data/config.toml")]
    pub config_file: String,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long, default_value = "info")]
    pub log_level: String,
}

fn construct_scene(config: &Config) -> anyhow::Result<Scene> {
    match &config.scene_file {
        Some(path) => load_scene(path),
        None => {
            let Resolution { width, height } = config.render_settings.resolution;
            info!("no scene file given, using the built in three sphere scene");
            Ok(Scene::demo(width, height))
        }
    }
}

fn construct_renderer(config: &Config) -> Box<dyn Renderer> {
    match config.renderer {
        RendererType::Naive => Box::new(NaiveRenderer::new()),
        #[cfg(feature = "preview")]
        RendererType::Preview { .. } => Box::new(PreviewRenderer::new()),
        #[cfg(not(feature = "preview"))]
        RendererType::Preview { .. } => {
            tracing::warn!("built without the preview feature, falling back to the naive renderer");
            Box::new(NaiveRenderer::new())
        }
    }
}

fn parse_log_level(level: &str, default: Level) -> Level {
    match level.to_lowercase().as_str() {
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "trace" => Level::TRACE,
        "error" => Level::ERROR,
        "debug" => Level::DEBUG,
        _ => default,
    }
}

fn main() {
    let opts = Opt::from_args();
    tracing_subscriber::fmt()
        .with_max_level(parse_log_level(&opts.log_level, Level::INFO))
        .init();

    let mut config: Config = match get_settings(&opts.config_file) {
        Ok(expr) => expr,
        Err(e) => {
            error!("couldn't read {}, {:#}", opts.config_file, e);
            return;
        }
    };

    let threads = config.render_settings.threads.max(1);
    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(threads as usize)
        .build_global()
    {
        error!("couldn't build thread pool, {}", e);
        return;
    }

    // override scene file based on provided command line argument
    if opts.scene_file.is_some() {
        config.scene_file = opts.scene_file;
    }
    let scene = match construct_scene(&config) {
        Ok(scene) => scene,
        Err(e) => {
            error!("fatal error parsing scene, aborting. error is {:#}", e);
            return;
        }
    };
    info!("{} spheres, {} planes", scene.spheres().len(), scene.planes().len());

    let renderer = construct_renderer(&config);
    if !opts.dry_run {
        if let Err(e) = renderer.render(scene, &config) {
            error!("render failed, {:#}", e);
        }
    }
}
