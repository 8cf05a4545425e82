//! Dungeon Doom: a top-down dungeon brawler
//!
//! Walk the dungeon, banish the ghosts that drift through its walls, and
//! pick up as many coins as you can before they wear you down.
//! - Main menu, instructions and play screens
//! - Per-frame gameplay core in `game/`, independent of the renderer
//! - Tunables, maps and art paths in RON files

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod config;
mod game;
mod input;
mod render;
mod screens;
mod ui;
mod world;

use macroquad::prelude::*;
use thiserror::Error;
use app::AppState;
use config::{ConfigError, GameConfig};
use render::{AssetError, Assets};
use world::{load_map, Map, MapError};

/// Anything that stops the game from starting
#[derive(Debug, Error)]
enum StartupError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("map: {0}")]
    Map(#[from] MapError),

    #[error("assets: {0}")]
    Asset(#[from] AssetError),
}

fn window_conf() -> Conf {
    // Errors here are reported by startup() once logging is up
    let window = GameConfig::discover()
        .map(|(config, _)| config.window)
        .unwrap_or_default();

    Conf {
        window_title: format!("{} v{}", window.title, VERSION),
        window_width: window.width.round() as i32,
        window_height: window.height.round() as i32,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

/// Config, map and assets, in that order
async fn startup() -> Result<AppState, StartupError> {
    let (mut config, source) = GameConfig::discover()?;
    match &source {
        Some(path) => log::info!("config loaded from {}", path.display()),
        None => log::info!("using built-in config"),
    }

    let map = match &config.map {
        Some(path) => load_map(path)?,
        None => {
            log::info!("no map configured, using the built-in arena");
            Map::arena(config.window.width, config.window.height)
        }
    };
    if map.width != config.window.width || map.height != config.window.height {
        log::warn!(
            "map is {}x{} but the play field is {}x{}",
            map.width, map.height, config.window.width, config.window.height
        );
    }

    let assets = match &config.assets {
        Some(asset_config) => {
            let assets = Assets::load(asset_config).await?;
            assets.apply_sizes(&mut config);
            config.validate()?;
            Some(assets)
        }
        None => {
            log::info!("no assets configured, drawing placeholder shapes");
            None
        }
    };

    Ok(AppState::new(config, map, assets))
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Dungeon Doom v{}", VERSION);

    let mut app = match startup().await {
        Ok(app) => app,
        Err(e) => {
            log::error!("failed to start: {}", e);
            return;
        }
    };

    if let Some(assets) = &app.assets {
        assets.start_music();
    }

    loop {
        if !app.frame(get_frame_time()) {
            break;
        }
        next_frame().await;
    }
}
