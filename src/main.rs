//! Flabod: a side-scrolling reflex game
//!
//! Flap through the gaps in the oncoming block columns. Every column that
//! slides past scores a point; the gates come faster and gravity pulls
//! harder the longer a round lasts. One touch and the round is over.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod assets;
mod audio;
mod config;
mod error;
mod game;
mod input;
mod render;
mod scene;
#[cfg(test)]
mod testing;

use std::path::Path;

use macroquad::prelude::*;

use app::App;
use audio::MacroquadAudio;
use config::{GameConfig, CONFIG_FILE, SCREEN_HEIGHT, SCREEN_WIDTH};
use render::MacroquadRenderer;
use scene::SceneManager;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Flabod v{}", VERSION),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    {
        crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    if let Err(e) = run().await {
        log::error!("{}", e);
        #[cfg(not(target_arch = "wasm32"))]
        std::process::exit(1);
    }
}

async fn run() -> error::Result<()> {
    let config = GameConfig::load_or_default(Path::new(CONFIG_FILE))?;
    let loaded = assets::load_assets(&config.assets).await?;

    let seed = config
        .seed
        .unwrap_or_else(|| (miniquad::date::now() * 1000.0) as u64);
    log::info!(
        "=== Flabod v{} === seed {}, fps limit {}",
        VERSION,
        seed,
        config.fps_limit.label()
    );

    let mut audio = MacroquadAudio::new(loaded.sounds);
    let renderer = MacroquadRenderer::new(loaded.sprites);
    let fps_limit = config.fps_limit;
    let scenes = SceneManager::new(config, seed, &mut audio);
    let mut app = App::new(scenes, renderer, audio, fps_limit);

    // Window close goes through the scene manager like any other quit
    prevent_quit();

    loop {
        let frame_start = get_time();
        if !app.frame(frame_start) {
            break;
        }
        app.limit_frame_rate(frame_start);
        next_frame().await;
    }

    log::info!("bye");
    Ok(())
}
