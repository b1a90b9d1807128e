//! Endless Scroller: a tiny 3D endless runner
//!
//! Steer a cube between obstacles and pick up collectibles while the track
//! scrolls toward the camera and keeps speeding up:
//! - Title → Gameplay → GameOver screens with a cross-fade between them
//! - Entities recycle to the far end instead of being respawned
//! - Realtime debug panel with a live speed slider

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod config;
mod game;
mod screen;
mod input;
mod app;
mod render;
mod ui;

use std::path::Path;
use std::sync::OnceLock;
use macroquad::prelude::*;
use ::rand::rngs::StdRng;
use ::rand::SeedableRng;
use tracing_subscriber::EnvFilter;
use app::AppState;
use config::{ConfigSource, GameConfig, CONFIG_FILE};
use input::InputState;
use ui::{MouseState, UiContext};

/// Config shared by `window_conf` (runs first) and `main`
static CONFIG: OnceLock<GameConfig> = OnceLock::new();

/// Logging and config, done once before the window opens.
/// A broken config file is fatal: we log and exit before any window exists.
fn startup_config() -> &'static GameConfig {
    CONFIG.get_or_init(|| {
        let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .init();

        tracing::info!("endless-scroller v{} starting", VERSION);

        match GameConfig::load_or_default(Path::new(CONFIG_FILE)) {
            Ok((config, ConfigSource::Defaults)) => {
                tracing::info!("no {} found, using built-in defaults", CONFIG_FILE);
                config
            }
            Ok((config, ConfigSource::File(path))) => {
                tracing::info!("loaded config from {}", path);
                config
            }
            Err(e) => {
                tracing::error!("failed to load {}: {}", CONFIG_FILE, e);
                std::process::exit(1);
            }
        }
    })
}

fn window_conf() -> Conf {
    let window = &startup_config().window;
    Conf {
        window_title: window.title.clone(),
        window_width: window.width,
        window_height: window.height,
        window_resizable: false,
        ..Default::default()
    }
}

/// Seed for the gameplay RNG (wall clock, works on wasm too)
fn rng_seed() -> u64 {
    (macroquad::miniquad::date::now() * 1000.0) as u64
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let config = startup_config();
    let frame_time = config.window.frame_time();

    let mut app = AppState::new(config);
    let input = InputState::new();
    let mut ui_ctx = UiContext::new();
    let mut rng = StdRng::seed_from_u64(rng_seed());

    tracing::info!(
        entities = app.gameplay.entities.len(),
        fps = config.window.target_fps,
        "entering main loop"
    );

    loop {
        // Track frame start time for FPS limiting
        let frame_start = get_time();

        // Update
        let frame_input = input.poll();
        let effects = app.update(&frame_input, &mut rng);
        if effects.toggle_fullscreen {
            tracing::info!(fullscreen = app.fullscreen, "toggling fullscreen");
            set_fullscreen(app.fullscreen);
        }

        // Draw
        render::draw_frame(&app);

        ui_ctx.begin_frame(MouseState::poll());
        let new_speed = ui::draw_debug_panel(&mut ui_ctx, 10.0, 10.0, &app.gameplay);
        app.apply_debug_speed(new_speed);

        // FPS limiting
        if let Some(target_frame_time) = frame_time {
            let elapsed = get_time() - frame_start;
            let remaining = target_frame_time - elapsed;

            if remaining > 0.0 {
                // Native: use sleep for bulk, then spin-wait for precision
                #[cfg(not(target_arch = "wasm32"))]
                {
                    let spin_margin = 0.002; // 2ms
                    while get_time() - frame_start + spin_margin < target_frame_time {
                        std::thread::sleep(std::time::Duration::from_millis(1));
                    }
                    while get_time() - frame_start < target_frame_time {
                        std::hint::spin_loop();
                    }
                }
                // WASM: just spin-wait (no thread::sleep available)
                #[cfg(target_arch = "wasm32")]
                {
                    while get_time() - frame_start < target_frame_time {
                        std::hint::spin_loop();
                    }
                }
            }
        }

        next_frame().await;
    }
}
