//! CACTUS RUN: a tiny tile-based side-scrolling platformer
//!
//! A player sprite runs and jumps across a chunked tile map. The simulation
//! core (src/engine) is pure data and math; macroquad supplies the window,
//! keyboard and rendering.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod assets;
mod engine;
mod input;
mod screens;
mod tileset;
mod ui;

use app::App;
use engine::SimConfig;
use macroquad::prelude::*;
use tileset::Tileset;

/// Desert-sky clear color behind every screen.
const BACKDROP: Color = Color::new(0.96, 0.51, 0.38, 1.0);

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Cactus Run v{}", VERSION),
        window_width: 960,
        window_height: 640,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = SimConfig::default();

    let tileset = match Tileset::from_sheet_bytes(
        assets::SPRITES,
        config.tile_size as u16,
        assets::SHEET_ROWS,
        assets::SHEET_COLUMNS,
    ) {
        Ok(tileset) => {
            println!(
                "Loaded sprite sheet ({}x{} cells)",
                assets::SHEET_ROWS,
                assets::SHEET_COLUMNS
            );
            tileset
        }
        Err(e) => {
            eprintln!("Failed to load sprite sheet: {}", e);
            std::process::exit(1);
        }
    };

    let mut app = App::new(config, tileset);

    loop {
        app.update();
        clear_background(BACKDROP);
        app.draw();
        next_frame().await
    }
}
