//! PIXEL HOPPER: a vertically-scrolling arcade platformer
//!
//! Bounce up an endless column of procedurally generated platforms, grab
//! coins, hitch helicopter rides. The simulation core lives in `game` and
//! is frame-stepped and clock-free; everything around it (menus, shops,
//! rendering, save file, music) is thin glue.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod audio;
mod game;
mod input;
mod profile;
mod render;
mod screens;
mod storage;

use macroquad::prelude::*;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Pixel Hopper v{}", VERSION),
        window_width: 400,
        window_height: 600,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    // Route the window close button through our own quit handling so the
    // profile gets a parting save
    prevent_quit();

    app::run().await;
}
