#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use projector_paint::{AppConfig, PaintApp};

fn main() -> eframe::Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = AppConfig::default();
    let title = config.title.clone();
    let native_options = config.native_options();

    eframe::run_native(
        &title,
        native_options,
        Box::new(|cc| Ok(Box::new(PaintApp::new(cc, config)))),
    )
}
