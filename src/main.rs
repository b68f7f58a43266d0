#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1130.0, 600.0])
            .with_min_inner_size([200.0, 150.0])
            .with_title("Mega Paint App"),
        ..Default::default()
    };

    eframe::run_native(
        "Mega Paint App",
        options,
        Box::new(|cc| Ok(Box::new(mega_paint::PaintApp::new(cc)))),
    )
}
