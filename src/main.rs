//! drawing-rs - Parametric Shape Playground
//!
//! Pick a demo, drag its sliders, and watch the shape rebuild:
//! - Arc, Triangle, Flower, Trapezoid, Checkerboard, Arrow
//! - Spirograph curves
//! - Color cycling rings

use eframe::egui;

use drawing_rs::app::DrawingApp;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting drawing-rs");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_title("drawing-rs"),
        ..Default::default()
    };

    eframe::run_native(
        "drawing-rs",
        options,
        Box::new(|cc| Ok(Box::new(DrawingApp::new(cc)))),
    )
}
