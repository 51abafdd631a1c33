mod error;
mod state;
mod processing;
mod ui;
mod app;

use app::RoughPlotApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("RoughPlot")
            .with_inner_size([1200.0, 760.0])
            .with_min_inner_size([720.0, 480.0]),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native(
        "RoughPlot",
        options,
        Box::new(|cc| Ok(Box::new(RoughPlotApp::new(cc)))),
    )
}
