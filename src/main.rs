mod app;
mod color;
mod config;
mod data;
mod state;
mod stats;
mod ui;

use app::PatternStatsApp;
use config::ViewerConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = ViewerConfig::from_env();
    log::debug!("Using {config:?}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Pattern Stats – Input Pattern Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(PatternStatsApp::new(config)))),
    )
}
