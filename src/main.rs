mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::Context;
use app::CarDashApp;
use eframe::egui;

/// Fixed relative location of the pre-cleaned dataset.
const DEFAULT_DATA_PATH: &str = "data/cleaned_car_data.csv";
const DATA_PATH_ENV: &str = "CAR_DASHBOARD_DATA";

/// Dataset path resolution: CLI argument, then environment, then default.
fn dataset_path() -> PathBuf {
    if let Some(arg) = std::env::args().nth(1) {
        return PathBuf::from(arg);
    }
    if let Ok(var) = std::env::var(DATA_PATH_ENV) {
        return PathBuf::from(var);
    }
    PathBuf::from(DEFAULT_DATA_PATH)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Load once, up front: a missing or malformed dataset is a fatal
    // startup error, not something the UI recovers from.
    let path = dataset_path();
    let dataset = data::loader::load_dataset(&path)
        .with_context(|| format!("loading car dataset from {}", path.display()))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 840.0])
            .with_min_inner_size([700.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Car Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(CarDashApp::new(dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("event loop failed: {e}"))?;
    Ok(())
}
