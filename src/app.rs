use eframe::egui;

use crate::data::model::CarDataset;
use crate::state::AppState;
use crate::ui::{charts, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CarDashApp {
    pub state: AppState,
}

impl CarDashApp {
    pub fn new(dataset: &'static CarDataset) -> Self {
        CarDashApp {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for CarDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title + row counts ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: KPIs and charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            charts::dashboard(ui, &mut self.state);
        });
    }
}
