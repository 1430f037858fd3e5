use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel: brand multi-select plus transmission and
/// fuel radio groups. Every change refilters immediately.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter");
    ui.separator();

    // Clone the option lists so we can mutate state inside the loops.
    let brands: Vec<String> = state.dataset.brands.iter().cloned().collect();
    let transmissions: Vec<String> = state.dataset.transmission_types.iter().cloned().collect();
    let fuels: Vec<_> = state.dataset.fuel_types.iter().copied().collect();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Brand multi-select ----
            let header = format!("Brand  ({}/{})", state.selection.brands.len(), brands.len());
            egui::CollapsingHeader::new(RichText::new(header).strong())
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    ui.horizontal(|ui: &mut Ui| {
                        if ui.small_button("All").clicked() {
                            state.select_all_brands();
                        }
                        if ui.small_button("None").clicked() {
                            state.select_no_brands();
                        }
                    });

                    for brand in &brands {
                        let mut checked = state.selection.brands.contains(brand);
                        if ui.checkbox(&mut checked, brand).changed() {
                            state.toggle_brand(brand);
                        }
                    }
                });

            ui.separator();

            // ---- Transmission type (single choice) ----
            ui.strong("Transmission type");
            for trans in &transmissions {
                if ui
                    .radio(state.selection.transmission_type == *trans, trans)
                    .clicked()
                {
                    state.set_transmission_type(trans);
                }
            }

            ui.separator();

            // ---- Fuel type (single choice) ----
            ui.strong("Fuel type");
            for fuel in &fuels {
                if ui
                    .radio(state.selection.fuel_type == *fuel, fuel.as_str())
                    .clicked()
                {
                    state.set_fuel_type(*fuel);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar: title and row-count status.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("🏎 Car Dashboard");
        ui.separator();
        ui.label(format!(
            "{} cars loaded, {} matching the current filter",
            state.dataset.len(),
            state.visible.len()
        ));
    });
}
