use crate::data::filter::{filtered_indices, FilterSelection};
use crate::data::model::{CarDataset, CarRecord, FuelType};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. The dataset itself is the
/// process-wide memoized load; everything here is derived from it plus the
/// sidebar selection.
pub struct AppState {
    /// The immutable, memoized dataset.
    pub dataset: &'static CarDataset,

    /// Current sidebar filter selection.
    pub selection: FilterSelection,

    /// Indices of cars passing the current filters (cached).
    pub visible: Vec<usize>,

    /// Bin width for the manufacturing-year histogram.
    pub year_bucket_width: i32,
}

impl AppState {
    pub fn new(dataset: &'static CarDataset) -> Self {
        let selection = FilterSelection::init(dataset);
        let visible = filtered_indices(dataset, &selection);
        AppState {
            dataset,
            selection,
            visible,
            year_bucket_width: 1,
        }
    }

    /// Recompute `visible` after a filter change.
    pub fn refilter(&mut self) {
        self.visible = filtered_indices(self.dataset, &self.selection);
    }

    /// The filtered view as record refs, freshly built per render pass.
    pub fn visible_cars(&self) -> Vec<&'static CarRecord> {
        self.visible.iter().map(|&i| &self.dataset.cars[i]).collect()
    }

    /// Toggle a single brand in the multi-select.
    pub fn toggle_brand(&mut self, brand: &str) {
        if !self.selection.brands.remove(brand) {
            self.selection.brands.insert(brand.to_string());
        }
        self.refilter();
    }

    pub fn select_all_brands(&mut self) {
        self.selection.brands = self.dataset.brands.clone();
        self.refilter();
    }

    pub fn select_no_brands(&mut self) {
        self.selection.brands.clear();
        self.refilter();
    }

    pub fn set_fuel_type(&mut self, fuel: FuelType) {
        self.selection.fuel_type = fuel;
        self.refilter();
    }

    pub fn set_transmission_type(&mut self, transmission: &str) {
        self.selection.transmission_type = transmission.to_string();
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CarRecord;

    fn leak_dataset() -> &'static CarDataset {
        let car = |brand: &str, fuel: FuelType, trans: &str| CarRecord {
            brand: brand.to_string(),
            fuel_type: fuel,
            transmission_type: trans.to_string(),
            color: "grey".to_string(),
            price_in_euro: 1000.0,
            year: 2015,
        };
        Box::leak(Box::new(CarDataset::from_records(vec![
            car("audi", FuelType::Petrol, "Manual"),
            car("audi", FuelType::Diesel, "Manual"),
            car("bmw", FuelType::Petrol, "Manual"),
        ])))
    }

    #[test]
    fn selection_changes_keep_visible_in_sync() {
        let mut state = AppState::new(leak_dataset());
        assert_eq!(state.visible.len(), 2); // both Petrol + Manual rows

        state.toggle_brand("bmw");
        assert_eq!(state.visible.len(), 1);

        state.set_fuel_type(FuelType::Diesel);
        assert_eq!(state.visible.len(), 1);
        assert_eq!(state.dataset.cars[state.visible[0]].brand, "audi");

        state.select_no_brands();
        assert!(state.visible.is_empty());

        state.select_all_brands();
        state.set_fuel_type(FuelType::Petrol);
        assert_eq!(state.visible.len(), 2);
    }
}
