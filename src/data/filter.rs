use std::collections::BTreeSet;

use super::model::{CarDataset, FuelType};

// ---------------------------------------------------------------------------
// Filter selection: what the sidebar widgets currently hold
// ---------------------------------------------------------------------------

/// Current sidebar selection. Brand is a multi-select; fuel and transmission
/// are single-choice.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection {
    pub brands: BTreeSet<String>,
    pub fuel_type: FuelType,
    pub transmission_type: String,
}

impl FilterSelection {
    /// Initial state mirroring the sidebar defaults: every brand selected,
    /// first fuel and transmission value picked.
    pub fn init(dataset: &CarDataset) -> Self {
        FilterSelection {
            brands: dataset.brands.clone(),
            fuel_type: dataset
                .fuel_types
                .iter()
                .next()
                .copied()
                .unwrap_or(FuelType::Petrol),
            transmission_type: dataset
                .transmission_types
                .iter()
                .next()
                .cloned()
                .unwrap_or_default(),
        }
    }
}

/// Indices of cars where brand is in the selected set AND fuel type AND
/// transmission type match exactly. An empty result is a normal outcome
/// ("no data for the current filter"), not an error; callers short-circuit
/// the render pass on it.
pub fn filtered_indices(dataset: &CarDataset, selection: &FilterSelection) -> Vec<usize> {
    dataset
        .cars
        .iter()
        .enumerate()
        .filter(|(_, car)| {
            selection.brands.contains(&car.brand)
                && car.fuel_type == selection.fuel_type
                && car.transmission_type == selection.transmission_type
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CarRecord;

    fn car(brand: &str, fuel: FuelType, trans: &str, price: f64) -> CarRecord {
        CarRecord {
            brand: brand.to_string(),
            fuel_type: fuel,
            transmission_type: trans.to_string(),
            color: "black".to_string(),
            price_in_euro: price,
            year: 2018,
        }
    }

    fn sample() -> CarDataset {
        CarDataset::from_records(vec![
            car("A", FuelType::Petrol, "X", 10.0),
            car("A", FuelType::Petrol, "X", 20.0),
            car("B", FuelType::Petrol, "X", 30.0),
            car("A", FuelType::Diesel, "X", 40.0),
            car("A", FuelType::Petrol, "Y", 50.0),
        ])
    }

    fn select(brands: &[&str], fuel: FuelType, trans: &str) -> FilterSelection {
        FilterSelection {
            brands: brands.iter().map(|b| b.to_string()).collect(),
            fuel_type: fuel,
            transmission_type: trans.to_string(),
        }
    }

    #[test]
    fn matches_all_three_predicates() {
        let ds = sample();
        let sel = select(&["A"], FuelType::Petrol, "X");
        let idx = filtered_indices(&ds, &sel);
        assert_eq!(idx, vec![0, 1]);
        for &i in &idx {
            let c = &ds.cars[i];
            assert_eq!(c.brand, "A");
            assert_eq!(c.fuel_type, FuelType::Petrol);
            assert_eq!(c.transmission_type, "X");
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let ds = sample();
        let sel = select(&["A", "B"], FuelType::Petrol, "X");
        let once = filtered_indices(&ds, &sel);

        // Re-filter the already-filtered rows: everything must survive.
        let subset =
            CarDataset::from_records(once.iter().map(|&i| ds.cars[i].clone()).collect());
        let twice = filtered_indices(&subset, &sel);
        assert_eq!(twice.len(), once.len());
        assert_eq!(twice, (0..once.len()).collect::<Vec<_>>());
    }

    #[test]
    fn no_match_yields_empty_not_error() {
        let ds = sample();
        let sel = select(&["B"], FuelType::Diesel, "Y");
        assert!(filtered_indices(&ds, &sel).is_empty());

        let none = select(&[], FuelType::Petrol, "X");
        assert!(filtered_indices(&ds, &none).is_empty());
    }

    #[test]
    fn init_selects_every_brand_and_first_choices() {
        let ds = sample();
        let sel = FilterSelection::init(&ds);
        assert_eq!(sel.brands, ds.brands);
        assert_eq!(sel.fuel_type, FuelType::Petrol);
        assert_eq!(sel.transmission_type, "X");
    }
}
