use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// FuelType – the closed set of fuel categories the dashboard recognises
// ---------------------------------------------------------------------------

/// Fuel categories accepted by the dashboard. Anything else (LPG, CNG, …)
/// is dropped at load time and never reaches a filter or aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FuelType {
    Petrol,
    Diesel,
    Hybrid,
    Electric,
}

impl FuelType {
    /// Case-insensitive parse: "petrol", "PETROL" and "Petrol" are the same
    /// category. Returns `None` for values outside the valid set.
    pub fn parse(s: &str) -> Option<FuelType> {
        match s.trim().to_ascii_lowercase().as_str() {
            "petrol" => Some(FuelType::Petrol),
            "diesel" => Some(FuelType::Diesel),
            "hybrid" => Some(FuelType::Hybrid),
            "electric" => Some(FuelType::Electric),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Petrol => "Petrol",
            FuelType::Diesel => "Diesel",
            FuelType::Hybrid => "Hybrid",
            FuelType::Electric => "Electric",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CarRecord – one row of the source CSV
// ---------------------------------------------------------------------------

/// A single car listing (one row of the cleaned dataset).
#[derive(Debug, Clone, PartialEq)]
pub struct CarRecord {
    pub brand: String,
    pub fuel_type: FuelType,
    pub transmission_type: String,
    pub color: String,
    pub price_in_euro: f64,
    pub year: i32,
}

// ---------------------------------------------------------------------------
// CategoryColumn – which categorical column a grouped aggregate keys on
// ---------------------------------------------------------------------------

/// The categorical columns the charts group by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryColumn {
    Brand,
    Color,
    TransmissionType,
}

impl CategoryColumn {
    pub fn value_of<'a>(&self, car: &'a CarRecord) -> &'a str {
        match self {
            CategoryColumn::Brand => &car.brand,
            CategoryColumn::Color => &car.color,
            CategoryColumn::TransmissionType => &car.transmission_type,
        }
    }
}

// ---------------------------------------------------------------------------
// CarDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed unique value sets for building
/// the filter widgets. Read-only after load; filtered views are index lists.
#[derive(Debug, Clone)]
pub struct CarDataset {
    /// All listings (rows).
    pub cars: Vec<CarRecord>,
    /// Sorted unique brands.
    pub brands: BTreeSet<String>,
    /// Sorted unique fuel types present in the data.
    pub fuel_types: BTreeSet<FuelType>,
    /// Sorted unique transmission types.
    pub transmission_types: BTreeSet<String>,
}

impl CarDataset {
    /// Build the unique value indices from the loaded records.
    pub fn from_records(cars: Vec<CarRecord>) -> Self {
        let mut brands = BTreeSet::new();
        let mut fuel_types = BTreeSet::new();
        let mut transmission_types = BTreeSet::new();

        for car in &cars {
            brands.insert(car.brand.clone());
            fuel_types.insert(car.fuel_type);
            transmission_types.insert(car.transmission_type.clone());
        }
        CarDataset {
            cars,
            brands,
            fuel_types,
            transmission_types,
        }
    }

    /// Number of listings.
    pub fn len(&self) -> usize {
        self.cars.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fuel_type_parse_is_case_insensitive() {
        for spelling in ["petrol", "PETROL", "Petrol", " petrol "] {
            assert_eq!(FuelType::parse(spelling), Some(FuelType::Petrol));
        }
        assert_eq!(FuelType::parse("electric"), Some(FuelType::Electric));
        assert_eq!(FuelType::parse("LPG"), None);
        assert_eq!(FuelType::parse(""), None);
    }

    #[test]
    fn dataset_indexes_unique_values() {
        let car = |brand: &str, trans: &str| CarRecord {
            brand: brand.to_string(),
            fuel_type: FuelType::Petrol,
            transmission_type: trans.to_string(),
            color: "black".to_string(),
            price_in_euro: 10_000.0,
            year: 2018,
        };
        let ds = CarDataset::from_records(vec![
            car("audi", "Manual"),
            car("audi", "Automatic"),
            car("bmw", "Manual"),
        ]);
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.brands.len(), 2);
        assert_eq!(ds.transmission_types.len(), 2);
        assert_eq!(ds.fuel_types.len(), 1);
    }
}
