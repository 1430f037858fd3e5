use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;
use thiserror::Error;

use super::model::{CarDataset, CarRecord, FuelType};

/// Columns the dataset must provide. The leading unnamed index column and
/// any extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "brand",
    "fuel_type",
    "transmission_type",
    "color",
    "price_in_euro",
    "year",
];

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Fatal dataset problems: missing file, missing columns, malformed rows.
/// The upstream data is assumed pre-cleaned, so none of these are retried.
#[derive(Debug, Error)]
pub enum DataAccessError {
    #[error("failed to open dataset at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset is missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("malformed dataset")]
    Csv(#[from] csv::Error),
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Raw row as it appears in the CSV; `serde` maps fields by header name,
/// which discards the index column and anything else we don't ask for.
#[derive(Debug, Deserialize)]
struct RawRow {
    brand: String,
    fuel_type: String,
    transmission_type: String,
    color: String,
    price_in_euro: f64,
    year: i32,
}

/// Parse car records from any reader. Rows whose fuel type falls outside
/// the valid set are dropped; non-numeric price/year values are fatal.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<CarRecord>, DataAccessError> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers = rdr.headers()?.clone();
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(DataAccessError::MissingColumn(col));
        }
    }

    let mut cars = Vec::new();
    let mut dropped = 0usize;
    for result in rdr.deserialize::<RawRow>() {
        let raw = result?;
        match FuelType::parse(&raw.fuel_type) {
            Some(fuel_type) => cars.push(CarRecord {
                brand: raw.brand,
                fuel_type,
                transmission_type: raw.transmission_type,
                color: raw.color,
                price_in_euro: raw.price_in_euro,
                year: raw.year,
            }),
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        log::debug!("dropped {dropped} rows with unrecognised fuel types");
    }
    Ok(cars)
}

// ---------------------------------------------------------------------------
// Memoized process-wide dataset
// ---------------------------------------------------------------------------

static DATASET: OnceLock<CarDataset> = OnceLock::new();

/// Load the car dataset from `path`. The result is memoized for the process
/// lifetime: repeated calls return the same in-memory dataset without
/// touching the file again.
pub fn load_dataset(path: &Path) -> Result<&'static CarDataset, DataAccessError> {
    if let Some(ds) = DATASET.get() {
        return Ok(ds);
    }

    let file = std::fs::File::open(path).map_err(|source| DataAccessError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = CarDataset::from_records(read_records(file)?);
    log::info!(
        "loaded {} cars ({} brands, {} transmission types) from {}",
        dataset.len(),
        dataset.brands.len(),
        dataset.transmission_types.len(),
        path.display()
    );
    Ok(DATASET.get_or_init(|| dataset))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
,brand,model,fuel_type,transmission_type,color,price_in_euro,year
0,audi,a3,Petrol,Manual,black,15000.0,2017
1,bmw,320,Diesel,Automatic,blue,22000.5,2019
2,ford,focus,petrol,Manual,red,9000.0,2015
";

    #[test]
    fn parses_rows_and_ignores_index_and_extra_columns() {
        let cars = read_records(SAMPLE.as_bytes()).unwrap();
        assert_eq!(cars.len(), 3);
        assert_eq!(cars[0].brand, "audi");
        assert_eq!(cars[1].price_in_euro, 22000.5);
        assert_eq!(cars[1].year, 2019);
    }

    #[test]
    fn fuel_spellings_normalize_to_one_category() {
        let cars = read_records(SAMPLE.as_bytes()).unwrap();
        assert_eq!(cars[0].fuel_type, FuelType::Petrol);
        assert_eq!(cars[2].fuel_type, FuelType::Petrol);
    }

    #[test]
    fn rows_with_invalid_fuel_are_dropped() {
        let csv = "\
,brand,fuel_type,transmission_type,color,price_in_euro,year
0,dacia,LPG,Manual,white,7000.0,2012
1,audi,Petrol,Manual,black,15000.0,2017
";
        let cars = read_records(csv.as_bytes()).unwrap();
        assert_eq!(cars.len(), 1);
        assert_eq!(cars[0].brand, "audi");
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let csv = "\
,brand,fuel_type,transmission_type,color,year
0,audi,Petrol,Manual,black,2017
";
        match read_records(csv.as_bytes()) {
            Err(DataAccessError::MissingColumn(col)) => assert_eq!(col, "price_in_euro"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_price_is_fatal() {
        let csv = "\
,brand,fuel_type,transmission_type,color,price_in_euro,year
0,audi,Petrol,Manual,black,cheap,2017
";
        assert!(matches!(
            read_records(csv.as_bytes()),
            Err(DataAccessError::Csv(_))
        ));
    }
}
