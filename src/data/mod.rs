/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  cleaned_car_data.csv
///        │
///        ▼
///   ┌────────┐
///   │ loader │  parse + normalize fuel types → memoized CarDataset
///   └────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ CarDataset │  Vec<CarRecord>, unique value sets
///   └────────────┘
///        │
///        ▼
///   ┌────────┐       ┌───────┐
///   │ filter │ ────▶ │ stats │  KPIs + grouped aggregates for the charts
///   └────────┘       └───────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;
