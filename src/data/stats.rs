use std::collections::BTreeMap;

use super::model::{CarRecord, CategoryColumn};

// ---------------------------------------------------------------------------
// Scalar KPIs
// ---------------------------------------------------------------------------
//
// All aggregates assume a non-empty selection; callers check emptiness and
// short-circuit the render pass before getting here.

/// Arithmetic mean of `price_in_euro`, truncated to a whole euro for display.
pub fn mean_price(cars: &[&CarRecord]) -> i64 {
    debug_assert!(!cars.is_empty(), "mean_price on empty selection");
    let total: f64 = cars.iter().map(|c| c.price_in_euro).sum();
    (total / cars.len() as f64) as i64
}

/// Minimum of the year column (first manufacturing year in the selection).
pub fn earliest_year(cars: &[&CarRecord]) -> i32 {
    debug_assert!(!cars.is_empty(), "earliest_year on empty selection");
    cars.iter().map(|c| c.year).min().unwrap_or(0)
}

pub fn min_price(cars: &[&CarRecord]) -> f64 {
    debug_assert!(!cars.is_empty(), "min_price on empty selection");
    cars.iter().map(|c| c.price_in_euro).fold(f64::INFINITY, f64::min)
}

pub fn max_price(cars: &[&CarRecord]) -> f64 {
    debug_assert!(!cars.is_empty(), "max_price on empty selection");
    cars.iter()
        .map(|c| c.price_in_euro)
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Median price; for an even-sized selection this is the mean of the two
/// middle values, matching the usual dataframe convention.
pub fn median_price(cars: &[&CarRecord]) -> f64 {
    debug_assert!(!cars.is_empty(), "median_price on empty selection");
    let mut prices: Vec<f64> = cars.iter().map(|c| c.price_in_euro).collect();
    prices.sort_by(f64::total_cmp);
    let mid = prices.len() / 2;
    if prices.len() % 2 == 1 {
        prices[mid]
    } else {
        (prices[mid - 1] + prices[mid]) / 2.0
    }
}

// ---------------------------------------------------------------------------
// Grouped aggregates for the charts
// ---------------------------------------------------------------------------

/// Total price per category, sorted ascending by total. The sort order
/// drives the visual order of the bar charts.
pub fn sum_by_category(cars: &[&CarRecord], column: CategoryColumn) -> Vec<(String, f64)> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for car in cars {
        *totals.entry(column.value_of(car)).or_insert(0.0) += car.price_in_euro;
    }
    let mut out: Vec<(String, f64)> = totals
        .into_iter()
        .map(|(cat, total)| (cat.to_string(), total))
        .collect();
    out.sort_by(|a, b| a.1.total_cmp(&b.1));
    out
}

/// Row count per category, sorted ascending by category label (not by
/// count). The transmission donut has always been drawn in label order.
pub fn count_by_category(cars: &[&CarRecord], column: CategoryColumn) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for car in cars {
        *counts.entry(column.value_of(car)).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(cat, n)| (cat.to_string(), n))
        .collect()
}

// ---------------------------------------------------------------------------
// Year histogram
// ---------------------------------------------------------------------------

/// One equal-width histogram bin over the year column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearBucket {
    /// Inclusive start of the bin.
    pub start: i32,
    /// Exclusive end of the bin.
    pub end: i32,
    pub count: usize,
}

/// Equal-width binning of the year column. Bucket edges are aligned to
/// multiples of `bucket_width` (clamped to at least 1).
pub fn year_histogram_buckets(cars: &[&CarRecord], bucket_width: i32) -> Vec<YearBucket> {
    debug_assert!(!cars.is_empty(), "year_histogram_buckets on empty selection");
    let width = bucket_width.max(1);
    let min = cars.iter().map(|c| c.year).min().unwrap_or(0);
    let max = cars.iter().map(|c| c.year).max().unwrap_or(0);

    let first = min.div_euclid(width) * width;
    let n_buckets = ((max - first) / width + 1) as usize;

    let mut buckets: Vec<YearBucket> = (0..n_buckets as i32)
        .map(|i| YearBucket {
            start: first + i * width,
            end: first + (i + 1) * width,
            count: 0,
        })
        .collect();
    for car in cars {
        buckets[((car.year - first) / width) as usize].count += 1;
    }
    buckets
}
