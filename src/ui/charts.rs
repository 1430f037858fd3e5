use std::ops::RangeInclusive;

use eframe::egui::{self, RichText, Sense, Shape, Stroke, Ui, Vec2};
use egui_plot::{Bar, BarChart, GridMark, Plot};

use crate::color::{generate_palette, BAR_ACCENT};
use crate::data::model::{CarRecord, CategoryColumn};
use crate::data::stats;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Dashboard body (central panel)
// ---------------------------------------------------------------------------

/// Render the full dashboard for the current selection. On an empty
/// selection the whole body is replaced by a warning; no aggregate runs.
pub fn dashboard(ui: &mut Ui, state: &mut AppState) {
    let cars = state.visible_cars();
    if cars.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No data available based on the current filter settings!");
        });
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            kpi_row(ui, &cars);
            ui.separator();
            price_charts_row(ui, &cars);
            ui.separator();
            bottom_row(ui, state, &cars);
        });
}

// ---------------------------------------------------------------------------
// KPI row
// ---------------------------------------------------------------------------

fn kpi_row(ui: &mut Ui, cars: &[&CarRecord]) {
    ui.columns(3, |cols: &mut [Ui]| {
        kpi(
            &mut cols[0],
            "Average Price",
            format!("€ {}", thousands(stats::mean_price(cars))),
        );
        kpi(
            &mut cols[1],
            "Car Count",
            format!("{} Cars", thousands(cars.len() as i64)),
        );
        kpi(
            &mut cols[2],
            "First Car Manufacturing Year",
            stats::earliest_year(cars).to_string(),
        );
    });
}

fn kpi(ui: &mut Ui, label: &str, value: String) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(label).strong());
        ui.heading(value);
    });
}

/// Small metric widget (label over value), used for min/max/median price.
fn metric(ui: &mut Ui, label: &str, value: String) {
    ui.label(RichText::new(label).small());
    ui.heading(value);
    ui.add_space(8.0);
}

// ---------------------------------------------------------------------------
// Price-by-category bar charts
// ---------------------------------------------------------------------------

fn price_charts_row(ui: &mut Ui, cars: &[&CarRecord]) {
    ui.columns(2, |cols: &mut [Ui]| {
        category_bar_chart(
            &mut cols[0],
            "price_by_color",
            "Price in Euros based on Color",
            cars,
            CategoryColumn::Color,
            true,
        );
        category_bar_chart(
            &mut cols[1],
            "price_by_brand",
            "Price in Euros based on Brand",
            cars,
            CategoryColumn::Brand,
            false,
        );
    });
}

/// Bar chart of total price per category, ascending by total. Horizontal
/// charts put the category labels on the y axis.
fn category_bar_chart(
    ui: &mut Ui,
    id: &str,
    title: &str,
    cars: &[&CarRecord],
    column: CategoryColumn,
    horizontal: bool,
) {
    let totals = stats::sum_by_category(cars, column);
    let labels: Vec<String> = totals.iter().map(|(cat, _)| cat.clone()).collect();

    let bars: Vec<Bar> = totals
        .iter()
        .enumerate()
        .map(|(i, (cat, total))| {
            Bar::new(i as f64, *total)
                .width(0.6)
                .fill(BAR_ACCENT)
                .name(cat)
        })
        .collect();
    let mut chart = BarChart::new(bars).name(title);
    if horizontal {
        chart = chart.horizontal();
    }

    let label_fmt = move |mark: GridMark, _range: &RangeInclusive<f64>| {
        let rounded = mark.value.round();
        if (mark.value - rounded).abs() > 1e-4 || rounded < 0.0 {
            return String::new();
        }
        labels.get(rounded as usize).cloned().unwrap_or_default()
    };

    ui.strong(title);
    let mut plot = Plot::new(id.to_string())
        .height(260.0)
        .show_grid(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false);
    plot = if horizontal {
        plot.y_axis_formatter(label_fmt)
    } else {
        plot.x_axis_formatter(label_fmt)
    };
    plot.show(ui, |plot_ui| plot_ui.bar_chart(chart));
}

// ---------------------------------------------------------------------------
// Bottom row: price metrics, transmission donut, year histogram
// ---------------------------------------------------------------------------

fn bottom_row(ui: &mut Ui, state: &mut AppState, cars: &[&CarRecord]) {
    // The transmission distribution covers the full dataset, not the
    // filtered view.
    let all_cars: Vec<&CarRecord> = state.dataset.cars.iter().collect();
    let transmission_dist = stats::count_by_category(&all_cars, CategoryColumn::TransmissionType);

    ui.columns(3, |cols: &mut [Ui]| {
        metric(
            &mut cols[0],
            "Minimum Price in Euros of Cars Selected (€)",
            format_euro(stats::min_price(cars)),
        );
        metric(
            &mut cols[0],
            "Maximum Price in Euros of Cars Selected (€)",
            format_euro(stats::max_price(cars)),
        );
        metric(
            &mut cols[0],
            "Median Price in Euros of Cars Selected (€)",
            format_euro(stats::median_price(cars)),
        );

        cols[1].strong("Transmission Type");
        donut_chart(&mut cols[1], &transmission_dist);

        year_histogram(&mut cols[2], state, cars);
    });
}

// ---------------------------------------------------------------------------
// Donut chart (egui painter; egui_plot has no pie primitive)
// ---------------------------------------------------------------------------

fn donut_chart(ui: &mut Ui, slices: &[(String, usize)]) {
    let total: usize = slices.iter().map(|(_, n)| n).sum();
    if total == 0 {
        ui.label("No data");
        return;
    }
    let palette = generate_palette(slices.len());

    let side = ui.available_width().min(220.0);
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(side), Sense::hover());
    let painter = ui.painter_at(rect);
    let center = rect.center();
    let radius = rect.width().min(rect.height()) * 0.45;

    // Wedges as small triangle fans; a single polygon per slice would not
    // stay convex for slices wider than a half turn.
    let mut angle = -std::f64::consts::FRAC_PI_2;
    for (i, (_, count)) in slices.iter().enumerate() {
        let sweep = (*count as f64 / total as f64) * std::f64::consts::TAU;
        let steps = ((sweep / 0.05).ceil() as usize).max(2);
        let point_at = |a: f64| center + Vec2::new(a.cos() as f32, a.sin() as f32) * radius;
        for s in 0..steps {
            let a0 = angle + sweep * (s as f64 / steps as f64);
            let a1 = angle + sweep * ((s + 1) as f64 / steps as f64);
            painter.add(Shape::convex_polygon(
                vec![center, point_at(a0), point_at(a1)],
                palette[i],
                Stroke::NONE,
            ));
        }
        angle += sweep;
    }
    // Punch the hole to get a donut.
    painter.circle_filled(center, radius * 0.4, ui.visuals().panel_fill);

    // Legend
    for (i, (label, count)) in slices.iter().enumerate() {
        ui.horizontal(|ui: &mut Ui| {
            let (swatch, _) = ui.allocate_exact_size(Vec2::splat(10.0), Sense::hover());
            ui.painter()
                .rect_filled(swatch, egui::CornerRadius::same(2), palette[i]);
            ui.label(format!("{label}: {count}"));
        });
    }
}

// ---------------------------------------------------------------------------
// Manufacturing-year histogram
// ---------------------------------------------------------------------------

fn year_histogram(ui: &mut Ui, state: &mut AppState, cars: &[&CarRecord]) {
    ui.strong("Manufacturing Distribution");
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Bucket width:");
        ui.add(egui::DragValue::new(&mut state.year_bucket_width).range(1..=10));
    });

    let buckets = stats::year_histogram_buckets(cars, state.year_bucket_width);
    let width = (state.year_bucket_width.max(1)) as f64;
    let bars: Vec<Bar> = buckets
        .iter()
        .map(|b| {
            Bar::new(b.start as f64 + width / 2.0, b.count as f64)
                .width(width * 0.9)
                .fill(BAR_ACCENT)
                .name(format!("{}–{}", b.start, b.end - 1))
        })
        .collect();

    let year_fmt = |mark: GridMark, _range: &RangeInclusive<f64>| {
        let rounded = mark.value.round();
        if (mark.value - rounded).abs() > 1e-4 {
            return String::new();
        }
        format!("{}", rounded as i64)
    };

    Plot::new("year_histogram")
        .height(240.0)
        .show_grid(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .x_axis_formatter(year_fmt)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("cars"));
        });
}

// ---------------------------------------------------------------------------
// Formatting helpers
// ---------------------------------------------------------------------------

/// Format an integer with `,` thousands separators.
fn thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if n < 0 {
        format!("-{out}")
    } else {
        out
    }
}

/// Euro amount for the metric widgets; fractional cents only when present.
fn format_euro(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("€ {}", thousands(v as i64))
    } else {
        format!("€ {v:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1_000), "1,000");
        assert_eq!(thousands(2_345_678), "2,345,678");
        assert_eq!(thousands(-12_500), "-12,500");
    }

    #[test]
    fn euro_formatting_hides_whole_cents() {
        assert_eq!(format_euro(15_000.0), "€ 15,000");
        assert_eq!(format_euro(15_000.5), "€ 15000.50");
    }
}
