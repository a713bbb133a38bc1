use chrono::{Datelike, NaiveDate};
use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Line, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::state::AppState;

const TREND_COLOR: Color32 = Color32::from_rgb(65, 105, 225); // royal blue

// ---------------------------------------------------------------------------
// Date <-> plot coordinate conversion
// ---------------------------------------------------------------------------

fn date_to_x(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

fn x_to_date(x: f64) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
}

fn x_label(x: f64) -> String {
    x_to_date(x)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Sales trend line chart
// ---------------------------------------------------------------------------

/// Render the sales-over-time chart: one marker per record, connected in
/// view order (duplicate dates stay separate points).
pub fn trend_plot(ui: &mut Ui, state: &AppState, height: f32) {
    ui.strong("Sales Trend Over Time");

    if state.series.is_empty() {
        ui.add_space(8.0);
        ui.label("No records in the selected range.");
        return;
    }

    let points: Vec<[f64; 2]> = state
        .series
        .iter()
        .map(|&(date, total)| [date_to_x(date), total])
        .collect();

    Plot::new("sales_trend")
        .height(height)
        .x_axis_label("Date")
        .y_axis_label("Total Sales")
        .x_axis_formatter(|mark, _range| x_label(mark.value))
        .label_formatter(|name, value: &PlotPoint| {
            let date = x_label(value.x);
            if name.is_empty() {
                format!("{date}\n${:.2}", value.y)
            } else {
                format!("{name}\n{date}\n${:.2}", value.y)
            }
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(points.clone()))
                    .color(TREND_COLOR)
                    .width(1.5),
            );
            plot_ui.points(
                Points::new(PlotPoints::from(points))
                    .shape(MarkerShape::Circle)
                    .radius(3.0)
                    .color(TREND_COLOR),
            );
        });
}

// ---------------------------------------------------------------------------
// Region pie chart
// ---------------------------------------------------------------------------

/// Start angle matching the original dashboard's layout (degrees,
/// counter-clockwise from the positive x axis).
const PIE_START_DEG: f64 = 140.0;

/// Segments used for a full circle; each slice gets a proportional share.
const PIE_SEGMENTS: usize = 128;

/// Render the sales-by-region pie: one sector per region, labelled with its
/// share of total revenue to one decimal place.
pub fn region_pie(ui: &mut Ui, state: &AppState) {
    ui.strong("Sales by Region");

    let total: f64 = state.breakdown.values().sum();
    if total <= 0.0 {
        ui.add_space(8.0);
        ui.label("No records in the selected range.");
        return;
    }

    Plot::new("region_pie")
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .include_x(-1.6)
        .include_x(1.6)
        .include_y(-1.3)
        .include_y(1.3)
        .show(ui, |plot_ui| {
            let mut angle = PIE_START_DEG.to_radians();

            for (region, &sum) in &state.breakdown {
                let fraction = sum / total;
                let sweep = fraction * std::f64::consts::TAU;
                let color = state.region_colors.color_for(region);

                // Sector as a triangle fan from the centre.
                let steps = ((fraction * PIE_SEGMENTS as f64).ceil() as usize).max(2);
                let mut vertices = vec![[0.0, 0.0]];
                for s in 0..=steps {
                    let a = angle + sweep * (s as f64 / steps as f64);
                    vertices.push([a.cos(), a.sin()]);
                }

                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(vertices))
                        .fill_color(color)
                        .stroke(Stroke::new(1.0, Color32::WHITE)),
                );

                // Percentage label just outside the sector's midpoint.
                let mid = angle + sweep / 2.0;
                let label_pos = PlotPoint::new(mid.cos() * 1.15, mid.sin() * 1.15);
                plot_ui.text(Text::new(
                    label_pos,
                    RichText::new(format!("{region} {:.1}%", fraction * 100.0))
                        .color(color)
                        .strong(),
                ));

                angle += sweep;
            }
        });
}
