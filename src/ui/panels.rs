use anyhow::Context;
use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::DatePickerButton;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – date range filter and download
// ---------------------------------------------------------------------------

/// Render the left filter panel: date pickers, reset, CSV download.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Date Range");
    ui.separator();

    let Some(range) = state.range else {
        ui.label("No dataset loaded.");
        return;
    };

    // Copy out so the pickers can mutate; write back only on change.
    let mut start = range.start;
    let mut end = range.end;
    let mut changed = false;

    ui.label("Start date");
    changed |= ui
        .add(DatePickerButton::new(&mut start).id_salt("start_date"))
        .changed();
    ui.add_space(4.0);

    ui.label("End date");
    changed |= ui
        .add(DatePickerButton::new(&mut end).id_salt("end_date"))
        .changed();

    if changed {
        state.set_range(start, end);
    }

    ui.add_space(8.0);
    if ui.button("Reset to full range").clicked() {
        state.reset_range();
    }

    ui.separator();
    ui.heading("Download");
    ui.add_space(4.0);

    let n = state.view.len();
    if ui
        .add_enabled(n > 0, egui::Button::new("Download CSV"))
        .on_hover_text(format!("Export the {n} filtered records"))
        .clicked()
    {
        save_report_dialog(state);
    }
}

// ---------------------------------------------------------------------------
// KPI strip (top of the central panel)
// ---------------------------------------------------------------------------

/// The three summary numbers, side by side.
pub fn kpi_strip(ui: &mut Ui, state: &AppState) {
    let summary = &state.summary;
    ui.columns(3, |cols| {
        kpi(&mut cols[0], "Total Revenue", &format!("${:.2}", summary.total_revenue));
        kpi(&mut cols[1], "Total Orders", &summary.order_count.to_string());
        kpi(&mut cols[2], "Unique Customers", &summary.unique_customers.to_string());
    });
}

fn kpi(ui: &mut Ui, label: &str, value: &str) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(label).small());
        ui.label(RichText::new(value).heading().strong());
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} records loaded, {} in range",
                ds.len(),
                state.view.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

/// Point the dashboard at a different sales CSV. Load failures here are
/// non-fatal and land in the status line.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open sales data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::report::loader::load(&path) {
            Ok(dataset) => {
                log::info!("loaded {} sales records from {}", dataset.len(), path.display());
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("failed to load {}: {e}", path.display());
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

/// Ask where to save the filtered report and write it.
pub fn save_report_dialog(state: &mut AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    let file = rfd::FileDialog::new()
        .set_title("Save sales report")
        .set_file_name("sales_report.csv")
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = file {
        let result = crate::report::export::export_csv(dataset, &state.view)
            .and_then(|bytes| {
                std::fs::write(&path, bytes)
                    .with_context(|| format!("writing {}", path.display()))
            });
        match result {
            Ok(()) => {
                log::info!("exported {} records to {}", state.view.len(), path.display());
                state.status_message =
                    Some(format!("Saved {} records to {}", state.view.len(), path.display()));
            }
            Err(e) => {
                log::error!("export failed: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
