use eframe::egui;

use crate::report::model::SalesDataset;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SalesDashApp {
    pub state: AppState,
}

impl SalesDashApp {
    pub fn new(dataset: SalesDataset) -> Self {
        Self {
            state: AppState::with_dataset(dataset),
        }
    }
}

impl eframe::App for SalesDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: date range + download ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: KPIs and charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::kpi_strip(ui, &self.state);
            ui.separator();

            // Trend chart on top, pie below it.
            let chart_height = (ui.available_height() - 60.0).max(120.0) * 0.5;
            plot::trend_plot(ui, &self.state, chart_height);
            ui.separator();
            plot::region_pie(ui, &self.state);
        });
    }
}
