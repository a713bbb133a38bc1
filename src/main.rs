mod app;
mod color;
mod report;
mod state;
mod ui;

use std::path::Path;

use app::SalesDashApp;
use eframe::egui;

/// The fixed input file, relative to the working directory.
/// `cargo run --bin generate_sample` produces one.
const DATA_FILE: &str = "sales_data.csv";

fn main() -> eframe::Result {
    env_logger::init();

    // The dashboard cannot render anything without the dataset, so a load
    // failure at startup is fatal.
    let dataset = match report::loader::load(Path::new(DATA_FILE)) {
        Ok(ds) => ds,
        Err(e) => {
            log::error!("failed to load {DATA_FILE}: {e}");
            eprintln!("failed to load {DATA_FILE}: {e}");
            std::process::exit(1);
        }
    };
    log::info!(
        "loaded {} sales records from {DATA_FILE} (span {:?})",
        dataset.len(),
        dataset.full_range()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Customer Sales Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(SalesDashApp::new(dataset)))),
    )
}
