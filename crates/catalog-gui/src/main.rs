//! Drug Candidate Catalog - Desktop GUI Application
//!
//! A desktop application for browsing a catalog of drug candidates loaded
//! from a CSV source, with categorical filtering and per-candidate detail
//! views.

use eframe::egui;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Drug Candidate Catalog")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([800.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Drug Candidate Catalog",
        options,
        Box::new(|cc| Ok(Box::new(catalog_gui::app::CatalogApp::new(cc)))),
    )
}
