//! Folio - tabbed personal profile viewer
//!
//! Built-in about/tech/contact sections, scratch tabs and plain-text export.

mod app;
mod core;
mod ui;

use app::FolioApp;
use crate::core::config::AppConfig;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> eframe::Result<()> {
    // Initialize logging, RUST_LOG overrides the default level
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Starting Folio...");

    let config = AppConfig::load_or_init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.ui.window_width, config.ui.window_height])
            .with_min_inner_size([480.0, 320.0])
            .with_title("Folio"),
        ..Default::default()
    };

    eframe::run_native(
        "Folio",
        native_options,
        Box::new(|cc| Ok(Box::new(FolioApp::new(cc, config)))),
    )
}
