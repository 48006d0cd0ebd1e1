//! Stoat Views - chat view components built with egui
//!
//! Architecture:
//! - Main thread: runs the egui UI
//! - Backend thread: runs a Tokio runtime for chat API mutations
//! - Communication via crossbeam channels (lock-free, sync-safe)

use eframe::egui;
use tracing_subscriber::EnvFilter;

use stoat_views::app::StoatApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stoat_views=info")),
        )
        .with_target(false)
        .init();

    tracing::info!("starting stoat-views");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 680.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Stoat Views",
        options,
        Box::new(|cc| Ok(Box::new(StoatApp::new(cc)))),
    )
}
