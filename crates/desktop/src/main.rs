// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod config;
mod fonts;

use app::AnalytixApp;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "analytix_desktop=debug,analytix_core=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load config to get saved window state
    let config = config::Config::load();

    let mut viewport = egui::ViewportBuilder::default()
        .with_title("Analytix")
        .with_inner_size([
            config.window_width.unwrap_or(1280.0),
            config.window_height.unwrap_or(800.0),
        ]);

    if let (Some(x), Some(y)) = (config.window_x, config.window_y) {
        viewport = viewport.with_position([x, y]);
    }

    if config.window_maximized {
        viewport = viewport.with_maximized(true);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    tracing::info!("Starting Analytix dashboard");

    eframe::run_native(
        "Analytix",
        options,
        Box::new(move |cc| {
            fonts::apply_font_settings(&cc.egui_ctx, config.font_size);
            let app = AnalytixApp::new(config)?;
            Ok(Box::new(app))
        }),
    )
}
