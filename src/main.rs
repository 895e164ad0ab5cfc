//! Marina - Manage LXD instances through a remote instance API
//!
//! A desktop client that lists the instances an API server reports and
//! creates, starts, stops or deletes them on request.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![allow(dead_code)] // Model constructors are part of the core API

mod core;
mod persistence;
mod ui;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::persistence::SettingsStore;
use crate::ui::MarinaApp;

/// Application name constant
pub const APP_NAME: &str = "Marina";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    info!("{} v{} starting...", APP_NAME, APP_VERSION);

    // Load settings: file, then MARINA_* environment overrides
    let store = SettingsStore::new();
    let settings = store
        .load_effective()
        .context(format!("Failed to load settings from {:?}", store.path()))?;
    info!("Settings loaded, API at {}", settings.api_base_url);

    // Network calls run here; the UI thread only drains their results
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let handle = runtime.handle().clone();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    info!("Starting GUI...");
    eframe::run_native(
        &format!("{} v{}", APP_NAME, APP_VERSION),
        native_options,
        Box::new(move |cc| Ok(Box::new(MarinaApp::new(cc, settings, store, handle)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))?;

    runtime.shutdown_timeout(std::time::Duration::from_secs(5));
    info!("{} shutting down", APP_NAME);
    Ok(())
}

/// Initialize the logging system
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("marina=info,eframe=warn,egui=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
