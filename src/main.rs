//! Service Status Dashboard Binary

use status_dashboard::{Config, Result, loader, page};
use std::fs;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default datasets, embedded at build time
const DEFAULT_STATUS_DATA: &str = include_str!("../data/status.json");
const DEFAULT_ISSUES_DATA: &str = include_str!("../data/issues.json");

fn main() -> Result<()> {
    initialize_tracing();

    info!(
        "Starting Service Status Dashboard renderer v{}",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env();

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        std::process::exit(1);
    }

    let services = match &config.status_path {
        Some(path) => loader::load_status(path)?,
        None => loader::parse_status(DEFAULT_STATUS_DATA)?,
    };

    let issues = match &config.issues_path {
        Some(path) => loader::load_issues(path)?,
        None => loader::parse_issues(DEFAULT_ISSUES_DATA)?,
    };

    info!(
        "Loaded datasets - Services: {}, Issues: {}",
        services.len(),
        issues.len()
    );

    let now = chrono::Local::now();
    let html = page::render_page(&services, &issues, &config.page_title, now);

    fs::write(&config.output_path, html.into_string())?;

    info!("Rendered dashboard written to {}", config.output_path);

    Ok(())
}

/// Initialize structured logging
fn initialize_tracing() {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .json();

    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&log_level))
        .unwrap();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
