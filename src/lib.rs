//! Service Status Dashboard Library
//!
//! This library renders a static service-status page: it classifies each
//! service from its uptime history, maps the history onto a small line
//! chart, and composes the alert banners and service panels into one HTML
//! document.

pub mod chart;
pub mod config;
pub mod errors;
pub mod loader;
pub mod model;
pub mod page;

pub use chart::{RenderedChart, render};
pub use config::Config;
pub use errors::{DashboardError, Result};
pub use loader::ServiceHistory;
pub use model::{Issue, ServiceStatus, Severity, UptimeSeries};
