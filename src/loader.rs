//! Dataset loading and validation for the status and issues JSON files

use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::errors::{DashboardError, Result};
use crate::model::{Issue, UptimeSeries};

/// One service's name and uptime history, in dataset declaration order
#[derive(Clone, Debug, PartialEq)]
pub struct ServiceHistory {
    pub name: String,
    pub series: UptimeSeries,
}

/// Parse the status dataset: a JSON object mapping service name to an
/// array of uptime samples.
///
/// Services keep the object's declaration order so the page layout is
/// stable across renders (serde_json is built with `preserve_order`).
pub fn parse_status(json: &str) -> Result<Vec<ServiceHistory>> {
    let map: serde_json::Map<String, Value> = serde_json::from_str(json)?;

    let mut services = Vec::with_capacity(map.len());
    for (name, value) in map {
        let raw = value.as_array().ok_or_else(|| {
            DashboardError::Data(format!("service '{}': expected an array of samples", name))
        })?;

        let mut samples = Vec::with_capacity(raw.len());
        for sample in raw {
            let v = sample.as_f64().ok_or_else(|| {
                DashboardError::Data(format!(
                    "service '{}': non-numeric sample {}",
                    name, sample
                ))
            })?;
            samples.push(v);
        }

        let series = UptimeSeries::new(samples)
            .map_err(|e| DashboardError::Data(format!("service '{}': {}", name, e)))?;

        services.push(ServiceHistory { name, series });
    }

    debug!("Parsed status dataset: {} services", services.len());
    Ok(services)
}

/// Parse the issues dataset: a JSON array of issue notices.
///
/// Unknown severity kinds deserialize as info rather than failing the
/// whole render.
pub fn parse_issues(json: &str) -> Result<Vec<Issue>> {
    let issues: Vec<Issue> = serde_json::from_str(json)?;
    debug!("Parsed issues dataset: {} issues", issues.len());
    Ok(issues)
}

/// Load and parse the status dataset from a file
pub fn load_status<P: AsRef<Path>>(path: P) -> Result<Vec<ServiceHistory>> {
    let contents = fs::read_to_string(path)?;
    parse_status(&contents)
}

/// Load and parse the issues dataset from a file
pub fn load_issues<P: AsRef<Path>>(path: P) -> Result<Vec<Issue>> {
    let contents = fs::read_to_string(path)?;
    parse_issues(&contents)
}
