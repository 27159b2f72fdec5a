//! Data model for service uptime history and issue notices

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::errors::{DashboardError, Result};

/// Ordered uptime samples for one service, oldest first.
///
/// Each sample is a percentage in [0, 100] covering one 30-minute bucket;
/// the last sample is "current". The constructor enforces non-emptiness,
/// so every series has a defined current status.
#[derive(Clone, Debug, PartialEq)]
pub struct UptimeSeries {
    samples: Vec<f64>,
}

impl UptimeSeries {
    /// Build a series from raw samples.
    ///
    /// Empty input is rejected. Out-of-range samples are clamped into
    /// [0, 100] with a warning rather than propagated into coordinates.
    pub fn new(samples: Vec<f64>) -> Result<Self> {
        if samples.is_empty() {
            return Err(DashboardError::Data(
                "uptime series cannot be empty".to_string(),
            ));
        }

        let samples = samples
            .into_iter()
            .map(|v| {
                if !(0.0..=100.0).contains(&v) {
                    warn!("Clamping out-of-range uptime sample {} into [0, 100]", v);
                    v.clamp(0.0, 100.0)
                } else {
                    v
                }
            })
            .collect();

        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// The most recent sample
    pub fn latest(&self) -> f64 {
        *self.samples.last().unwrap()
    }

    /// Classify the current status from the most recent sample only.
    ///
    /// Earlier Degraded or Down samples do not affect the result.
    pub fn status(&self) -> ServiceStatus {
        let last = self.latest();
        if last == 100.0 {
            ServiceStatus::Up
        } else if last == 0.0 {
            ServiceStatus::Down
        } else {
            ServiceStatus::Degraded
        }
    }
}

/// Current status of a service, derived from its latest uptime sample
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ServiceStatus {
    Up,
    Degraded,
    Down,
}

impl ServiceStatus {
    /// Badge label text
    pub fn label(&self) -> &'static str {
        match self {
            ServiceStatus::Up => "Up",
            ServiceStatus::Degraded => "Degraded",
            ServiceStatus::Down => "Down",
        }
    }

    /// Series-level chart color for this status
    pub fn color(&self) -> &'static str {
        match self {
            ServiceStatus::Up => crate::chart::COLOR_SUCCESS,
            ServiceStatus::Degraded => crate::chart::COLOR_DEGRADED,
            ServiceStatus::Down => crate::chart::COLOR_FAILURE,
        }
    }

    /// CSS class for the status badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            ServiceStatus::Up => "badge-up",
            ServiceStatus::Degraded => "badge-degraded",
            ServiceStatus::Down => "badge-down",
        }
    }
}

impl std::fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Severity of an issue notice
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
    Info,
}

impl Severity {
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Warning => "⚠️",
            Severity::Error => "❌",
            Severity::Info => "ℹ️",
        }
    }

    /// CSS class for the alert box
    pub fn alert_class(&self) -> &'static str {
        match self {
            Severity::Warning => "alert-warning",
            Severity::Error => "alert-error",
            Severity::Info => "alert-info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
            Severity::Info => write!(f, "info"),
        }
    }
}

impl From<&str> for Severity {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "warning" | "warn" => Severity::Warning,
            "error" | "err" => Severity::Error,
            "info" => Severity::Info,
            _ => Severity::Info, // Unknown kinds fail closed
        }
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Severity::from(s.as_str()))
    }
}

/// A static, human-authored notice about a known problem
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Issue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Severity kind; the dataset uses the key "type"
    #[serde(rename = "type")]
    pub severity: Severity,

    pub message: String,

    /// Whether this notice relates to a currently-down service.
    /// Controls which page section the alert renders in.
    #[serde(default)]
    pub down: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_up_when_last_is_100() {
        let series = UptimeSeries::new(vec![50.0, 0.0, 100.0]).unwrap();
        assert_eq!(series.status(), ServiceStatus::Up);
    }

    #[test]
    fn test_classify_down_when_last_is_0() {
        let series = UptimeSeries::new(vec![100.0, 100.0, 0.0]).unwrap();
        assert_eq!(series.status(), ServiceStatus::Down);
    }

    #[test]
    fn test_classify_degraded_for_intermediate_last() {
        let series = UptimeSeries::new(vec![100.0, 50.0]).unwrap();
        assert_eq!(series.status(), ServiceStatus::Degraded);

        let series = UptimeSeries::new(vec![0.0, 99.9]).unwrap();
        assert_eq!(series.status(), ServiceStatus::Degraded);
    }

    #[test]
    fn test_history_does_not_affect_status() {
        // A single earlier outage leaves the current status Up
        let series = UptimeSeries::new(vec![0.0, 100.0]).unwrap();
        assert_eq!(series.status(), ServiceStatus::Up);
    }

    #[test]
    fn test_empty_series_rejected() {
        assert!(UptimeSeries::new(vec![]).is_err());
    }

    #[test]
    fn test_out_of_range_samples_clamped() {
        let series = UptimeSeries::new(vec![150.0, -3.0, 42.0]).unwrap();
        assert_eq!(series.samples(), &[100.0, 0.0, 42.0]);
    }

    #[test]
    fn test_severity_from_str() {
        assert_eq!(Severity::from("warning"), Severity::Warning);
        assert_eq!(Severity::from("ERROR"), Severity::Error);
        assert_eq!(Severity::from("info"), Severity::Info);
        assert_eq!(Severity::from("critical"), Severity::Info);
    }

    #[test]
    fn test_issue_deserialization_defaults() {
        let issue: Issue =
            serde_json::from_str(r#"{"type": "warning", "message": "Elevated latency"}"#).unwrap();
        assert_eq!(issue.severity, Severity::Warning);
        assert!(!issue.down);
        assert!(issue.id.is_none());
    }

    #[test]
    fn test_unknown_severity_fails_closed_to_info() {
        let issue: Issue =
            serde_json::from_str(r#"{"type": "critical", "message": "X", "down": true}"#).unwrap();
        assert_eq!(issue.severity, Severity::Info);
        assert!(issue.down);
    }
}
