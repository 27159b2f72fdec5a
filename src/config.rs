//! Configuration management for the dashboard renderer

use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Heading shown at the top of the rendered page
    pub page_title: String,

    /// Path to the status dataset; the embedded dataset is used when unset
    pub status_path: Option<String>,

    /// Path to the issues dataset; the embedded dataset is used when unset
    pub issues_path: Option<String>,

    /// Path the rendered HTML page is written to
    pub output_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_title: "Service Status".to_string(),
            status_path: None,
            issues_path: None,
            output_path: "status.html".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(page_title) = env::var("PAGE_TITLE") {
            config.page_title = page_title;
        }

        if let Ok(status_path) = env::var("STATUS_DATA_PATH") {
            config.status_path = Some(status_path);
        }

        if let Ok(issues_path) = env::var("ISSUES_DATA_PATH") {
            config.issues_path = Some(issues_path);
        }

        if let Ok(output_path) = env::var("OUTPUT_PATH") {
            config.output_path = output_path;
        }

        config
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.page_title.is_empty() {
            return Err("page_title cannot be empty".to_string());
        }

        if self.output_path.is_empty() {
            return Err("output_path cannot be empty".to_string());
        }

        if let Some(path) = &self.status_path {
            if path.is_empty() {
                return Err("status_path cannot be empty when set".to_string());
            }
        }

        if let Some(path) = &self.issues_path {
            if path.is_empty() {
                return Err("issues_path cannot be empty when set".to_string());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.output_path, "status.html");
        assert!(config.status_path.is_none());
    }

    #[test]
    fn test_empty_output_path_rejected() {
        let config = Config {
            output_path: String::new(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_title_rejected() {
        let config = Config {
            page_title: String::new(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
