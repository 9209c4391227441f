//! Configuration types for the dashboard.
//!
//! This module contains the strongly-typed configuration structure that
//! is deserialized from the dashboard YAML file.

use chrono::NaiveDate;
use serde::Deserialize;
use std::path::PathBuf;

fn default_listen_addr() -> String {
    "127.0.0.1:8080".to_string()
}

/// The dashboard configuration file structure.
///
/// ```yaml
/// listen_addr: 127.0.0.1:8080
/// snapshot_dir: ../data/sample
/// current_date: 2026-10-15
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Socket address the HTTP server binds to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Directory holding the snapshot tables, relative to the config file.
    pub snapshot_dir: PathBuf,
    /// Fixed date used to decide which salaries are current.
    ///
    /// When absent the local date at snapshot load is used.
    #[serde(default)]
    pub current_date: Option<NaiveDate>,
}
