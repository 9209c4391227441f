//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the dashboard
//! configuration from a YAML file.

use chrono::{Local, NaiveDate};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::{DashboardError, DashboardResult};

use super::types::DashboardConfig;

/// Loads and provides access to the dashboard configuration.
///
/// # Example
///
/// ```no_run
/// use employee_dashboard::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/dashboard.yaml").unwrap();
/// println!("Snapshot tables in {}", loader.snapshot_dir().display());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: DashboardConfig,
    listen_addr: SocketAddr,
    snapshot_dir: PathBuf,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// Returns an error if the file is missing, is not valid YAML, or
    /// `listen_addr` is not a socket address. A relative `snapshot_dir` is
    /// resolved against the directory containing the configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> DashboardResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| DashboardError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: DashboardConfig =
            serde_yaml::from_str(&content).map_err(|e| DashboardError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_config(config, base_dir)
    }

    /// Validates an already-parsed configuration.
    ///
    /// `base_dir` anchors a relative `snapshot_dir`.
    pub fn from_config(config: DashboardConfig, base_dir: &Path) -> DashboardResult<Self> {
        let listen_addr =
            config
                .listen_addr
                .parse::<SocketAddr>()
                .map_err(|e| DashboardError::InvalidConfig {
                    field: "listen_addr".to_string(),
                    message: format!("'{}': {}", config.listen_addr, e),
                })?;

        if config.snapshot_dir.as_os_str().is_empty() {
            return Err(DashboardError::InvalidConfig {
                field: "snapshot_dir".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        let snapshot_dir = if config.snapshot_dir.is_absolute() {
            config.snapshot_dir.clone()
        } else {
            base_dir.join(&config.snapshot_dir)
        };

        Ok(Self {
            config,
            listen_addr,
            snapshot_dir,
        })
    }

    /// Returns the socket address to serve on.
    pub fn listen_addr(&self) -> SocketAddr {
        self.listen_addr
    }

    /// Overrides the socket address to serve on.
    pub fn set_listen_addr(&mut self, addr: SocketAddr) {
        self.listen_addr = addr;
    }

    /// Returns the resolved snapshot directory.
    pub fn snapshot_dir(&self) -> &Path {
        &self.snapshot_dir
    }

    /// Returns the date that decides which salaries are current.
    ///
    /// The configured override if present, otherwise the local date now.
    pub fn snapshot_date(&self) -> NaiveDate {
        self.config
            .current_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}
