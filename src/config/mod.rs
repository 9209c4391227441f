//! Configuration loading for the employee dashboard.
//!
//! This module loads the dashboard settings (listen address, snapshot
//! location, and the optional fixed current date) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use employee_dashboard::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/dashboard.yaml").unwrap();
//! println!("Serving on {}", config.listen_addr());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::DashboardConfig;
