//! Employee dashboard server.
//!
//! Run with: cargo run -- --config config/dashboard.yaml

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use employee_dashboard::api::{AppState, create_router};
use employee_dashboard::config::ConfigLoader;
use employee_dashboard::store::SnapshotLoader;

/// Serves department gender balance and salary distribution over HTTP.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the dashboard configuration file.
    #[arg(short, long, default_value = "config/dashboard.yaml")]
    config: PathBuf,

    /// Overrides the configured listen address.
    #[arg(short, long)]
    listen: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = ConfigLoader::load(&args.config)
        .with_context(|| format!("loading configuration from {}", args.config.display()))?;
    if let Some(listen) = args.listen {
        config.set_listen_addr(listen);
    }

    let current_date = config.snapshot_date();
    let store = SnapshotLoader::load(config.snapshot_dir(), current_date).with_context(|| {
        format!("loading snapshot from {}", config.snapshot_dir().display())
    })?;

    if let Some(department) = store.default_department() {
        info!(dept_no = %department.dept_no, dept_name = %department.dept_name, "Default department");
    }

    let app = create_router(AppState::new(store));

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!(%addr, "Employee dashboard listening");

    axum::serve(listener, app).await?;

    Ok(())
}
