//! Web server command.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use mpm_core::drawing::DEFAULT_STORAGE_DIR;
use mpm_core::DrawingStore;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use super::GraphArgs;

/// Upper bound accepted for `--max-upload-mb`.
pub const MAX_UPLOAD_MB: u64 = 4096;

#[derive(Args)]
pub struct ServeArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Port to listen on
    #[arg(long, default_value = "8000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Directory where part drawings are stored
    #[arg(long, env = "MPM_STORAGE_DIR", default_value = DEFAULT_STORAGE_DIR)]
    pub storage_dir: PathBuf,

    /// Maximum upload size in megabytes
    #[arg(long, default_value = "25", value_parser = clap::value_parser!(u64).range(1..=MAX_UPLOAD_MB))]
    pub max_upload_mb: u64,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (defaults to logs/mpm.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl ServeArgs {
    /// Upload limit in bytes, clamped to what the platform can address.
    pub fn max_upload_bytes(&self) -> usize {
        usize::try_from(self.max_upload_mb)
            .unwrap_or(usize::MAX)
            .saturating_mul(1024 * 1024)
    }
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let client = args.graph.connect().await?;
    mpm_graph::initialize_schema(&client).await?;

    let drawings = DrawingStore::new(&args.storage_dir);
    drawings.ensure_root().await
        .with_context(|| format!("Failed to create storage dir {}", args.storage_dir.display()))?;

    let store = Arc::new(mpm_graph::Neo4jStore::new(client.clone()));
    let state = mpm_web::AppState::new(store, drawings)
        .with_max_upload_bytes(args.max_upload_bytes());

    println!();
    println!("  {} {}", "MPM".cyan().bold(), "Inventory API".bold());
    println!();
    println!("  {}       http://{}:{}", "API".green(), args.host, args.port);
    println!("  {}  {}", "Drawings".green(), args.storage_dir.display());
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    mpm_web::run_server(state, &args.host, args.port, shutdown_signal()).await?;

    client.close();
    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
