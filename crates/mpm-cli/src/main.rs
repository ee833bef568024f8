//! MPM CLI - Machine & Parts Management
//!
//! Serves the inventory API and offers a few direct graph commands.

use anyhow::Result;
use clap::Parser;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::{Cli, Commands};

/// Split a log file path into its directory and file name, creating the
/// directory.
fn log_target(path: &Path) -> std::io::Result<(PathBuf, OsString)> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let name = path
        .file_name()
        .map(|n| n.to_owned())
        .unwrap_or_else(|| "mpm.log".into());
    std::fs::create_dir_all(dir)?;
    Ok((dir.to_path_buf(), name))
}

/// Initialize tracing with optional file logging.
///
/// The returned guard must be held until exit so buffered file output is
/// flushed.
fn init_tracing(log_file: Option<&Path>) -> Option<WorkerGuard> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "mpm=info,mpm_web=debug,mpm_graph=info,mpm_core=info,tower_http=info".into());

    let file_target = log_file.and_then(|path| match log_target(path) {
        Ok((dir, name)) => Some(tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name))),
        Err(e) => {
            eprintln!("Warning: file logging disabled, cannot prepare {}: {}", path.display(), e);
            None
        }
    });

    match file_target {
        Some((writer, guard)) => {
            // Log to both stdout and file when --log is used
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false),
                )
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = match &cli.command {
        Commands::Serve(args) if args.log => Some(
            args.log_file
                .clone()
                .unwrap_or_else(|| PathBuf::from("logs/mpm.log")),
        ),
        _ => None,
    };

    let _guard = init_tracing(log_file.as_deref());

    cli.execute().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_target_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested/logs/server.log");

        let (dir, name) = log_target(&path).unwrap();
        assert!(dir.is_dir());
        assert_eq!(name, OsString::from("server.log"));
    }

    #[test]
    fn test_log_target_reports_unusable_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("not-a-dir");
        std::fs::write(&blocker, b"x").unwrap();

        assert!(log_target(&blocker.join("mpm.log")).is_err());
    }
}
