use anyhow::Result;
use dotenvy::dotenv;
use std::fs;
use std::path::PathBuf;

use vidport::cli::Cli;
use vidport::core::{config, init_logging};
use vidport::server::{run_server, AppState};

/// Main entry point for the download API server.
///
/// # Errors
/// Returns an error if initialization fails (logging, download folder,
/// socket bind).
#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env before any config is read
    let _ = dotenv();

    let cli = Cli::parse_args();

    init_logging()?;

    let download_dir = cli
        .download_dir
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(config::DOWNLOAD_FOLDER.clone()));
    fs::create_dir_all(&download_dir)?;

    log::info!("Download folder: {}", download_dir.display());
    log::info!("Using downloader binary: {}", &*config::YTDL_BIN);

    let bind = cli.bind.unwrap_or_else(|| config::BIND_ADDR.clone());
    run_server(&bind, AppState { download_dir }).await
}
