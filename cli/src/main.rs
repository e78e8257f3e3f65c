mod client;
mod config;
mod files;
mod layout;
mod service;
mod session;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use editor::error::EditorError;
use tracing_subscriber::EnvFilter;

use crate::client::HttpRenderService;
use crate::config::{ServiceConfig, ServiceTimeouts};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid base URL: {0}; expected http:// or https://")]
    InvalidBaseUrl(String),
    #[error("http client build failed: {0}")]
    HttpClientBuild(String),
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("rows file must be a JSON array of objects")]
    InvalidRows,
    #[error("box for column `{0}` was not created")]
    Placement(String),
    #[error(transparent)]
    Editor(#[from] EditorError),
    #[error("output encode failed: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "overlay-cli", about = "Place data-bound boxes over a template and render one image per row")]
struct Cli {
    #[arg(long, env = "OVERLAY_BASE_URL", default_value = config::DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "OVERLAY_REQUEST_TIMEOUT_SECS", default_value_t = config::DEFAULT_REQUEST_TIMEOUT_SECS)]
    request_timeout_secs: u64,

    #[arg(long, env = "OVERLAY_CONNECT_TIMEOUT_SECS", default_value_t = config::DEFAULT_CONNECT_TIMEOUT_SECS)]
    connect_timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the box configuration for a layout, computed locally.
    Export(ExportArgs),
    /// Upload inputs, render previews for every row and save the archive.
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Template image.
    #[arg(long)]
    template: PathBuf,

    /// Rows as a JSON array of objects.
    #[arg(long)]
    data: PathBuf,

    /// Layout file with box placements in display space.
    #[arg(long)]
    layout: PathBuf,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Template image.
    #[arg(long)]
    template: PathBuf,

    /// Rows as CSV or Excel (.csv, .xlsx, .xls).
    #[arg(long)]
    data: PathBuf,

    /// Layout file with box placements in display space.
    #[arg(long)]
    layout: PathBuf,

    /// Where to write the preview archive.
    #[arg(long, default_value = "previews.zip")]
    out: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "failed to read .env"),
    }

    let cli = Cli::parse();
    let timeouts = ServiceTimeouts { request_secs: cli.request_timeout_secs, connect_secs: cli.connect_timeout_secs };

    match cli.command {
        Command::Export(args) => run_export(args).await,
        Command::Render(args) => {
            let config = ServiceConfig::new(&cli.base_url, timeouts)?;
            run_render(config, args).await
        }
    }
}

async fn run_export(args: ExportArgs) -> Result<(), CliError> {
    let template = files::read_local(&args.template).await?;
    let rows = read_bytes(&args.data).await?;
    let data = files::rows_from_json(&args.data, &rows)?;
    let layout = read_layout(&args.layout).await?;

    let configs = session::export(&template, data, &layout)?;
    let rendered = serde_json::to_string_pretty(&configs)?;
    println!("{rendered}");
    Ok(())
}

async fn run_render(config: ServiceConfig, args: RenderArgs) -> Result<(), CliError> {
    tracing::info!(base_url = %config.base_url, "using rendering service");
    let service = HttpRenderService::new(config)?;

    let template = files::read_local(&args.template).await?;
    let data = files::read_local(&args.data).await?;
    let layout = read_layout(&args.layout).await?;

    let archive = session::render(&service, &template, &data, &layout).await?;
    session::write_archive(&args.out, &archive).await?;
    println!("{}", args.out.display());
    Ok(())
}

async fn read_bytes(path: &Path) -> Result<Vec<u8>, CliError> {
    tokio::fs::read(path).await.map_err(|source| CliError::Io { path: path.to_path_buf(), source })
}

async fn read_layout(path: &Path) -> Result<layout::LayoutFile, CliError> {
    let bytes = read_bytes(path).await?;
    layout::parse(path, &bytes)
}
