/// freshness-lens web server
///
/// Serves a single upload page; photos posted to `/upload` are stored on disk
/// and answered with a JSON freshness estimate. Runs on a synchronous
/// tiny_http server, one thread per request.
///
/// Run with:
///   cargo run --bin freshness-web --release
/// Then open http://127.0.0.1:5000

mod error;
mod handlers;
mod render;
mod routes;
mod state;
mod util;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tiny_http::Server;
use tracing::info;

use freshness_lens::upload::config::{DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_UPLOAD_DIR};
use freshness_lens::UploadConfig;

use state::AppState;

/// Command-line arguments for freshness-web
#[derive(Parser, Debug)]
#[command(name = "freshness-web")]
#[command(about = "Upload server for produce freshness estimates")]
#[command(version)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:5000", env = "FRESHNESS_ADDR")]
    addr: String,

    /// Directory uploaded photos are stored in
    #[arg(long, default_value = DEFAULT_UPLOAD_DIR, env = "FRESHNESS_UPLOAD_DIR")]
    upload_dir: PathBuf,

    /// Accepted file extensions, comma separated
    #[arg(long, value_delimiter = ',', default_value = "png,jpg,jpeg")]
    allowed_extensions: Vec<String>,

    /// Largest accepted request body in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_UPLOAD_BYTES, env = "FRESHNESS_MAX_UPLOAD_BYTES")]
    max_upload_bytes: usize,
}

impl Args {
    fn upload_config(&self) -> UploadConfig {
        UploadConfig {
            upload_dir: self.upload_dir.clone(),
            allowed_extensions: self
                .allowed_extensions
                .iter()
                .map(|e| e.trim().trim_start_matches('.').to_lowercase())
                .filter(|e| !e.is_empty())
                .collect(),
            max_upload_bytes: self.max_upload_bytes,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = args.upload_config();

    std::fs::create_dir_all(&config.upload_dir)
        .with_context(|| format!("Failed to create upload directory {}", config.upload_dir.display()))?;

    let server = Server::http(&args.addr)
        .map_err(|e| anyhow!("Failed to bind HTTP server on {}: {}", args.addr, e))?;

    info!("Freshness Lens listening on http://{}", args.addr);
    info!(
        upload_dir = %config.upload_dir.display(),
        extensions = ?config.allowed_extensions,
        max_upload_bytes = config.max_upload_bytes,
        "upload policy"
    );

    let shared_state = Arc::new(AppState::new(config));

    // Each request is dispatched on its own thread so a slow upload does not
    // stall page loads.
    for request in server.incoming_requests() {
        let state_clone = shared_state.clone();
        std::thread::spawn(move || {
            routes::dispatch(request, state_clone);
        });
    }
    Ok(())
}
