// One-shot analyzer: prints the freshness estimate of a single image as JSON.
// The upload server lives in web/ (`cargo run --bin freshness-web`).
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use freshness_lens::Estimator;

/// Estimate produce freshness from a photo
#[derive(Parser, Debug)]
#[command(name = "freshness")]
#[command(version)]
struct Args {
    /// PNG or JPEG image to analyze
    image: PathBuf,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let (body, code) = match Estimator::new().estimate_path(&args.image) {
        Ok(result) => (serde_json::to_value(&result)?, ExitCode::SUCCESS),
        Err(e) => {
            warn!(image = %args.image.display(), error = %e, "estimate failed");
            (serde_json::json!({ "error": e.to_string() }), ExitCode::FAILURE)
        }
    };

    let text = if args.pretty {
        serde_json::to_string_pretty(&body)?
    } else {
        serde_json::to_string(&body)?
    };
    println!("{}", text);
    Ok(code)
}
