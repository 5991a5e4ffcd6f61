//! HTTP server binary for the Marquee listings site.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use catalog::CatalogStore;
use server::{build_router, AppState};

/// Marquee - movie, theater, and screening listings over HTTP
#[derive(Parser)]
#[command(name = "marquee-server")]
#[command(about = "Serve the CSV-backed screening catalog as a JSON API", long_about = None)]
struct Args {
    /// Path to the directory holding the catalog CSV files
    #[arg(short, long, default_value = "data/csv")]
    data_dir: PathBuf,

    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: String,

    /// Read all three collections at startup instead of on first request
    #[arg(long)]
    preload: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    info!(
        "Starting marquee-server v{} (data dir: {})",
        env!("CARGO_PKG_VERSION"),
        args.data_dir.display()
    );

    let store = Arc::new(CatalogStore::new(&args.data_dir));
    if args.preload {
        let summary = store.load_all().await?;
        info!(
            movies = summary.movies,
            theaters = summary.theaters,
            screenings = summary.screenings,
            skipped_rows = summary.skipped_rows,
            "catalog preloaded"
        );
    }

    let state = AppState::new(store);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&args.bind).await?;
    info!("marquee-server listening on http://{}", args.bind);
    axum::serve(listener, app).await?;

    Ok(())
}
