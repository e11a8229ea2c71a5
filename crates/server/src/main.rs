// crates/server/src/main.rs
//! Steamscope server binary.
//!
//! Opens the warehouse read-only, binds the HTTP server, optionally opens
//! the dashboard in a browser, and serves until killed. A warehouse that
//! cannot be opened aborts startup; everything after that surfaces as a
//! per-request error response.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use steamscope_db::{default_warehouse_path, Warehouse};
use steamscope_server::{create_app, AppState};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Default port for the server.
const DEFAULT_PORT: u16 = 47311;

#[derive(Debug, Parser)]
#[command(
    name = "steamscope",
    version,
    about = "Analytics dashboard for a Steam games star-schema warehouse"
)]
struct Args {
    /// Path to the warehouse database file. Falls back to
    /// STEAMSCOPE_DATABASE, then the platform data directory.
    #[arg(long)]
    database: Option<PathBuf>,

    /// Port to listen on. Falls back to STEAMSCOPE_PORT, then PORT.
    #[arg(long)]
    port: Option<u16>,

    /// Directory of static frontend files. Falls back to STATIC_DIR,
    /// then ./web if it exists (API-only mode otherwise).
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Open the dashboard in the default browser once the server is up.
    #[arg(long)]
    open: bool,
}

/// Get the server port from arguments, environment, or default.
fn get_port(args: &Args) -> u16 {
    args.port
        .or_else(|| {
            std::env::var("STEAMSCOPE_PORT")
                .ok()
                .or_else(|| std::env::var("PORT").ok())
                .and_then(|p| p.parse().ok())
        })
        .unwrap_or(DEFAULT_PORT)
}

/// Resolve the warehouse file location.
fn get_database_path(args: &Args) -> Result<PathBuf> {
    if let Some(path) = &args.database {
        return Ok(path.clone());
    }
    if let Ok(path) = std::env::var("STEAMSCOPE_DATABASE") {
        return Ok(PathBuf::from(path));
    }
    Ok(default_warehouse_path()?)
}

/// Get the static directory for serving frontend files.
fn get_static_dir(args: &Args) -> Option<PathBuf> {
    args.static_dir
        .clone()
        .or_else(|| std::env::var("STATIC_DIR").ok().map(PathBuf::from))
        .or_else(|| {
            let web = PathBuf::from("web");
            web.exists().then_some(web)
        })
}

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,steamscope_db=info,steamscope_server=info")),
        )
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    eprintln!("\n\u{1f4ca} steamscope v{}\n", env!("CARGO_PKG_VERSION"));

    // A missing or unreadable warehouse is fatal: there is nothing to serve.
    let db_path = get_database_path(&args)?;
    let warehouse = Warehouse::open(&db_path)
        .await
        .with_context(|| format!("failed to open warehouse at {}", db_path.display()))?;

    let state = AppState::new(warehouse);
    let app = create_app(state, get_static_dir(&args));

    let port = get_port(&args);
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    eprintln!("  warehouse: {}", db_path.display());
    eprintln!("  \u{2192} http://localhost:{}\n", port);

    if args.open {
        let _ = open::that(format!("http://localhost:{}", port));
    }

    axum::serve(listener, app).await?;

    Ok(())
}
