//! Tandem API server binary.
//!
//! Usage:
//!   tandem-api --config config.toml
//!   tandem-api --port 8080
//!   tandem-api --port 8080 --bind 0.0.0.0
//!
//! # Environment Variables
//!
//! - `TANDEM_BIND_ADDR` - Server bind address (default: 127.0.0.1)

use std::net::SocketAddr;
use std::sync::Arc;
use tandem_api::{serve, AppState};
use tandem_coordinator::CoordinatorConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tandem_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command line arguments (simple for now)
    let args: Vec<String> = std::env::args().collect();
    let mut port: u16 = 8080;
    let mut config_path: Option<String> = None;
    let mut bind_addr: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--port" | "-p" => {
                if i + 1 < args.len() {
                    port = args[i + 1]
                        .parse()
                        .map_err(|_| anyhow::anyhow!("Invalid port number: {}", args[i + 1]))?;
                    i += 1;
                }
            }
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--bind" | "-b" => {
                if i + 1 < args.len() {
                    bind_addr = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Tandem API Server");
                println!();
                println!("Usage: tandem-api [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -p, --port <PORT>    Port to listen on (default: 8080)");
                println!("  -b, --bind <ADDR>    Bind address (default: 127.0.0.1, env: TANDEM_BIND_ADDR)");
                println!("  -c, --config <FILE>  Path to config.toml file");
                println!("  -h, --help           Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    // Bind address: CLI flag > env var > localhost default
    let host = bind_addr
        .or_else(|| std::env::var("TANDEM_BIND_ADDR").ok())
        .unwrap_or_else(|| "127.0.0.1".to_string());

    if host == "0.0.0.0" {
        tracing::warn!(
            "Server binding to 0.0.0.0 — this exposes the API to all network interfaces."
        );
    }

    // Load coordinator configuration
    let config = if let Some(path) = config_path {
        tracing::info!(path = %path, "Loading configuration");
        CoordinatorConfig::from_file(&path)?
    } else {
        tracing::info!("Using default configuration");
        CoordinatorConfig::default()
    };

    let state = Arc::new(AppState::new(config));

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    serve(state, addr).await?;

    Ok(())
}
