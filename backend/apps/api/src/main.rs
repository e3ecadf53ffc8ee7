//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are
//! `mining::MiningError`.

use anyhow::Context;
use axum::Router;
use mining::{Difficulty, MiningConfig, mining_router};
use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,mining=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mining_config = parse_mining_config(
        env::var("MINING_DIFFICULTY").ok().as_deref(),
        env::var("MINING_TIMEOUT_MS").ok().as_deref(),
    )?;

    if !mining_config.difficulty.is_satisfiable() {
        tracing::warn!(
            difficulty = %mining_config.difficulty,
            "Difficulty exceeds hash length, every request will time out"
        );
    }

    tracing::info!(
        difficulty = %mining_config.difficulty,
        timeout_ms = mining_config.timeout_ms(),
        "Mining configuration loaded"
    );

    // Build router
    let app = Router::new()
        .nest("/api/mining", mining_router(mining_config))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()
        .context("BIND_ADDR must be a socket address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the mining configuration from raw environment values,
/// falling back to defaults for unset variables
fn parse_mining_config(
    difficulty: Option<&str>,
    timeout_ms: Option<&str>,
) -> anyhow::Result<MiningConfig> {
    let defaults = MiningConfig::default();

    let difficulty = match difficulty {
        Some(raw) => Difficulty::new(
            raw.trim()
                .parse::<usize>()
                .context("MINING_DIFFICULTY must be a non-negative integer")?,
        ),
        None => defaults.difficulty,
    };

    let timeout = match timeout_ms {
        Some(raw) => Duration::from_millis(
            raw.trim()
                .parse::<u64>()
                .context("MINING_TIMEOUT_MS must be a non-negative integer")?,
        ),
        None => defaults.timeout,
    };

    Ok(MiningConfig::new(difficulty, timeout))
}
