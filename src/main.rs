//! Payroll Engine HTTP server.
//!
//! Environment:
//! - `PAYROLL_CONFIG_DIR`: configuration directory (default `./config/default`)
//! - `PAYROLL_BIND_ADDR`: listen address (default `0.0.0.0:3000`)
//! - `RUST_LOG`: log filter (default `info`)

use std::env;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config_dir =
        env::var("PAYROLL_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind_addr =
        env::var("PAYROLL_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir).inspect_err(|err| {
        error!(config_dir = %config_dir, error = %err, "Failed to load configuration");
    })?;
    info!(
        config_dir = %config_dir,
        name = %config.config().metadata().name,
        version = %config.config().metadata().version,
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(bind_addr = %bind_addr, "Payroll engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}
