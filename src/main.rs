use std::env;
use std::sync::Arc;

use dotenvy::dotenv;
use tracing::{error, info};

use daycare_attendance::api::{AppState, create_router};
use daycare_attendance::attendance::SystemClock;
use daycare_attendance::config::ConfigLoader;

const DEFAULT_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_CONFIG_DIR: &str = "./config/daycare";

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let addr = env::var("APP_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let config_dir = env::var("DAYCARE_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());

    let config = match ConfigLoader::load(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            error!(config_dir = %config_dir, error = %err, "Failed to load configuration");
            return Err(std::io::Error::other(err.to_string()));
        }
    };
    info!(
        config_dir = %config_dir,
        work_locations = config.work_locations().len(),
        "Configuration loaded"
    );

    let state = AppState::new(&config, Arc::new(SystemClock));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Server starting...");

    axum::serve(listener, create_router(state)).await
}
