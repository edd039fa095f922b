use std::env;

use planning_engine::api::{create_router, AppState};
use planning_engine::config::ConstantsLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONSTANTS_PATH: &str = "./config/constants.yaml";
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let constants_path =
        env::var("PLANNING_CONSTANTS").unwrap_or_else(|_| DEFAULT_CONSTANTS_PATH.to_string());
    let constants = ConstantsLoader::load_or_default(&constants_path)?.into_constants();
    info!(
        path = %constants_path,
        social_security_rate = %constants.social_security_rate,
        pension_rate = %constants.pension_rate,
        "Loaded calculation constants"
    );

    let addr = env::var("PLANNING_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Planning engine listening");

    axum::serve(listener, create_router(AppState::new(constants))).await?;
    Ok(())
}
