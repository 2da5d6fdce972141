use std::env;
use std::error::Error;

use tracing::info;
use tracing_subscriber::EnvFilter;

use shift_payroll::api::{AppState, create_router};
use shift_payroll::config::ConfigLoader;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match env::var("PAYROLL_CONFIG_DIR") {
        Ok(dir) => {
            let loader = ConfigLoader::load(&dir)?;
            info!(dir = %dir, years = loader.tables().len(), "Loaded tax-year tables");
            loader
        }
        Err(_) => {
            info!("PAYROLL_CONFIG_DIR not set, using built-in tax-year tables");
            ConfigLoader::builtin()
        }
    };

    let bind_addr = env::var("PAYROLL_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "payroll-server listening");

    axum::serve(listener, create_router(AppState::new(config))).await?;
    Ok(())
}
