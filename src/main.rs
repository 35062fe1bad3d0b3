mod config;
mod error;
mod routes;

use config::ServerConfig;
use error::StartupError;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let app = routes::app(&config)?;
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!(port = config.port, api_base_url = %config.api_base_url, "inkpost listening");
    axum::serve(listener, app).await?;
    Ok(())
}
