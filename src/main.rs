use dotenv::dotenv;
use shortlink_frontend::{config::Config, start_server};
use tracing_subscriber::{EnvFilter, fmt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let env_file = dotenv();

    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = env_file {
        tracing::info!("No .env file loaded: {e}");
    }

    let config = Config::load()?;
    start_server(config).await
}
