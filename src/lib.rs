pub mod backend;
pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;

use actix_web::{App, HttpServer, middleware::Logger, web};
use tracing::info;

use config::Config;
use state::AppState;

pub async fn start_server(config: Config) -> anyhow::Result<()> {
    info!("Initializing state...");
    let state = web::Data::new(AppState::new(config)?);

    let address = (state.config.host.clone(), state.config.port);
    info!(
        "Binding to {}:{}, backend at {}, {} reserved paths",
        address.0,
        address.1,
        state.config.backend_url,
        state.config.reserved_paths.len()
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .configure(routes::init)
    })
    .bind(address)?
    .run()
    .await?;

    info!("Server shutting down...");
    Ok(())
}
