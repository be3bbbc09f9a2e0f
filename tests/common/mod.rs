#![allow(dead_code)]

use std::time::Duration;

use actix_web::{dev::ServiceResponse, http::header::LOCATION, web};
use shortlink_frontend::{
    config::{Config, ReservedPaths},
    state::AppState,
};
use url::Url;

pub const API_PREFIX: &str = "/v1/short-url";

pub fn config(backend: &str) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        backend_url: Url::parse(backend).unwrap(),
        public_url: Url::parse("https://short.example").unwrap(),
        backend_timeout: Duration::from_secs(2),
        reserved_paths: ReservedPaths::default(),
    }
}

/// Config pointing at a wiremock server's API prefix.
pub fn config_for(mock_uri: &str) -> Config {
    config(&format!("{mock_uri}{API_PREFIX}"))
}

pub fn state(config: Config) -> web::Data<AppState> {
    web::Data::new(AppState::new(config).unwrap())
}

/// Build the full app the way `start_server` does, minus the logger.
macro_rules! init_app {
    ($config:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data($crate::common::state($config))
                .configure(shortlink_frontend::routes::init),
        )
        .await
    };
}

pub fn location<B>(resp: &ServiceResponse<B>) -> Option<String> {
    resp.headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}
