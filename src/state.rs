use crate::{
    backend::{BackendClient, BackendError},
    config::Config,
    handlers::resolve::Resolver,
};

pub struct AppState {
    pub config: Config,
    pub backend: BackendClient,
    pub resolver: Resolver,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, BackendError> {
        let backend = BackendClient::new(config.backend_url.clone(), config.backend_timeout)?;
        let resolver = Resolver::new(backend.clone(), config.reserved_paths.clone());

        Ok(Self {
            config,
            backend,
            resolver,
        })
    }
}
