pub mod config;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod upstream;
pub mod views;

/// Shared application state passed to all Axum handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub upstream: upstream::UpstreamClient,
    pub config: config::AppConfig,
}

impl AppState {
    pub fn new(config: config::AppConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            upstream: upstream::UpstreamClient::new(&config)?,
            config,
        })
    }
}
