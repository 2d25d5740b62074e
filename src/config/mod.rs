use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub upstream_api_url: String,
    pub upstream_timeout_secs: u64,
    pub upstream_cache_ttl_secs: u64,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub frontend_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            upstream_api_url: env::var("UPSTREAM_API_URL")?,
            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            upstream_cache_ttl_secs: env::var("UPSTREAM_CACHE_TTL_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
            host: env::var("DASHBOARD_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("DASHBOARD_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            jwt_secret: env::var("JWT_SECRET")?,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
        })
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    /// Zero disables response caching.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.upstream_cache_ttl_secs)
    }
}
