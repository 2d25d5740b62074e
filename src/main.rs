use std::net::SocketAddr;

use dealdash::config::AppConfig;
use dealdash::AppState;
use mimalloc::MiMalloc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// M-MIMALLOC-APP: Use mimalloc as global allocator for improved performance.
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dealdash=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let config = AppConfig::from_env()?;
    let host: std::net::IpAddr = config.host.parse()?;
    let addr = SocketAddr::from((host, config.port));

    let state = AppState::new(config)?;
    tracing::info!(
        host = %addr,
        upstream = state.upstream.base_url(),
        "Starting dealdash admin dashboard"
    );

    let app = dealdash::routes::router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
