#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Client(#[from] state::ClientBuildError),
    #[error("{0}")]
    Leptos(String),
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "dayboard server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = config::Config::from_env()?;

    match config.upstream_url.as_deref() {
        Some(url) => tracing::info!(upstream = url, "dayboard upstream configured"),
        None => tracing::warn!("DAYBOARD_UPSTREAM_URL not set, /dayboard will answer 503"),
    }

    let state = state::AppState::from_config(&config)?;
    let app = routes::leptos_app(state).map_err(StartupError::Leptos)?;

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "dayboard listening");
    axum::serve(listener, app).await?;
    Ok(())
}
