use std::sync::Arc;

use bookshelf_api::{app, auth::AuthKeys, config, database, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    let config = config::config();

    // RUST_LOG wins; otherwise request logging from TraceLayer is gated on config
    let default_directives = if config.api.enable_request_logging {
        "info,tower_http=debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives)))
        .init();

    tracing::info!("Starting Bookshelf API in {:?} mode", config.environment);

    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:bookshelf.db".to_string());
    let pool = database::connect(&database_url, &config.database).await?;

    let auth = AuthKeys::from_config(&config.security)?;
    let state = AppState {
        pool,
        auth: Arc::new(auth),
    };

    // Allow tests or deployments to override port via env
    let port = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("Bookshelf API listening on http://{}", bind_addr);

    axum::serve(listener, app(state)).await?;
    Ok(())
}
