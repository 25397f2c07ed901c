use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use axiom_core::{config::history_limit_from_env_value, CoreConfig};

/// Main entry point for the Axiom application
///
/// Starts the REST server on port 8080 (configurable via AXIOM_REST_ADDR).
///
/// # Environment Variables
/// - `AXIOM_REST_ADDR`: REST server address (default: "0.0.0.0:8080")
/// - `AXIOM_HISTORY_LIMIT`: Triage records kept per user (default: 100)
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, startup or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("axiom=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr: SocketAddr = std::env::var("AXIOM_REST_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".into())
        .parse()?;

    let history_limit = history_limit_from_env_value(std::env::var("AXIOM_HISTORY_LIMIT").ok())?;
    let cfg = Arc::new(CoreConfig::new(history_limit)?);

    tracing::info!("++ Starting Axiom REST on {}", rest_addr);
    tracing::info!("++ Keeping up to {} triage records per user", cfg.history_limit());

    let app = api_rest::router(AppState::new(cfg));

    let listener = tokio::net::TcpListener::bind(rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
