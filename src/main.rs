use std::sync::Arc;

use line_notifier::{
    config::ServerConfig,
    routes,
    services::{env_source::ProcessEnv, line_client::LinePushClient},
    state::AppState,
};
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::load()?;
    let client = LinePushClient::new(config.client.clone())?;

    let state = Arc::new(AppState::new(
        config.notifier.clone(),
        Arc::new(ProcessEnv),
        Arc::new(client),
    ));

    let app = routes::create_router()
        .with_state(state)
        .layer(CorsLayer::very_permissive());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        %addr,
        mode = ?config.notifier.response_mode,
        endpoint = %config.client.endpoint,
        "LINE notifier listening"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
