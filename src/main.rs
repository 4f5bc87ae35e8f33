use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use curate_gateway::{config::Config, gateway::HttpRecommender, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "curate_gateway=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let gateway = Arc::new(HttpRecommender::new(config.recommender_url.clone()));
    let state = AppState::new(config.clone(), gateway);

    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(
        host = %config.host,
        port = config.port,
        recommender = %config.recommender_url,
        "Curate gateway listening"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
