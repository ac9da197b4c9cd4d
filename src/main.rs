// tidytask - self-hosted to-do list web application
// Entry point and server startup

use tidytask::config::Config;
use tidytask::{app, http};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tidytask=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting tidytask");

    let config = Config::from_env()?;
    let state = app::setup(&config).await?;
    let router = http::router(state);

    let listener = TcpListener::bind(config.addr).await?;
    tracing::info!("Listening on {}", config.addr);

    axum::serve(listener, router).await?;

    Ok(())
}
