use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use mergington_activities::modules::activities::adapters::outbound::roster_in_memory::InMemoryRoster;
use mergington_activities::modules::activities::core::seed;
use mergington_activities::shared::config::{AppConfig, DEFAULT_LOG_FILTER};
use mergington_activities::shell::http::router;
use mergington_activities::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = AppConfig::from_env().context("reading configuration")?;

    let roster = match &config.seed_path {
        Some(path) => seed::load_roster(path)
            .with_context(|| format!("loading activities from {}", path.display()))?,
        None => seed::default_roster().context("loading the default activities")?,
    };
    tracing::info!(activities = roster.len(), "roster seeded");

    let state = AppState::new(Arc::new(InMemoryRoster::new(roster)));
    let app = router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("binding {}:{}", config.host, config.port))?;
    tracing::info!("Activities API: http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
