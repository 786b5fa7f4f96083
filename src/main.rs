use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use movie_catalog::app;
use movie_catalog::config::settings::AppConfig;
use movie_catalog::infrastructure::db::memory::MemoryStore;
use movie_catalog::infrastructure::db::pool::{connect_to_db, PgStore};
use movie_catalog::infrastructure::db::seed::seed_catalog;
use movie_catalog::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug,sqlx=warn")),
        )
        .init();

    info!("Starting server...");

    let config = AppConfig::new();

    let state = match config.database_url.clone() {
        Some(url) => {
            let pool = connect_to_db(&url, config.database_max_connections)
                .await
                .context("Failed to connect to PostgreSQL")?;
            let store = PgStore::new(pool);
            store.run_migrations().await.context("Failed to run migrations")?;
            AppState::new(config.clone(), store)
        }
        None => {
            info!("DATABASE_URL not set, using in-memory store");
            AppState::new(config.clone(), MemoryStore::new())
        }
    };

    if config.seed_data {
        seed_catalog(&state).await.context("Failed to seed catalog")?;
    }

    let app = app::create_app(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server running on http://{}", address);
    info!("Swagger UI available at http://{}/swagger-ui", address);

    axum::serve(listener, app).await?;
    Ok(())
}
