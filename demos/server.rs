//! Demo server: reads settings from the environment (or `.env`), loads model files from MODELS_DIR,
//! connects to MongoDB and serves the generated CRUD routes.
//!
//! Run: `DB_HOST=localhost:27017 DATABASE_NAME=shop MODELS_DIR=demos/models cargo run --example server`

use mongo_crud::{build_router, load_registry_from_dir, AppState, MongoStore, Settings};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("mongo_crud=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let registry = load_registry_from_dir(&settings.models_dir).await?;
    tracing::info!(models = registry.len(), dir = %settings.models_dir.display(), "models loaded");

    let store = MongoStore::connect(&settings).await?;
    let state = AppState::new(Arc::new(store), registry);
    let app = build_router(state, &settings.url_prefix)?;

    let listener = TcpListener::bind(&settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
