use crate::config::AppConfig;
use crate::database::AnimalRepository;
use crate::database::mysql::MySqlAnimalRepository;
use crate::features::animals::{animals_router, not_found_handler};
use axum::Router;
use dotenv;
use sqlx::mysql::MySqlPoolOptions;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

pub mod auth;
pub mod config;
pub mod database;
mod features;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn AnimalRepository>,
    pub config: Arc<AppConfig>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // load centralized config
    let config = Arc::new(AppConfig::from_env());

    // connect lazily: an unreachable store fails individual requests with a
    // 500, not the whole process at boot
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_lazy(&config.database_url())?;

    let app_state = AppState {
        repo: Arc::new(MySqlAnimalRepository::new(pool)),
        config: config.clone(),
    };

    // one supported route; everything else, wrong methods included, is a 404
    let app = Router::new()
        .merge(animals_router())
        .fallback(not_found_handler)
        .method_not_allowed_fallback(not_found_handler)
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
