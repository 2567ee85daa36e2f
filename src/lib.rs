pub mod config;
pub mod controllers;
pub mod database;
pub mod error;
pub mod i18n;
pub mod models;
pub mod store;

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

// Shared state для всего приложения
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn store::ReservationStore>,
    pub config: config::Config,
}

impl AppState {
    /// Connects to Postgres and brings the schema up to date.
    pub async fn new(config: config::Config) -> anyhow::Result<Arc<Self>> {
        let db = database::Database::connect(&config.database).await?;
        db.run_migrations().await?;

        Ok(Arc::new(Self {
            store: Arc::new(db),
            config,
        }))
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(controllers::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
