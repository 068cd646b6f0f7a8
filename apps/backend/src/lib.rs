pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use card_recognition_core::CardMatcher;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{AppConfig, RecognizeLimits};
use crate::db::Database;
use crate::services::catalog::{load_abbreviations, CatalogSource};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub matcher: Arc<CardMatcher>,
    pub source: CatalogSource,
    pub limits: RecognizeLimits,
}

impl AppState {
    /// State with an empty catalog and no reload source.
    pub fn new(matcher: CardMatcher, limits: RecognizeLimits) -> Self {
        Self {
            matcher: Arc::new(matcher),
            source: CatalogSource::None,
            limits,
        }
    }

    pub fn with_source(mut self, source: CatalogSource) -> Self {
        self.source = source;
        self
    }
}

pub async fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db = match &config.database_url {
        Some(database_url) => {
            tracing::info!("Connecting to database...");
            let db = Database::connect(database_url).await?;

            tracing::info!("Running migrations...");
            db.run_migrations().await?;
            Some(Arc::new(db))
        }
        None => None,
    };

    let abbreviations = load_abbreviations(config.abbreviations_path.as_ref())?;
    tracing::info!("Loaded abbreviations for {} teams", abbreviations.len());

    let matcher = CardMatcher::with_abbreviations(config.matcher, abbreviations);
    let source = CatalogSource::select(db, config.catalog_path.clone());
    let state = AppState::new(matcher, config.limits()).with_source(source);

    match state.source {
        CatalogSource::None => {
            tracing::warn!("No catalog source configured, starting with an empty catalog");
        }
        _ => {
            let entries = state.source.load_entries().await?;
            let catalog = state.matcher.rebuild_catalog(entries);
            tracing::info!(
                "Catalog loaded from {}: {} entries, {} players, {} teams",
                state.source.describe(),
                catalog.len(),
                catalog.player_names().len(),
                catalog.team_names().len()
            );
        }
    }

    let app = build_router(state);
    let addr = config.bind_addr();

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the full router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/recognize", post(routes::recognize::recognize))
        .route(
            "/api/catalog",
            get(routes::catalog::info).put(routes::catalog::replace),
        )
        .route("/api/catalog/reload", post(routes::catalog::reload))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
