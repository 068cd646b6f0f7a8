//! Catalog endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::{CatalogInfoResponse, ReplaceCatalogRequest};
use crate::services::catalog::catalog_info;
use crate::AppState;

/// GET /api/catalog
pub async fn info(State(state): State<AppState>) -> Result<Json<CatalogInfoResponse>> {
    let catalog = state.matcher.snapshot();
    Ok(Json(catalog_info(&catalog)))
}

/// PUT /api/catalog
/// Replaces the in-memory catalog with the given entries
pub async fn replace(
    State(state): State<AppState>,
    Json(payload): Json<ReplaceCatalogRequest>,
) -> Result<Json<CatalogInfoResponse>> {
    let catalog = state.matcher.rebuild_catalog(payload.entries);

    tracing::info!(
        "Catalog replaced: {} entries, {} players, {} teams",
        catalog.len(),
        catalog.player_names().len(),
        catalog.team_names().len()
    );

    Ok(Json(catalog_info(&catalog)))
}

/// POST /api/catalog/reload
/// Rebuilds the catalog from the configured source
pub async fn reload(State(state): State<AppState>) -> Result<Json<CatalogInfoResponse>> {
    let entries = state.source.load_entries().await?;
    let catalog = state.matcher.rebuild_catalog(entries);

    tracing::info!(
        "Catalog reloaded from {}: {} entries",
        state.source.describe(),
        catalog.len()
    );

    Ok(Json(catalog_info(&catalog)))
}
