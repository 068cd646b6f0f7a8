//! Catalog loading and reporting.

use std::path::PathBuf;
use std::sync::Arc;

use card_recognition_core::{load_catalog_file, AbbreviationTable, Catalog};
use sha2::{Digest, Sha256};

use crate::db::Database;
use crate::error::{ApiError, Result};
use crate::models::{CatalogEntry, CatalogInfoResponse};

/// Where the catalog is rebuilt from.
#[derive(Clone)]
pub enum CatalogSource {
    Database(Arc<Database>),
    File(PathBuf),
    /// Catalog only changes through `PUT /api/catalog`.
    None,
}

impl CatalogSource {
    /// Database wins over a file when both are configured.
    pub fn select(db: Option<Arc<Database>>, catalog_path: Option<PathBuf>) -> Self {
        match (db, catalog_path) {
            (Some(db), _) => Self::Database(db),
            (None, Some(path)) => Self::File(path),
            (None, None) => Self::None,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Database(_) => "database".to_string(),
            Self::File(path) => format!("file {}", path.display()),
            Self::None => "none".to_string(),
        }
    }

    /// Read the current entries from the source.
    pub async fn load_entries(&self) -> Result<Vec<CatalogEntry>> {
        match self {
            Self::Database(db) => db.load_catalog().await,
            Self::File(path) => {
                let path = path.clone();
                tokio::task::spawn_blocking(move || load_catalog_file(path))
                    .await
                    .map_err(|e| ApiError::Internal(format!("catalog loader failed: {}", e)))?
                    .map_err(ApiError::from)
            }
            Self::None => Err(ApiError::BadRequest(
                "no catalog source configured".to_string(),
            )),
        }
    }
}

/// Build the abbreviation table, merging an optional JSON file over the built-ins.
pub fn load_abbreviations(path: Option<&PathBuf>) -> Result<AbbreviationTable> {
    let mut table = AbbreviationTable::builtin();

    if let Some(path) = path {
        let json = std::fs::read_to_string(path)
            .map_err(|e| ApiError::Config(format!("{}: {}", path.display(), e)))?;
        let custom = AbbreviationTable::from_json(&json)
            .map_err(|e| ApiError::Config(format!("{}: {}", path.display(), e)))?;
        table.merge(&custom);
    }

    Ok(table)
}

/// SHA-256 over the entries in order, stable across rebuilds of the same data.
pub fn fingerprint(entries: &[CatalogEntry]) -> String {
    let mut hasher = Sha256::new();
    for entry in entries {
        hasher.update(entry.player_name.as_bytes());
        hasher.update([0x1f]);
        hasher.update(entry.team_name.as_bytes());
        hasher.update([0x1e]);
    }
    format!("{:x}", hasher.finalize())
}

/// Summary of a catalog snapshot.
pub fn catalog_info(catalog: &Catalog) -> CatalogInfoResponse {
    CatalogInfoResponse {
        entries: catalog.len(),
        players: catalog.player_names().len(),
        teams: catalog.team_names().len(),
        fingerprint: fingerprint(catalog.entries()),
        built_at: catalog.built_at(),
    }
}
