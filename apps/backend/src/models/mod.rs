//! Database models and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Re-export shared types from card-recognition-core
pub use card_recognition_core::{CatalogEntry, MatchResult, MatcherConfig};

// === Database Entity Types ===

/// Catalog card stored in PostgreSQL
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbCatalogCard {
    pub id: i64,
    pub player_name: String,
    pub team_name: String,
    pub created_at: DateTime<Utc>,
}

impl DbCatalogCard {
    /// Convert to matcher catalog entry
    pub fn into_entry(self) -> CatalogEntry {
        CatalogEntry {
            player_name: self.player_name,
            team_name: self.team_name,
        }
    }
}

// === API Request/Response Types ===

// Recognize types
#[derive(Debug, Serialize, Deserialize)]
pub struct RecognizeRequest {
    pub fragments: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognizeResponse {
    pub player_name: String,
    pub team_name: String,
    pub confidence: f64,
    pub matched_card: Option<CatalogEntry>,
    /// No card was identified; the client should ask for manual entry.
    pub needs_confirmation: bool,
}

impl From<MatchResult> for RecognizeResponse {
    fn from(result: MatchResult) -> Self {
        Self {
            needs_confirmation: result.matched_card.is_none(),
            player_name: result.player_name,
            team_name: result.team_name,
            confidence: result.confidence,
            matched_card: result.matched_card,
        }
    }
}

// Catalog types
#[derive(Debug, Serialize, Deserialize)]
pub struct ReplaceCatalogRequest {
    pub entries: Vec<CatalogEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogInfoResponse {
    pub entries: usize,
    pub players: usize,
    pub teams: usize,
    pub fingerprint: String,
    pub built_at: DateTime<Utc>,
}
