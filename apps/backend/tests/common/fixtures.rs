//! Test fixtures and factory functions for creating test data.

use serde_json::json;

use card_collection_backend::models::CatalogEntry;
use card_recognition_core::format_catalog;

/// Single Paris Saint-Germain card.
pub fn psg_catalog() -> Vec<CatalogEntry> {
    vec![CatalogEntry::new("Kylian Mbappé", "Paris Saint-Germain")]
}

/// Two cards from different Ligue 1 clubs.
pub fn ligue1_catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new("Jonathan David", "LOSC Lille"),
        CatalogEntry::new("Alexandre Lacazette", "Olympique Lyonnais"),
    ]
}

/// Catalog file content in the `player | team` format.
pub fn catalog_file_content(entries: &[CatalogEntry]) -> String {
    format!("# test catalog\n{}\n", format_catalog(entries))
}

/// Create a recognize request body.
pub fn recognize_request(fragments: &[&str]) -> serde_json::Value {
    json!({ "fragments": fragments })
}

/// Create a replace catalog request body.
pub fn replace_catalog_request(entries: &[CatalogEntry]) -> serde_json::Value {
    json!({ "entries": entries })
}
