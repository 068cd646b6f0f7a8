//! Catalog API tests.
//!
//! The database-backed reload test requires a running PostgreSQL database.
//! Set DATABASE_URL before running it with `--ignored`.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use card_collection_backend::models::CatalogEntry;
use common::fixtures;
use common::TestContext;

/// Catalog info reports distinct counts and a fingerprint.
#[tokio::test]
async fn test_catalog_info() {
    let mut entries = fixtures::ligue1_catalog();
    entries.push(CatalogEntry::new("Jonathan David", "LOSC Lille"));
    let ctx = TestContext::new(entries);
    let server = ctx.server();

    let response = server.get("/api/catalog").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["entries"], 3);
    assert_eq!(body["players"], 2);
    assert_eq!(body["teams"], 2);
    assert_eq!(body["fingerprint"].as_str().unwrap().len(), 64);
    assert!(body["builtAt"].is_string());
}

/// Replacing the catalog changes what gets recognized.
#[tokio::test]
async fn test_replace_catalog() {
    let ctx = TestContext::new(fixtures::psg_catalog());
    let server = ctx.server();

    let before: serde_json::Value = server.get("/api/catalog").await.json();

    let response = server
        .put("/api/catalog")
        .json(&fixtures::replace_catalog_request(&fixtures::ligue1_catalog()))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["entries"], 2);
    assert_ne!(body["fingerprint"], before["fingerprint"]);

    let old: serde_json::Value = server
        .post("/api/recognize")
        .json(&fixtures::recognize_request(&["MBAPPÉ"]))
        .await
        .json();
    assert_eq!(old["needsConfirmation"], true);

    let new: serde_json::Value = server
        .post("/api/recognize")
        .json(&fixtures::recognize_request(&["DAVID"]))
        .await
        .json();
    assert_eq!(new["playerName"], "Jonathan David");
}

/// Replacing with the same entries keeps the fingerprint.
#[tokio::test]
async fn test_replace_catalog_same_fingerprint() {
    let ctx = TestContext::new(fixtures::ligue1_catalog());
    let server = ctx.server();

    let before: serde_json::Value = server.get("/api/catalog").await.json();
    let after: serde_json::Value = server
        .put("/api/catalog")
        .json(&fixtures::replace_catalog_request(&fixtures::ligue1_catalog()))
        .await
        .json();

    assert_eq!(before["fingerprint"], after["fingerprint"]);
}

/// Reload without a source is a client error.
#[tokio::test]
async fn test_reload_without_source() {
    let ctx = TestContext::new(fixtures::psg_catalog());
    let server = ctx.server();

    let response = server.post("/api/catalog/reload").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "bad_request");

    // catalog untouched
    assert_eq!(ctx.state.matcher.snapshot().len(), 1);
}

/// Reload picks up changes to the catalog file.
#[tokio::test]
async fn test_reload_from_file() {
    let path = std::env::temp_dir().join(format!("api-catalog-{}.txt", std::process::id()));
    std::fs::write(&path, fixtures::catalog_file_content(&fixtures::psg_catalog())).unwrap();

    let ctx = TestContext::with_catalog_file(path.clone());
    let server = ctx.server();

    let body: serde_json::Value = server.post("/api/catalog/reload").await.json();
    assert_eq!(body["entries"], 1);

    std::fs::write(&path, fixtures::catalog_file_content(&fixtures::ligue1_catalog())).unwrap();
    let response = server.post("/api/catalog/reload").await;
    std::fs::remove_file(&path).ok();

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["entries"], 2);
    assert_eq!(
        ctx.state.matcher.snapshot().entries(),
        fixtures::ligue1_catalog().as_slice()
    );
}

/// Broken catalog file is reported and the old catalog stays.
#[tokio::test]
async fn test_reload_from_malformed_file() {
    let path = std::env::temp_dir().join(format!("api-catalog-bad-{}.txt", std::process::id()));
    std::fs::write(&path, "Kylian Mbappé without a team\n").unwrap();

    let ctx = TestContext::with_catalog_file(path.clone());
    ctx.state.matcher.rebuild_catalog(fixtures::psg_catalog());
    let server = ctx.server();

    let response = server.post("/api/catalog/reload").await;
    std::fs::remove_file(&path).ok();

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "catalog_parse_error");
    assert_eq!(ctx.state.matcher.snapshot().len(), 1);
}

/// Reload from PostgreSQL.
#[tokio::test]
#[ignore = "requires database"]
async fn test_reload_from_database() {
    let (ctx, db) = TestContext::with_database().await;
    let server = ctx.server();

    let entries = vec![CatalogEntry::new("Zz Test Player", "Zz Test Club")];
    db.insert_catalog_cards(&entries).await.unwrap();

    let response = server.post("/api/catalog/reload").await;
    response.assert_status_ok();

    let recognized: serde_json::Value = server
        .post("/api/recognize")
        .json(&fixtures::recognize_request(&["ZZ TEST PLAYER"]))
        .await
        .json();
    assert_eq!(recognized["playerName"], "Zz Test Player");

    // Cleanup
    common::cleanup_catalog(&db, &["Zz Test Player"]).await;
}
