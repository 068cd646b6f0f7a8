//! Common test utilities and fixtures for integration tests.
//!
//! Most tests run against an in-memory catalog. Tests that exercise the
//! PostgreSQL catalog source need `DATABASE_URL` and are `#[ignore]`d.

pub mod fixtures;

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;

use card_collection_backend::build_router;
use card_collection_backend::config::RecognizeLimits;
use card_collection_backend::db::Database;
use card_collection_backend::models::{CatalogEntry, MatcherConfig};
use card_collection_backend::services::catalog::CatalogSource;
use card_collection_backend::AppState;
use card_recognition_core::CardMatcher;

/// Fragment cap used by test routers.
pub const TEST_MAX_FRAGMENTS: usize = 8;

/// Per-fragment length cap used by test routers.
pub const TEST_MAX_FRAGMENT_CHARS: usize = 32;

/// Request limits used by test routers.
pub fn test_limits() -> RecognizeLimits {
    RecognizeLimits {
        max_fragments: TEST_MAX_FRAGMENTS,
        max_fragment_chars: TEST_MAX_FRAGMENT_CHARS,
    }
}

/// Test context holding the shared state and router.
pub struct TestContext {
    pub state: AppState,
    app: Router,
}

impl TestContext {
    /// Context with the given catalog and no reload source.
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let matcher = CardMatcher::with_catalog(MatcherConfig::default(), entries);
        Self::from_state(AppState::new(matcher, test_limits()))
    }

    /// Context that reloads its catalog from a file.
    pub fn with_catalog_file(path: std::path::PathBuf) -> Self {
        let matcher = CardMatcher::new(MatcherConfig::default());
        let state =
            AppState::new(matcher, test_limits()).with_source(CatalogSource::File(path));
        Self::from_state(state)
    }

    /// Context backed by PostgreSQL.
    ///
    /// # Panics
    /// Panics if DATABASE_URL is not set or database connection fails.
    pub async fn with_database() -> (Self, Arc<Database>) {
        dotenvy::dotenv().ok();

        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

        let db = Database::connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        db.run_migrations()
            .await
            .expect("Failed to run migrations");

        let db = Arc::new(db);
        let matcher = CardMatcher::new(MatcherConfig::default());
        let state = AppState::new(matcher, test_limits())
            .with_source(CatalogSource::Database(db.clone()));

        (Self::from_state(state), db)
    }

    fn from_state(state: AppState) -> Self {
        let app = build_router(state.clone());
        Self { state, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Test server over the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).unwrap()
    }
}

/// Remove catalog rows written by a test.
pub async fn cleanup_catalog(db: &Database, player_names: &[&str]) {
    for name in player_names {
        let _ = sqlx::query("DELETE FROM catalog_cards WHERE player_name = $1")
            .bind(name)
            .execute(db.pool())
            .await;
    }
}
