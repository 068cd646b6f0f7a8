//! PostgreSQL database operations

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::error::{ApiError, Result};
use crate::models::{CatalogEntry, DbCatalogCard};

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Catalog Repository ===

    /// All catalog cards in insertion order
    pub async fn get_catalog_cards(&self) -> Result<Vec<DbCatalogCard>> {
        let cards = sqlx::query_as::<_, DbCatalogCard>(
            r#"
            SELECT id, player_name, team_name, created_at
            FROM catalog_cards
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(cards)
    }

    /// Catalog entries ready for the matcher
    pub async fn load_catalog(&self) -> Result<Vec<CatalogEntry>> {
        let cards = self.get_catalog_cards().await?;
        Ok(cards.into_iter().map(DbCatalogCard::into_entry).collect())
    }

    /// Insert catalog cards, returning the number of rows written
    pub async fn insert_catalog_cards(&self, entries: &[CatalogEntry]) -> Result<u64> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for entry in entries {
            let result = sqlx::query(
                r#"
                INSERT INTO catalog_cards (player_name, team_name)
                VALUES ($1, $2)
                "#,
            )
            .bind(&entry.player_name)
            .bind(&entry.team_name)
            .execute(&mut *tx)
            .await?;
            inserted += result.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }
}
