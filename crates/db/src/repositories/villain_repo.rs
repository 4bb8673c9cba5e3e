//! Repository for the `villains` table.
//!
//! Records are keyed by name for every caller-facing operation. There is no
//! update: a card is inserted once and lives until it is deleted by name.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use villain_core::error::CoreError;
use villain_core::validation::{NameLookup, NewVillain};

use crate::models::villain::Villain;

/// Column list for `villains` queries.
const COLUMNS: &str = "id, name, description, interests, url, date_added";

/// Provides data access for villain cards.
pub struct VillainRepo;

impl VillainRepo {
    /// List every villain in insertion order.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Villain>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM villains ORDER BY id");
        sqlx::query_as::<_, Villain>(&query).fetch_all(pool).await
    }

    /// Find a villain by exact (case-sensitive) name.
    pub async fn find_by_name(
        pool: &SqlitePool,
        name: &str,
    ) -> Result<Option<Villain>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM villains WHERE name = ?");
        sqlx::query_as::<_, Villain>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Insert a validated villain, stamping `date_added` with the current time.
    ///
    /// The `uq_villains_name` constraint still applies; a duplicate that slipped
    /// past validation comes back as an error [`crate::is_unique_violation`]
    /// recognises.
    pub async fn create(pool: &SqlitePool, dto: &NewVillain) -> Result<Villain, sqlx::Error> {
        let query = format!(
            "INSERT INTO villains (name, description, interests, url, date_added) \
             VALUES (?, ?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        let villain = sqlx::query_as::<_, Villain>(&query)
            .bind(&dto.name)
            .bind(&dto.description)
            .bind(&dto.interests)
            .bind(&dto.url)
            .bind(Utc::now())
            .fetch_one(pool)
            .await?;

        tracing::debug!(id = villain.id, name = %villain.name, "Villain row inserted");
        Ok(villain)
    }

    /// Delete a villain by name. Returns `true` if a row was removed.
    pub async fn delete_by_name(pool: &SqlitePool, name: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM villains WHERE name = ?")
            .bind(name)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// [`NameLookup`] backed by [`VillainRepo::find_by_name`].
pub struct StoreNameLookup<'a> {
    pool: &'a SqlitePool,
}

impl<'a> StoreNameLookup<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NameLookup for StoreNameLookup<'_> {
    async fn name_exists(&self, name: &str) -> Result<bool, CoreError> {
        VillainRepo::find_by_name(self.pool, name)
            .await
            .map(|found| found.is_some())
            .map_err(|e| CoreError::Internal(format!("villain lookup failed: {e}")))
    }
}
