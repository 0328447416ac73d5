//! Repository for the `studios` table (PRD-07).

use sqlx::PgPool;
use tinta_core::financials::OperatorMode;
use tinta_core::types::DbId;

use crate::models::studio::{CreateStudio, Studio, UpdateStudio};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, operator_mode, is_active, created_at, updated_at";

/// Provides CRUD operations for studios (tenants).
pub struct StudioRepo;

impl StudioRepo {
    /// Insert a new studio, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateStudio) -> Result<Studio, sqlx::Error> {
        let mode = input.operator_mode.unwrap_or(OperatorMode::Owner);
        let query = format!(
            "INSERT INTO studios (name, operator_mode) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Studio>(&query)
            .bind(input.name.trim())
            .bind(mode.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find a studio by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Studio>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM studios WHERE id = $1");
        sqlx::query_as::<_, Studio>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all studios ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Studio>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM studios ORDER BY id ASC");
        sqlx::query_as::<_, Studio>(&query).fetch_all(pool).await
    }

    /// Update an existing studio. Returns the updated row, or `None` if
    /// not found.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStudio,
    ) -> Result<Option<Studio>, sqlx::Error> {
        let query = format!(
            "UPDATE studios SET \
                name          = COALESCE($1, name), \
                operator_mode = COALESCE($2, operator_mode), \
                is_active     = COALESCE($3, is_active), \
                updated_at    = NOW() \
             WHERE id = $4 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Studio>(&query)
            .bind(input.name.as_deref().map(str::trim))
            .bind(input.operator_mode.map(OperatorMode::as_str))
            .bind(input.is_active)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
