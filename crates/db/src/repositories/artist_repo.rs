//! Repository for the `artists` table (PRD-13).

use sqlx::PgPool;
use tinta_core::types::DbId;

use crate::models::artist::{Artist, CreateArtist, UpdateArtist};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, studio_id, name, commission_percentage, is_active, created_at, updated_at";

/// Provides CRUD operations for a studio's artist roster.
pub struct ArtistRepo;

impl ArtistRepo {
    /// Insert a new artist, returning the created row.
    pub async fn create(
        pool: &PgPool,
        studio_id: DbId,
        input: &CreateArtist,
    ) -> Result<Artist, sqlx::Error> {
        let query = format!(
            "INSERT INTO artists (studio_id, name, commission_percentage) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(studio_id)
            .bind(input.name.trim())
            .bind(input.commission_percentage)
            .fetch_one(pool)
            .await
    }

    /// Find an artist by ID within a studio.
    pub async fn find_by_id(
        pool: &PgPool,
        studio_id: DbId,
        id: DbId,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1 AND studio_id = $2");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .bind(studio_id)
            .fetch_optional(pool)
            .await
    }

    /// List a studio's artists ordered by name. Inactive artists are
    /// excluded unless requested.
    pub async fn list(
        pool: &PgPool,
        studio_id: DbId,
        include_inactive: bool,
    ) -> Result<Vec<Artist>, sqlx::Error> {
        let active_clause = if include_inactive {
            ""
        } else {
            " AND is_active = TRUE"
        };
        let query = format!(
            "SELECT {COLUMNS} FROM artists \
             WHERE studio_id = $1{active_clause} \
             ORDER BY name ASC"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(studio_id)
            .fetch_all(pool)
            .await
    }

    /// Update an existing artist. Returns the updated row, or `None` if
    /// not found in this studio.
    pub async fn update(
        pool: &PgPool,
        studio_id: DbId,
        id: DbId,
        input: &UpdateArtist,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!(
            "UPDATE artists SET \
                name                  = COALESCE($1, name), \
                commission_percentage = COALESCE($2, commission_percentage), \
                is_active             = COALESCE($3, is_active), \
                updated_at            = NOW() \
             WHERE id = $4 AND studio_id = $5 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(input.name.as_deref().map(str::trim))
            .bind(input.commission_percentage)
            .bind(input.is_active)
            .bind(id)
            .bind(studio_id)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete an artist by clearing `is_active`. Returns the updated
    /// row, or `None` if not found in this studio.
    pub async fn deactivate(
        pool: &PgPool,
        studio_id: DbId,
        id: DbId,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!(
            "UPDATE artists SET is_active = FALSE, updated_at = NOW() \
             WHERE id = $1 AND studio_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .bind(studio_id)
            .fetch_optional(pool)
            .await
    }
}
