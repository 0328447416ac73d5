//! Repository for the `works` table (PRD-11).

use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;
use tinta_core::types::DbId;

use crate::models::work::{CreateWork, UpdateWork, Work};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, studio_id, artist_id, client_name, total_price, \
    commission_percentage, is_canvas, created_at, updated_at";

/// Provides CRUD operations for a studio's recorded works.
pub struct WorkRepo;

impl WorkRepo {
    /// Insert a new work, returning the created row.
    pub async fn create(
        pool: &PgPool,
        studio_id: DbId,
        input: &CreateWork,
    ) -> Result<Work, sqlx::Error> {
        let query = format!(
            "INSERT INTO works \
                (studio_id, artist_id, client_name, total_price, commission_percentage, is_canvas) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Work>(&query)
            .bind(studio_id)
            .bind(input.artist_id)
            .bind(input.client_name.trim())
            .bind(input.total_price)
            .bind(input.commission_percentage)
            .bind(input.is_canvas.unwrap_or(false))
            .fetch_one(pool)
            .await
    }

    /// Find a work by ID within a studio.
    pub async fn find_by_id(
        pool: &PgPool,
        studio_id: DbId,
        id: DbId,
    ) -> Result<Option<Work>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM works WHERE id = $1 AND studio_id = $2");
        sqlx::query_as::<_, Work>(&query)
            .bind(id)
            .bind(studio_id)
            .fetch_optional(pool)
            .await
    }

    /// List a studio's works oldest first, optionally bounded to one
    /// calendar month (`[start, end)` dates, interpreted in UTC).
    pub async fn list(
        pool: &PgPool,
        studio_id: DbId,
        month: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<Vec<Work>, sqlx::Error> {
        match month {
            Some((start, end)) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM works \
                     WHERE studio_id = $1 AND created_at >= $2 AND created_at < $3 \
                     ORDER BY created_at ASC, id ASC"
                );
                sqlx::query_as::<_, Work>(&query)
                    .bind(studio_id)
                    .bind(start.and_time(NaiveTime::MIN).and_utc())
                    .bind(end.and_time(NaiveTime::MIN).and_utc())
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM works \
                     WHERE studio_id = $1 \
                     ORDER BY created_at ASC, id ASC"
                );
                sqlx::query_as::<_, Work>(&query)
                    .bind(studio_id)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Update an existing work. Returns the updated row, or `None` if
    /// not found in this studio.
    ///
    /// COALESCE patch: absent fields keep their stored value, so nullable
    /// columns cannot be reset to NULL here (see [`UpdateWork`]).
    pub async fn update(
        pool: &PgPool,
        studio_id: DbId,
        id: DbId,
        input: &UpdateWork,
    ) -> Result<Option<Work>, sqlx::Error> {
        let query = format!(
            "UPDATE works SET \
                artist_id             = COALESCE($1, artist_id), \
                client_name           = COALESCE($2, client_name), \
                total_price           = COALESCE($3, total_price), \
                commission_percentage = COALESCE($4, commission_percentage), \
                is_canvas             = COALESCE($5, is_canvas), \
                updated_at            = NOW() \
             WHERE id = $6 AND studio_id = $7 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Work>(&query)
            .bind(input.artist_id)
            .bind(input.client_name.as_deref().map(str::trim))
            .bind(input.total_price)
            .bind(input.commission_percentage)
            .bind(input.is_canvas)
            .bind(id)
            .bind(studio_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a work. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, studio_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM works WHERE id = $1 AND studio_id = $2")
            .bind(id)
            .bind(studio_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
