//! Repository for the `expenses` table (PRD-12).

use chrono::NaiveDate;
use sqlx::PgPool;
use tinta_core::types::DbId;

use crate::models::expense::{CreateExpense, Expense, UpdateExpense};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, studio_id, description, category, amount, expense_date, created_at, updated_at";

/// Provides CRUD operations for a studio's expenses.
pub struct ExpenseRepo;

impl ExpenseRepo {
    /// Insert a new expense, returning the created row.
    pub async fn create(
        pool: &PgPool,
        studio_id: DbId,
        input: &CreateExpense,
    ) -> Result<Expense, sqlx::Error> {
        let query = format!(
            "INSERT INTO expenses (studio_id, description, category, amount, expense_date) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Expense>(&query)
            .bind(studio_id)
            .bind(input.description.trim())
            .bind(input.category.as_deref().map(str::trim))
            .bind(input.amount)
            .bind(input.expense_date)
            .fetch_one(pool)
            .await
    }

    /// Find an expense by ID within a studio.
    pub async fn find_by_id(
        pool: &PgPool,
        studio_id: DbId,
        id: DbId,
    ) -> Result<Option<Expense>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM expenses WHERE id = $1 AND studio_id = $2");
        sqlx::query_as::<_, Expense>(&query)
            .bind(id)
            .bind(studio_id)
            .fetch_optional(pool)
            .await
    }

    /// List a studio's expenses oldest first, optionally bounded to one
    /// calendar month (`[start, end)` dates).
    pub async fn list(
        pool: &PgPool,
        studio_id: DbId,
        month: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<Vec<Expense>, sqlx::Error> {
        match month {
            Some((start, end)) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM expenses \
                     WHERE studio_id = $1 AND expense_date >= $2 AND expense_date < $3 \
                     ORDER BY expense_date ASC, id ASC"
                );
                sqlx::query_as::<_, Expense>(&query)
                    .bind(studio_id)
                    .bind(start)
                    .bind(end)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM expenses \
                     WHERE studio_id = $1 \
                     ORDER BY expense_date ASC, id ASC"
                );
                sqlx::query_as::<_, Expense>(&query)
                    .bind(studio_id)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Update an existing expense. Returns the updated row, or `None` if
    /// not found in this studio.
    pub async fn update(
        pool: &PgPool,
        studio_id: DbId,
        id: DbId,
        input: &UpdateExpense,
    ) -> Result<Option<Expense>, sqlx::Error> {
        let query = format!(
            "UPDATE expenses SET \
                description  = COALESCE($1, description), \
                category     = COALESCE($2, category), \
                amount       = COALESCE($3, amount), \
                expense_date = COALESCE($4, expense_date), \
                updated_at   = NOW() \
             WHERE id = $5 AND studio_id = $6 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Expense>(&query)
            .bind(input.description.as_deref().map(str::trim))
            .bind(input.category.as_deref().map(str::trim))
            .bind(input.amount)
            .bind(input.expense_date)
            .bind(id)
            .bind(studio_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an expense. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, studio_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = $1 AND studio_id = $2")
            .bind(id)
            .bind(studio_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
