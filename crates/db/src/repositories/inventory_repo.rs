//! Repository for the `inventory_items` table (PRD-45).

use sqlx::PgPool;
use tinta_core::types::DbId;

use crate::models::inventory_item::{CreateInventoryItem, InventoryItem, UpdateInventoryItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, studio_id, name, unit, quantity, min_quantity, created_at, updated_at";

/// Provides CRUD and stock-adjustment operations for inventory items.
pub struct InventoryRepo;

impl InventoryRepo {
    /// Insert a new inventory item, returning the created row.
    pub async fn create(
        pool: &PgPool,
        studio_id: DbId,
        input: &CreateInventoryItem,
    ) -> Result<InventoryItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO inventory_items (studio_id, name, unit, quantity, min_quantity) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InventoryItem>(&query)
            .bind(studio_id)
            .bind(input.name.trim())
            .bind(input.unit.as_deref().map(str::trim))
            .bind(input.quantity.unwrap_or(0))
            .bind(input.min_quantity.unwrap_or(0))
            .fetch_one(pool)
            .await
    }

    /// Find an inventory item by ID within a studio.
    pub async fn find_by_id(
        pool: &PgPool,
        studio_id: DbId,
        id: DbId,
    ) -> Result<Option<InventoryItem>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM inventory_items WHERE id = $1 AND studio_id = $2");
        sqlx::query_as::<_, InventoryItem>(&query)
            .bind(id)
            .bind(studio_id)
            .fetch_optional(pool)
            .await
    }

    /// List a studio's inventory ordered by name.
    pub async fn list(pool: &PgPool, studio_id: DbId) -> Result<Vec<InventoryItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM inventory_items \
             WHERE studio_id = $1 \
             ORDER BY name ASC"
        );
        sqlx::query_as::<_, InventoryItem>(&query)
            .bind(studio_id)
            .fetch_all(pool)
            .await
    }

    /// List items at or below their low-stock threshold, most depleted
    /// first.
    pub async fn list_low_stock(
        pool: &PgPool,
        studio_id: DbId,
    ) -> Result<Vec<InventoryItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM inventory_items \
             WHERE studio_id = $1 AND quantity <= min_quantity \
             ORDER BY quantity ASC, name ASC"
        );
        sqlx::query_as::<_, InventoryItem>(&query)
            .bind(studio_id)
            .fetch_all(pool)
            .await
    }

    /// Update an existing item's descriptive fields. Returns the updated
    /// row, or `None` if not found in this studio.
    pub async fn update(
        pool: &PgPool,
        studio_id: DbId,
        id: DbId,
        input: &UpdateInventoryItem,
    ) -> Result<Option<InventoryItem>, sqlx::Error> {
        let query = format!(
            "UPDATE inventory_items SET \
                name         = COALESCE($1, name), \
                unit         = COALESCE($2, unit), \
                quantity     = COALESCE($3, quantity), \
                min_quantity = COALESCE($4, min_quantity), \
                updated_at   = NOW() \
             WHERE id = $5 AND studio_id = $6 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InventoryItem>(&query)
            .bind(input.name.as_deref().map(str::trim))
            .bind(input.unit.as_deref().map(str::trim))
            .bind(input.quantity)
            .bind(input.min_quantity)
            .bind(id)
            .bind(studio_id)
            .fetch_optional(pool)
            .await
    }

    /// Atomically deduct stock from an item, flooring at zero. Returns
    /// the updated row, or `None` if not found in this studio.
    ///
    /// The arithmetic runs inside the UPDATE itself, so two concurrent
    /// scans of the same item each deduct their amount; a handler-side
    /// read-modify-write would let one overwrite the other.
    pub async fn consume_quantity(
        pool: &PgPool,
        studio_id: DbId,
        id: DbId,
        amount: i32,
    ) -> Result<Option<InventoryItem>, sqlx::Error> {
        sqlx::query_as::<_, InventoryItem>(&consume_query())
            .bind(amount)
            .bind(id)
            .bind(studio_id)
            .fetch_optional(pool)
            .await
    }

    /// Atomically add received stock to an item. Returns the updated
    /// row, or `None` if not found in this studio.
    pub async fn add_quantity(
        pool: &PgPool,
        studio_id: DbId,
        id: DbId,
        amount: i32,
    ) -> Result<Option<InventoryItem>, sqlx::Error> {
        sqlx::query_as::<_, InventoryItem>(&add_query())
            .bind(amount)
            .bind(id)
            .bind(studio_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an inventory item. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, studio_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM inventory_items WHERE id = $1 AND studio_id = $2")
            .bind(id)
            .bind(studio_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Deduction statement: quantity adjusts in place, floored at zero.
fn consume_query() -> String {
    format!(
        "UPDATE inventory_items SET \
            quantity   = GREATEST(quantity - $1, 0), \
            updated_at = NOW() \
         WHERE id = $2 AND studio_id = $3 \
         RETURNING {COLUMNS}"
    )
}

/// Replenishment statement: quantity adjusts in place.
fn add_query() -> String {
    format!(
        "UPDATE inventory_items SET \
            quantity   = quantity + $1, \
            updated_at = NOW() \
         WHERE id = $2 AND studio_id = $3 \
         RETURNING {COLUMNS}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // Stock movements must adjust the stored quantity inside the UPDATE
    // itself. A statement that binds a precomputed quantity reintroduces
    // the lost-decrement race between concurrent scans.

    #[test]
    fn consume_adjusts_quantity_in_place_with_zero_floor() {
        let query = consume_query();
        assert!(query.contains("quantity   = GREATEST(quantity - $1, 0)"));
        assert!(query.contains("studio_id = $3"));
    }

    #[test]
    fn restock_adjusts_quantity_in_place() {
        let query = add_query();
        assert!(query.contains("quantity   = quantity + $1"));
        assert!(query.contains("studio_id = $3"));
    }
}
