//! Inventory item models and DTOs (PRD-45).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tinta_core::types::{DbId, Timestamp};
use ts_rs::TS;

/// A row from the `inventory_items` table.
#[derive(Debug, Clone, FromRow, Serialize, TS)]
#[ts(export)]
pub struct InventoryItem {
    pub id: DbId,
    pub studio_id: DbId,
    pub name: String,
    /// Free-form unit label ("caja", "unidad", ...).
    pub unit: Option<String>,
    pub quantity: i32,
    /// Low-stock threshold the dashboard warns at.
    pub min_quantity: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding an inventory item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInventoryItem {
    pub name: String,
    pub unit: Option<String>,
    /// Defaults to 0 when omitted.
    pub quantity: Option<i32>,
    /// Defaults to 0 when omitted.
    pub min_quantity: Option<i32>,
}

/// DTO for partially updating an inventory item.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateInventoryItem {
    pub name: Option<String>,
    pub unit: Option<String>,
    pub quantity: Option<i32>,
    pub min_quantity: Option<i32>,
}
