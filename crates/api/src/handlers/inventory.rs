//! Handlers for supply inventory (PRD-45).
//!
//! The scan endpoint is the QR flow: the client camera decodes a code
//! into an item id and posts here to deduct stock. Responses carry the
//! item's [`StockLevel`] so the UI can warn without re-deriving it.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use tinta_core::error::CoreError;
use tinta_core::inventory::{validate_movement_amount, StockLevel, DEFAULT_SCAN_DEDUCTION};
use tinta_core::types::DbId;
use tinta_core::validation::validate_name;
use tinta_db::models::inventory_item::{CreateInventoryItem, InventoryItem, UpdateInventoryItem};
use tinta_db::repositories::InventoryRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStudio;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Body for stock adjustments (scan and restock).
#[derive(Debug, Deserialize)]
pub struct StockAdjustment {
    /// Units to move. Scan defaults to one unit when omitted.
    pub amount: Option<i32>,
}

/// An inventory item together with its stock classification.
#[derive(Debug, Serialize)]
pub struct ItemWithLevel {
    #[serde(flatten)]
    pub item: InventoryItem,
    pub stock_level: StockLevel,
}

impl ItemWithLevel {
    fn new(item: InventoryItem) -> Self {
        let stock_level = StockLevel::classify(item.quantity, item.min_quantity);
        Self { item, stock_level }
    }
}

fn validate_initial_quantities(quantity: Option<i32>, min_quantity: Option<i32>) -> AppResult<()> {
    if let Some(q) = quantity {
        if q < 0 {
            return Err(AppError::Core(CoreError::Validation(format!(
                "quantity must be zero or positive, got {q}"
            ))));
        }
    }
    if let Some(m) = min_quantity {
        if m < 0 {
            return Err(AppError::Core(CoreError::Validation(format!(
                "min_quantity must be zero or positive, got {m}"
            ))));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// CRUD endpoints
// ---------------------------------------------------------------------------

/// GET /api/v1/inventory
///
/// List the studio's inventory with stock classifications.
pub async fn list_items(
    RequireStudio(user): RequireStudio,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let items = InventoryRepo::list(&state.pool, user.studio_id).await?;
    let data: Vec<ItemWithLevel> = items.into_iter().map(ItemWithLevel::new).collect();

    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/inventory/low-stock
///
/// List items at or below their threshold, most depleted first. Feeds
/// the dashboard warning panel.
pub async fn list_low_stock(
    RequireStudio(user): RequireStudio,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let items = InventoryRepo::list_low_stock(&state.pool, user.studio_id).await?;
    let data: Vec<ItemWithLevel> = items.into_iter().map(ItemWithLevel::new).collect();

    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/inventory
///
/// Add an inventory item.
pub async fn create_item(
    RequireStudio(user): RequireStudio,
    State(state): State<AppState>,
    Json(input): Json<CreateInventoryItem>,
) -> AppResult<impl IntoResponse> {
    validate_name(&input.name, "name")?;
    validate_initial_quantities(input.quantity, input.min_quantity)?;

    let item = InventoryRepo::create(&state.pool, user.studio_id, &input).await?;

    tracing::info!(
        item_id = item.id,
        studio_id = user.studio_id,
        name = %item.name,
        "Inventory item created",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: ItemWithLevel::new(item),
        }),
    ))
}

/// GET /api/v1/inventory/:id
///
/// Retrieve a single item by ID.
pub async fn get_item(
    RequireStudio(user): RequireStudio,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = InventoryRepo::find_by_id(&state.pool, user.studio_id, item_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "InventoryItem",
            id: item_id,
        }))?;

    Ok(Json(DataResponse {
        data: ItemWithLevel::new(item),
    }))
}

/// PUT /api/v1/inventory/:id
///
/// Partially update an item's descriptive fields or counters.
pub async fn update_item(
    RequireStudio(user): RequireStudio,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
    Json(input): Json<UpdateInventoryItem>,
) -> AppResult<impl IntoResponse> {
    if let Some(name) = &input.name {
        validate_name(name, "name")?;
    }
    validate_initial_quantities(input.quantity, input.min_quantity)?;

    let item = InventoryRepo::update(&state.pool, user.studio_id, item_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "InventoryItem",
            id: item_id,
        }))?;

    tracing::info!(item_id, studio_id = user.studio_id, "Inventory item updated");

    Ok(Json(DataResponse {
        data: ItemWithLevel::new(item),
    }))
}

/// DELETE /api/v1/inventory/:id
///
/// Delete an inventory item.
pub async fn delete_item(
    RequireStudio(user): RequireStudio,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = InventoryRepo::delete(&state.pool, user.studio_id, item_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "InventoryItem",
            id: item_id,
        }));
    }

    tracing::info!(item_id, studio_id = user.studio_id, "Inventory item deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Stock movement endpoints
// ---------------------------------------------------------------------------

/// POST /api/v1/inventory/:id/scan
///
/// Deduct stock for a scanned item. Defaults to one unit; quantity
/// floors at zero so a double-fired scan never errors.
///
/// The deduction is a single UPDATE so concurrent scans of the same
/// item serialize in the database instead of overwriting each other.
pub async fn scan_item(
    RequireStudio(user): RequireStudio,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
    Json(input): Json<StockAdjustment>,
) -> AppResult<impl IntoResponse> {
    let amount = input.amount.unwrap_or(DEFAULT_SCAN_DEDUCTION);
    validate_movement_amount(amount)?;

    let item = InventoryRepo::consume_quantity(&state.pool, user.studio_id, item_id, amount)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "InventoryItem",
            id: item_id,
        }))?;

    tracing::info!(
        item_id,
        studio_id = user.studio_id,
        amount,
        quantity = item.quantity,
        "Stock consumed via scan",
    );

    Ok(Json(DataResponse {
        data: ItemWithLevel::new(item),
    }))
}

/// POST /api/v1/inventory/:id/restock
///
/// Add received stock to an item.
pub async fn restock_item(
    RequireStudio(user): RequireStudio,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
    Json(input): Json<StockAdjustment>,
) -> AppResult<impl IntoResponse> {
    let amount = input.amount.ok_or_else(|| {
        AppError::Core(CoreError::Validation("amount is required".into()))
    })?;
    validate_movement_amount(amount)?;

    let item = InventoryRepo::add_quantity(&state.pool, user.studio_id, item_id, amount)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "InventoryItem",
            id: item_id,
        }))?;

    tracing::info!(
        item_id,
        studio_id = user.studio_id,
        amount,
        quantity = item.quantity,
        "Stock replenished",
    );

    Ok(Json(DataResponse {
        data: ItemWithLevel::new(item),
    }))
}
