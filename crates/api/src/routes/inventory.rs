//! Route definitions for supply inventory (PRD-45).

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::inventory;
use crate::state::AppState;

/// Inventory routes mounted at `/inventory`.
///
/// ```text
/// GET    /               -> list_items
/// POST   /               -> create_item
/// GET    /low-stock      -> list_low_stock
/// GET    /{id}           -> get_item
/// PUT    /{id}           -> update_item
/// DELETE /{id}           -> delete_item
/// POST   /{id}/scan      -> scan_item (QR deduction)
/// POST   /{id}/restock   -> restock_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(inventory::list_items).post(inventory::create_item))
        .route("/low-stock", get(inventory::list_low_stock))
        .route(
            "/{id}",
            get(inventory::get_item)
                .put(inventory::update_item)
                .delete(inventory::delete_item),
        )
        .route("/{id}/scan", post(inventory::scan_item))
        .route("/{id}/restock", post(inventory::restock_item))
}
