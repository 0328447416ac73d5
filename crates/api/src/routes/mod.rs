pub mod admin;
pub mod artists;
pub mod expenses;
pub mod health;
pub mod inventory;
pub mod reports;
pub mod works;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /artists                         list, create
/// /artists/{id}                    get, update, deactivate
///
/// /works                           list (month filter), create
/// /works/{id}                      get, update, delete
///
/// /expenses                        list (month filter), create
/// /expenses/{id}                   get, update, delete
///
/// /inventory                       list, create
/// /inventory/low-stock             dashboard warning list
/// /inventory/{id}                  get, update, delete
/// /inventory/{id}/scan             QR stock deduction (POST)
/// /inventory/{id}/restock          stock replenishment (POST)
///
/// /reports/summary                 month financials + artist breakdown
/// /reports/monthly                 running-balance ledger, JSON or CSV
///
/// /admin/studios                   list, create (admin only)
/// /admin/studios/{id}              get, update
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/artists", artists::router())
        .nest("/works", works::router())
        .nest("/expenses", expenses::router())
        .nest("/inventory", inventory::router())
        .nest("/reports", reports::router())
        .nest("/admin/studios", admin::studios_router())
}
