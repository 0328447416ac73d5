//! Route definitions for expenses (PRD-12).

use axum::routing::get;
use axum::Router;

use crate::handlers::expenses;
use crate::state::AppState;

/// Expense routes mounted at `/expenses`.
///
/// ```text
/// GET    /       -> list_expenses (optional ?month=&year=)
/// POST   /       -> create_expense
/// GET    /{id}   -> get_expense
/// PUT    /{id}   -> update_expense
/// DELETE /{id}   -> delete_expense
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(expenses::list_expenses).post(expenses::create_expense),
        )
        .route(
            "/{id}",
            get(expenses::get_expense)
                .put(expenses::update_expense)
                .delete(expenses::delete_expense),
        )
}
