//! Route definitions for recorded works (PRD-11).

use axum::routing::get;
use axum::Router;

use crate::handlers::works;
use crate::state::AppState;

/// Work routes mounted at `/works`.
///
/// ```text
/// GET    /       -> list_works (optional ?month=&year=)
/// POST   /       -> create_work
/// GET    /{id}   -> get_work
/// PUT    /{id}   -> update_work
/// DELETE /{id}   -> delete_work
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(works::list_works).post(works::create_work))
        .route(
            "/{id}",
            get(works::get_work)
                .put(works::update_work)
                .delete(works::delete_work),
        )
}
