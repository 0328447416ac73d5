//! Route definitions for tenant administration (PRD-07).

use axum::routing::get;
use axum::Router;

use crate::handlers::studios;
use crate::state::AppState;

/// Studio admin routes mounted at `/admin/studios`. Admin role enforced
/// by the handlers' [`RequireAdmin`] extractor.
///
/// ```text
/// GET    /       -> list_studios
/// POST   /       -> create_studio
/// GET    /{id}   -> get_studio
/// PUT    /{id}   -> update_studio
/// ```
///
/// [`RequireAdmin`]: crate::middleware::rbac::RequireAdmin
pub fn studios_router() -> Router<AppState> {
    Router::new()
        .route("/", get(studios::list_studios).post(studios::create_studio))
        .route(
            "/{id}",
            get(studios::get_studio).put(studios::update_studio),
        )
}
