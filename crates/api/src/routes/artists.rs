//! Route definitions for the artist roster (PRD-13).

use axum::routing::get;
use axum::Router;

use crate::handlers::artists;
use crate::state::AppState;

/// Artist roster routes mounted at `/artists`.
///
/// ```text
/// GET    /       -> list_artists
/// POST   /       -> create_artist
/// GET    /{id}   -> get_artist
/// PUT    /{id}   -> update_artist
/// DELETE /{id}   -> deactivate_artist (soft delete)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(artists::list_artists).post(artists::create_artist))
        .route(
            "/{id}",
            get(artists::get_artist)
                .put(artists::update_artist)
                .delete(artists::deactivate_artist),
        )
}
