//! Route definitions for financial reports (PRD-31..34).

use axum::routing::get;
use axum::Router;

use crate::handlers::reports;
use crate::state::AppState;

/// Report routes mounted at `/reports`.
///
/// ```text
/// GET /summary   -> summary_report (?month=&year=)
/// GET /monthly   -> monthly_report (?month=&year=&format=csv|json)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/summary", get(reports::summary_report))
        .route("/monthly", get(reports::monthly_report))
}
