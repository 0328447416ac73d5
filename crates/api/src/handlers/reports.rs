//! Handlers for financial reports (PRD-31..34).
//!
//! Both endpoints fetch one month of rows, assemble the pure-core
//! snapshot records, and hand off to `tinta_core`. The studio's
//! `operator_mode` decides which effective-income formula applies.

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use tinta_core::error::CoreError;
use tinta_core::financials::{compute_financials, FinancialSummary, OperatorMode};
use tinta_core::ledger::{build_monthly_ledger, month_date_bounds, LedgerRow};
use tinta_core::production::{aggregate_by_artist, ArtistProduction};
use tinta_core::records::{ExpenseEntry, WorkSale};
use tinta_core::report::{render_ledger_csv, ReportLocale};
use tinta_core::types::DbId;
use tinta_db::models::artist::Artist;
use tinta_db::models::expense::Expense;
use tinta_db::models::work::Work;
use tinta_db::repositories::{ArtistRepo, ExpenseRepo, StudioRepo, WorkRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireStudio, StudioUser};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters shared by both report endpoints.
#[derive(Debug, Deserialize)]
pub struct ReportParams {
    pub month: u32,
    pub year: i32,
    /// `csv` for the download flow; anything else (or absent) is JSON.
    pub format: Option<String>,
}

/// Response payload for the summary endpoint.
#[derive(Debug, Serialize)]
pub struct SummaryReport {
    pub month: u32,
    pub year: i32,
    pub operator_mode: OperatorMode,
    pub summary: FinancialSummary,
    pub by_artist: Vec<ArtistProduction>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// One month of fetched rows, converted to the core snapshot records.
struct MonthSnapshot {
    mode: OperatorMode,
    sales: Vec<WorkSale>,
    entries: Vec<ExpenseEntry>,
}

/// Resolve each work's artist from the full roster (inactive included,
/// so soft-deleted artists still label their historical works).
fn assemble_sales(works: &[Work], roster: &[Artist]) -> Vec<WorkSale> {
    let by_id: HashMap<DbId, &Artist> = roster.iter().map(|a| (a.id, a)).collect();
    works
        .iter()
        .map(|w| w.to_sale(w.artist_id.and_then(|id| by_id.get(&id).copied())))
        .collect()
}

/// Fetch everything one month of reporting needs, scoped to the caller's
/// studio.
async fn fetch_month(
    state: &AppState,
    user: &StudioUser,
    month: u32,
    year: i32,
) -> AppResult<MonthSnapshot> {
    let bounds = month_date_bounds(month, year)?;

    let studio = StudioRepo::find_by_id(&state.pool, user.studio_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Studio",
            id: user.studio_id,
        }))?;
    let mode = OperatorMode::parse(&studio.operator_mode)?;

    let works = WorkRepo::list(&state.pool, user.studio_id, Some(bounds)).await?;
    let roster = ArtistRepo::list(&state.pool, user.studio_id, true).await?;
    let expenses = ExpenseRepo::list(&state.pool, user.studio_id, Some(bounds)).await?;

    Ok(MonthSnapshot {
        mode,
        sales: assemble_sales(&works, &roster),
        entries: expenses.iter().map(Expense::to_entry).collect(),
    })
}

// ---------------------------------------------------------------------------
// Endpoints
// ---------------------------------------------------------------------------

/// GET /api/v1/reports/summary?month=&year=
///
/// Headline financials plus the per-artist production breakdown for one
/// month.
pub async fn summary_report(
    RequireStudio(user): RequireStudio,
    State(state): State<AppState>,
    Query(params): Query<ReportParams>,
) -> AppResult<impl IntoResponse> {
    let snapshot = fetch_month(&state, &user, params.month, params.year).await?;

    let summary = compute_financials(&snapshot.sales, &snapshot.entries, snapshot.mode);
    let by_artist = aggregate_by_artist(&snapshot.sales);

    Ok(Json(DataResponse {
        data: SummaryReport {
            month: params.month,
            year: params.year,
            operator_mode: snapshot.mode,
            summary,
            by_artist,
        },
    }))
}

/// GET /api/v1/reports/monthly?month=&year=&format=csv|json
///
/// The running-balance ledger for one month. `format=csv` downloads the
/// delimited export; the default is JSON rows.
pub async fn monthly_report(
    RequireStudio(user): RequireStudio,
    State(state): State<AppState>,
    Query(params): Query<ReportParams>,
) -> AppResult<impl IntoResponse> {
    let snapshot = fetch_month(&state, &user, params.month, params.year).await?;

    let rows: Vec<LedgerRow> =
        build_monthly_ledger(&snapshot.sales, &snapshot.entries, params.month, params.year);

    let format = params.format.as_deref().unwrap_or("json");

    match format {
        "csv" => {
            let csv = render_ledger_csv(&rows, &ReportLocale::default());
            let filename = format!(
                "attachment; filename=\"reporte-{}-{:02}.csv\"",
                params.year, params.month
            );

            Ok(axum::response::Response::builder()
                .status(200)
                .header("Content-Type", "text/csv; charset=utf-8")
                .header("Content-Disposition", filename)
                .body(axum::body::Body::from(csv))
                .map_err(|e| AppError::InternalError(format!("Failed to build response: {e}")))?
                .into_response())
        }
        _ => Ok(Json(DataResponse { data: rows }).into_response()),
    }
}
