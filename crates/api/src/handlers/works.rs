//! Handlers for recorded works (PRD-11).
//!
//! A work snapshots its commission percentage at recording time; later
//! roster edits never touch it. Canvas works (material-only sales) are
//! flagged here and zeroed out by the aggregation layer.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use tinta_core::error::CoreError;
use tinta_core::ledger::month_date_bounds;
use tinta_core::types::DbId;
use tinta_core::validation::{
    validate_commission_range, validate_name, validate_non_negative_amount,
};
use tinta_db::models::work::{CreateWork, UpdateWork};
use tinta_db::repositories::{ArtistRepo, WorkRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStudio;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the work listing. `month` and `year` must be
/// given together to bound the listing to one calendar month.
#[derive(Debug, Deserialize)]
pub struct ListWorksParams {
    pub month: Option<u32>,
    pub year: Option<i32>,
}

/// Resolve the optional month/year pair into query date bounds.
fn month_filter(params: &ListWorksParams) -> AppResult<Option<(chrono::NaiveDate, chrono::NaiveDate)>> {
    match (params.month, params.year) {
        (Some(month), Some(year)) => Ok(Some(month_date_bounds(month, year)?)),
        (None, None) => Ok(None),
        _ => Err(AppError::BadRequest(
            "month and year must be provided together".into(),
        )),
    }
}

/// Reject works that reference an artist outside this studio's roster.
async fn ensure_artist_exists(
    state: &AppState,
    studio_id: DbId,
    artist_id: DbId,
) -> AppResult<()> {
    ArtistRepo::find_by_id(&state.pool, studio_id, artist_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Artist",
            id: artist_id,
        }))?;
    Ok(())
}

/// GET /api/v1/works
///
/// List the studio's works oldest first, optionally bounded to one
/// calendar month via `?month=&year=`.
pub async fn list_works(
    RequireStudio(user): RequireStudio,
    State(state): State<AppState>,
    Query(params): Query<ListWorksParams>,
) -> AppResult<impl IntoResponse> {
    let bounds = month_filter(&params)?;
    let works = WorkRepo::list(&state.pool, user.studio_id, bounds).await?;

    Ok(Json(DataResponse { data: works }))
}

/// POST /api/v1/works
///
/// Record a work.
pub async fn create_work(
    RequireStudio(user): RequireStudio,
    State(state): State<AppState>,
    Json(input): Json<CreateWork>,
) -> AppResult<impl IntoResponse> {
    validate_name(&input.client_name, "client_name")?;
    validate_non_negative_amount(input.total_price, "total_price")?;
    if let Some(pct) = input.commission_percentage {
        validate_commission_range(pct, "commission_percentage")?;
    }
    if let Some(artist_id) = input.artist_id {
        ensure_artist_exists(&state, user.studio_id, artist_id).await?;
    }

    let work = WorkRepo::create(&state.pool, user.studio_id, &input).await?;

    tracing::info!(
        work_id = work.id,
        studio_id = user.studio_id,
        total_price = work.total_price,
        is_canvas = work.is_canvas,
        "Work recorded",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: work })))
}

/// GET /api/v1/works/:id
///
/// Retrieve a single work by ID.
pub async fn get_work(
    RequireStudio(user): RequireStudio,
    State(state): State<AppState>,
    Path(work_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let work = WorkRepo::find_by_id(&state.pool, user.studio_id, work_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Work",
            id: work_id,
        }))?;

    Ok(Json(DataResponse { data: work }))
}

/// PUT /api/v1/works/:id
///
/// Partially update a work.
pub async fn update_work(
    RequireStudio(user): RequireStudio,
    State(state): State<AppState>,
    Path(work_id): Path<DbId>,
    Json(input): Json<UpdateWork>,
) -> AppResult<impl IntoResponse> {
    if let Some(name) = &input.client_name {
        validate_name(name, "client_name")?;
    }
    if let Some(price) = input.total_price {
        validate_non_negative_amount(price, "total_price")?;
    }
    if let Some(pct) = input.commission_percentage {
        validate_commission_range(pct, "commission_percentage")?;
    }
    if let Some(artist_id) = input.artist_id {
        ensure_artist_exists(&state, user.studio_id, artist_id).await?;
    }

    let work = WorkRepo::update(&state.pool, user.studio_id, work_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Work",
            id: work_id,
        }))?;

    tracing::info!(work_id, studio_id = user.studio_id, "Work updated");

    Ok(Json(DataResponse { data: work }))
}

/// DELETE /api/v1/works/:id
///
/// Delete a work.
pub async fn delete_work(
    RequireStudio(user): RequireStudio,
    State(state): State<AppState>,
    Path(work_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = WorkRepo::delete(&state.pool, user.studio_id, work_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Work",
            id: work_id,
        }));
    }

    tracing::info!(work_id, studio_id = user.studio_id, "Work deleted");

    Ok(StatusCode::NO_CONTENT)
}
