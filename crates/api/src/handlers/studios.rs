//! Handlers for studio (tenant) administration (PRD-07).
//!
//! All endpoints require the `admin` role. Switching a studio's
//! `operator_mode` changes which financial formula its reports use from
//! the next request on; recorded data is untouched.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tinta_core::error::CoreError;
use tinta_core::types::DbId;
use tinta_core::validation::validate_name;
use tinta_db::models::studio::{CreateStudio, UpdateStudio};
use tinta_db::repositories::StudioRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/studios
///
/// List all studios.
pub async fn list_studios(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let studios = StudioRepo::list(&state.pool).await?;

    Ok(Json(DataResponse { data: studios }))
}

/// POST /api/v1/admin/studios
///
/// Register a new studio.
pub async fn create_studio(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateStudio>,
) -> AppResult<impl IntoResponse> {
    validate_name(&input.name, "name")?;

    let studio = StudioRepo::create(&state.pool, &input).await?;

    tracing::info!(
        studio_id = studio.id,
        name = %studio.name,
        operator_mode = %studio.operator_mode,
        user_id = admin.user_id,
        "Studio created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: studio })))
}

/// GET /api/v1/admin/studios/:id
///
/// Retrieve a single studio by ID.
pub async fn get_studio(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(studio_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let studio = StudioRepo::find_by_id(&state.pool, studio_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Studio",
            id: studio_id,
        }))?;

    Ok(Json(DataResponse { data: studio }))
}

/// PUT /api/v1/admin/studios/:id
///
/// Partially update a studio, including operator-mode switches and
/// deactivation.
pub async fn update_studio(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(studio_id): Path<DbId>,
    Json(input): Json<UpdateStudio>,
) -> AppResult<impl IntoResponse> {
    if let Some(name) = &input.name {
        validate_name(name, "name")?;
    }

    let studio = StudioRepo::update(&state.pool, studio_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Studio",
            id: studio_id,
        }))?;

    tracing::info!(studio_id, user_id = admin.user_id, "Studio updated");

    Ok(Json(DataResponse { data: studio }))
}
