//! Handlers for the artist roster (PRD-13).
//!
//! Artists are soft-deleted via `is_active` so historical works keep a
//! resolvable name. Commission changes only affect future defaulting;
//! recorded works keep their snapshot.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use tinta_core::error::CoreError;
use tinta_core::types::DbId;
use tinta_core::validation::{validate_commission_range, validate_name};
use tinta_db::models::artist::{CreateArtist, UpdateArtist};
use tinta_db::repositories::ArtistRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStudio;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the roster listing.
#[derive(Debug, Deserialize)]
pub struct ListArtistsParams {
    /// Include deactivated artists (default: false).
    pub include_inactive: Option<bool>,
}

/// GET /api/v1/artists
///
/// List the studio's roster, active artists only unless
/// `?include_inactive=true`.
pub async fn list_artists(
    RequireStudio(user): RequireStudio,
    State(state): State<AppState>,
    Query(params): Query<ListArtistsParams>,
) -> AppResult<impl IntoResponse> {
    let artists = ArtistRepo::list(
        &state.pool,
        user.studio_id,
        params.include_inactive.unwrap_or(false),
    )
    .await?;

    Ok(Json(DataResponse { data: artists }))
}

/// POST /api/v1/artists
///
/// Add an artist to the roster.
pub async fn create_artist(
    RequireStudio(user): RequireStudio,
    State(state): State<AppState>,
    Json(input): Json<CreateArtist>,
) -> AppResult<impl IntoResponse> {
    validate_name(&input.name, "name")?;
    if let Some(pct) = input.commission_percentage {
        validate_commission_range(pct, "commission_percentage")?;
    }

    let artist = ArtistRepo::create(&state.pool, user.studio_id, &input).await?;

    tracing::info!(
        artist_id = artist.id,
        studio_id = user.studio_id,
        name = %artist.name,
        "Artist created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: artist })))
}

/// GET /api/v1/artists/:id
///
/// Retrieve a single artist by ID.
pub async fn get_artist(
    RequireStudio(user): RequireStudio,
    State(state): State<AppState>,
    Path(artist_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let artist = ArtistRepo::find_by_id(&state.pool, user.studio_id, artist_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Artist",
            id: artist_id,
        }))?;

    Ok(Json(DataResponse { data: artist }))
}

/// PUT /api/v1/artists/:id
///
/// Partially update an artist.
pub async fn update_artist(
    RequireStudio(user): RequireStudio,
    State(state): State<AppState>,
    Path(artist_id): Path<DbId>,
    Json(input): Json<UpdateArtist>,
) -> AppResult<impl IntoResponse> {
    if let Some(name) = &input.name {
        validate_name(name, "name")?;
    }
    if let Some(pct) = input.commission_percentage {
        validate_commission_range(pct, "commission_percentage")?;
    }

    let artist = ArtistRepo::update(&state.pool, user.studio_id, artist_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Artist",
            id: artist_id,
        }))?;

    tracing::info!(artist_id, studio_id = user.studio_id, "Artist updated");

    Ok(Json(DataResponse { data: artist }))
}

/// DELETE /api/v1/artists/:id
///
/// Deactivate an artist (soft delete). Their historical works remain.
pub async fn deactivate_artist(
    RequireStudio(user): RequireStudio,
    State(state): State<AppState>,
    Path(artist_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let artist = ArtistRepo::deactivate(&state.pool, user.studio_id, artist_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Artist",
            id: artist_id,
        }))?;

    tracing::info!(artist_id, studio_id = user.studio_id, "Artist deactivated");

    Ok(Json(DataResponse { data: artist }))
}
