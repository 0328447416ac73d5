//! Artist roster models and DTOs (PRD-13).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tinta_core::types::{DbId, Timestamp};
use ts_rs::TS;

/// A row from the `artists` table.
///
/// Artists are soft-deleted via `is_active` so historical works keep a
/// resolvable name. A `NULL` commission means the studio default applies
/// when nothing else is known.
#[derive(Debug, Clone, FromRow, Serialize, TS)]
#[ts(export)]
pub struct Artist {
    pub id: DbId,
    pub studio_id: DbId,
    pub name: String,
    pub commission_percentage: Option<f64>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding an artist to the roster.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateArtist {
    pub name: String,
    pub commission_percentage: Option<f64>,
}

/// DTO for partially updating an artist.
///
/// Commission changes only affect future defaulting; existing works
/// keep their recorded snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateArtist {
    pub name: Option<String>,
    pub commission_percentage: Option<f64>,
    pub is_active: Option<bool>,
}
