//! Studio (tenant) models and DTOs (PRD-07).
//!
//! A studio is the unit of tenancy: artists, works, expenses, and
//! inventory all hang off one. `operator_mode` decides which financial
//! formula applies to its reports.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tinta_core::financials::OperatorMode;
use tinta_core::types::{DbId, Timestamp};
use ts_rs::TS;

/// A row from the `studios` table.
///
/// `operator_mode` is stored as text; parse it with
/// [`OperatorMode::parse`] before dispatching financial formulas.
#[derive(Debug, Clone, FromRow, Serialize, TS)]
#[ts(export)]
pub struct Studio {
    pub id: DbId,
    pub name: String,
    pub operator_mode: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a new studio.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudio {
    pub name: String,
    /// Defaults to `owner` when omitted.
    pub operator_mode: Option<OperatorMode>,
}

/// DTO for partially updating a studio.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStudio {
    pub name: Option<String>,
    pub operator_mode: Option<OperatorMode>,
    pub is_active: Option<bool>,
}
