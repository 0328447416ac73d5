//! Work (recorded sale) models and DTOs (PRD-11).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tinta_core::records::WorkSale;
use tinta_core::types::{DbId, Timestamp};
use ts_rs::TS;

use crate::models::artist::Artist;

/// A row from the `works` table.
#[derive(Debug, Clone, FromRow, Serialize, TS)]
#[ts(export)]
pub struct Work {
    pub id: DbId,
    pub studio_id: DbId,
    pub artist_id: Option<DbId>,
    pub client_name: String,
    pub total_price: f64,
    /// Commission snapshot captured at recording time.
    pub commission_percentage: Option<f64>,
    pub is_canvas: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Work {
    /// Assemble the aggregation-facing record, resolving artist
    /// attributes from the roster row if one matched.
    pub fn to_sale(&self, artist: Option<&Artist>) -> WorkSale {
        WorkSale {
            artist_name: artist.map(|a| a.name.clone()),
            client_name: self.client_name.clone(),
            total_price: self.total_price,
            commission_snapshot: self.commission_percentage,
            artist_commission: artist.and_then(|a| a.commission_percentage),
            is_canvas: self.is_canvas,
            created_at: self.created_at,
        }
    }
}

/// DTO for recording a work.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWork {
    pub client_name: String,
    pub artist_id: Option<DbId>,
    pub total_price: f64,
    pub commission_percentage: Option<f64>,
    /// Defaults to false when omitted.
    pub is_canvas: Option<bool>,
}

/// DTO for partially updating a work.
///
/// Updates are COALESCE patches: omitted (or null) fields keep their
/// stored value. A consequence is that `artist_id` and
/// `commission_percentage` cannot be reset to NULL through this DTO —
/// reassign the work to another artist, or delete and re-record it.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateWork {
    pub client_name: Option<String>,
    pub artist_id: Option<DbId>,
    pub total_price: Option<f64>,
    pub commission_percentage: Option<f64>,
    pub is_canvas: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // An explicit JSON null deserializes the same as an omitted field,
    // which is why the COALESCE patch cannot clear nullable columns.
    #[test]
    fn update_dto_treats_null_as_omitted() {
        let explicit: UpdateWork = serde_json::from_str(r#"{"artist_id": null}"#).unwrap();
        let omitted: UpdateWork = serde_json::from_str("{}").unwrap();
        assert_eq!(explicit.artist_id, None);
        assert_eq!(omitted.artist_id, None);
    }
}
