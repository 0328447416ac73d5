//! Shared financial record types.
//!
//! In-memory snapshots of works and expenses in the shape the aggregation
//! functions consume. The db layer assembles these from table rows and the
//! artist roster; nothing in this module knows about persistence.

use chrono::NaiveDate;

use crate::types::Timestamp;

/// A single recorded tattoo work, with the owning artist's attributes
/// already resolved.
#[derive(Debug, Clone)]
pub struct WorkSale {
    /// Display name of the owning artist, if one resolves.
    pub artist_name: Option<String>,
    pub client_name: String,
    /// Gross price charged to the client.
    pub total_price: f64,
    /// Commission percentage captured when the work was recorded.
    pub commission_snapshot: Option<f64>,
    /// The owning artist's current commission percentage.
    pub artist_commission: Option<f64>,
    /// Material-only sale: generates no artist payout and no studio cut.
    pub is_canvas: bool,
    pub created_at: Timestamp,
}

/// A single recorded studio expense.
#[derive(Debug, Clone)]
pub struct ExpenseEntry {
    pub description: String,
    pub category: Option<String>,
    pub amount: f64,
    pub date: NaiveDate,
}
