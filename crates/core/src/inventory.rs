//! Stock bookkeeping for studio supplies (PRD-45).
//!
//! Owns the movement-amount gate and the low-stock classification the
//! dashboard surfaces. The quantity arithmetic itself runs inside
//! single UPDATE statements in the db layer, so concurrent scans of the
//! same item serialize in the database instead of racing a
//! read-modify-write in the handler.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Units deducted by a single QR scan when the request names no amount.
pub const DEFAULT_SCAN_DEDUCTION: i32 = 1;

// ---------------------------------------------------------------------------
// Stock level
// ---------------------------------------------------------------------------

/// Classification of an item's quantity against its low-stock threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StockLevel {
    Ok,
    Low,
    Empty,
}

impl StockLevel {
    /// Classify a quantity against the item's minimum threshold.
    pub fn classify(quantity: i32, min_quantity: i32) -> Self {
        if quantity <= 0 {
            Self::Empty
        } else if quantity <= min_quantity {
            Self::Low
        } else {
            Self::Ok
        }
    }
}

// ---------------------------------------------------------------------------
// Movement gate
// ---------------------------------------------------------------------------

/// Validate a stock-movement amount (scan deduction or restock).
///
/// Movements must carry a positive unit count; the direction and the
/// floor-at-zero behaviour live in the adjustment statements themselves.
pub fn validate_movement_amount(amount: i32) -> Result<(), CoreError> {
    if amount <= 0 {
        return Err(CoreError::Validation(format!(
            "amount must be positive, got {amount}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- StockLevel::classify --

    #[test]
    fn zero_quantity_is_empty() {
        assert_eq!(StockLevel::classify(0, 5), StockLevel::Empty);
    }

    #[test]
    fn negative_quantity_is_empty() {
        assert_eq!(StockLevel::classify(-1, 5), StockLevel::Empty);
    }

    #[test]
    fn at_threshold_is_low() {
        assert_eq!(StockLevel::classify(5, 5), StockLevel::Low);
    }

    #[test]
    fn below_threshold_is_low() {
        assert_eq!(StockLevel::classify(2, 5), StockLevel::Low);
    }

    #[test]
    fn above_threshold_is_ok() {
        assert_eq!(StockLevel::classify(6, 5), StockLevel::Ok);
    }

    #[test]
    fn positive_quantity_with_zero_threshold_is_ok() {
        assert_eq!(StockLevel::classify(1, 0), StockLevel::Ok);
    }

    // -- validate_movement_amount --

    #[test]
    fn movement_accepts_positive_amounts() {
        assert!(validate_movement_amount(1).is_ok());
        assert!(validate_movement_amount(DEFAULT_SCAN_DEDUCTION).is_ok());
        assert!(validate_movement_amount(50).is_ok());
    }

    #[test]
    fn movement_rejects_zero_amount() {
        assert!(validate_movement_amount(0).is_err());
    }

    #[test]
    fn movement_rejects_negative_amount() {
        assert!(validate_movement_amount(-2).is_err());
    }
}
