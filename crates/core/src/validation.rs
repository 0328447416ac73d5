//! Shared boundary validation helpers.
//!
//! Used by request handlers before anything touches the database. The
//! aggregation functions in [`crate::financials`] deliberately do NOT
//! validate; callers gate data quality here instead.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum length of a person or studio display name.
pub const MAX_NAME_LENGTH: usize = 120;

/// Maximum length of a free-text description field.
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Earliest year accepted for report queries.
pub const MIN_REPORT_YEAR: i32 = 2000;

/// Latest year accepted for report queries.
pub const MAX_REPORT_YEAR: i32 = 2100;

// ---------------------------------------------------------------------------
// Validators
// ---------------------------------------------------------------------------

/// Validate that a commission percentage falls within `[0.0, 100.0]`.
///
/// Returns a `CoreError::Validation` naming the field if out of range.
pub fn validate_commission_range(value: f64, name: &str) -> Result<(), CoreError> {
    if value.is_nan() || !(0.0..=100.0).contains(&value) {
        return Err(CoreError::Validation(format!(
            "{name} must be between 0 and 100, got {value}"
        )));
    }
    Ok(())
}

/// Validate that a currency amount is a real, non-negative number.
pub fn validate_non_negative_amount(value: f64, name: &str) -> Result<(), CoreError> {
    if value.is_nan() || value < 0.0 {
        return Err(CoreError::Validation(format!(
            "{name} must be zero or positive, got {value}"
        )));
    }
    Ok(())
}

/// Validate a display name: must be non-empty once trimmed and within
/// the maximum length limit.
pub fn validate_name(name: &str, field: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    // Character count, not byte count: accented names are the norm here.
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "{field} exceeds maximum length of {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate an optional free-text description.
pub fn validate_description(text: &str, field: &str) -> Result<(), CoreError> {
    if text.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(CoreError::Validation(format!(
            "{field} exceeds maximum length of {MAX_DESCRIPTION_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a calendar month number (1-12).
pub fn validate_month(month: u32) -> Result<(), CoreError> {
    if !(1..=12).contains(&month) {
        return Err(CoreError::Validation(format!(
            "month must be between 1 and 12, got {month}"
        )));
    }
    Ok(())
}

/// Validate a report year.
pub fn validate_year(year: i32) -> Result<(), CoreError> {
    if !(MIN_REPORT_YEAR..=MAX_REPORT_YEAR).contains(&year) {
        return Err(CoreError::Validation(format!(
            "year must be between {MIN_REPORT_YEAR} and {MAX_REPORT_YEAR}, got {year}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- validate_commission_range --

    #[test]
    fn commission_accepts_boundary_values() {
        assert!(validate_commission_range(0.0, "commission").is_ok());
        assert!(validate_commission_range(50.0, "commission").is_ok());
        assert!(validate_commission_range(100.0, "commission").is_ok());
    }

    #[test]
    fn commission_rejects_below_zero() {
        assert!(validate_commission_range(-0.01, "commission").is_err());
    }

    #[test]
    fn commission_rejects_above_hundred() {
        assert!(validate_commission_range(100.01, "commission").is_err());
    }

    #[test]
    fn commission_rejects_nan() {
        assert!(validate_commission_range(f64::NAN, "commission").is_err());
    }

    // -- validate_non_negative_amount --

    #[test]
    fn amount_accepts_zero_and_positive() {
        assert!(validate_non_negative_amount(0.0, "price").is_ok());
        assert!(validate_non_negative_amount(45000.0, "price").is_ok());
    }

    #[test]
    fn amount_rejects_negative() {
        assert!(validate_non_negative_amount(-1.0, "price").is_err());
    }

    #[test]
    fn amount_rejects_nan() {
        assert!(validate_non_negative_amount(f64::NAN, "price").is_err());
    }

    // -- validate_name --

    #[test]
    fn name_accepts_normal_input() {
        assert!(validate_name("Valentina Rojas", "name").is_ok());
    }

    #[test]
    fn name_rejects_empty_and_whitespace() {
        assert!(validate_name("", "name").is_err());
        assert!(validate_name("   ", "name").is_err());
    }

    #[test]
    fn name_rejects_over_max_length() {
        let long = "x".repeat(MAX_NAME_LENGTH + 1);
        assert!(validate_name(&long, "name").is_err());
    }

    #[test]
    fn name_accepts_exactly_max_length() {
        let max = "x".repeat(MAX_NAME_LENGTH);
        assert!(validate_name(&max, "name").is_ok());
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        // 120 accented chars is 240 UTF-8 bytes but still within limit.
        let max_accented = "á".repeat(MAX_NAME_LENGTH);
        assert!(max_accented.len() > MAX_NAME_LENGTH);
        assert!(validate_name(&max_accented, "name").is_ok());

        let over = "á".repeat(MAX_NAME_LENGTH + 1);
        assert!(validate_name(&over, "name").is_err());
    }

    // -- validate_description --

    #[test]
    fn description_accepts_empty() {
        assert!(validate_description("", "description").is_ok());
    }

    #[test]
    fn description_rejects_over_max_length() {
        let long = "x".repeat(MAX_DESCRIPTION_LENGTH + 1);
        assert!(validate_description(&long, "description").is_err());
    }

    #[test]
    fn description_length_counts_characters_not_bytes() {
        let max_accented = "é".repeat(MAX_DESCRIPTION_LENGTH);
        assert!(validate_description(&max_accented, "description").is_ok());
    }

    // -- validate_month / validate_year --

    #[test]
    fn month_accepts_january_through_december() {
        assert!(validate_month(1).is_ok());
        assert!(validate_month(12).is_ok());
    }

    #[test]
    fn month_rejects_zero_and_thirteen() {
        assert!(validate_month(0).is_err());
        assert!(validate_month(13).is_err());
    }

    #[test]
    fn year_accepts_range_bounds() {
        assert!(validate_year(MIN_REPORT_YEAR).is_ok());
        assert!(validate_year(MAX_REPORT_YEAR).is_ok());
    }

    #[test]
    fn year_rejects_out_of_range() {
        assert!(validate_year(MIN_REPORT_YEAR - 1).is_err());
        assert!(validate_year(MAX_REPORT_YEAR + 1).is_err());
    }
}
