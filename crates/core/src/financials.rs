//! Financial summary computation (PRD-31).
//!
//! Collapses a month's works and expenses into the headline numbers the
//! dashboard shows: gross sales, expenses, effective income, and net
//! profit. Effective income depends on how the studio operates, so the
//! formulas dispatch on [`OperatorMode`] rather than on a role string.

use serde::{Deserialize, Serialize};

use crate::commission::studio_share;
use crate::error::CoreError;
use crate::records::{ExpenseEntry, WorkSale};

// ---------------------------------------------------------------------------
// Operator mode
// ---------------------------------------------------------------------------

/// How a studio operates, which decides whose money "effective income" is.
///
/// An `Owner` studio keeps only its retained cut of each work. An
/// `Independent` artist-operator keeps the full gross, and the split
/// concept does not apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatorMode {
    Owner,
    Independent,
}

impl OperatorMode {
    /// Parse the mode from its stored string form.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "owner" => Ok(Self::Owner),
            "independent" => Ok(Self::Independent),
            other => Err(CoreError::Internal(format!(
                "unknown operator mode '{other}' in studio record"
            ))),
        }
    }

    /// The stored string form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Independent => "independent",
        }
    }
}

// ---------------------------------------------------------------------------
// Summary type
// ---------------------------------------------------------------------------

/// Headline financial numbers for a set of works and expenses.
///
/// Values keep full floating-point precision; rounding is a rendering
/// concern.
#[derive(Debug, Clone, Serialize)]
pub struct FinancialSummary {
    pub total_gross_sales: f64,
    pub total_expenses: f64,
    pub effective_income: f64,
    pub net_profit: f64,
}

// ---------------------------------------------------------------------------
// Computation
// ---------------------------------------------------------------------------

/// Compute the financial summary for a set of works and expenses.
///
/// Gross sales always sum the full prices, canvas works included.
/// Effective income is the gross for an independent operator, or the sum
/// of studio cuts for an owner. Net profit may be negative; nothing here
/// clamps or validates.
pub fn compute_financials(
    works: &[WorkSale],
    expenses: &[ExpenseEntry],
    mode: OperatorMode,
) -> FinancialSummary {
    let total_gross_sales: f64 = works.iter().map(|w| w.total_price).sum();
    let total_expenses: f64 = expenses.iter().map(|e| e.amount).sum();

    let effective_income = match mode {
        OperatorMode::Independent => total_gross_sales,
        OperatorMode::Owner => works.iter().map(studio_share).sum(),
    };

    FinancialSummary {
        total_gross_sales,
        total_expenses,
        effective_income,
        net_profit: effective_income - total_expenses,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn work(price: f64, commission: Option<f64>, is_canvas: bool) -> WorkSale {
        WorkSale {
            artist_name: Some("Vale".to_string()),
            client_name: "Cliente".to_string(),
            total_price: price,
            commission_snapshot: commission,
            artist_commission: None,
            is_canvas,
            created_at: Utc::now(),
        }
    }

    fn expense(amount: f64) -> ExpenseEntry {
        ExpenseEntry {
            description: "Tinta negra".to_string(),
            category: Some("Insumos".to_string()),
            amount,
            date: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
        }
    }

    // -- OperatorMode --

    #[test]
    fn mode_parses_stored_strings() {
        assert_eq!(OperatorMode::parse("owner").unwrap(), OperatorMode::Owner);
        assert_eq!(
            OperatorMode::parse("independent").unwrap(),
            OperatorMode::Independent
        );
    }

    #[test]
    fn mode_rejects_unknown_string() {
        assert!(OperatorMode::parse("franchise").is_err());
    }

    #[test]
    fn mode_round_trips_through_as_str() {
        assert_eq!(OperatorMode::parse(OperatorMode::Owner.as_str()).unwrap(), OperatorMode::Owner);
        assert_eq!(
            OperatorMode::parse(OperatorMode::Independent.as_str()).unwrap(),
            OperatorMode::Independent
        );
    }

    // -- compute_financials --

    #[test]
    fn owner_keeps_only_the_studio_cut() {
        let works = vec![work(100_000.0, Some(50.0), false)];
        let summary = compute_financials(&works, &[], OperatorMode::Owner);

        assert!((summary.total_gross_sales - 100_000.0).abs() < 1e-9);
        assert!((summary.effective_income - 50_000.0).abs() < 1e-9);
        assert!((summary.net_profit - 50_000.0).abs() < 1e-9);
    }

    #[test]
    fn independent_keeps_the_full_gross() {
        // Commission is ignored entirely in independent mode.
        let works = vec![work(100_000.0, Some(60.0), false)];
        let summary = compute_financials(&works, &[], OperatorMode::Independent);

        assert!((summary.effective_income - 100_000.0).abs() < 1e-9);
        assert!((summary.net_profit - 100_000.0).abs() < 1e-9);
    }

    #[test]
    fn canvas_counts_toward_gross_but_not_income() {
        let works = vec![work(80_000.0, Some(50.0), true)];
        let summary = compute_financials(&works, &[], OperatorMode::Owner);

        assert!((summary.total_gross_sales - 80_000.0).abs() < 1e-9);
        assert!((summary.effective_income - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn expenses_only_month_goes_negative_for_both_modes() {
        let expenses = vec![expense(20_000.0)];

        let owner = compute_financials(&[], &expenses, OperatorMode::Owner);
        let indep = compute_financials(&[], &expenses, OperatorMode::Independent);

        assert!((owner.net_profit + 20_000.0).abs() < 1e-9);
        assert!((indep.net_profit + 20_000.0).abs() < 1e-9);
    }

    #[test]
    fn empty_inputs_produce_all_zeroes() {
        let summary = compute_financials(&[], &[], OperatorMode::Owner);
        assert!((summary.total_gross_sales - 0.0).abs() < f64::EPSILON);
        assert!((summary.total_expenses - 0.0).abs() < f64::EPSILON);
        assert!((summary.effective_income - 0.0).abs() < f64::EPSILON);
        assert!((summary.net_profit - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn mixed_month_nets_income_against_expenses() {
        let works = vec![
            work(100_000.0, Some(50.0), false),
            work(60_000.0, Some(40.0), false),
        ];
        let expenses = vec![expense(20_000.0), expense(5_000.0)];
        let summary = compute_financials(&works, &expenses, OperatorMode::Owner);

        // Studio cuts: 50_000 + 36_000.
        assert!((summary.effective_income - 86_000.0).abs() < 1e-9);
        assert!((summary.total_expenses - 25_000.0).abs() < 1e-9);
        assert!((summary.net_profit - 61_000.0).abs() < 1e-9);
    }

    #[test]
    fn reordering_works_does_not_change_totals() {
        let mut works = vec![
            work(100_000.0, Some(50.0), false),
            work(60_000.0, Some(40.0), false),
            work(80_000.0, None, true),
        ];
        let forward = compute_financials(&works, &[], OperatorMode::Owner);
        works.reverse();
        let reversed = compute_financials(&works, &[], OperatorMode::Owner);

        assert!((forward.total_gross_sales - reversed.total_gross_sales).abs() < 1e-9);
        assert!((forward.effective_income - reversed.effective_income).abs() < 1e-9);
    }
}
