//! Monthly running-balance ledger (PRD-33).
//!
//! Builds the row-per-transaction ledger behind the monthly report:
//! works first, then expenses, each in their original fetch order. Rows
//! are NOT merged chronologically, so the running balance is only
//! meaningful under that ordering. Known limitation, kept as-is because
//! the exported report is consumed with exactly that expectation.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::commission::studio_share;
use crate::error::CoreError;
use crate::production::UNASSIGNED_ARTIST_LABEL;
use crate::records::{ExpenseEntry, WorkSale};
use crate::validation::{validate_month, validate_year};

/// Category label for expenses recorded without one.
pub const UNCATEGORIZED_EXPENSE_LABEL: &str = "General";

// ---------------------------------------------------------------------------
// Row types
// ---------------------------------------------------------------------------

/// Whether a ledger row moves money in or out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerKind {
    Income,
    Expense,
}

impl LedgerKind {
    /// Spanish report label, as printed in the CSV `Tipo` column.
    pub fn label(self) -> &'static str {
        match self {
            Self::Income => "INGRESO",
            Self::Expense => "EGRESO",
        }
    }
}

/// One transaction row in the monthly ledger.
#[derive(Debug, Clone, Serialize)]
pub struct LedgerRow {
    pub date: NaiveDate,
    pub kind: LedgerKind,
    /// Artist name for income rows, expense category for expense rows.
    pub label: String,
    pub description: String,
    /// Studio cut for income rows, zero for expenses.
    pub income: f64,
    /// Spent amount for expense rows, zero for income.
    pub expense: f64,
    /// Running balance after this row.
    pub balance: f64,
}

// ---------------------------------------------------------------------------
// Month filters
// ---------------------------------------------------------------------------

/// Whether a work falls in the given month, by the UTC date it was
/// recorded.
pub fn work_in_month(work: &WorkSale, month: u32, year: i32) -> bool {
    let date = work.created_at.date_naive();
    date.month() == month && date.year() == year
}

/// Whether an expense falls in the given month.
pub fn expense_in_month(expense: &ExpenseEntry, month: u32, year: i32) -> bool {
    expense.date.month() == month && expense.date.year() == year
}

/// Validated `[start, end)` date bounds for one calendar month, for
/// range queries against the store.
pub fn month_date_bounds(month: u32, year: i32) -> Result<(NaiveDate, NaiveDate), CoreError> {
    validate_month(month)?;
    validate_year(year)?;

    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| CoreError::Internal(format!("invalid month start {year}-{month:02}")))?;
    let (end_year, end_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let end = NaiveDate::from_ymd_opt(end_year, end_month, 1).ok_or_else(|| {
        CoreError::Internal(format!("invalid month end {end_year}-{end_month:02}"))
    })?;

    Ok((start, end))
}

// ---------------------------------------------------------------------------
// Ledger construction
// ---------------------------------------------------------------------------

/// Build the running-balance ledger for one month.
///
/// Every in-month work contributes a row adding its studio cut (zero for
/// canvas works, which still get a row), then every in-month expense
/// contributes a row subtracting its amount. The final balance is the
/// last row's `balance`; an empty month yields no rows.
pub fn build_monthly_ledger(
    works: &[WorkSale],
    expenses: &[ExpenseEntry],
    month: u32,
    year: i32,
) -> Vec<LedgerRow> {
    let mut rows = Vec::new();
    let mut balance = 0.0_f64;

    for work in works.iter().filter(|w| work_in_month(w, month, year)) {
        let income = studio_share(work);
        balance += income;
        rows.push(LedgerRow {
            date: work.created_at.date_naive(),
            kind: LedgerKind::Income,
            label: work
                .artist_name
                .clone()
                .unwrap_or_else(|| UNASSIGNED_ARTIST_LABEL.to_string()),
            description: work.client_name.clone(),
            income,
            expense: 0.0,
            balance,
        });
    }

    for entry in expenses.iter().filter(|e| expense_in_month(e, month, year)) {
        balance -= entry.amount;
        rows.push(LedgerRow {
            date: entry.date,
            kind: LedgerKind::Expense,
            label: entry
                .category
                .clone()
                .unwrap_or_else(|| UNCATEGORIZED_EXPENSE_LABEL.to_string()),
            description: entry.description.clone(),
            income: 0.0,
            expense: entry.amount,
            balance,
        });
    }

    rows
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn work_on(day: u32, month: u32, year: i32, price: f64, commission: f64) -> WorkSale {
        WorkSale {
            artist_name: Some("Vale".to_string()),
            client_name: "Cliente".to_string(),
            total_price: price,
            commission_snapshot: Some(commission),
            artist_commission: None,
            is_canvas: false,
            created_at: Utc.with_ymd_and_hms(year, month, day, 15, 30, 0).unwrap(),
        }
    }

    fn expense_on(day: u32, month: u32, year: i32, amount: f64) -> ExpenseEntry {
        ExpenseEntry {
            description: "Agujas".to_string(),
            category: Some("Insumos".to_string()),
            amount,
            date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        }
    }

    // -- month filters --

    #[test]
    fn work_filter_matches_month_and_year() {
        let w = work_on(10, 3, 2026, 1000.0, 50.0);
        assert!(work_in_month(&w, 3, 2026));
        assert!(!work_in_month(&w, 4, 2026));
        assert!(!work_in_month(&w, 3, 2025));
    }

    #[test]
    fn expense_filter_matches_month_and_year() {
        let e = expense_on(5, 12, 2025, 500.0);
        assert!(expense_in_month(&e, 12, 2025));
        assert!(!expense_in_month(&e, 12, 2026));
        assert!(!expense_in_month(&e, 1, 2026));
    }

    // -- month_date_bounds --

    #[test]
    fn month_bounds_cover_the_whole_month() {
        let (start, end) = month_date_bounds(3, 2026).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2026, 4, 1).unwrap());
    }

    #[test]
    fn december_bounds_roll_into_the_next_year() {
        let (start, end) = month_date_bounds(12, 2026).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2026, 12, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2027, 1, 1).unwrap());
    }

    #[test]
    fn month_bounds_reject_invalid_input() {
        assert!(month_date_bounds(0, 2026).is_err());
        assert!(month_date_bounds(13, 2026).is_err());
        assert!(month_date_bounds(3, 1890).is_err());
    }

    // -- build_monthly_ledger --

    #[test]
    fn works_come_before_expenses_regardless_of_date() {
        // The expense predates both works; it still renders last.
        let works = vec![work_on(20, 3, 2026, 100_000.0, 50.0)];
        let expenses = vec![expense_on(1, 3, 2026, 10_000.0)];
        let rows = build_monthly_ledger(&works, &expenses, 3, 2026);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].kind, LedgerKind::Income);
        assert_eq!(rows[1].kind, LedgerKind::Expense);
    }

    #[test]
    fn running_balance_accumulates_in_row_order() {
        let works = vec![
            work_on(3, 3, 2026, 100_000.0, 50.0),
            work_on(8, 3, 2026, 60_000.0, 40.0),
        ];
        let expenses = vec![expense_on(15, 3, 2026, 20_000.0)];
        let rows = build_monthly_ledger(&works, &expenses, 3, 2026);

        assert!((rows[0].balance - 50_000.0).abs() < 1e-9);
        assert!((rows[1].balance - 86_000.0).abs() < 1e-9);
        assert!((rows[2].balance - 66_000.0).abs() < 1e-9);
    }

    #[test]
    fn rows_outside_the_month_are_dropped() {
        let works = vec![
            work_on(28, 2, 2026, 40_000.0, 50.0),
            work_on(1, 3, 2026, 100_000.0, 50.0),
        ];
        let expenses = vec![expense_on(2, 4, 2026, 9_000.0)];
        let rows = build_monthly_ledger(&works, &expenses, 3, 2026);

        assert_eq!(rows.len(), 1);
        assert!((rows[0].income - 50_000.0).abs() < 1e-9);
    }

    #[test]
    fn canvas_work_still_gets_a_row_with_zero_income() {
        let mut canvas = work_on(5, 3, 2026, 80_000.0, 50.0);
        canvas.is_canvas = true;
        let rows = build_monthly_ledger(&[canvas], &[], 3, 2026);

        assert_eq!(rows.len(), 1);
        assert!((rows[0].income - 0.0).abs() < f64::EPSILON);
        assert!((rows[0].balance - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn expenses_only_month_runs_negative() {
        let expenses = vec![expense_on(4, 3, 2026, 20_000.0)];
        let rows = build_monthly_ledger(&[], &expenses, 3, 2026);

        assert_eq!(rows.len(), 1);
        assert!((rows[0].balance + 20_000.0).abs() < 1e-9);
    }

    #[test]
    fn income_row_carries_artist_and_client() {
        let works = vec![work_on(3, 3, 2026, 50_000.0, 50.0)];
        let rows = build_monthly_ledger(&works, &[], 3, 2026);

        assert_eq!(rows[0].label, "Vale");
        assert_eq!(rows[0].description, "Cliente");
    }

    #[test]
    fn expense_row_without_category_uses_general_label() {
        let mut e = expense_on(4, 3, 2026, 1_000.0);
        e.category = None;
        let rows = build_monthly_ledger(&[], &[e], 3, 2026);

        assert_eq!(rows[0].label, UNCATEGORIZED_EXPENSE_LABEL);
    }

    #[test]
    fn empty_month_yields_no_rows() {
        assert!(build_monthly_ledger(&[], &[], 3, 2026).is_empty());
    }
}
