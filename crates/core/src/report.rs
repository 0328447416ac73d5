//! Monthly report rendering (PRD-34).
//!
//! Turns ledger rows into the delimited text the export endpoint serves.
//! Presentation settings travel in an explicit [`ReportLocale`] value
//! rather than any process-global state; the aggregation modules never
//! see it.

use crate::ledger::LedgerRow;

/// Header line of the exported ledger, byte-for-byte.
pub const CSV_HEADER: &str =
    "Fecha,Tipo,Categoría/Artista,Descripción,Ingreso (Haber),Egreso (Debe),Balance";

// ---------------------------------------------------------------------------
// Locale
// ---------------------------------------------------------------------------

/// Presentation settings for rendered reports.
///
/// Defaults match the studio's es-CL formatting: day-first dates and
/// whole-peso amounts.
#[derive(Debug, Clone)]
pub struct ReportLocale {
    /// chrono format string applied to date cells.
    pub date_format: String,
}

impl Default for ReportLocale {
    fn default() -> Self {
        Self {
            date_format: "%d/%m/%Y".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Format an amount cell: whole units, no decimal places.
///
/// Rounding happens only here; upstream values keep full precision.
fn format_amount(value: f64) -> String {
    let rounded = value.round();
    // Avoid "-0" when a tiny negative rounds to zero.
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{rounded:.0}")
}

/// Render ledger rows as CSV, header first, one line per transaction.
///
/// Cells are emitted raw (no quoting); free text containing commas will
/// shift columns in spreadsheet imports.
pub fn render_ledger_csv(rows: &[LedgerRow], locale: &ReportLocale) -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');

    for row in rows {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            row.date.format(&locale.date_format),
            row.kind.label(),
            row.label,
            row.description,
            format_amount(row.income),
            format_amount(row.expense),
            format_amount(row.balance),
        ));
    }

    csv
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::LedgerKind;
    use chrono::NaiveDate;

    fn income_row(day: u32, income: f64, balance: f64) -> LedgerRow {
        LedgerRow {
            date: NaiveDate::from_ymd_opt(2026, 3, day).unwrap(),
            kind: LedgerKind::Income,
            label: "Vale".to_string(),
            description: "Cliente".to_string(),
            income,
            expense: 0.0,
            balance,
        }
    }

    fn expense_row(day: u32, expense: f64, balance: f64) -> LedgerRow {
        LedgerRow {
            date: NaiveDate::from_ymd_opt(2026, 3, day).unwrap(),
            kind: LedgerKind::Expense,
            label: "Insumos".to_string(),
            description: "Agujas".to_string(),
            income: 0.0,
            expense,
            balance,
        }
    }

    // -- header --

    #[test]
    fn header_line_is_exact() {
        let csv = render_ledger_csv(&[], &ReportLocale::default());
        assert_eq!(
            csv,
            "Fecha,Tipo,Categoría/Artista,Descripción,Ingreso (Haber),Egreso (Debe),Balance\n"
        );
    }

    // -- rows --

    #[test]
    fn income_then_expense_rows_render_in_order() {
        let rows = vec![
            income_row(3, 50_000.0, 50_000.0),
            expense_row(15, 20_000.0, 30_000.0),
        ];
        let csv = render_ledger_csv(&rows, &ReportLocale::default());
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "03/03/2026,INGRESO,Vale,Cliente,50000,0,50000");
        assert_eq!(lines[2], "15/03/2026,EGRESO,Insumos,Agujas,0,20000,30000");
    }

    #[test]
    fn negative_balance_renders_with_sign() {
        let rows = vec![expense_row(4, 20_000.0, -20_000.0)];
        let csv = render_ledger_csv(&rows, &ReportLocale::default());

        assert!(csv.contains(",0,20000,-20000"));
    }

    #[test]
    fn date_format_follows_the_locale() {
        let locale = ReportLocale {
            date_format: "%Y-%m-%d".to_string(),
        };
        let rows = vec![income_row(9, 1_000.0, 1_000.0)];
        let csv = render_ledger_csv(&rows, &locale);

        assert!(csv.contains("2026-03-09,INGRESO"));
    }

    // -- format_amount --

    #[test]
    fn amounts_round_to_whole_units() {
        assert_eq!(format_amount(22_500.4), "22500");
        assert_eq!(format_amount(22_500.6), "22501");
    }

    #[test]
    fn tiny_negative_rounds_to_plain_zero() {
        assert_eq!(format_amount(-0.4), "0");
    }

    #[test]
    fn negative_amounts_keep_their_sign() {
        assert_eq!(format_amount(-20_000.0), "-20000");
    }
}
