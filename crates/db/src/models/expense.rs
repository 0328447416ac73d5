//! Expense models and DTOs (PRD-12).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tinta_core::records::ExpenseEntry;
use tinta_core::types::{DbId, Timestamp};
use ts_rs::TS;

/// A row from the `expenses` table.
///
/// `expense_date` is the day the money left, which is what monthly
/// filtering goes by; `created_at` only records when the row was entered.
#[derive(Debug, Clone, FromRow, Serialize, TS)]
#[ts(export)]
pub struct Expense {
    pub id: DbId,
    pub studio_id: DbId,
    pub description: String,
    pub category: Option<String>,
    pub amount: f64,
    pub expense_date: NaiveDate,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Expense {
    /// Assemble the aggregation-facing record.
    pub fn to_entry(&self) -> ExpenseEntry {
        ExpenseEntry {
            description: self.description.clone(),
            category: self.category.clone(),
            amount: self.amount,
            date: self.expense_date,
        }
    }
}

/// DTO for recording an expense.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateExpense {
    pub description: String,
    pub category: Option<String>,
    pub amount: f64,
    pub expense_date: NaiveDate,
}

/// DTO for partially updating an expense.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateExpense {
    pub description: Option<String>,
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub expense_date: Option<NaiveDate>,
}
