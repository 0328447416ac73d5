//! Handlers for studio expenses (PRD-12).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use tinta_core::error::CoreError;
use tinta_core::ledger::month_date_bounds;
use tinta_core::types::DbId;
use tinta_core::validation::{validate_description, validate_non_negative_amount};
use tinta_db::models::expense::{CreateExpense, UpdateExpense};
use tinta_db::repositories::ExpenseRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStudio;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the expense listing. `month` and `year` must be
/// given together to bound the listing to one calendar month.
#[derive(Debug, Deserialize)]
pub struct ListExpensesParams {
    pub month: Option<u32>,
    pub year: Option<i32>,
}

/// An expense description must carry some text and fit the length limit.
fn validate_expense_description(text: &str) -> AppResult<()> {
    if text.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "description must not be empty".into(),
        )));
    }
    validate_description(text, "description")?;
    Ok(())
}

/// GET /api/v1/expenses
///
/// List the studio's expenses oldest first, optionally bounded to one
/// calendar month via `?month=&year=`.
pub async fn list_expenses(
    RequireStudio(user): RequireStudio,
    State(state): State<AppState>,
    Query(params): Query<ListExpensesParams>,
) -> AppResult<impl IntoResponse> {
    let bounds = match (params.month, params.year) {
        (Some(month), Some(year)) => Some(month_date_bounds(month, year)?),
        (None, None) => None,
        _ => {
            return Err(AppError::BadRequest(
                "month and year must be provided together".into(),
            ))
        }
    };
    let expenses = ExpenseRepo::list(&state.pool, user.studio_id, bounds).await?;

    Ok(Json(DataResponse { data: expenses }))
}

/// POST /api/v1/expenses
///
/// Record an expense.
pub async fn create_expense(
    RequireStudio(user): RequireStudio,
    State(state): State<AppState>,
    Json(input): Json<CreateExpense>,
) -> AppResult<impl IntoResponse> {
    validate_expense_description(&input.description)?;
    validate_non_negative_amount(input.amount, "amount")?;

    let expense = ExpenseRepo::create(&state.pool, user.studio_id, &input).await?;

    tracing::info!(
        expense_id = expense.id,
        studio_id = user.studio_id,
        amount = expense.amount,
        "Expense recorded",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: expense })))
}

/// GET /api/v1/expenses/:id
///
/// Retrieve a single expense by ID.
pub async fn get_expense(
    RequireStudio(user): RequireStudio,
    State(state): State<AppState>,
    Path(expense_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let expense = ExpenseRepo::find_by_id(&state.pool, user.studio_id, expense_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Expense",
            id: expense_id,
        }))?;

    Ok(Json(DataResponse { data: expense }))
}

/// PUT /api/v1/expenses/:id
///
/// Partially update an expense.
pub async fn update_expense(
    RequireStudio(user): RequireStudio,
    State(state): State<AppState>,
    Path(expense_id): Path<DbId>,
    Json(input): Json<UpdateExpense>,
) -> AppResult<impl IntoResponse> {
    if let Some(description) = &input.description {
        validate_expense_description(description)?;
    }
    if let Some(amount) = input.amount {
        validate_non_negative_amount(amount, "amount")?;
    }

    let expense = ExpenseRepo::update(&state.pool, user.studio_id, expense_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Expense",
            id: expense_id,
        }))?;

    tracing::info!(expense_id, studio_id = user.studio_id, "Expense updated");

    Ok(Json(DataResponse { data: expense }))
}

/// DELETE /api/v1/expenses/:id
///
/// Delete an expense.
pub async fn delete_expense(
    RequireStudio(user): RequireStudio,
    State(state): State<AppState>,
    Path(expense_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ExpenseRepo::delete(&state.pool, user.studio_id, expense_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Expense",
            id: expense_id,
        }));
    }

    tracing::info!(expense_id, studio_id = user.studio_id, "Expense deleted");

    Ok(StatusCode::NO_CONTENT)
}
