//! API Routes
//!
//! HTTP endpoint definitions for expenses.

use std::str::FromStr;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{Category, Expense, OperationContext, ValidationError};
use crate::error::{AppError, AppResult};
use crate::service::CreateExpenseCommand;

use super::AppState;

// =========================================================================
// Request types
// =========================================================================

/// Body of `POST /expenses`.
///
/// Absent fields take their zero value so that a missing description or
/// amount surfaces as a validation failure rather than a decoding one.
///
/// `amount` stays a JSON number here; it becomes a `Decimal` when the
/// request is turned into a command.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateExpenseRequest {
    pub description: String,
    pub amount: f64,
    pub category: Category,
    pub date: DateTime<Utc>,
}

impl TryFrom<CreateExpenseRequest> for CreateExpenseCommand {
    type Error = ValidationError;

    fn try_from(request: CreateExpenseRequest) -> Result<Self, Self::Error> {
        Ok(CreateExpenseCommand::new(
            request.description,
            decimal_amount(request.amount)?,
            request.category,
            request.date,
        ))
    }
}

/// Convert a decoded JSON number to `Decimal` without silently changing
/// its sign.
///
/// Goes through the shortest decimal rendering of the float, so `0.1`
/// stays `0.1`. A non-zero value that would round to zero or overflow is
/// reported instead of being passed on.
fn decimal_amount(value: f64) -> Result<Decimal, ValidationError> {
    let out_of_range = || ValidationError::AmountOutOfRange(format!("{value:e}"));

    let amount = Decimal::from_str(&value.to_string()).map_err(|_| out_of_range())?;
    if amount.is_zero() && value != 0.0 {
        return Err(out_of_range());
    }
    Ok(amount)
}

// =========================================================================
// API Router
// =========================================================================

/// Create the expense router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/expenses", post(create_expense).get(list_expenses))
        .route("/expenses/:id", get(get_expense).delete(delete_expense))
}

fn parse_id(raw: &str) -> AppResult<i64> {
    raw.parse()
        .map_err(|_| AppError::InvalidRequest("invalid id".to_string()))
}

// =========================================================================
// POST /expenses
// =========================================================================

async fn create_expense(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    payload: Result<Json<CreateExpenseRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Expense>)> {
    let Json(request) = payload.map_err(|e| {
        tracing::debug!(error = %e, "Rejected expense body");
        AppError::InvalidRequest("invalid request body".to_string())
    })?;

    let command = CreateExpenseCommand::try_from(request)
        .map_err(|e| AppError::rejected(e.into()))?;

    let expense = state
        .service
        .create_expense(&context, command)
        .await
        .map_err(AppError::rejected)?;

    Ok((StatusCode::CREATED, Json(expense)))
}

// =========================================================================
// GET /expenses
// =========================================================================

async fn list_expenses(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
) -> AppResult<Json<Vec<Expense>>> {
    let expenses = state.service.list_expenses(&context).await?;
    Ok(Json(expenses))
}

// =========================================================================
// GET /expenses/:id
// =========================================================================

async fn get_expense(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(id): Path<String>,
) -> AppResult<Json<Expense>> {
    let id = parse_id(&id)?;
    let expense = state.service.get_expense(&context, id).await?;
    Ok(Json(expense))
}

// =========================================================================
// DELETE /expenses/:id
// =========================================================================

async fn delete_expense(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id)?;
    state.service.delete_expense(&context, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
