//! # routes::expenses
//!
//! CRUD over the expense list. Records are immutable: there is no update,
//! only create and delete.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    error::AppError,
    models::{Expense, NewExpense},
    state::SharedState,
};

// ─── POST /api/expenses ───────────────────────────────────────────────────────

/// Validate and store a new expense; responds `201` with the stored record.
pub async fn create_expense(
    State(state): State<SharedState>,
    payload: Result<Json<NewExpense>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = payload?;

    let expense = body.validate().map_err(|e| {
        warn!(error = %e, "Expense rejected");
        e
    })?;

    let expense = state.expenses.add(expense).await;

    info!(
        expense_id   = %expense.id,
        amount       = %expense.amount,
        paid_by      = %expense.paid_by,
        participants = expense.participants.len(),
        "💸 Expense recorded"
    );

    Ok((StatusCode::CREATED, Json(expense)))
}

// ─── GET /api/expenses ────────────────────────────────────────────────────────

pub async fn list_expenses(State(state): State<SharedState>) -> Json<Vec<Expense>> {
    Json(state.expenses.list().await)
}

// ─── GET /api/expenses/:id ────────────────────────────────────────────────────

pub async fn get_expense(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Expense>, AppError> {
    let expense = match parse_id(&id) {
        Some(id) => state.expenses.get(id).await,
        None => None,
    };

    expense.map(Json).ok_or_else(not_found)
}

// ─── DELETE /api/expenses/:id ─────────────────────────────────────────────────

pub async fn delete_expense(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let removed = match parse_id(&id) {
        Some(id) => state.expenses.remove(id).await,
        None => None,
    };

    let expense = removed.ok_or_else(not_found)?;

    info!(expense_id = %expense.id, "🗑️ Expense deleted");

    Ok(Json(json!({ "message": "Expense deleted" })))
}

// ─── DELETE /api/expenses ─────────────────────────────────────────────────────

/// Wipe the whole history (start a new trip / group).
pub async fn clear_expenses(State(state): State<SharedState>) -> impl IntoResponse {
    let deleted = state.expenses.clear().await;

    info!(deleted, "🗑️ All expenses cleared");

    Json(json!({
        "message": "All expenses deleted",
        "deleted": deleted,
    }))
}

/// Ids are opaque to clients, so a malformed id is just an unknown expense.
fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

fn not_found() -> AppError {
    AppError::NotFound("Expense not found".into())
}
