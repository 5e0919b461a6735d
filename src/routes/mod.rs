//! # routes
//!
//! | Method | Path                 | Description                              |
//! |--------|----------------------|------------------------------------------|
//! | GET    | `/api/health`        | Liveness + server timestamp              |
//! | POST   | `/api/expenses`      | Record a new expense                     |
//! | GET    | `/api/expenses`      | All expenses, oldest first               |
//! | DELETE | `/api/expenses`      | Remove every expense                     |
//! | GET    | `/api/expenses/:id`  | One expense                              |
//! | DELETE | `/api/expenses/:id`  | Remove one expense                       |
//! | GET    | `/api/balances`      | Who owes whom (settlement list)          |
//! | GET    | `/api/balances/net`  | Net position per person + settlements    |

pub mod balances;
pub mod expenses;
pub mod health;

use axum::{
    routing::get,
    Router,
};

use crate::state::SharedState;

/// All API routes; the caller adds middleware and state.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api/health",        get(health::health_check))
        // ── Expenses ──────────────────────────────────────────────────────────
        .route(
            "/api/expenses",
            get(expenses::list_expenses)
                .post(expenses::create_expense)
                .delete(expenses::clear_expenses),
        )
        .route(
            "/api/expenses/:id",
            get(expenses::get_expense).delete(expenses::delete_expense),
        )
        // ── Balances ──────────────────────────────────────────────────────────
        .route("/api/balances",      get(balances::get_settlements))
        .route("/api/balances/net",  get(balances::get_balance_report))
}
