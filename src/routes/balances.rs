//! # routes::balances
//!
//! Balance endpoints. Nothing is cached: every request snapshots the expense
//! list and runs the engine over it, so a deleted expense stops counting
//! immediately.

use axum::{extract::State, Json};
use tracing::debug;

use crate::{
    engine::{compute_settlements, report::balance_report},
    error::AppError,
    models::{BalanceReport, Settlement},
    state::SharedState,
};

// ─── GET /api/balances ────────────────────────────────────────────────────────

/// Who owes whom: the simplified settlement list.
pub async fn get_settlements(
    State(state): State<SharedState>,
) -> Result<Json<Vec<Settlement>>, AppError> {
    let snapshot = state.expenses.list().await;
    let settlements = compute_settlements(&snapshot)?;

    debug!(
        expenses    = snapshot.len(),
        settlements = settlements.len(),
        "⚖️ Balances computed"
    );

    Ok(Json(settlements))
}

// ─── GET /api/balances/net ────────────────────────────────────────────────────

pub async fn get_balance_report(
    State(state): State<SharedState>,
) -> Result<Json<BalanceReport>, AppError> {
    let snapshot = state.expenses.list().await;
    Ok(Json(balance_report(&snapshot)?))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use rust_decimal_macros::dec;
    use serde_json::json;

    use crate::models::{BalanceReport, Expense, Settlement};
    use crate::routes::test_support::{body_json, send, test_app};

    fn expense(amount: f64, paid_by: &str, participants: &[&str]) -> serde_json::Value {
        json!({
            "description":  "test",
            "amount":       amount,
            "paidBy":       paid_by,
            "participants": participants,
        })
    }

    async fn settlements(app: &axum::Router) -> Vec<Settlement> {
        let resp = send(app, "GET", "/api/balances", None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        body_json(resp).await
    }

    #[tokio::test]
    async fn empty_history_is_settled() {
        let app = test_app();
        assert!(settlements(&app).await.is_empty());
    }

    #[tokio::test]
    async fn settlements_over_http() {
        let app = test_app();
        send(&app, "POST", "/api/expenses", Some(expense(90.0, "Alice", &["Alice", "Bob", "Carol"]))).await;

        let resp = send(&app, "GET", "/api/balances", None).await;
        let raw: serde_json::Value = body_json(resp).await;
        assert_eq!(
            raw,
            json!([
                { "from": "Bob",   "to": "Alice", "amount": 30.0 },
                { "from": "Carol", "to": "Alice", "amount": 30.0 },
            ])
        );
    }

    #[tokio::test]
    async fn deleting_an_expense_equals_never_adding_it() {
        let app = test_app();
        send(&app, "POST", "/api/expenses", Some(expense(300.0, "Alice", &["Alice", "Bob", "Carol"]))).await;
        let baseline = settlements(&app).await;

        let extra: Expense = body_json(
            send(&app, "POST", "/api/expenses", Some(expense(75.5, "Carol", &["Bob", "Dave"]))).await,
        )
        .await;
        assert_ne!(settlements(&app).await, baseline);

        send(&app, "DELETE", &format!("/api/expenses/{}", extra.id), None).await;
        assert_eq!(settlements(&app).await, baseline);
    }

    #[tokio::test]
    async fn oversized_amounts_are_refused_and_balances_stay_up() {
        let app = test_app();
        let huge = json!({
            "description":  "Island",
            "amount":       "70000000000000000000000000000",
            "paidBy":       "Alice",
            "participants": ["Bob"],
        });

        for _ in 0..2 {
            let resp = send(&app, "POST", "/api/expenses", Some(huge.clone())).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        }

        assert!(settlements(&app).await.is_empty());

        let resp = send(&app, "GET", "/api/balances/net", None).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn net_report() {
        let app = test_app();
        send(&app, "POST", "/api/expenses", Some(expense(100.0, "Alice", &["Alice", "Bob"]))).await;
        send(&app, "POST", "/api/expenses", Some(expense(100.0, "Bob", &["Alice", "Bob"]))).await;
        send(&app, "POST", "/api/expenses", Some(expense(30.0, "Carol", &["Carol", "Dave"]))).await;

        let resp = send(&app, "GET", "/api/balances/net", None).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let report: BalanceReport = body_json(resp).await;
        assert_eq!(report.expense_count, 3);
        assert_eq!(report.total_spent, dec!(230));

        let nets: Vec<(String, _)> = report.balances.into_iter().map(|b| (b.person, b.net)).collect();
        assert_eq!(
            nets,
            vec![
                ("Alice".to_string(), dec!(0)),
                ("Bob".to_string(),   dec!(0)),
                ("Carol".to_string(), dec!(15)),
                ("Dave".to_string(),  dec!(-15)),
            ]
        );
        assert_eq!(
            report.settlements,
            vec![Settlement { from: "Dave".into(), to: "Carol".into(), amount: dec!(15) }]
        );
    }
}
