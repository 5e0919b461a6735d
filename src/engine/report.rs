//! # engine::report
//!
//! Combines both engine stages into a single [`BalanceReport`] for the
//! dashboard view.

use rust_decimal::Decimal;

use super::{net_position::compute_net_positions, simplifier, SplitError};
use crate::models::{BalanceEntry, BalanceReport, Expense};

pub fn balance_report(expenses: &[Expense]) -> Result<BalanceReport, SplitError> {
    let net = compute_net_positions(expenses)?;
    let settlements = simplifier::simplify_debts(&net);

    let balances = net
        .iter()
        .map(|(person, amount)| BalanceEntry {
            person: person.to_owned(),
            net:    simplifier::round_currency(amount).normalize(),
        })
        .collect();

    Ok(BalanceReport {
        balances,
        settlements,
        expense_count: expenses.len(),
        total_spent:   total_spent(expenses)?,
    })
}

fn total_spent(expenses: &[Expense]) -> Result<Decimal, SplitError> {
    expenses.iter().try_fold(Decimal::ZERO, |acc, expense| {
        acc.checked_add(expense.amount).ok_or(SplitError::InvalidInput {
            expense_id: expense.id,
            reason:     "amount overflow",
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_report_rounds_balances_for_display() {
        let expenses = vec![
            Expense::new("Dinner", dec!(100), "Alice", vec!["Alice".into(), "Bob".into(), "Carol".into()]),
            Expense::new("Taxi", dec!(20), "Bob", vec!["Bob".into()]),
        ];

        let report = balance_report(&expenses).unwrap();

        assert_eq!(report.expense_count, 2);
        assert_eq!(report.total_spent, dec!(120));
        assert_eq!(
            report.balances,
            vec![
                BalanceEntry { person: "Alice".into(), net: dec!(66.67) },
                BalanceEntry { person: "Bob".into(),   net: dec!(-33.33) },
                BalanceEntry { person: "Carol".into(), net: dec!(-33.33) },
            ]
        );
        assert_eq!(report.settlements.len(), 2);
    }

    #[test]
    fn test_report_total_overflow_is_an_error() {
        // Self-paid, so net positions stay at zero; only the total overflows.
        let first = Expense::new("Yacht", Decimal::MAX, "Alice", vec!["Alice".into()]);
        let second = Expense::new("Yacht", Decimal::MAX, "Alice", vec!["Alice".into()]);

        assert_eq!(
            balance_report(&[first, second.clone()]),
            Err(SplitError::InvalidInput { expense_id: second.id, reason: "amount overflow" })
        );
    }

    #[test]
    fn test_report_propagates_invalid_input() {
        let bad = Expense::new("Broken", dec!(-1), "Alice", vec!["Bob".into()]);
        assert!(matches!(balance_report(&[bad]), Err(SplitError::InvalidInput { .. })));
    }
}
