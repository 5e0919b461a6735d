//! # engine::net_position
//!
//! Reduces the full expense history to one signed figure per person.
//!
//! Each expense splits `amount` equally across its participants. Every
//! participant other than the payer is debited one share and the payer is
//! credited the same share, so the books always balance exactly. Shares are
//! never rounded here; remainders accumulate in decimal and only get rounded
//! when settlements are emitted.

use std::collections::HashSet;

use rust_decimal::Decimal;
use tracing::debug;

use super::SplitError;
use crate::models::{Expense, NetPositions};

/// Compute every person's net position from `expenses`.
///
/// Fails on the first expense that violates a precondition; no partial
/// result is returned.
pub fn compute_net_positions(expenses: &[Expense]) -> Result<NetPositions, SplitError> {
    let mut net = NetPositions::new();

    for expense in expenses {
        check_expense(expense)?;

        let participants = distinct(&expense.participants);
        let share = expense.amount / Decimal::from(participants.len());

        let overflow = || SplitError::InvalidInput {
            expense_id: expense.id,
            reason:     "amount overflow",
        };

        // Payer goes first so the entry order follows the expense list.
        net.adjust(&expense.paid_by, Decimal::ZERO).ok_or_else(overflow)?;

        if !expense.payer_participates() {
            debug!(expense_id = %expense.id, "Payer outside participants, owed the full amount");
        }

        for person in participants.into_iter().filter(|p| *p != expense.paid_by) {
            net.adjust(person, -share).ok_or_else(overflow)?;
            net.adjust(&expense.paid_by, share).ok_or_else(overflow)?;
        }
    }

    debug!(
        expenses = expenses.len(),
        people   = net.len(),
        "Net positions computed"
    );

    Ok(net)
}

fn check_expense(expense: &Expense) -> Result<(), SplitError> {
    let reason = if expense.amount <= Decimal::ZERO {
        "amount must be greater than zero"
    } else if expense.participants.is_empty() {
        "participants must not be empty"
    } else if expense.paid_by.trim().is_empty() {
        "payer must not be blank"
    } else {
        return Ok(());
    };

    Err(SplitError::InvalidInput { expense_id: expense.id, reason })
}

/// Participants with repeats removed, first occurrence kept.
fn distinct(participants: &[String]) -> Vec<&str> {
    let mut seen = HashSet::new();
    participants
        .iter()
        .map(String::as_str)
        .filter(|p| seen.insert(*p))
        .collect()
}

// ─── Tests ────────────────────────────────────────────────────────────────────
