//! # engine
//!
//! The balance engine. Two pure stages run on every balance request:
//!
//! ```text
//!  [Expense] ──▶ net_position::compute_net_positions ──▶ NetPositions
//!                                                           │
//!  [Settlement] ◀── simplifier::simplify_debts ◀────────────┘
//! ```
//!
//! Nothing here touches shared state; callers pass in a snapshot of the
//! expense list.

pub mod net_position;
pub mod report;
pub mod simplifier;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Expense, Settlement};

/// Balances with magnitude at or below one cent count as settled.
pub const TOLERANCE: Decimal = dec!(0.01);

/// Emitted settlement amounts are rounded to this many decimal places.
pub const CURRENCY_DP: u32 = 2;

#[derive(Debug, Error, PartialEq)]
pub enum SplitError {
    /// An expense broke a precondition (non-positive amount, no participants,
    /// blank payer). Nothing is computed from a list containing it.
    #[error("Invalid expense {expense_id}: {reason}")]
    InvalidInput {
        expense_id: Uuid,
        reason:     &'static str,
    },
}

/// Expense list straight to settlement transfers.
pub fn compute_settlements(expenses: &[Expense]) -> Result<Vec<Settlement>, SplitError> {
    let net = net_position::compute_net_positions(expenses)?;
    Ok(simplifier::simplify_debts(&net))
}
