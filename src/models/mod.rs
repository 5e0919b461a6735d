//! Domain models shared across the expense splitter.

pub mod expense;
pub mod settlement;

pub use expense::{Expense, NewExpense};
pub use settlement::{BalanceEntry, BalanceReport, NetPositions, Settlement};
