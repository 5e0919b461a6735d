//! # models::settlement
//!
//! Output side of the balance engine: per-person [`NetPositions`], the
//! recommended [`Settlement`] transfers, and the [`BalanceReport`] served by
//! `GET /api/balances/net`.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ─── Net Positions ────────────────────────────────────────────────────────────

/// Signed balance per person: positive = is owed money, negative = owes.
///
/// Iterates in first-appearance order, which keeps the debt simplifier's
/// tie-breaks reproducible.
#[derive(Debug, Clone, Default)]
pub struct NetPositions {
    entries: Vec<(String, Decimal)>,
    index:   HashMap<String, usize>,
}

impl NetPositions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `delta` to `person`, creating the entry at zero if needed.
    ///
    /// Returns `None` (leaving the entry untouched) if the sum overflows.
    #[must_use]
    pub fn adjust(&mut self, person: &str, delta: Decimal) -> Option<()> {
        match self.index.get(person) {
            Some(&slot) => {
                let entry = &mut self.entries[slot].1;
                *entry = entry.checked_add(delta)?;
            }
            None => {
                self.index.insert(person.to_owned(), self.entries.len());
                self.entries.push((person.to_owned(), delta));
            }
        }
        Some(())
    }

    pub fn get(&self, person: &str) -> Option<Decimal> {
        self.index.get(person).map(|&slot| self.entries[slot].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> + '_ {
        self.entries.iter().map(|(person, net)| (person.as_str(), *net))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum over everyone. Zero for any set of well-formed expenses; `None`
    /// on overflow.
    pub fn total(&self) -> Option<Decimal> {
        self.entries
            .iter()
            .try_fold(Decimal::ZERO, |acc, (_, net)| acc.checked_add(*net))
    }
}

impl PartialEq for NetPositions {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

// ─── Settlement ───────────────────────────────────────────────────────────────

/// One recommended transfer: `from` pays `to` the given `amount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub from: String,
    pub to:   String,
    /// Positive, rounded to 2 decimal places.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

// ─── Balance Report ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceEntry {
    pub person: String,
    /// Net position rounded to 2 decimal places for display.
    #[serde(with = "rust_decimal::serde::float")]
    pub net: Decimal,
}

/// Full balance picture for a dashboard: who stands where, and how to settle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceReport {
    pub balances:      Vec<BalanceEntry>,
    pub settlements:   Vec<Settlement>,
    pub expense_count: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_spent:   Decimal,
}
