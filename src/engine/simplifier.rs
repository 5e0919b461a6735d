//! # engine::simplifier
//!
//! **Debt Simplifier** — turns net positions into a short list of transfers.
//!
//! Greedy largest-to-largest matching:
//! 1. Split people into creditors (`net > TOLERANCE`) and debtors
//!    (`net < -TOLERANCE`), keeping magnitudes.
//! 2. Sort both sides by magnitude, largest first. The sort is stable, so
//!    equal magnitudes keep net-position order.
//! 3. Match the current debtor with the current creditor for
//!    `min(debtor, creditor)` and advance whichever side is used up.
//!
//! Every step retires at least one person, so the result never exceeds
//! `creditors + debtors - 1` transfers.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, warn};

use super::{CURRENCY_DP, TOLERANCE};
use crate::models::{NetPositions, Settlement};

#[derive(Debug)]
struct Party<'a> {
    person:    &'a str,
    remaining: Decimal,
}

/// Produce the ordered settlement list for `net`.
pub fn simplify_debts(net: &NetPositions) -> Vec<Settlement> {
    let (mut creditors, mut debtors) = partition(net);

    creditors.sort_by(|a, b| b.remaining.cmp(&a.remaining));
    debtors.sort_by(|a, b| b.remaining.cmp(&a.remaining));

    let mut settlements = Vec::with_capacity((creditors.len() + debtors.len()).saturating_sub(1));
    let (mut i, mut j) = (0, 0);

    while i < debtors.len() && j < creditors.len() {
        let debtor = &mut debtors[i];
        let creditor = &mut creditors[j];

        let settle = debtor.remaining.min(creditor.remaining);

        settlements.push(Settlement {
            from:   debtor.person.to_owned(),
            to:     creditor.person.to_owned(),
            amount: round_currency(settle),
        });

        // Remainders keep full precision; only the emitted amount is rounded.
        debtor.remaining -= settle;
        creditor.remaining -= settle;

        if debtor.remaining < TOLERANCE {
            i += 1;
        }
        if creditor.remaining < TOLERANCE {
            j += 1;
        }
    }

    let unmatched: Decimal = debtors[i.min(debtors.len())..]
        .iter()
        .chain(&creditors[j.min(creditors.len())..])
        .fold(Decimal::ZERO, |acc, party| acc.saturating_add(party.remaining));

    if unmatched > TOLERANCE {
        warn!(
            %unmatched,
            debtors_left   = debtors.len() - i,
            creditors_left = creditors.len() - j,
            "Credits and debits do not cancel — residual dropped"
        );
    }

    debug!(
        creditors   = creditors.len(),
        debtors     = debtors.len(),
        settlements = settlements.len(),
        "Debts simplified"
    );

    settlements
}

fn partition(net: &NetPositions) -> (Vec<Party<'_>>, Vec<Party<'_>>) {
    let mut creditors = Vec::new();
    let mut debtors = Vec::new();

    for (person, amount) in net.iter() {
        if amount > TOLERANCE {
            creditors.push(Party { person, remaining: amount });
        } else if amount < -TOLERANCE {
            debtors.push(Party { person, remaining: -amount });
        }
    }

    (creditors, debtors)
}

/// Round half away from zero to currency precision.
#[inline]
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointAwayFromZero)
}

// ─── Tests ────────────────────────────────────────────────────────────────────
