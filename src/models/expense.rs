//! # models::expense
//!
//! Defines [`Expense`], one shared cost paid by a single person and split
//! equally among a set of participants, and [`NewExpense`], the raw request
//! body that `POST /api/expenses` validates into an `Expense`.

use std::collections::HashSet;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

const MISSING_FIELDS: &str =
    "All fields are required (description, amount, paidBy, participants)";

/// Largest single expense accepted (one trillion). Keeps every running
/// balance far inside `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000);

// ─── Expense ──────────────────────────────────────────────────────────────────

/// A recorded expense. Immutable once stored; removed only by explicit delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: Uuid,

    pub description: String,

    /// Total paid, always `> 0`.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    /// Person who paid. Need not be one of `participants`.
    pub paid_by: String,

    /// People sharing the cost equally. Non-empty, no duplicates.
    pub participants: Vec<String>,

    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Build a fresh expense with a new v4 id, stamped with the current time.
    pub fn new(
        description: impl Into<String>,
        amount: Decimal,
        paid_by: impl Into<String>,
        participants: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            paid_by: paid_by.into(),
            participants,
            created_at: Utc::now(),
        }
    }

    /// Whether the payer is also one of the people sharing the cost.
    #[inline]
    pub fn payer_participates(&self) -> bool {
        self.participants.iter().any(|p| *p == self.paid_by)
    }
}

// ─── Intake ───────────────────────────────────────────────────────────────────

/// Participants as sent by a client: either a JSON array or the
/// comma-separated text typed into the web form.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ParticipantsInput {
    List(Vec<String>),
    Csv(String),
}

impl ParticipantsInput {
    /// Trim every name, drop blanks and keep the first occurrence of each.
    fn normalize(self) -> Vec<String> {
        let raw: Vec<String> = match self {
            ParticipantsInput::List(names) => names,
            ParticipantsInput::Csv(text) => text.split(',').map(str::to_owned).collect(),
        };

        let mut seen = HashSet::new();
        raw.into_iter()
            .map(|name| name.trim().to_owned())
            .filter(|name| !name.is_empty())
            .filter(|name| seen.insert(name.clone()))
            .collect()
    }
}

/// Body of `POST /api/expenses`.
///
/// Every field is optional at the serde level so that a missing field yields
/// the uniform "all fields are required" message instead of a serde error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub description: Option<String>,

    /// JSON number or numeric string.
    pub amount: Option<serde_json::Value>,

    pub paid_by: Option<String>,

    pub participants: Option<ParticipantsInput>,
}

impl NewExpense {
    /// Check the request and turn it into a storable [`Expense`].
    pub fn validate(self) -> Result<Expense, AppError> {
        let missing = || AppError::BadRequest(MISSING_FIELDS.into());

        let description = self
            .description
            .map(|d| d.trim().to_owned())
            .filter(|d| !d.is_empty())
            .ok_or_else(missing)?;

        let paid_by = self
            .paid_by
            .map(|p| p.trim().to_owned())
            .filter(|p| !p.is_empty())
            .ok_or_else(missing)?;

        let participants = self
            .participants
            .map(ParticipantsInput::normalize)
            .filter(|list| !list.is_empty())
            .ok_or_else(missing)?;

        let amount = parse_amount(self.amount.as_ref().ok_or_else(missing)?)?;

        Ok(Expense::new(description, amount, paid_by, participants))
    }
}

fn parse_amount(raw: &serde_json::Value) -> Result<Decimal, AppError> {
    let parsed = match raw {
        // Through the textual form so 0.1 stays 0.1 rather than its f64 expansion.
        serde_json::Value::Number(n) => Decimal::from_str(&n.to_string())
            .or_else(|_| Decimal::from_scientific(&n.to_string()))
            .ok(),
        serde_json::Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    };

    match parsed {
        Some(amount) if amount > MAX_AMOUNT => Err(AppError::BadRequest(format!(
            "amount must not exceed {MAX_AMOUNT}"
        ))),
        Some(amount) if amount > Decimal::ZERO => Ok(amount.normalize()),
        Some(_) => Err(AppError::BadRequest("amount must be greater than zero".into())),
        None => Err(AppError::BadRequest(format!("amount is not a valid number: {raw}"))),
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
