//! # state
//!
//! Shared application state, cloned into every Axum handler through
//! `axum::extract::State`.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::store::ExpenseStore;

// ─── AppState ─────────────────────────────────────────────────────────────────

/// Top-level shared state injected into every Axum handler.
#[derive(Clone)]
pub struct AppState {
    /// Every recorded expense. Balances are always derived from a snapshot
    /// of this list, never stored.
    pub expenses: ExpenseStore,

    /// When this process started serving; reported by the health check.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Construct a fresh, empty application state.
    pub fn new() -> Self {
        Self {
            expenses:   ExpenseStore::new(),
            started_at: Utc::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience type alias so callers can write `SharedState` instead of the
/// full generic form.
pub type SharedState = Arc<AppState>;

/// Construct the shared application state and wrap it in an `Arc` ready for
/// injection into the Axum router.
pub fn build_state() -> SharedState {
    Arc::new(AppState::new())
}
