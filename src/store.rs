//! # store
//!
//! In-memory expense storage: the only mutable data in the service.
//!
//! The list sits behind a `tokio::sync::RwLock` so that any number of
//! list/balance requests read concurrently while add/remove take the write
//! side briefly. Readers get an owned snapshot; balance computation then runs
//! without holding the lock.

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::Expense;

#[derive(Clone, Default)]
pub struct ExpenseStore {
    expenses: Arc<RwLock<Vec<Expense>>>,
}

impl ExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every expense, oldest first.
    pub async fn list(&self) -> Vec<Expense> {
        self.expenses.read().await.clone()
    }

    pub async fn get(&self, id: Uuid) -> Option<Expense> {
        let guard = self.expenses.read().await;
        guard.iter().find(|e| e.id == id).cloned()
    }

    pub async fn add(&self, expense: Expense) -> Expense {
        let mut guard = self.expenses.write().await;
        guard.push(expense.clone());
        expense
    }

    /// Remove by id, returning the removed expense. `None` if unknown.
    pub async fn remove(&self, id: Uuid) -> Option<Expense> {
        let mut guard = self.expenses.write().await;
        let index = guard.iter().position(|e| e.id == id)?;
        Some(guard.remove(index))
    }

    /// Drop every expense and report how many were removed.
    pub async fn clear(&self) -> usize {
        let mut guard = self.expenses.write().await;
        let removed = guard.len();
        guard.clear();
        removed
    }

    pub async fn count(&self) -> usize {
        self.expenses.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn lunch(paid_by: &str) -> Expense {
        Expense::new("Lunch", dec!(30), paid_by, vec!["Alice".into(), "Bob".into()])
    }

    #[tokio::test]
    async fn test_add_list_keeps_insertion_order() {
        let store = ExpenseStore::new();
        let first = store.add(lunch("Alice")).await;
        let second = store.add(lunch("Bob")).await;

        let ids: Vec<Uuid> = store.list().await.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
        assert_eq!(store.get(second.id).await, Some(second));
    }

    #[tokio::test]
    async fn test_remove() {
        let store = ExpenseStore::new();
        let kept = store.add(lunch("Alice")).await;
        let gone = store.add(lunch("Bob")).await;

        assert_eq!(store.remove(gone.id).await.map(|e| e.id), Some(gone.id));
        assert_eq!(store.remove(gone.id).await, None);
        assert_eq!(store.list().await, vec![kept]);
    }

    #[tokio::test]
    async fn test_clear() {
        let store = ExpenseStore::new();
        store.add(lunch("Alice")).await;
        store.add(lunch("Bob")).await;

        assert_eq!(store.clear().await, 2);
        assert_eq!(store.count().await, 0);
    }
}
