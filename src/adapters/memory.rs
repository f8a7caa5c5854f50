//! In-memory expense repository
//!
//! Same contract as the Postgres adapter; used by tests and local runs.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{Expense, ExpenseError, OperationContext};
use crate::ports::ExpenseRepository;

#[derive(Debug)]
struct State {
    next_id: i64,
    rows: BTreeMap<i64, Expense>,
}

/// Expense storage kept in process memory
#[derive(Debug)]
pub struct InMemoryExpenseRepository {
    state: RwLock<State>,
}

impl InMemoryExpenseRepository {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryExpenseRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExpenseRepository for InMemoryExpenseRepository {
    async fn save(&self, _ctx: &OperationContext, expense: &mut Expense) -> Result<(), ExpenseError> {
        let mut state = self.state.write().await;
        let id = state.next_id;
        state.next_id += 1;

        expense.assign_id(id);
        state.rows.insert(id, expense.clone());
        Ok(())
    }

    async fn find_by_id(&self, _ctx: &OperationContext, id: i64) -> Result<Expense, ExpenseError> {
        self.state
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or(ExpenseError::NotFound(id))
    }

    async fn find_all(&self, _ctx: &OperationContext) -> Result<Vec<Expense>, ExpenseError> {
        let mut expenses: Vec<Expense> = self.state.read().await.rows.values().cloned().collect();
        expenses.sort_by(|a, b| {
            b.date()
                .cmp(&a.date())
                .then_with(|| b.created_at().cmp(&a.created_at()))
                .then_with(|| b.id().cmp(&a.id()))
        });
        Ok(expenses)
    }

    async fn delete(&self, _ctx: &OperationContext, id: i64) -> Result<(), ExpenseError> {
        match self.state.write().await.rows.remove(&id) {
            Some(_) => Ok(()),
            None => Err(ExpenseError::NotFound(id)),
        }
    }
}
