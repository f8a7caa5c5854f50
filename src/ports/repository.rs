//! Persistence port

use async_trait::async_trait;

use crate::domain::{Expense, ExpenseError, OperationContext};

/// Storage for expenses.
///
/// Implementations report a missing row as `ExpenseError::NotFound` and any
/// other failure as `ExpenseError::Persistence`.
#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    /// Insert a new expense and write the assigned identifier back into it.
    /// On failure the expense is left untouched.
    async fn save(&self, ctx: &OperationContext, expense: &mut Expense)
        -> Result<(), ExpenseError>;

    async fn find_by_id(&self, ctx: &OperationContext, id: i64) -> Result<Expense, ExpenseError>;

    /// All expenses, newest `date` first, then newest `created_at` first.
    /// An empty store yields an empty vector.
    async fn find_all(&self, ctx: &OperationContext) -> Result<Vec<Expense>, ExpenseError>;

    /// Remove by id; `NotFound` when nothing was deleted.
    async fn delete(&self, ctx: &OperationContext, id: i64) -> Result<(), ExpenseError>;
}
