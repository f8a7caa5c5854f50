//! Expense Service
//!
//! Orchestrates the create/get/list/delete use cases.

use std::sync::Arc;

use crate::domain::{Expense, ExpenseError, ExpenseEvent, OperationContext};
use crate::ports::{EventPublisher, ExpenseRepository};

use super::CreateExpenseCommand;

/// Expense use cases over injected persistence and publishing ports.
///
/// Cheap to clone; both collaborators are fixed for the lifetime of the
/// service.
#[derive(Clone)]
pub struct ExpenseService {
    repository: Arc<dyn ExpenseRepository>,
    events: Arc<dyn EventPublisher>,
}

impl ExpenseService {
    pub fn new(repository: Arc<dyn ExpenseRepository>, events: Arc<dyn EventPublisher>) -> Self {
        Self { repository, events }
    }

    /// Validate, persist, then announce a new expense.
    ///
    /// Nothing is published unless the expense was saved. Publishing
    /// problems are logged and never fail the call.
    pub async fn create_expense(
        &self,
        ctx: &OperationContext,
        command: CreateExpenseCommand,
    ) -> Result<Expense, ExpenseError> {
        let mut expense = Expense::new(
            command.description,
            command.amount,
            command.category,
            command.date,
        )?;

        self.repository.save(ctx, &mut expense).await?;

        tracing::info!(
            correlation_id = ?ctx.correlation_id,
            expense_id = expense.id(),
            category = %expense.category(),
            "Expense created"
        );

        self.publish(ctx, ExpenseEvent::created(expense.clone())).await;

        Ok(expense)
    }

    pub async fn get_expense(
        &self,
        ctx: &OperationContext,
        id: i64,
    ) -> Result<Expense, ExpenseError> {
        self.repository.find_by_id(ctx, id).await
    }

    pub async fn list_expenses(&self, ctx: &OperationContext) -> Result<Vec<Expense>, ExpenseError> {
        self.repository.find_all(ctx).await
    }

    /// Look the expense up, delete it, then announce the deletion with the
    /// pre-deletion snapshot.
    ///
    /// Another caller may delete the row between the lookup and the delete;
    /// in that case the repository's `NotFound` is returned and no event is
    /// published.
    pub async fn delete_expense(&self, ctx: &OperationContext, id: i64) -> Result<(), ExpenseError> {
        let expense = self.repository.find_by_id(ctx, id).await?;

        self.repository.delete(ctx, id).await?;

        tracing::info!(
            correlation_id = ?ctx.correlation_id,
            expense_id = id,
            "Expense deleted"
        );

        self.publish(ctx, ExpenseEvent::deleted(expense)).await;

        Ok(())
    }

    async fn publish(&self, ctx: &OperationContext, event: ExpenseEvent) {
        if let Err(e) = self.events.publish(ctx, &event).await {
            tracing::warn!(
                correlation_id = ?ctx.correlation_id,
                event_type = event.kind().as_str(),
                expense_id = event.expense().id(),
                error = %e,
                "Failed to publish expense event"
            );
        }
    }
}
