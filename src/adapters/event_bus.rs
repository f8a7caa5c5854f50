//! In-process event bus
//!
//! Synchronous fan-out of expense events to registered subscribers.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{ExpenseEvent, OperationContext};
use crate::ports::{EventPublisher, EventSubscriber, PublishError};

/// Delivers each event to every subscriber, in registration order, on the
/// publishing task.
///
/// Subscriptions are append-only. A failing subscriber is logged and
/// skipped; the remaining subscribers still receive the event.
#[derive(Default)]
pub struct InMemoryEventBus {
    subscribers: RwLock<Vec<Arc<dyn EventSubscriber>>>,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn subscribe(&self, subscriber: Arc<dyn EventSubscriber>) {
        let mut subscribers = self.subscribers.write().await;
        tracing::debug!(subscriber = subscriber.name(), "Registering event subscriber");
        subscribers.push(subscriber);
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(
        &self,
        ctx: &OperationContext,
        event: &ExpenseEvent,
    ) -> Result<(), PublishError> {
        // Snapshot so slow subscribers don't hold the lock
        let subscribers = self.subscribers.read().await.clone();

        for subscriber in &subscribers {
            if let Err(e) = subscriber.handle(ctx, event).await {
                tracing::warn!(
                    correlation_id = ?ctx.correlation_id,
                    subscriber = subscriber.name(),
                    event_type = event.kind().as_str(),
                    error = %e,
                    "Event subscriber error"
                );
            }
        }

        Ok(())
    }
}

/// Writes every event to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSubscriber;

#[async_trait]
impl EventSubscriber for LoggingSubscriber {
    fn name(&self) -> &str {
        "logging"
    }

    async fn handle(
        &self,
        ctx: &OperationContext,
        event: &ExpenseEvent,
    ) -> Result<(), PublishError> {
        let expense = event.expense();
        tracing::info!(
            correlation_id = ?ctx.correlation_id,
            event_type = event.kind().as_str(),
            expense_id = expense.id(),
            amount = %expense.amount(),
            category = %expense.category(),
            occurred_at = %event.occurred_at(),
            "Expense event"
        );
        Ok(())
    }
}
