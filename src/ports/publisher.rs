//! Event publishing port

use async_trait::async_trait;

use crate::domain::{ExpenseEvent, OperationContext};

use super::PublishError;

/// Fire-and-forget delivery of domain events.
///
/// Callers treat an `Err` as informational only: the triggering use case
/// has already succeeded.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, ctx: &OperationContext, event: &ExpenseEvent)
        -> Result<(), PublishError>;
}

/// Something that reacts to published events.
#[async_trait]
pub trait EventSubscriber: Send + Sync {
    /// Name used when logging failures
    fn name(&self) -> &str {
        "anonymous"
    }

    async fn handle(&self, ctx: &OperationContext, event: &ExpenseEvent)
        -> Result<(), PublishError>;
}
