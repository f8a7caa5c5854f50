//! Port Errors
//!
//! Error types produced by adapters behind the ports.

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A storage failure other than "not found".
///
/// The message names the operation (and identifier, when there is one);
/// the storage engine's own error is only reachable through `source()`.
#[derive(Debug, thiserror::Error)]
#[error("{operation} failed")]
pub struct PersistenceError {
    operation: String,
    #[source]
    source: BoxError,
}

impl PersistenceError {
    pub fn new(operation: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            operation: operation.into(),
            source: source.into(),
        }
    }

    /// e.g. `"find expense 42"`
    pub fn operation(&self) -> &str {
        &self.operation
    }
}

/// Errors that can occur while delivering an event
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// A subscriber rejected the event
    #[error("subscriber {subscriber} failed: {reason}")]
    Subscriber { subscriber: String, reason: String },
}

impl PublishError {
    pub fn subscriber(subscriber: impl Into<String>, reason: impl ToString) -> Self {
        Self::Subscriber {
            subscriber: subscriber.into(),
            reason: reason.to_string(),
        }
    }
}
