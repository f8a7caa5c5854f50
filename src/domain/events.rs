//! Domain Events
//!
//! Facts about expenses that have already happened. Events are built once
//! and handed to the publisher by reference; subscribers clone them if they
//! want to keep them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Expense;

/// What happened to the expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    #[serde(rename = "expense.created")]
    Created,

    /// Reserved: no use case emits it yet
    #[serde(rename = "expense.updated")]
    Updated,

    #[serde(rename = "expense.deleted")]
    Deleted,
}

impl EventKind {
    /// Get the event type as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Created => "expense.created",
            EventKind::Updated => "expense.updated",
            EventKind::Deleted => "expense.deleted",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseEvent {
    kind: EventKind,
    expense: Expense,
    occurred_at: DateTime<Utc>,
}

impl ExpenseEvent {
    pub fn new(kind: EventKind, expense: Expense) -> Self {
        Self {
            kind,
            expense,
            occurred_at: Utc::now(),
        }
    }

    pub fn created(expense: Expense) -> Self {
        Self::new(EventKind::Created, expense)
    }

    pub fn deleted(expense: Expense) -> Self {
        Self::new(EventKind::Deleted, expense)
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Snapshot of the expense at the time of the fact
    pub fn expense(&self) -> &Expense {
        &self.expense
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}
