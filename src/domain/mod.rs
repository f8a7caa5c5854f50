//! Domain module
//!
//! Core domain types and business rules.

pub mod context;
pub mod error;
pub mod events;
pub mod expense;

pub use context::OperationContext;
pub use error::{ExpenseError, ValidationError};
pub use events::{EventKind, ExpenseEvent};
pub use expense::{Category, Expense};
