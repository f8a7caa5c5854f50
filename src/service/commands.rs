//! Command definitions
//!
//! Commands represent intentions to change the system state.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::Category;

/// Command to record a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseCommand {
    pub description: String,
    pub amount: Decimal,
    pub category: Category,
    /// Effective date of the expense, supplied by the caller
    pub date: DateTime<Utc>,
}

impl CreateExpenseCommand {
    pub fn new(
        description: impl Into<String>,
        amount: Decimal,
        category: impl Into<Category>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            category: category.into(),
            date,
        }
    }
}
