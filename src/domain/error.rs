//! Domain Error Types
//!
//! Pure domain errors that don't depend on infrastructure.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::ports::PersistenceError;

/// Reasons the expense factory refuses to build an entity.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("description cannot be empty")]
    EmptyDescription,

    #[error("amount must be positive (got {0})")]
    NonPositiveAmount(Decimal),

    /// A well-formed number with no exact `Decimal` counterpart, either
    /// below 28 decimal places or beyond 96 bits of mantissa.
    #[error("amount {0} is outside the supported range")]
    AmountOutOfRange(String),
}

/// Errors surfaced by the expense use cases.
///
/// `NotFound` is a distinct variant so callers can tell "absent" apart from
/// a storage failure without looking at message text.
#[derive(Debug, Error)]
pub enum ExpenseError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("expense not found: {0}")]
    NotFound(i64),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl ExpenseError {
    /// Check if this is a client error (caller's fault)
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::EmptyDescription.to_string(),
            "description cannot be empty"
        );
        assert!(ValidationError::NonPositiveAmount(dec!(-3))
            .to_string()
            .contains("-3"));
        assert_eq!(
            ValidationError::AmountOutOfRange("1e-30".to_string()).to_string(),
            "amount 1e-30 is outside the supported range"
        );
    }

    #[test]
    fn test_error_classification() {
        let err: ExpenseError = ValidationError::EmptyDescription.into();
        assert!(err.is_validation());
        assert!(!err.is_not_found());

        let err = ExpenseError::NotFound(7);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "expense not found: 7");
    }

    #[test]
    fn test_persistence_error_hides_source_in_message() {
        let err: ExpenseError =
            PersistenceError::new("delete expense 3", "relation \"expenses\" does not exist").into();

        assert_eq!(err.to_string(), "delete expense 3 failed");
        let source = std::error::Error::source(&err).map(|e| e.to_string());
        assert_eq!(source.as_deref(), Some("relation \"expenses\" does not exist"));
    }
}
