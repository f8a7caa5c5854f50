//! Expense entity
//!
//! The only way to obtain a fresh `Expense` is [`Expense::new`], which
//! enforces the invariants at construction time. Storage adapters rebuild
//! already-persisted rows through [`Expense::restore`].

use chrono::{DateTime, SubsecRound, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use super::ValidationError;

/// Expense category.
///
/// The known values form a closed set, but anything else is kept verbatim
/// in `Unlisted` and persisted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Category {
    Food,
    Transport,
    Housing,
    Other,
    Unlisted(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Housing => "housing",
            Category::Other => "other",
            Category::Unlisted(raw) => raw,
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Unlisted(String::new())
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.as_str() {
            "food" => Category::Food,
            "transport" => Category::Transport,
            "housing" => Category::Housing,
            "other" => Category::Other,
            _ => Category::Unlisted(value),
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Category::from(value.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Unlisted(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Category {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Category::from)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single recorded expense.
///
/// # Invariants
/// - `description` is non-empty
/// - `amount` is strictly positive
/// - `id` is 0 until the persistence layer assigns one
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expense {
    id: i64,
    description: String,
    #[serde(with = "rust_decimal::serde::float")]
    amount: Decimal,
    category: Category,
    date: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new, not yet persisted expense.
    ///
    /// # Errors
    /// - `ValidationError::EmptyDescription` if `description` is exactly `""`
    /// - `ValidationError::NonPositiveAmount` if `amount <= 0`
    ///
    /// `date` and the audit timestamps are truncated to microseconds, the
    /// precision Postgres stores.
    pub fn new(
        description: impl Into<String>,
        amount: Decimal,
        category: Category,
        date: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let description = description.into();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        if amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount(amount));
        }

        let now = Utc::now().trunc_subsecs(6);
        Ok(Self {
            id: 0,
            description,
            amount,
            category,
            date: date.trunc_subsecs(6),
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuild an expense that was already persisted.
    pub fn restore(
        id: i64,
        description: String,
        amount: Decimal,
        category: Category,
        date: DateTime<Utc>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            description,
            amount,
            category,
            date,
            created_at,
            updated_at,
        }
    }

    /// Called by the persistence layer once the row exists.
    pub fn assign_id(&mut self, id: i64) {
        self.id = id;
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn test_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 17, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_new_valid() {
        let expense = Expense::new("Groceries", dec!(50.00), Category::Food, test_date()).unwrap();

        assert_eq!(expense.description(), "Groceries");
        assert_eq!(expense.amount(), dec!(50.00));
        assert_eq!(expense.category(), &Category::Food);
        assert_eq!(expense.date(), test_date());
        assert_eq!(expense.id(), 0);
        assert!(!expense.is_persisted());
        assert_eq!(expense.created_at(), expense.updated_at());
        assert!(expense.created_at().timestamp() > 0);
    }

    #[test]
    fn test_new_truncates_date_to_micros() {
        let date = Utc.with_ymd_and_hms(2026, 2, 17, 8, 30, 0).unwrap()
            + chrono::Duration::nanoseconds(123_456_789);

        let expense = Expense::new("Taxi", dec!(8), Category::Transport, date).unwrap();

        assert_eq!(expense.date().timestamp_subsec_nanos(), 123_456_000);
        assert_eq!(expense.created_at().timestamp_subsec_nanos() % 1_000, 0);
    }

    #[test]
    fn test_new_empty_description() {
        let err = Expense::new("", dec!(50.00), Category::Food, test_date()).unwrap_err();
        assert_eq!(err, ValidationError::EmptyDescription);
    }

    #[test]
    fn test_whitespace_description_is_accepted() {
        // Only the exact empty string is rejected
        assert!(Expense::new(" ", dec!(1), Category::Other, test_date()).is_ok());
    }

    #[test]
    fn test_new_zero_and_negative_amount() {
        let zero = Expense::new("Coffee", Decimal::ZERO, Category::Food, test_date()).unwrap_err();
        let negative = Expense::new("Coffee", dec!(-10.00), Category::Food, test_date()).unwrap_err();

        assert!(matches!(zero, ValidationError::NonPositiveAmount(_)));
        assert!(matches!(negative, ValidationError::NonPositiveAmount(_)));
    }

    #[test]
    fn test_description_checked_before_amount() {
        let err = Expense::new("", dec!(-1), Category::Food, test_date()).unwrap_err();
        assert_eq!(err, ValidationError::EmptyDescription);
    }

    #[test]
    fn test_unknown_category_kept_verbatim() {
        let category = Category::from("entertainment");
        assert_eq!(category, Category::Unlisted("entertainment".to_string()));
        assert_eq!(category.as_str(), "entertainment");

        let expense = Expense::new("Cinema", dec!(9), category, test_date()).unwrap();
        assert_eq!(expense.category().to_string(), "entertainment");
    }

    #[test]
    fn test_category_round_trips_through_string() {
        for raw in ["food", "transport", "housing", "other"] {
            let category = Category::from(raw);
            assert!(!matches!(category, Category::Unlisted(_)));
            assert_eq!(String::from(category), raw);
        }
    }

    #[test]
    fn test_expense_json_shape() {
        let mut expense = Expense::new("Lunch", dec!(12.50), Category::Food, test_date()).unwrap();
        expense.assign_id(4);

        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["id"], 4);
        assert_eq!(json["description"], "Lunch");
        assert_eq!(json["amount"], 12.5);
        assert_eq!(json["category"], "food");
        assert_eq!(json["date"], "2026-02-17T00:00:00Z");
        assert!(json["created_at"].is_string());
        assert!(json["updated_at"].is_string());
    }
}
