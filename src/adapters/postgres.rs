//! Postgres expense repository
//!
//! Implements the persistence port on top of the `expenses` table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::{Category, Expense, ExpenseError, OperationContext};
use crate::ports::{ExpenseRepository, PersistenceError};

/// Row shape of the `expenses` table
#[derive(Debug, sqlx::FromRow)]
struct ExpenseRow {
    id: i64,
    description: String,
    amount: Decimal,
    category: String,
    date: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ExpenseRow> for Expense {
    fn from(row: ExpenseRow) -> Self {
        Expense::restore(
            row.id,
            row.description,
            row.amount,
            Category::from(row.category),
            row.date,
            row.created_at,
            row.updated_at,
        )
    }
}

/// Expense repository backed by Postgres
#[derive(Debug, Clone)]
pub struct PgExpenseRepository {
    pool: PgPool,
}

impl PgExpenseRepository {
    /// Create a new repository with a database pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExpenseRepository for PgExpenseRepository {
    async fn save(&self, ctx: &OperationContext, expense: &mut Expense) -> Result<(), ExpenseError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO expenses (description, amount, category, date, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(expense.description())
        .bind(expense.amount())
        .bind(expense.category().as_str())
        .bind(expense.date())
        .bind(expense.created_at())
        .bind(expense.updated_at())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| PersistenceError::new("save expense", e))?;

        expense.assign_id(id);

        tracing::debug!(correlation_id = ?ctx.correlation_id, expense_id = id, "Expense row inserted");

        Ok(())
    }

    async fn find_by_id(&self, _ctx: &OperationContext, id: i64) -> Result<Expense, ExpenseError> {
        let row: Option<ExpenseRow> = sqlx::query_as(
            r#"
            SELECT id, description, amount, category, date, created_at, updated_at
            FROM expenses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PersistenceError::new(format!("find expense {id}"), e))?;

        row.map(Expense::from).ok_or(ExpenseError::NotFound(id))
    }

    async fn find_all(&self, _ctx: &OperationContext) -> Result<Vec<Expense>, ExpenseError> {
        let rows: Vec<ExpenseRow> = sqlx::query_as(
            r#"
            SELECT id, description, amount, category, date, created_at, updated_at
            FROM expenses
            ORDER BY date DESC, created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PersistenceError::new("list expenses", e))?;

        Ok(rows.into_iter().map(Expense::from).collect())
    }

    async fn delete(&self, ctx: &OperationContext, id: i64) -> Result<(), ExpenseError> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| PersistenceError::new(format!("delete expense {id}"), e))?;

        if result.rows_affected() == 0 {
            return Err(ExpenseError::NotFound(id));
        }

        tracing::debug!(correlation_id = ?ctx.correlation_id, expense_id = id, "Expense row deleted");

        Ok(())
    }
}
