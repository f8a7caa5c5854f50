//! Common test utilities

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use expense_tracker::adapters::{InMemoryEventBus, InMemoryExpenseRepository};
use expense_tracker::api::{self, AppState};
use expense_tracker::{db, ExpenseService};

/// Router backed by in-memory adapters
pub fn memory_app(static_dir: Option<&Path>) -> (Router, Arc<InMemoryExpenseRepository>) {
    let repository = Arc::new(InMemoryExpenseRepository::new());
    let bus = Arc::new(InMemoryEventBus::new());
    let service = ExpenseService::new(repository.clone(), bus);

    (api::build_router(AppState::new(service), static_dir), repository)
}

/// Setup test database - migrate and truncate
pub async fn setup_test_db() -> PgPool {
    dotenvy::dotenv().ok();
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for tests");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to DB");

    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    // Clean up DB for fresh state
    sqlx::query("TRUNCATE TABLE expenses RESTART IDENTITY")
        .execute(&pool)
        .await
        .expect("Failed to clean up DB");

    pool
}
