//! Expense tracker library
//!
//! Re-exports modules for integration testing and the server binary.

pub mod adapters;
pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use config::{Config, ConfigError, LogFormat};
pub use domain::{Category, EventKind, Expense, ExpenseError, ExpenseEvent, OperationContext};
pub use error::{AppError, AppResult};
pub use service::{CreateExpenseCommand, ExpenseService};
