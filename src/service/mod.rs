//! Service module
//!
//! Expense use cases. The service composes the persistence and publishing
//! ports and holds no other state.

mod commands;
mod expense_service;


pub use commands::CreateExpenseCommand;
pub use expense_service::ExpenseService;
