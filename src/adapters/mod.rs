//! Adapters module
//!
//! Concrete implementations of the ports.

mod event_bus;
mod memory;
mod postgres;

pub use event_bus::{InMemoryEventBus, LoggingSubscriber};
pub use memory::InMemoryExpenseRepository;
pub use postgres::PgExpenseRepository;
