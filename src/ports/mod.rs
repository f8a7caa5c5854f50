//! Ports module
//!
//! Contracts between the expense service and the outside world.
//! Adapters in `crate::adapters` implement them.

mod error;
mod publisher;
mod repository;

pub use error::{BoxError, PersistenceError, PublishError};
pub use publisher::{EventPublisher, EventSubscriber};
pub use repository::ExpenseRepository;
