//! Orders Domain
//!
//! Book purchase orders. An order is a flat snapshot of the delivery
//! address, the purchased listing and both parties, denormalized at
//! checkout time the way the storefront submits it.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;

// Re-export commonly used types
pub use error::{OrderError, OrderResult};
pub use handlers::ApiDoc;
pub use models::{CreateOrder, Order};
pub use mongodb::MongoOrderRepository;
pub use repository::OrderRepository;
