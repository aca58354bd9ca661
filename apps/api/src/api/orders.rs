//! Orders API routes
//!
//! Wires the orders domain to HTTP routes.

use axum::Router;
use domain_orders::{MongoOrderRepository, handlers};
use std::sync::Arc;

use crate::state::AppState;

/// Create orders router
pub fn router(state: &AppState) -> Router {
    let repository = MongoOrderRepository::new(state.db.clone());

    handlers::router(Arc::new(repository))
}
