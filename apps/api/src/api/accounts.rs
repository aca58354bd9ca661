//! Accounts API routes
//!
//! Wires the accounts domain to HTTP routes.

use axum::Router;
use domain_accounts::{MongoAccountRepository, handlers};
use std::sync::Arc;

use crate::state::AppState;

/// Create accounts router
pub fn router(state: &AppState) -> Router {
    let repository = MongoAccountRepository::new(state.db.clone());

    handlers::router(Arc::new(repository))
}
