//! Catalog API routes
//!
//! Wires the catalog domain to HTTP routes, handing it the shared file
//! store for cover image uploads.

use axum::Router;
use domain_catalog::{MongoItemRepository, handlers};
use std::sync::Arc;

use crate::state::AppState;

/// Create catalog router
pub fn router(state: &AppState) -> Router {
    let repository = MongoItemRepository::new(state.db.clone());

    handlers::router(Arc::new(repository), state.files.clone())
}
