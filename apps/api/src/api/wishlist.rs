//! Wishlist API routes
//!
//! Wires the wishlist domain to HTTP routes.

use axum::Router;
use domain_wishlist::{MongoWishlistRepository, handlers};
use std::sync::Arc;

use crate::state::AppState;

/// Create wishlist router
pub fn router(state: &AppState) -> Router {
    let repository = MongoWishlistRepository::new(state.db.clone());

    handlers::router(Arc::new(repository))
}
